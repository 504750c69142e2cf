//! Static M1M3 force actuator geometry.
//!
//! Rows are ordered by Z index. Positions are in meters in the mirror
//! coordinate system.

use crate::{ActuatorType, ForceActuator, Orientation};

#[rustfmt::skip]
pub const FATABLE: [ForceActuator; 156] = [
    ForceActuator { index: 0, actuator_id: 101, x_position: 0.776782776, y_position: 0.0, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 0, s_index: None, near_neighbors: &[102, 408, 407, 107, 108] },
    ForceActuator { index: 1, actuator_id: 102, x_position: 1.442567993, y_position: 0.0, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(0), z_index: 1, s_index: Some(0), near_neighbors: &[103, 409, 408, 101, 108, 109] },
    ForceActuator { index: 2, actuator_id: 103, x_position: 2.10837793, y_position: 0.0, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(1), z_index: 2, s_index: Some(1), near_neighbors: &[104, 410, 409, 102, 109, 110] },
    ForceActuator { index: 3, actuator_id: 104, x_position: 2.774187988, y_position: 0.0, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(2), z_index: 3, s_index: Some(2), near_neighbors: &[105, 411, 410, 103, 110, 111] },
    ForceActuator { index: 4, actuator_id: 105, x_position: 3.439998047, y_position: 0.0, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(3), z_index: 4, s_index: Some(3), near_neighbors: &[106, 412, 411, 104, 111, 112] },
    ForceActuator { index: 5, actuator_id: 106, x_position: 3.968012939, y_position: 0.0, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 5, s_index: None, near_neighbors: &[412, 105, 112] },
    ForceActuator { index: 6, actuator_id: 107, x_position: 0.44386499, y_position: -0.57660498, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 6, s_index: None, near_neighbors: &[108, 101, 113, 114] },
    ForceActuator { index: 7, actuator_id: 108, x_position: 1.109675049, y_position: -0.57660498, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(4), z_index: 7, s_index: Some(4), near_neighbors: &[109, 102, 101, 107, 114, 115] },
    ForceActuator { index: 8, actuator_id: 109, x_position: 1.775484985, y_position: -0.57660498, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(5), z_index: 8, s_index: Some(5), near_neighbors: &[110, 103, 102, 108, 115, 116] },
    ForceActuator { index: 9, actuator_id: 110, x_position: 2.441295898, y_position: -0.57660498, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(6), z_index: 9, s_index: Some(6), near_neighbors: &[111, 104, 103, 109, 116, 117] },
    ForceActuator { index: 10, actuator_id: 111, x_position: 3.107080078, y_position: -0.57660498, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(7), z_index: 10, s_index: Some(7), near_neighbors: &[112, 105, 104, 110, 117, 118] },
    ForceActuator { index: 11, actuator_id: 112, x_position: 3.772891113, y_position: -0.57660498, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::XMinus, x_index: Some(0), y_index: None, z_index: 11, s_index: Some(8), near_neighbors: &[106, 105, 111, 118, 125, 119] },
    ForceActuator { index: 12, actuator_id: 113, x_position: 0.0, y_position: -1.153209961, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(8), z_index: 12, s_index: Some(9), near_neighbors: &[114, 107, 207, 214, 220, 120] },
    ForceActuator { index: 13, actuator_id: 114, x_position: 0.776782776, y_position: -1.153209961, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(9), z_index: 13, s_index: Some(10), near_neighbors: &[115, 108, 107, 113, 120, 121] },
    ForceActuator { index: 14, actuator_id: 115, x_position: 1.442567993, y_position: -1.153209961, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(10), z_index: 14, s_index: Some(11), near_neighbors: &[116, 109, 108, 114, 121, 122] },
    ForceActuator { index: 15, actuator_id: 116, x_position: 2.10837793, y_position: -1.153209961, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(11), z_index: 15, s_index: Some(12), near_neighbors: &[117, 110, 109, 115, 122, 123] },
    ForceActuator { index: 16, actuator_id: 117, x_position: 2.774187988, y_position: -1.153209961, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(12), z_index: 16, s_index: Some(13), near_neighbors: &[118, 111, 110, 116, 123, 124] },
    ForceActuator { index: 17, actuator_id: 118, x_position: 3.439998047, y_position: -1.153209961, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(13), z_index: 17, s_index: Some(14), near_neighbors: &[119, 112, 111, 117, 124, 125] },
    ForceActuator { index: 18, actuator_id: 119, x_position: 3.9005, y_position: -0.997687012, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 18, s_index: None, near_neighbors: &[112, 111, 118, 125] },
    ForceActuator { index: 19, actuator_id: 120, x_position: 0.44386499, y_position: -1.729819946, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(14), z_index: 19, s_index: Some(15), near_neighbors: &[121, 114, 113, 220, 126, 127] },
    ForceActuator { index: 20, actuator_id: 121, x_position: 1.109675049, y_position: -1.729819946, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(15), z_index: 20, s_index: Some(16), near_neighbors: &[122, 115, 114, 120, 127, 128] },
    ForceActuator { index: 21, actuator_id: 122, x_position: 1.775484985, y_position: -1.729819946, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(16), z_index: 21, s_index: Some(17), near_neighbors: &[123, 116, 115, 121, 128, 129] },
    ForceActuator { index: 22, actuator_id: 123, x_position: 2.44127002, y_position: -1.729819946, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(17), z_index: 22, s_index: Some(18), near_neighbors: &[124, 117, 116, 122, 129, 130] },
    ForceActuator { index: 23, actuator_id: 124, x_position: 3.107080078, y_position: -1.729819946, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(18), z_index: 23, s_index: Some(19), near_neighbors: &[125, 118, 117, 123, 130, 131] },
    ForceActuator { index: 24, actuator_id: 125, x_position: 3.724452881, y_position: -1.517949951, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 24, s_index: None, near_neighbors: &[119, 118, 124, 131] },
    ForceActuator { index: 25, actuator_id: 126, x_position: 0.0, y_position: -2.306419922, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(19), z_index: 25, s_index: Some(20), near_neighbors: &[127, 120, 220, 227, 232, 132] },
    ForceActuator { index: 26, actuator_id: 127, x_position: 0.776782776, y_position: -2.306419922, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(20), z_index: 26, s_index: Some(21), near_neighbors: &[128, 121, 120, 126, 132, 133] },
    ForceActuator { index: 27, actuator_id: 128, x_position: 1.442567993, y_position: -2.306419922, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::XMinus, x_index: Some(1), y_index: None, z_index: 27, s_index: Some(22), near_neighbors: &[129, 122, 121, 127, 133, 134] },
    ForceActuator { index: 28, actuator_id: 129, x_position: 2.10837793, y_position: -2.306419922, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(21), z_index: 28, s_index: Some(23), near_neighbors: &[130, 123, 122, 128, 134, 135] },
    ForceActuator { index: 29, actuator_id: 130, x_position: 2.774187988, y_position: -2.306419922, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(22), z_index: 29, s_index: Some(24), near_neighbors: &[131, 124, 123, 129, 135, 136] },
    ForceActuator { index: 30, actuator_id: 131, x_position: 3.387954102, y_position: -2.167409912, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 30, s_index: None, near_neighbors: &[125, 124, 130, 136] },
    ForceActuator { index: 31, actuator_id: 132, x_position: 0.44386499, y_position: -2.883030029, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(23), z_index: 31, s_index: Some(25), near_neighbors: &[133, 127, 126, 232, 237, 137, 138] },
    ForceActuator { index: 32, actuator_id: 133, x_position: 1.109675049, y_position: -2.883030029, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(24), z_index: 32, s_index: Some(26), near_neighbors: &[134, 128, 127, 132, 138, 139] },
    ForceActuator { index: 33, actuator_id: 134, x_position: 1.775484985, y_position: -2.883030029, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(25), z_index: 33, s_index: Some(27), near_neighbors: &[135, 129, 128, 133, 139, 140] },
    ForceActuator { index: 34, actuator_id: 135, x_position: 2.44127002, y_position: -2.883030029, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::XMinus, x_index: Some(2), y_index: None, z_index: 34, s_index: Some(28), near_neighbors: &[136, 130, 129, 134, 140] },
    ForceActuator { index: 35, actuator_id: 136, x_position: 2.939364014, y_position: -2.745179932, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 35, s_index: None, near_neighbors: &[131, 130, 129, 135] },
    ForceActuator { index: 36, actuator_id: 137, x_position: 0.221945206, y_position: -3.459629883, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(26), z_index: 36, s_index: Some(29), near_neighbors: &[138, 132, 232, 237, 241, 141] },
    ForceActuator { index: 37, actuator_id: 138, x_position: 0.88772998, y_position: -3.459629883, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(27), z_index: 37, s_index: Some(30), near_neighbors: &[139, 133, 132, 137, 141, 142, 143] },
    ForceActuator { index: 38, actuator_id: 139, x_position: 1.553540039, y_position: -3.267429932, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 38, s_index: None, near_neighbors: &[134, 133, 138, 142, 143, 140] },
    ForceActuator { index: 39, actuator_id: 140, x_position: 2.089733887, y_position: -3.436389893, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 39, s_index: None, near_neighbors: &[135, 134, 139, 143] },
    ForceActuator { index: 40, actuator_id: 141, x_position: 0.365734589, y_position: -4.00525, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 40, s_index: None, near_neighbors: &[142, 138, 137, 237, 241] },
    ForceActuator { index: 41, actuator_id: 142, x_position: 1.085088013, y_position: -3.87276001, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 41, s_index: None, near_neighbors: &[143, 139, 138, 141] },
    ForceActuator { index: 42, actuator_id: 143, x_position: 1.60401001, y_position: -3.692780029, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 42, s_index: None, near_neighbors: &[140, 139, 134, 133, 138, 142] },
    ForceActuator { index: 43, actuator_id: 207, x_position: -0.44386499, y_position: -0.57660498, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 43, s_index: None, near_neighbors: &[107, 301, 208, 214, 113] },
    ForceActuator { index: 44, actuator_id: 208, x_position: -1.109680054, y_position: -0.57660498, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(28), z_index: 44, s_index: Some(31), near_neighbors: &[207, 301, 302, 209, 215, 214] },
    ForceActuator { index: 45, actuator_id: 209, x_position: -1.77548999, y_position: -0.57660498, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(29), z_index: 45, s_index: Some(32), near_neighbors: &[208, 302, 303, 210, 216, 215] },
    ForceActuator { index: 46, actuator_id: 210, x_position: -2.441300049, y_position: -0.57660498, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(30), z_index: 46, s_index: Some(33), near_neighbors: &[209, 303, 304, 211, 217, 216] },
    ForceActuator { index: 47, actuator_id: 211, x_position: -3.107080078, y_position: -0.57660498, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(31), z_index: 47, s_index: Some(34), near_neighbors: &[210, 304, 305, 212, 219, 218, 217] },
    ForceActuator { index: 48, actuator_id: 212, x_position: -3.772889893, y_position: -0.57660498, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::XPlus, x_index: Some(3), y_index: None, z_index: 48, s_index: Some(35), near_neighbors: &[211, 305, 306, 219, 225, 218] },
    ForceActuator { index: 49, actuator_id: 214, x_position: -0.77678302, y_position: -1.153209961, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(32), z_index: 49, s_index: Some(36), near_neighbors: &[113, 207, 208, 215, 221, 220] },
    ForceActuator { index: 50, actuator_id: 215, x_position: -1.442569946, y_position: -1.153209961, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(33), z_index: 50, s_index: Some(37), near_neighbors: &[214, 208, 209, 216, 222, 221] },
    ForceActuator { index: 51, actuator_id: 216, x_position: -2.108379883, y_position: -1.153209961, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(34), z_index: 51, s_index: Some(38), near_neighbors: &[215, 209, 210, 217, 223, 222] },
    ForceActuator { index: 52, actuator_id: 217, x_position: -2.774189941, y_position: -1.153209961, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(35), z_index: 52, s_index: Some(39), near_neighbors: &[216, 210, 211, 218, 224, 223] },
    ForceActuator { index: 53, actuator_id: 218, x_position: -3.44, y_position: -1.153209961, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(36), z_index: 53, s_index: Some(40), near_neighbors: &[217, 211, 212, 219, 225, 224] },
    ForceActuator { index: 54, actuator_id: 219, x_position: -3.9005, y_position: -0.997687012, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 54, s_index: None, near_neighbors: &[211, 212, 225, 218] },
    ForceActuator { index: 55, actuator_id: 220, x_position: -0.44386499, y_position: -1.729819946, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(37), z_index: 55, s_index: Some(41), near_neighbors: &[120, 113, 214, 221, 227, 126] },
    ForceActuator { index: 56, actuator_id: 221, x_position: -1.109680054, y_position: -1.729819946, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(38), z_index: 56, s_index: Some(42), near_neighbors: &[220, 214, 215, 222, 228, 227] },
    ForceActuator { index: 57, actuator_id: 222, x_position: -1.77548999, y_position: -1.729819946, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(39), z_index: 57, s_index: Some(43), near_neighbors: &[221, 215, 216, 223, 229, 228] },
    ForceActuator { index: 58, actuator_id: 223, x_position: -2.44127002, y_position: -1.729819946, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(40), z_index: 58, s_index: Some(44), near_neighbors: &[222, 216, 217, 224, 230, 229] },
    ForceActuator { index: 59, actuator_id: 224, x_position: -3.107080078, y_position: -1.729819946, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(41), z_index: 59, s_index: Some(45), near_neighbors: &[223, 217, 218, 225, 231, 230] },
    ForceActuator { index: 60, actuator_id: 225, x_position: -3.724449951, y_position: -1.517949951, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 60, s_index: None, near_neighbors: &[218, 219, 231, 224] },
    ForceActuator { index: 61, actuator_id: 227, x_position: -0.77678302, y_position: -2.306419922, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(42), z_index: 61, s_index: Some(46), near_neighbors: &[126, 220, 221, 228, 233, 232] },
    ForceActuator { index: 62, actuator_id: 228, x_position: -1.442569946, y_position: -2.306419922, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::XPlus, x_index: Some(4), y_index: None, z_index: 62, s_index: Some(47), near_neighbors: &[227, 221, 222, 229, 234, 233] },
    ForceActuator { index: 63, actuator_id: 229, x_position: -2.108379883, y_position: -2.306419922, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(43), z_index: 63, s_index: Some(48), near_neighbors: &[228, 222, 223, 230, 236, 235, 234] },
    ForceActuator { index: 64, actuator_id: 230, x_position: -2.774189941, y_position: -2.306419922, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(44), z_index: 64, s_index: Some(49), near_neighbors: &[229, 223, 224, 231, 236, 235] },
    ForceActuator { index: 65, actuator_id: 231, x_position: -3.387949951, y_position: -2.167409912, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 65, s_index: None, near_neighbors: &[230, 224, 225, 236] },
    ForceActuator { index: 66, actuator_id: 232, x_position: -0.44386499, y_position: -2.883030029, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(45), z_index: 66, s_index: Some(50), near_neighbors: &[132, 126, 227, 233, 238, 237, 137] },
    ForceActuator { index: 67, actuator_id: 233, x_position: -1.109680054, y_position: -2.883030029, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(46), z_index: 67, s_index: Some(51), near_neighbors: &[232, 227, 228, 234, 239, 238] },
    ForceActuator { index: 68, actuator_id: 234, x_position: -1.77548999, y_position: -2.883030029, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(47), z_index: 68, s_index: Some(52), near_neighbors: &[233, 228, 229, 235, 240, 243, 239] },
    ForceActuator { index: 69, actuator_id: 235, x_position: -2.44127002, y_position: -2.883030029, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::XPlus, x_index: Some(5), y_index: None, z_index: 69, s_index: Some(53), near_neighbors: &[234, 229, 230, 236, 240] },
    ForceActuator { index: 70, actuator_id: 236, x_position: -2.939360107, y_position: -2.745179932, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 70, s_index: None, near_neighbors: &[235, 229, 230, 231] },
    ForceActuator { index: 71, actuator_id: 237, x_position: -0.221945007, y_position: -3.459629883, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(48), z_index: 71, s_index: Some(54), near_neighbors: &[137, 132, 232, 238, 241, 141] },
    ForceActuator { index: 72, actuator_id: 238, x_position: -0.88772998, y_position: -3.459629883, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(49), z_index: 72, s_index: Some(55), near_neighbors: &[237, 232, 233, 239, 243, 242, 241] },
    ForceActuator { index: 73, actuator_id: 239, x_position: -1.553540039, y_position: -3.267429932, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 73, s_index: None, near_neighbors: &[233, 234, 240, 243, 242, 238] },
    ForceActuator { index: 74, actuator_id: 240, x_position: -2.08972998, y_position: -3.436389893, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 74, s_index: None, near_neighbors: &[239, 234, 235, 243] },
    ForceActuator { index: 75, actuator_id: 241, x_position: -0.365734985, y_position: -4.00525, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 75, s_index: None, near_neighbors: &[141, 137, 237, 238, 242] },
    ForceActuator { index: 76, actuator_id: 242, x_position: -1.085089966, y_position: -3.87276001, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 76, s_index: None, near_neighbors: &[241, 238, 239, 243] },
    ForceActuator { index: 77, actuator_id: 243, x_position: -1.60401001, y_position: -3.692780029, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 77, s_index: None, near_neighbors: &[238, 239, 234, 240, 242] },
    ForceActuator { index: 78, actuator_id: 301, x_position: -0.77678302, y_position: 0.0, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 78, s_index: None, near_neighbors: &[307, 308, 302, 208, 207] },
    ForceActuator { index: 79, actuator_id: 302, x_position: -1.442569946, y_position: 0.0, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(50), z_index: 79, s_index: Some(56), near_neighbors: &[301, 308, 309, 303, 209, 208] },
    ForceActuator { index: 80, actuator_id: 303, x_position: -2.108379883, y_position: 0.0, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(51), z_index: 80, s_index: Some(57), near_neighbors: &[302, 309, 310, 304, 210, 209] },
    ForceActuator { index: 81, actuator_id: 304, x_position: -2.774189941, y_position: 0.0, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(52), z_index: 81, s_index: Some(58), near_neighbors: &[303, 310, 311, 305, 211, 210] },
    ForceActuator { index: 82, actuator_id: 305, x_position: -3.44, y_position: 0.0, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(53), z_index: 82, s_index: Some(59), near_neighbors: &[304, 311, 312, 306, 212, 211] },
    ForceActuator { index: 83, actuator_id: 306, x_position: -3.96801001, y_position: 0.0, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 83, s_index: None, near_neighbors: &[305, 312, 212] },
    ForceActuator { index: 84, actuator_id: 307, x_position: -0.44386499, y_position: 0.576605408, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 84, s_index: None, near_neighbors: &[407, 313, 314, 308, 301] },
    ForceActuator { index: 85, actuator_id: 308, x_position: -1.109680054, y_position: 0.576605408, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(54), z_index: 85, s_index: Some(60), near_neighbors: &[307, 314, 315, 309, 302, 301] },
    ForceActuator { index: 86, actuator_id: 309, x_position: -1.77548999, y_position: 0.576605408, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(55), z_index: 86, s_index: Some(61), near_neighbors: &[308, 315, 316, 310, 303, 302] },
    ForceActuator { index: 87, actuator_id: 310, x_position: -2.441300049, y_position: 0.576605408, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(56), z_index: 87, s_index: Some(62), near_neighbors: &[309, 316, 317, 311, 304, 303] },
    ForceActuator { index: 88, actuator_id: 311, x_position: -3.107080078, y_position: 0.576605408, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YMinus, x_index: None, y_index: Some(57), z_index: 88, s_index: Some(63), near_neighbors: &[310, 317, 318, 319, 312, 305, 304] },
    ForceActuator { index: 89, actuator_id: 312, x_position: -3.772889893, y_position: 0.576605408, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::XPlus, x_index: Some(6), y_index: None, z_index: 89, s_index: Some(64), near_neighbors: &[311, 318, 319, 306, 305, 325] },
    ForceActuator { index: 90, actuator_id: 313, x_position: 0.0, y_position: 1.15321106, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(58), z_index: 90, s_index: Some(65), near_neighbors: &[414, 420, 320, 314, 307, 407] },
    ForceActuator { index: 91, actuator_id: 314, x_position: -0.77678302, y_position: 1.15321106, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(59), z_index: 91, s_index: Some(66), near_neighbors: &[313, 320, 321, 315, 308, 307] },
    ForceActuator { index: 92, actuator_id: 315, x_position: -1.442569946, y_position: 1.15321106, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(60), z_index: 92, s_index: Some(67), near_neighbors: &[314, 321, 322, 316, 309, 308] },
    ForceActuator { index: 93, actuator_id: 316, x_position: -2.108379883, y_position: 1.15321106, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(61), z_index: 93, s_index: Some(68), near_neighbors: &[315, 322, 323, 317, 310, 309] },
    ForceActuator { index: 94, actuator_id: 317, x_position: -2.774189941, y_position: 1.15321106, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(62), z_index: 94, s_index: Some(69), near_neighbors: &[316, 323, 324, 318, 311, 310] },
    ForceActuator { index: 95, actuator_id: 318, x_position: -3.44, y_position: 1.15321106, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(63), z_index: 95, s_index: Some(70), near_neighbors: &[317, 324, 325, 319, 312, 311] },
    ForceActuator { index: 96, actuator_id: 319, x_position: -3.9005, y_position: 0.997686584, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 96, s_index: None, near_neighbors: &[318, 325, 312, 311] },
    ForceActuator { index: 97, actuator_id: 320, x_position: -0.44386499, y_position: 1.72981604, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(64), z_index: 97, s_index: Some(71), near_neighbors: &[420, 326, 327, 321, 314, 313] },
    ForceActuator { index: 98, actuator_id: 321, x_position: -1.109680054, y_position: 1.72981604, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(65), z_index: 98, s_index: Some(72), near_neighbors: &[320, 327, 328, 322, 315, 314] },
    ForceActuator { index: 99, actuator_id: 322, x_position: -1.77548999, y_position: 1.72981604, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(66), z_index: 99, s_index: Some(73), near_neighbors: &[321, 328, 329, 323, 316, 315] },
    ForceActuator { index: 100, actuator_id: 323, x_position: -2.44127002, y_position: 1.72981604, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(67), z_index: 100, s_index: Some(74), near_neighbors: &[322, 329, 330, 324, 317, 316] },
    ForceActuator { index: 101, actuator_id: 324, x_position: -3.107080078, y_position: 1.72981604, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(68), z_index: 101, s_index: Some(75), near_neighbors: &[323, 330, 331, 325, 318, 317] },
    ForceActuator { index: 102, actuator_id: 325, x_position: -3.724449951, y_position: 1.517954956, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 102, s_index: None, near_neighbors: &[324, 331, 319, 318, 312] },
    ForceActuator { index: 103, actuator_id: 326, x_position: 0.0, y_position: 2.306422119, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(69), z_index: 103, s_index: Some(76), near_neighbors: &[427, 432, 332, 327, 320, 420] },
    ForceActuator { index: 104, actuator_id: 327, x_position: -0.77678302, y_position: 2.306422119, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(70), z_index: 104, s_index: Some(77), near_neighbors: &[326, 332, 333, 328, 321, 320] },
    ForceActuator { index: 105, actuator_id: 328, x_position: -1.442569946, y_position: 2.306422119, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::XPlus, x_index: Some(7), y_index: None, z_index: 105, s_index: Some(78), near_neighbors: &[327, 333, 334, 329, 322, 321] },
    ForceActuator { index: 106, actuator_id: 329, x_position: -2.108379883, y_position: 2.306422119, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(71), z_index: 106, s_index: Some(79), near_neighbors: &[328, 334, 335, 330, 323, 322] },
    ForceActuator { index: 107, actuator_id: 330, x_position: -2.774189941, y_position: 2.306422119, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(72), z_index: 107, s_index: Some(80), near_neighbors: &[329, 335, 336, 331, 324, 323] },
    ForceActuator { index: 108, actuator_id: 331, x_position: -3.387949951, y_position: 2.167406982, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 108, s_index: None, near_neighbors: &[330, 336, 325, 324] },
    ForceActuator { index: 109, actuator_id: 332, x_position: -0.44386499, y_position: 2.8830271, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(73), z_index: 109, s_index: Some(81), near_neighbors: &[432, 437, 337, 338, 333, 327, 326] },
    ForceActuator { index: 110, actuator_id: 333, x_position: -1.109680054, y_position: 2.8830271, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(74), z_index: 110, s_index: Some(82), near_neighbors: &[332, 338, 339, 334, 328, 327] },
    ForceActuator { index: 111, actuator_id: 334, x_position: -1.77548999, y_position: 2.8830271, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YMinus, x_index: None, y_index: Some(75), z_index: 111, s_index: Some(83), near_neighbors: &[333, 339, 343, 340, 335, 329, 328] },
    ForceActuator { index: 112, actuator_id: 335, x_position: -2.44127002, y_position: 2.8830271, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::XPlus, x_index: Some(8), y_index: None, z_index: 112, s_index: Some(84), near_neighbors: &[334, 340, 336, 330, 329] },
    ForceActuator { index: 113, actuator_id: 336, x_position: -2.939360107, y_position: 2.745180908, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 113, s_index: None, near_neighbors: &[335, 331, 330, 329] },
    ForceActuator { index: 114, actuator_id: 337, x_position: -0.221945007, y_position: 3.45963208, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(76), z_index: 114, s_index: Some(85), near_neighbors: &[437, 441, 341, 342, 338, 332, 432] },
    ForceActuator { index: 115, actuator_id: 338, x_position: -0.88772998, y_position: 3.45963208, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(77), z_index: 115, s_index: Some(86), near_neighbors: &[337, 341, 342, 343, 339, 333, 332] },
    ForceActuator { index: 116, actuator_id: 339, x_position: -1.553540039, y_position: 3.267430908, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 116, s_index: None, near_neighbors: &[338, 342, 343, 340, 335, 334, 333] },
    ForceActuator { index: 117, actuator_id: 340, x_position: -2.08972998, y_position: 3.436391113, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 117, s_index: None, near_neighbors: &[343, 335, 334, 339] },
    ForceActuator { index: 118, actuator_id: 341, x_position: -0.365734985, y_position: 4.00525, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 118, s_index: None, near_neighbors: &[441, 342, 338, 337, 437] },
    ForceActuator { index: 119, actuator_id: 342, x_position: -1.085089966, y_position: 3.872762939, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 119, s_index: None, near_neighbors: &[341, 343, 339, 333, 338, 337] },
    ForceActuator { index: 120, actuator_id: 343, x_position: -1.60401001, y_position: 3.692779053, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 120, s_index: None, near_neighbors: &[342, 340, 339, 334, 333, 338] },
    ForceActuator { index: 121, actuator_id: 407, x_position: 0.44386499, y_position: 0.576605408, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 121, s_index: None, near_neighbors: &[408, 414, 313, 307, 101] },
    ForceActuator { index: 122, actuator_id: 408, x_position: 1.109675049, y_position: 0.576605408, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(78), z_index: 122, s_index: Some(87), near_neighbors: &[409, 415, 414, 407, 101, 102] },
    ForceActuator { index: 123, actuator_id: 409, x_position: 1.775484985, y_position: 0.576605408, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(79), z_index: 123, s_index: Some(88), near_neighbors: &[410, 416, 415, 408, 102, 103] },
    ForceActuator { index: 124, actuator_id: 410, x_position: 2.441295898, y_position: 0.576605408, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(80), z_index: 124, s_index: Some(89), near_neighbors: &[411, 417, 416, 409, 103, 104] },
    ForceActuator { index: 125, actuator_id: 411, x_position: 3.107080078, y_position: 0.576605408, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YMinus, x_index: None, y_index: Some(81), z_index: 125, s_index: Some(90), near_neighbors: &[412, 419, 418, 417, 410, 104, 105] },
    ForceActuator { index: 126, actuator_id: 412, x_position: 3.772891113, y_position: 0.576605408, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::XMinus, x_index: Some(9), y_index: None, z_index: 126, s_index: Some(91), near_neighbors: &[419, 425, 418, 411, 105, 106] },
    ForceActuator { index: 127, actuator_id: 414, x_position: 0.776782776, y_position: 1.15321106, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(82), z_index: 127, s_index: Some(92), near_neighbors: &[415, 421, 420, 313, 407, 408] },
    ForceActuator { index: 128, actuator_id: 415, x_position: 1.442567993, y_position: 1.15321106, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(83), z_index: 128, s_index: Some(93), near_neighbors: &[416, 422, 421, 414, 408, 409] },
    ForceActuator { index: 129, actuator_id: 416, x_position: 2.10837793, y_position: 1.15321106, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(84), z_index: 129, s_index: Some(94), near_neighbors: &[417, 423, 422, 415, 409, 410] },
    ForceActuator { index: 130, actuator_id: 417, x_position: 2.774187988, y_position: 1.15321106, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(85), z_index: 130, s_index: Some(95), near_neighbors: &[418, 424, 423, 416, 410, 411] },
    ForceActuator { index: 131, actuator_id: 418, x_position: 3.439998047, y_position: 1.15321106, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(86), z_index: 131, s_index: Some(96), near_neighbors: &[419, 425, 424, 417, 411, 412] },
    ForceActuator { index: 132, actuator_id: 419, x_position: 3.9005, y_position: 0.997686584, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 132, s_index: None, near_neighbors: &[425, 418, 411, 412] },
    ForceActuator { index: 133, actuator_id: 420, x_position: 0.44386499, y_position: 1.72981604, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(87), z_index: 133, s_index: Some(97), near_neighbors: &[421, 427, 326, 320, 313, 414] },
    ForceActuator { index: 134, actuator_id: 421, x_position: 1.109675049, y_position: 1.72981604, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(88), z_index: 134, s_index: Some(98), near_neighbors: &[422, 428, 427, 420, 414, 415] },
    ForceActuator { index: 135, actuator_id: 422, x_position: 1.775484985, y_position: 1.72981604, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(89), z_index: 135, s_index: Some(99), near_neighbors: &[423, 429, 428, 421, 415, 416] },
    ForceActuator { index: 136, actuator_id: 423, x_position: 2.44127002, y_position: 1.72981604, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(90), z_index: 136, s_index: Some(100), near_neighbors: &[424, 430, 429, 422, 416, 417] },
    ForceActuator { index: 137, actuator_id: 424, x_position: 3.107080078, y_position: 1.72981604, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(91), z_index: 137, s_index: Some(101), near_neighbors: &[431, 430, 423, 417, 418, 425] },
    ForceActuator { index: 138, actuator_id: 425, x_position: 3.724452881, y_position: 1.517954956, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 138, s_index: None, near_neighbors: &[431, 424, 418, 412, 419] },
    ForceActuator { index: 139, actuator_id: 427, x_position: 0.776782776, y_position: 2.306422119, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(92), z_index: 139, s_index: Some(102), near_neighbors: &[428, 433, 432, 326, 420, 421] },
    ForceActuator { index: 140, actuator_id: 428, x_position: 1.442567993, y_position: 2.306422119, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::XMinus, x_index: Some(10), y_index: None, z_index: 140, s_index: Some(103), near_neighbors: &[429, 434, 433, 427, 421, 422] },
    ForceActuator { index: 141, actuator_id: 429, x_position: 2.10837793, y_position: 2.306422119, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(93), z_index: 141, s_index: Some(104), near_neighbors: &[430, 436, 435, 434, 428, 422, 423] },
    ForceActuator { index: 142, actuator_id: 430, x_position: 2.774187988, y_position: 2.306422119, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(94), z_index: 142, s_index: Some(105), near_neighbors: &[431, 436, 435, 429, 423, 424] },
    ForceActuator { index: 143, actuator_id: 431, x_position: 3.387954102, y_position: 2.167406982, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 143, s_index: None, near_neighbors: &[436, 430, 424, 425] },
    ForceActuator { index: 144, actuator_id: 432, x_position: 0.44386499, y_position: 2.8830271, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(95), z_index: 144, s_index: Some(106), near_neighbors: &[433, 438, 437, 337, 332, 326, 427] },
    ForceActuator { index: 145, actuator_id: 433, x_position: 1.109675049, y_position: 2.8830271, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(96), z_index: 145, s_index: Some(107), near_neighbors: &[434, 439, 438, 432, 427, 428] },
    ForceActuator { index: 146, actuator_id: 434, x_position: 1.775484985, y_position: 2.8830271, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YMinus, x_index: None, y_index: Some(97), z_index: 146, s_index: Some(108), near_neighbors: &[435, 440, 439, 433, 428, 429] },
    ForceActuator { index: 147, actuator_id: 435, x_position: 2.44127002, y_position: 2.8830271, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::XMinus, x_index: Some(11), y_index: None, z_index: 147, s_index: Some(109), near_neighbors: &[440, 434, 429, 430, 436] },
    ForceActuator { index: 148, actuator_id: 436, x_position: 2.939364014, y_position: 2.745180908, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 148, s_index: None, near_neighbors: &[435, 429, 430, 431] },
    ForceActuator { index: 149, actuator_id: 437, x_position: 0.221945206, y_position: 3.45963208, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(98), z_index: 149, s_index: Some(110), near_neighbors: &[438, 441, 341, 337, 332, 432] },
    ForceActuator { index: 150, actuator_id: 438, x_position: 0.88772998, y_position: 3.45963208, z_position: -2.158743, actuator_type: ActuatorType::Dual, orientation: Orientation::YPlus, x_index: None, y_index: Some(99), z_index: 150, s_index: Some(111), near_neighbors: &[439, 443, 442, 441, 437, 432, 433] },
    ForceActuator { index: 151, actuator_id: 439, x_position: 1.553540039, y_position: 3.267430908, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 151, s_index: None, near_neighbors: &[440, 443, 442, 438, 433, 434] },
    ForceActuator { index: 152, actuator_id: 440, x_position: 2.089733887, y_position: 3.436391113, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 152, s_index: None, near_neighbors: &[443, 439, 434, 435] },
    ForceActuator { index: 153, actuator_id: 441, x_position: 0.365734589, y_position: 4.00525, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 153, s_index: None, near_neighbors: &[442, 341, 337, 437, 438] },
    ForceActuator { index: 154, actuator_id: 442, x_position: 1.085088013, y_position: 3.872762939, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 154, s_index: None, near_neighbors: &[441, 437, 438, 439, 443] },
    ForceActuator { index: 155, actuator_id: 443, x_position: 1.60401001, y_position: 3.692779053, z_position: -2.158743, actuator_type: ActuatorType::Single, orientation: Orientation::None, x_index: None, y_index: None, z_index: 155, s_index: None, near_neighbors: &[442, 438, 439, 434, 440] },
];
