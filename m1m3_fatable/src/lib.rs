//! M1M3 force actuator table.
//!
//! Process-wide immutable description of the 156 force actuators supporting
//! the M1M3 mirror: position, sensor axes and the index of each actuator in
//! the X (12), Y (100), Z (156) and secondary cylinder (112) vectors used by
//! telemetry. The table is a `const` and can be shared freely across threads.

pub mod table;

pub use table::FATABLE;

/// Number of actuators with an X (lateral) secondary cylinder.
pub const FATABLE_XFA: usize = 12;
/// Number of actuators with a Y (lateral) secondary cylinder.
pub const FATABLE_YFA: usize = 100;
/// Number of actuators; every actuator has a Z primary cylinder.
pub const FATABLE_ZFA: usize = 156;
/// Number of dual axis actuators (X + Y secondary cylinders).
pub const FATABLE_SFA: usize = FATABLE_XFA + FATABLE_YFA;
/// Number of hardpoints.
pub const HP_COUNT: usize = 6;

/// Single or dual axis actuator assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorType {
    /// SAA, primary (Z) cylinder only.
    Single,
    /// DAA, primary cylinder plus a secondary cylinder at 45 degrees.
    Dual,
}

/// Direction the secondary cylinder pushes in the mirror plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    None,
    XPlus,
    XMinus,
    YPlus,
    YMinus,
}

/// One force actuator row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceActuator {
    /// Row in the canonical Z ordered table.
    pub index: usize,
    /// External ID. Hundreds digit is the quadrant.
    pub actuator_id: u16,
    pub x_position: f64,
    pub y_position: f64,
    pub z_position: f64,
    pub actuator_type: ActuatorType,
    pub orientation: Orientation,
    pub x_index: Option<usize>,
    pub y_index: Option<usize>,
    pub z_index: usize,
    pub s_index: Option<usize>,
    /// IDs of physically adjacent actuators.
    pub near_neighbors: &'static [u16],
}

impl ForceActuator {
    /// Mirror quadrant (1..=4).
    #[inline]
    pub fn quadrant(&self) -> u16 {
        self.actuator_id / 100
    }
}

/// Returns the table row index of an actuator ID, or `None` for unknown IDs.
///
/// IDs are laid out as quadrant * 100 + position, with at most 43 positions
/// per quadrant, so the lookup goes through a dense 4 x 44 slot map built at
/// compile time.
pub fn actuator_id_to_index(actuator_id: u16) -> Option<usize> {
    let quadrant = usize::from(actuator_id / 100);
    let position = usize::from(actuator_id % 100);
    if !(1..=4).contains(&quadrant) || position >= ID_SLOTS {
        return None;
    }
    match ID_MAP[quadrant - 1][position] {
        NO_ACTUATOR => None,
        idx => Some(usize::from(idx)),
    }
}

/// Returns the actuator with the given ID.
pub fn actuator_by_id(actuator_id: u16) -> Option<&'static ForceActuator> {
    actuator_id_to_index(actuator_id).map(|idx| &FATABLE[idx])
}

/// Returns the dual axis actuator owning the given secondary cylinder index.
pub fn actuator_by_s_index(s_index: usize) -> Option<&'static ForceActuator> {
    FATABLE.iter().find(|fa| fa.s_index == Some(s_index))
}

/// Row indices of the near neighbours of the actuator at `index`.
///
/// Returns an empty iterator when `index` is out of range.
pub fn near_neighbor_indices(index: usize) -> impl Iterator<Item = usize> {
    FATABLE
        .get(index)
        .map(|fa| fa.near_neighbors)
        .unwrap_or(&[])
        .iter()
        .filter_map(|id| actuator_id_to_index(*id))
}

/// Iterator over actuators having an X secondary cylinder, in X index order.
pub fn x_actuators() -> impl Iterator<Item = &'static ForceActuator> {
    FATABLE.iter().filter(|fa| fa.x_index.is_some())
}

/// Iterator over actuators having a Y secondary cylinder, in Y index order.
pub fn y_actuators() -> impl Iterator<Item = &'static ForceActuator> {
    FATABLE.iter().filter(|fa| fa.y_index.is_some())
}

/// Reduce a full length (156) per-actuator vector to the 12 X values.
pub fn reduce_to_x(forces: &[f64; FATABLE_ZFA]) -> Vec<f64> {
    x_actuators().map(|fa| forces[fa.index]).collect()
}

/// Reduce a full length (156) per-actuator vector to the 100 Y values.
pub fn reduce_to_y(forces: &[f64; FATABLE_ZFA]) -> Vec<f64> {
    y_actuators().map(|fa| forces[fa.index]).collect()
}

const ID_SLOTS: usize = 44;
const NO_ACTUATOR: u8 = u8::MAX;

static ID_MAP: [[u8; ID_SLOTS]; 4] = build_id_map();

const fn build_id_map() -> [[u8; ID_SLOTS]; 4] {
    let mut map = [[NO_ACTUATOR; ID_SLOTS]; 4];
    let mut i = 0;
    while i < FATABLE.len() {
        let id = FATABLE[i].actuator_id as usize;
        map[id / 100 - 1][id % 100] = i as u8;
        i += 1;
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn axis_counts_match_physical_layout() {
        assert_eq!(FATABLE.len(), FATABLE_ZFA);
        assert_eq!(x_actuators().count(), FATABLE_XFA);
        assert_eq!(y_actuators().count(), FATABLE_YFA);
        assert_eq!(
            FATABLE.iter().filter(|fa| fa.s_index.is_some()).count(),
            FATABLE_SFA
        );
    }

    #[test]
    fn indices_are_dense_and_ordered() {
        for (i, fa) in FATABLE.iter().enumerate() {
            assert_eq!(fa.index, i);
            assert_eq!(fa.z_index, i);
        }
        let xs: Vec<usize> = x_actuators().filter_map(|fa| fa.x_index).collect();
        assert_eq!(xs, (0..FATABLE_XFA).collect::<Vec<_>>());
        let ys: Vec<usize> = y_actuators().filter_map(|fa| fa.y_index).collect();
        assert_eq!(ys, (0..FATABLE_YFA).collect::<Vec<_>>());
        let ss: Vec<usize> = FATABLE.iter().filter_map(|fa| fa.s_index).collect();
        assert_eq!(ss, (0..FATABLE_SFA).collect::<Vec<_>>());
    }

    #[test]
    fn dual_actuators_have_secondary_orientation() {
        for fa in &FATABLE {
            match fa.actuator_type {
                ActuatorType::Single => {
                    assert_eq!(fa.orientation, Orientation::None);
                    assert!(fa.s_index.is_none());
                }
                ActuatorType::Dual => {
                    assert_ne!(fa.orientation, Orientation::None);
                    assert!(fa.s_index.is_some());
                    assert!(fa.x_index.is_some() ^ fa.y_index.is_some());
                }
            }
        }
    }

    #[test]
    fn id_lookup_is_bijective() {
        for fa in &FATABLE {
            assert_eq!(actuator_id_to_index(fa.actuator_id), Some(fa.index));
        }
        let mut seen = std::collections::HashSet::new();
        for fa in &FATABLE {
            assert!(seen.insert(fa.actuator_id));
        }
    }

    #[rstest]
    #[case(0)]
    #[case(100)]
    #[case(144)]
    #[case(199)]
    #[case(500)]
    #[case(u16::MAX)]
    fn unknown_ids_are_none(#[case] id: u16) {
        assert_eq!(actuator_id_to_index(id), None);
    }

    #[rstest]
    #[case(101, 0, 1)]
    #[case(102, 1, 1)]
    #[case(112, 11, 1)]
    #[case(443, 155, 4)]
    fn known_ids(#[case] id: u16, #[case] index: usize, #[case] quadrant: u16) {
        assert_eq!(actuator_id_to_index(id), Some(index));
        assert_eq!(FATABLE[index].quadrant(), quadrant);
        assert_eq!(actuator_by_id(id).map(|fa| fa.index), Some(index));
    }

    #[test]
    fn s_index_lookup() {
        assert_eq!(actuator_by_s_index(0).map(|fa| fa.actuator_id), Some(102));
        assert!(actuator_by_s_index(FATABLE_SFA).is_none());
    }

    #[test]
    fn near_neighbors_resolve_to_rows() {
        let n: Vec<usize> = near_neighbor_indices(0).collect();
        assert_eq!(n.len(), FATABLE[0].near_neighbors.len());
        assert!(n.contains(&1));
        assert_eq!(near_neighbor_indices(FATABLE_ZFA).count(), 0);
    }

    #[test]
    fn reduce_preserves_actuator_order() {
        let full: [f64; FATABLE_ZFA] = std::array::from_fn(|i| i as f64);
        let x = reduce_to_x(&full);
        assert_eq!(x.len(), FATABLE_XFA);
        // 112 is the first X actuator
        assert_eq!(x[0], actuator_id_to_index(112).map(|i| i as f64).unwrap());
        let y = reduce_to_y(&full);
        assert_eq!(y.len(), FATABLE_YFA);
        assert_eq!(y[0], 1.0);
        assert!(y.windows(2).all(|w| w[0] < w[1]));
    }
}
