//! Typed telemetry inputs.
//!
//! The calculator never depends on the transport delivering telemetry; callers
//! copy the fields they receive into these plain structs.

use m1m3_fatable::HP_COUNT;

use crate::applied_forces::AppliedForces;

/// Per-actuator force vectors: 12 X, 100 Y and 156 Z values.
pub trait ForceVectors {
    fn x_forces(&self) -> &[f64];
    fn y_forces(&self) -> &[f64];
    fn z_forces(&self) -> &[f64];
}

/// Forces measured on the mirror by the force actuator load cells.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeasuredForces {
    pub timestamp: f64,
    pub x_forces: Vec<f64>,
    pub y_forces: Vec<f64>,
    pub z_forces: Vec<f64>,
}

impl ForceVectors for MeasuredForces {
    fn x_forces(&self) -> &[f64] {
        &self.x_forces
    }

    fn y_forces(&self) -> &[f64] {
        &self.y_forces
    }

    fn z_forces(&self) -> &[f64] {
        &self.z_forces
    }
}

impl ForceVectors for AppliedForces {
    fn x_forces(&self) -> &[f64] {
        AppliedForces::x_forces(self)
    }

    fn y_forces(&self) -> &[f64] {
        AppliedForces::y_forces(self)
    }

    fn z_forces(&self) -> &[f64] {
        AppliedForces::z_forces(self)
    }
}

/// Hardpoint load cell sample.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HardpointActuatorSample {
    pub timestamp: f64,
    /// Measured force on each hardpoint, N.
    pub measured_force: [f64; HP_COUNT],
}

/// Position, velocity and acceleration of a single mount axis, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisKinematics {
    pub position: f64,
    pub velocity: f64,
    pub acceleration: f64,
}

/// Telescope mount (TMA) elevation and azimuth kinematics.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TmaKinematics {
    pub elevation: AxisKinematics,
    pub azimuth: AxisKinematics,
}

/// One time sample of the kinematic inputs used by the fitter. Missing
/// values may be NaN.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KinematicsSample {
    pub timestamp: f64,
    pub actual: TmaKinematics,
    pub demand: TmaKinematics,
    /// Angular acceleration derived from the DC accelerometers (XYZ), deg/s².
    pub accelerometers_angular_acceleration: [f64; 3],
}

/// Which TMA kinematics feed the fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VelocityKind {
    #[default]
    Actual,
    Demand,
}

impl TmaKinematics {
    /// Mirror angular velocity (XYZ, rad/s) from mount rates.
    ///
    /// Elevation rate maps to X; azimuth rate is split between Y and Z by the
    /// elevation angle.
    pub fn angular_velocity(&self) -> [f64; 3] {
        let (el_sin, el_cos) = self.elevation.position.to_radians().sin_cos();
        let az = self.azimuth.velocity.to_radians();
        [
            self.elevation.velocity.to_radians(),
            az * el_cos,
            az * el_sin,
        ]
    }

    /// Mirror angular acceleration (XYZ, rad/s²) from mount accelerations.
    pub fn angular_acceleration(&self) -> [f64; 3] {
        let (el_sin, el_cos) = self.elevation.position.to_radians().sin_cos();
        let az = self.azimuth.acceleration.to_radians();
        [
            self.elevation.acceleration.to_radians(),
            az * el_cos,
            az * el_sin,
        ]
    }
}

impl KinematicsSample {
    pub fn tma(&self, kind: VelocityKind) -> &TmaKinematics {
        match kind {
            VelocityKind::Actual => &self.actual,
            VelocityKind::Demand => &self.demand,
        }
    }
}
