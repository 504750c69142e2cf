//! Applied forces value object.
//!
//! Holds the X (12), Y (100) and Z (156) actuator force vectors and the mirror
//! level totals derived from them and the actuator geometry. Totals are always
//! recomputed from the vectors; they cannot be set on their own.

use std::ops::Add;

use m1m3_fatable::{FATABLE, FATABLE_XFA, FATABLE_YFA, FATABLE_ZFA};

use crate::error::{Result, check_len};

/// Mirror level force and moment totals. Forces in N, moments in Nm.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ForcesAndMoments {
    pub fx: f64,
    pub fy: f64,
    pub fz: f64,
    pub mx: f64,
    pub my: f64,
    pub mz: f64,
    /// Length of the (fx, fy, fz) vector.
    pub force_magnitude: f64,
}

impl ForcesAndMoments {
    /// Sum actuator forces and their moments around `center_of_gravity`
    /// (mirror origin when `None`).
    fn calculate(x: &[f64], y: &[f64], z: &[f64], center_of_gravity: Option<[f64; 3]>) -> Self {
        let [cx, cy, cz] = center_of_gravity.unwrap_or([0.0; 3]);
        let mut t = Self::default();
        for fa in &FATABLE {
            let fa_fx = fa.x_index.map_or(0.0, |i| x[i]);
            let fa_fy = fa.y_index.map_or(0.0, |i| y[i]);
            let fa_fz = z[fa.z_index];

            let rx = fa.x_position - cx;
            let ry = fa.y_position - cy;
            let rz = fa.z_position - cz;

            t.fx += fa_fx;
            t.fy += fa_fy;
            t.fz += fa_fz;
            t.mx += fa_fz * ry - fa_fy * rz;
            t.my += fa_fx * rz - fa_fz * rx;
            t.mz += fa_fy * rx - fa_fx * ry;
        }
        t.force_magnitude = (t.fx * t.fx + t.fy * t.fy + t.fz * t.fz).sqrt();
        t
    }

    pub fn as_array(&self) -> [f64; 6] {
        [self.fx, self.fy, self.fz, self.mx, self.my, self.mz]
    }
}

/// Forces applied by the force actuators, shaped like the applied forces
/// telemetry topics.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedForces {
    pub timestamp: f64,
    x_forces: Vec<f64>,
    y_forces: Vec<f64>,
    z_forces: Vec<f64>,
    center_of_gravity: Option<[f64; 3]>,
    totals: ForcesAndMoments,
}

impl Default for AppliedForces {
    fn default() -> Self {
        Self::zero(None)
    }
}

impl AppliedForces {
    /// Wrap force vectors, validating their lengths (12, 100, 156).
    pub fn new(
        x_forces: Vec<f64>,
        y_forces: Vec<f64>,
        z_forces: Vec<f64>,
        center_of_gravity: Option<[f64; 3]>,
    ) -> Result<Self> {
        check_len("x forces", FATABLE_XFA, x_forces.len())?;
        check_len("y forces", FATABLE_YFA, y_forces.len())?;
        check_len("z forces", FATABLE_ZFA, z_forces.len())?;
        Ok(Self::from_checked(
            x_forces,
            y_forces,
            z_forces,
            center_of_gravity,
        ))
    }

    /// All forces zero.
    pub fn zero(center_of_gravity: Option<[f64; 3]>) -> Self {
        Self::from_checked(
            vec![0.0; FATABLE_XFA],
            vec![0.0; FATABLE_YFA],
            vec![0.0; FATABLE_ZFA],
            center_of_gravity,
        )
    }

    fn from_checked(
        x_forces: Vec<f64>,
        y_forces: Vec<f64>,
        z_forces: Vec<f64>,
        center_of_gravity: Option<[f64; 3]>,
    ) -> Self {
        let totals =
            ForcesAndMoments::calculate(&x_forces, &y_forces, &z_forces, center_of_gravity);
        Self {
            timestamp: 0.0,
            x_forces,
            y_forces,
            z_forces,
            center_of_gravity,
            totals,
        }
    }

    pub fn with_timestamp(mut self, timestamp: f64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Copy with all forces of actuators in `quadrants` (1..=4) set to zero.
    pub fn clear_quadrants(&self, quadrants: &[u16]) -> Self {
        let mut x = self.x_forces.clone();
        let mut y = self.y_forces.clone();
        let mut z = self.z_forces.clone();
        for fa in FATABLE.iter().filter(|fa| quadrants.contains(&fa.quadrant())) {
            if let Some(i) = fa.x_index {
                x[i] = 0.0;
            }
            if let Some(i) = fa.y_index {
                y[i] = 0.0;
            }
            z[fa.z_index] = 0.0;
        }
        Self::from_checked(x, y, z, self.center_of_gravity).with_timestamp(self.timestamp)
    }

    pub fn x_forces(&self) -> &[f64] {
        &self.x_forces
    }

    pub fn y_forces(&self) -> &[f64] {
        &self.y_forces
    }

    pub fn z_forces(&self) -> &[f64] {
        &self.z_forces
    }

    pub fn center_of_gravity(&self) -> Option<[f64; 3]> {
        self.center_of_gravity
    }

    pub fn totals(&self) -> &ForcesAndMoments {
        &self.totals
    }

    pub fn fx(&self) -> f64 {
        self.totals.fx
    }

    pub fn fy(&self) -> f64 {
        self.totals.fy
    }

    pub fn fz(&self) -> f64 {
        self.totals.fz
    }

    pub fn mx(&self) -> f64 {
        self.totals.mx
    }

    pub fn my(&self) -> f64 {
        self.totals.my
    }

    pub fn mz(&self) -> f64 {
        self.totals.mz
    }

    pub fn force_magnitude(&self) -> f64 {
        self.totals.force_magnitude
    }
}

fn sum(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b).map(|(a, b)| a + b).collect()
}

/// Element-wise sum of the force vectors. The result keeps the center of
/// gravity of the left operand and the later of the two timestamps.
impl Add for &AppliedForces {
    type Output = AppliedForces;

    fn add(self, rhs: &AppliedForces) -> AppliedForces {
        AppliedForces::from_checked(
            sum(&self.x_forces, &rhs.x_forces),
            sum(&self.y_forces, &rhs.y_forces),
            sum(&self.z_forces, &rhs.z_forces),
            self.center_of_gravity,
        )
        .with_timestamp(self.timestamp.max(rhs.timestamp))
    }
}

impl Add for AppliedForces {
    type Output = AppliedForces;

    fn add(self, rhs: AppliedForces) -> AppliedForces {
        &self + &rhs
    }
}

impl Add<&AppliedForces> for AppliedForces {
    type Output = AppliedForces;

    fn add(self, rhs: &AppliedForces) -> AppliedForces {
        &self + rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ForceError;
    use m1m3_fatable::actuator_id_to_index;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
    }

    #[test]
    fn zero_forces_have_zero_totals() {
        let f = AppliedForces::default();
        assert_eq!(*f.totals(), ForcesAndMoments::default());
    }

    #[test]
    fn length_mismatch_is_shape_error() {
        let err = AppliedForces::new(vec![0.0; 11], vec![0.0; 100], vec![0.0; 156], None)
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<ForceError>(),
            Some(&ForceError::Shape {
                what: "x forces",
                expected: 12,
                actual: 11
            })
        );
        assert!(AppliedForces::new(vec![0.0; 12], vec![0.0; 101], vec![0.0; 156], None).is_err());
        assert!(AppliedForces::new(vec![0.0; 12], vec![0.0; 100], vec![0.0; 155], None).is_err());
    }

    #[test]
    fn single_z_force_moments() {
        let idx = actuator_id_to_index(102).unwrap();
        let mut z = vec![0.0; 156];
        z[idx] = 10.0;
        let f = AppliedForces::new(vec![0.0; 12], vec![0.0; 100], z, None).unwrap();
        let fa = &FATABLE[idx];
        assert!(close(f.fz(), 10.0));
        assert!(close(f.mx(), 10.0 * fa.y_position));
        assert!(close(f.my(), -10.0 * fa.x_position));
        assert!(close(f.mz(), 0.0));
        assert!(close(f.force_magnitude(), 10.0));
    }

    #[test]
    fn center_of_gravity_shifts_moment_arms() {
        let idx = actuator_id_to_index(102).unwrap();
        let mut z = vec![0.0; 156];
        z[idx] = 10.0;
        let cog = [0.5, -0.25, 0.0];
        let f = AppliedForces::new(vec![0.0; 12], vec![0.0; 100], z, Some(cog)).unwrap();
        let fa = &FATABLE[idx];
        assert!(close(f.mx(), 10.0 * (fa.y_position + 0.25)));
        assert!(close(f.my(), -10.0 * (fa.x_position - 0.5)));
    }

    #[test]
    fn lateral_forces_produce_mz() {
        // 112 is an X actuator
        let fa = &FATABLE[actuator_id_to_index(112).unwrap()];
        let mut x = vec![0.0; 12];
        x[fa.x_index.unwrap()] = 2.0;
        let f = AppliedForces::new(x, vec![0.0; 100], vec![0.0; 156], None).unwrap();
        assert!(close(f.fx(), 2.0));
        assert!(close(f.mz(), -2.0 * fa.y_position));
        assert!(close(f.my(), 2.0 * fa.z_position));
    }

    #[test]
    fn clear_quadrants_zeroes_selected_actuators() {
        let f = AppliedForces::new(vec![1.0; 12], vec![1.0; 100], vec![1.0; 156], None).unwrap();
        let cleared = f.clear_quadrants(&[1, 3]);
        for fa in &FATABLE {
            let expected = if matches!(fa.quadrant(), 1 | 3) { 0.0 } else { 1.0 };
            assert_eq!(cleared.z_forces()[fa.index], expected);
            if let Some(i) = fa.x_index {
                assert_eq!(cleared.x_forces()[i], expected);
            }
            if let Some(i) = fa.y_index {
                assert_eq!(cleared.y_forces()[i], expected);
            }
        }
        let kept = FATABLE.iter().filter(|fa| matches!(fa.quadrant(), 2 | 4)).count();
        assert!(close(cleared.fz(), kept as f64));
        // original untouched
        assert!(close(f.fz(), 156.0));
    }

    #[test]
    fn add_keeps_lhs_center_of_gravity() {
        let a = AppliedForces::zero(Some([0.1, 0.2, 0.3])).with_timestamp(5.0);
        let b = AppliedForces::zero(None).with_timestamp(7.0);
        let s = &a + &b;
        assert_eq!(s.center_of_gravity(), Some([0.1, 0.2, 0.3]));
        assert_eq!(s.timestamp, 7.0);
    }
}
