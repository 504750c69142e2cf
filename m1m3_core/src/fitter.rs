//! Least-squares fit of the acceleration and velocity force models.
//!
//! Each time sample contributes one row of the design matrix:
//!
//! ```text
//! [ V_x², V_y², V_z², V_x·V_z, V_y·V_z, A_x, A_y, A_z ]
//! ```
//!
//! with angular velocities (rad/s) derived from the TMA kinematics and angular
//! accelerations (rad/s²) taken either from the DC accelerometers or from the
//! TMA. Every X, Y and Z actuator force column is then fitted independently
//! against that design matrix, giving eight coefficients per actuator axis:
//! the five velocity terms followed by the three acceleration terms, the same
//! layout `ForceCalculator::update_acceleration_and_velocity` expects.
//!
//! Rank-deficient designs are not an error: the solver returns the
//! minimum-norm solution, exactly as `numpy.linalg.lstsq` does.

use m1m3_config::Axis;
use m1m3_fatable::{FATABLE_XFA, FATABLE_YFA, FATABLE_ZFA};
use nalgebra::DMatrix;

use crate::calculator::velocity_terms;
use crate::error::{ForceError, Result, check_len};
use crate::telemetry::{ForceVectors, KinematicsSample, VelocityKind};

/// Number of velocity model terms.
pub const VELOCITY_TERMS: usize = 5;
/// Number of acceleration model terms.
pub const ACCELERATION_TERMS: usize = 3;
/// Columns of the design matrix.
pub const N_FEATURES: usize = VELOCITY_TERMS + ACCELERATION_TERMS;

/// Fitted forces are in N; tables hold mN per unit of kinematic input, with
/// the opposite sign (they compensate the inertial forces).
const FORCE_SCALE: f64 = -1000.0;

/// Coefficients of one actuator axis, velocity terms first.
pub type Coefficients = [f64; N_FEATURES];

/// Source of the angular accelerations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccelerationSource {
    /// Derived from the DC accelerometers (preferred).
    #[default]
    Accelerometers,
    /// Derived from the TMA kinematics of the selected `VelocityKind`.
    Tma,
}

/// Per actuator axis model coefficients, keyed like the telemetry vectors
/// (`X0..X11`, `Y0..Y99`, `Z0..Z155`).
#[derive(Debug, Clone, PartialEq)]
pub struct FitCoefficients {
    x: Vec<Coefficients>,
    y: Vec<Coefficients>,
    z: Vec<Coefficients>,
}

impl Default for FitCoefficients {
    fn default() -> Self {
        Self {
            x: vec![[0.0; N_FEATURES]; FATABLE_XFA],
            y: vec![[0.0; N_FEATURES]; FATABLE_YFA],
            z: vec![[0.0; N_FEATURES]; FATABLE_ZFA],
        }
    }
}

impl FitCoefficients {
    pub fn new(
        x: Vec<Coefficients>,
        y: Vec<Coefficients>,
        z: Vec<Coefficients>,
    ) -> Result<Self> {
        check_len("x coefficients", FATABLE_XFA, x.len())?;
        check_len("y coefficients", FATABLE_YFA, y.len())?;
        check_len("z coefficients", FATABLE_ZFA, z.len())?;
        Ok(Self { x, y, z })
    }

    pub fn x(&self) -> &[Coefficients] {
        &self.x
    }

    pub fn y(&self) -> &[Coefficients] {
        &self.y
    }

    pub fn z(&self) -> &[Coefficients] {
        &self.z
    }

    pub fn axis(&self, axis: Axis) -> &[Coefficients] {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    pub fn axis_mut(&mut self, axis: Axis) -> &mut [Coefficients] {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }

    /// Coefficients for a key such as `X3` or `Z155`.
    pub fn get(&self, key: &str) -> Option<&Coefficients> {
        let (axis, idx) = parse_key(key)?;
        self.axis(axis).get(idx)
    }

    /// All keys with their coefficients, X then Y then Z.
    pub fn iter(&self) -> impl Iterator<Item = (String, &Coefficients)> {
        Axis::ALL.into_iter().flat_map(move |axis| {
            self.axis(axis)
                .iter()
                .enumerate()
                .map(move |(i, c)| (format!("{}{i}", axis.column()), c))
        })
    }
}

fn parse_key(key: &str) -> Option<(Axis, usize)> {
    let mut chars = key.chars();
    let axis = match chars.next()? {
        'X' => Axis::X,
        'Y' => Axis::Y,
        'Z' => Axis::Z,
        _ => return None,
    };
    let idx = chars.as_str().parse().ok()?;
    Some((axis, idx))
}

/// Outcome of `AccelerationAndVelocityFitter::do_fit`.
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult {
    pub coefficients: FitCoefficients,
    /// Sum of squared residuals per fitted column, in `FitCoefficients::iter`
    /// order. `None` unless the design has full column rank and more samples
    /// than features.
    pub residuals: Option<Vec<f64>>,
    pub rank: usize,
    pub singular_values: Vec<f64>,
}

/// Minimum-norm least-squares solution of `a · x = b` for every column of `b`.
#[derive(Debug, Clone, PartialEq)]
pub struct Lstsq {
    pub solution: DMatrix<f64>,
    pub residuals: Option<Vec<f64>>,
    pub rank: usize,
    pub singular_values: Vec<f64>,
}

/// Solve `a · x = b` through the SVD of `a`, discarding singular values at or
/// below `ε · max(M, N) · σ_max`.
pub fn lstsq(a: &DMatrix<f64>, b: &DMatrix<f64>) -> Result<Lstsq> {
    let (m, n) = a.shape();
    check_len("right hand side rows", m, b.nrows())?;
    if m == 0 || n == 0 {
        return Err(eyre::Report::new(ForceError::Fit(format!(
            "empty design matrix ({m}x{n})"
        ))));
    }

    let svd = a.clone().svd(true, true);
    let sigma_max = svd.singular_values.iter().copied().fold(0.0, f64::max);
    #[allow(clippy::cast_precision_loss)]
    let eps = f64::EPSILON * m.max(n) as f64 * sigma_max;
    let rank = svd.singular_values.iter().filter(|s| **s > eps).count();
    let solution = svd
        .solve(b, eps)
        .map_err(|e| eyre::Report::new(ForceError::Fit(e.to_string())))?;

    let residuals = (rank == n && m > n).then(|| {
        let r = b - a * &solution;
        r.column_iter().map(|c| c.norm_squared()).collect()
    });

    Ok(Lstsq {
        solution,
        residuals,
        rank,
        singular_values: svd.singular_values.iter().copied().collect(),
    })
}

/// Builds the design matrix from kinematics telemetry and fits measured
/// mirror forces against it.
#[derive(Debug, Clone, PartialEq)]
pub struct AccelerationAndVelocityFitter {
    design: DMatrix<f64>,
}

impl AccelerationAndVelocityFitter {
    /// Design matrix from kinematics samples. NaN features are replaced by 0.
    pub fn new(
        samples: &[KinematicsSample],
        kind: VelocityKind,
        source: AccelerationSource,
    ) -> Self {
        let mut design = DMatrix::zeros(samples.len(), N_FEATURES);
        let mut nan_rows = 0usize;
        for (r, sample) in samples.iter().enumerate() {
            let row = features(sample, kind, source);
            if row.iter().any(|v| v.is_nan()) {
                nan_rows += 1;
            }
            for (c, v) in row.into_iter().enumerate() {
                design[(r, c)] = if v.is_nan() { 0.0 } else { v };
            }
        }
        if nan_rows > 0 {
            tracing::warn!(
                rows = nan_rows,
                samples = samples.len(),
                "NaN kinematics replaced by zero"
            );
        }
        Self { design }
    }

    /// Use a prepared design matrix; it must have `N_FEATURES` columns.
    pub fn from_design(design: DMatrix<f64>) -> Result<Self> {
        check_len("design matrix columns", N_FEATURES, design.ncols())?;
        Ok(Self { design })
    }

    pub fn design(&self) -> &DMatrix<f64> {
        &self.design
    }

    pub fn n_samples(&self) -> usize {
        self.design.nrows()
    }

    /// Fit every actuator axis. `mirror_forces` holds one force sample per
    /// design row; fitted forces are negated and scaled to table units.
    pub fn do_fit<F: ForceVectors>(&self, mirror_forces: &[F]) -> Result<FitResult> {
        let n = self.n_samples();
        check_len("mirror force samples", n, mirror_forces.len())?;

        let columns = FATABLE_XFA + FATABLE_YFA + FATABLE_ZFA;
        let mut b = DMatrix::zeros(n, columns);
        for (r, f) in mirror_forces.iter().enumerate() {
            check_len("x forces", FATABLE_XFA, f.x_forces().len())?;
            check_len("y forces", FATABLE_YFA, f.y_forces().len())?;
            check_len("z forces", FATABLE_ZFA, f.z_forces().len())?;
            let row = f.x_forces().iter().chain(f.y_forces()).chain(f.z_forces());
            for (c, v) in row.enumerate() {
                b[(r, c)] = v * FORCE_SCALE;
            }
        }

        let fit = lstsq(&self.design, &b)?;
        if fit.rank < N_FEATURES {
            tracing::warn!(
                rank = fit.rank,
                features = N_FEATURES,
                "rank deficient design, using minimum norm solution"
            );
        }
        tracing::info!(samples = n, rank = fit.rank, "acceleration and velocity fit done");

        let column = |c: usize| -> Coefficients {
            std::array::from_fn(|f| fit.solution[(f, c)])
        };
        let coefficients = FitCoefficients {
            x: (0..FATABLE_XFA).map(column).collect(),
            y: (FATABLE_XFA..FATABLE_XFA + FATABLE_YFA).map(column).collect(),
            z: (FATABLE_XFA + FATABLE_YFA..columns).map(column).collect(),
        };

        Ok(FitResult {
            coefficients,
            residuals: fit.residuals,
            rank: fit.rank,
            singular_values: fit.singular_values,
        })
    }
}

fn features(
    sample: &KinematicsSample,
    kind: VelocityKind,
    source: AccelerationSource,
) -> [f64; N_FEATURES] {
    let tma = sample.tma(kind);
    let v = velocity_terms(tma.angular_velocity());
    let a = match source {
        AccelerationSource::Accelerometers => sample
            .accelerometers_angular_acceleration
            .map(f64::to_radians),
        AccelerationSource::Tma => tma.angular_acceleration(),
    };
    [v[0], v[1], v[2], v[3], v[4], a[0], a[1], a[2]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::{AxisKinematics, TmaKinematics};

    #[test]
    fn keys_round_trip() {
        let mut c = FitCoefficients::default();
        c.axis_mut(Axis::Y)[7][2] = 3.5;
        assert_eq!(c.get("Y7").map(|v| v[2]), Some(3.5));
        assert!(c.get("Y100").is_none());
        assert!(c.get("W1").is_none());
        assert!(c.get("X").is_none());
        let keys: Vec<String> = c.iter().map(|(k, _)| k).collect();
        assert_eq!(keys.len(), 268);
        assert_eq!(keys[0], "X0");
        assert_eq!(keys[12], "Y0");
        assert_eq!(keys[267], "Z155");
    }

    #[test]
    fn coefficient_lengths_are_checked() {
        let err = FitCoefficients::new(vec![[0.0; 8]; 12], vec![[0.0; 8]; 99], vec![[0.0; 8]; 156])
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ForceError>(),
            Some(ForceError::Shape { actual: 99, .. })
        ));
    }

    #[test]
    fn lstsq_exact_system() {
        let a = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 0.0, 2.0, 1.0, 1.0]);
        let b = DMatrix::from_row_slice(3, 1, &[1.0, 4.0, 3.0]);
        let fit = lstsq(&a, &b).unwrap();
        assert_eq!(fit.rank, 2);
        assert!((fit.solution[(0, 0)] - 1.0).abs() < 1e-12);
        assert!((fit.solution[(1, 0)] - 2.0).abs() < 1e-12);
        let res = fit.residuals.unwrap();
        assert!(res[0].abs() < 1e-20);
    }

    #[test]
    fn lstsq_rank_deficient_is_minimum_norm() {
        // duplicated column: x0 + x1 = 2 has minimum norm solution (1, 1)
        let a = DMatrix::from_row_slice(3, 2, &[1.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
        let b = DMatrix::from_row_slice(3, 1, &[2.0, 2.0, 2.0]);
        let fit = lstsq(&a, &b).unwrap();
        assert_eq!(fit.rank, 1);
        assert!(fit.residuals.is_none());
        assert!((fit.solution[(0, 0)] - 1.0).abs() < 1e-12);
        assert!((fit.solution[(1, 0)] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn lstsq_zero_design() {
        let a = DMatrix::zeros(4, 2);
        let b = DMatrix::from_element(4, 1, 1.0);
        let fit = lstsq(&a, &b).unwrap();
        assert_eq!(fit.rank, 0);
        assert_eq!(fit.solution, DMatrix::zeros(2, 1));
    }

    #[test]
    fn lstsq_empty_design_is_fit_error() {
        let err = lstsq(&DMatrix::zeros(0, 8), &DMatrix::zeros(0, 1)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ForceError>(),
            Some(ForceError::Fit(_))
        ));
    }

    fn sample(el: f64, el_v: f64, az_v: f64, acc: [f64; 3]) -> KinematicsSample {
        let tma = TmaKinematics {
            elevation: AxisKinematics {
                position: el,
                velocity: el_v,
                acceleration: 0.5,
            },
            azimuth: AxisKinematics {
                position: 0.0,
                velocity: az_v,
                acceleration: 0.25,
            },
        };
        KinematicsSample {
            timestamp: 0.0,
            actual: tma,
            demand: TmaKinematics::default(),
            accelerometers_angular_acceleration: acc,
        }
    }

    #[test]
    fn design_rows_follow_feature_order() {
        let s = sample(0.0, 2.0, 3.0, [1.0, 2.0, 3.0]);
        let fitter = AccelerationAndVelocityFitter::new(
            &[s],
            VelocityKind::Actual,
            AccelerationSource::Accelerometers,
        );
        let d = fitter.design();
        let vx = 2f64.to_radians();
        let vy = 3f64.to_radians();
        assert!((d[(0, 0)] - vx * vx).abs() < 1e-15);
        assert!((d[(0, 1)] - vy * vy).abs() < 1e-15);
        assert!(d[(0, 2)].abs() < 1e-15);
        assert!(d[(0, 3)].abs() < 1e-15);
        assert!((d[(0, 5)] - 1f64.to_radians()).abs() < 1e-15);
        assert!((d[(0, 7)] - 3f64.to_radians()).abs() < 1e-15);

        let tma = AccelerationAndVelocityFitter::new(
            &[s],
            VelocityKind::Actual,
            AccelerationSource::Tma,
        );
        assert!((tma.design()[(0, 5)] - 0.5f64.to_radians()).abs() < 1e-15);
        assert!((tma.design()[(0, 6)] - 0.25f64.to_radians()).abs() < 1e-15);

        // demand kinematics are all zero
        let demand = AccelerationAndVelocityFitter::new(
            &[s],
            VelocityKind::Demand,
            AccelerationSource::Tma,
        );
        assert!(demand.design().iter().all(|v| *v == 0.0));
    }

    #[test]
    fn nan_features_become_zero() {
        let s = sample(f64::NAN, 1.0, 1.0, [f64::NAN, 1.0, 1.0]);
        let fitter = AccelerationAndVelocityFitter::new(
            &[s],
            VelocityKind::Actual,
            AccelerationSource::Accelerometers,
        );
        let d = fitter.design();
        assert!(d.iter().all(|v| !v.is_nan()));
        // elevation rate does not depend on elevation angle
        assert!(d[(0, 0)] > 0.0);
        assert_eq!(d[(0, 1)], 0.0);
        assert_eq!(d[(0, 5)], 0.0);
    }

    #[test]
    fn from_design_checks_columns() {
        assert!(AccelerationAndVelocityFitter::from_design(DMatrix::zeros(10, 7)).is_err());
        let f = AccelerationAndVelocityFitter::from_design(DMatrix::zeros(10, 8)).unwrap();
        assert_eq!(f.n_samples(), 10);
    }
}
