//! Conversions between mirror level inputs and per-actuator forces.
//!
//! `ForceCalculator` owns the tables loaded from a configuration directory
//! together with the dense matrices derived from them:
//!
//! - hardpoint table: 6×6, hardpoint forces to mirror forces and moments;
//! - per axis force/moment distribution: 156×6, one column per fx..mz;
//! - per axis acceleration: 156×3, scaled from mN to N;
//! - per axis velocity: 156×5, scaled from mN to N, columns in
//!   `velocity_terms` order.
//!
//! Tables and matrices live in one immutable snapshot behind an `Arc`. Table
//! updates build a new snapshot and swap it in, so clones of the calculator
//! handed to other threads keep computing against the tables they started
//! with.

use std::path::Path;
use std::sync::Arc;

use m1m3_config::{Axis, ForceActuatorSettings, ForceTable, ForceTables, zero_actuator_table};
use m1m3_fatable::{
    FATABLE, FATABLE_SFA, FATABLE_XFA, FATABLE_YFA, FATABLE_ZFA, HP_COUNT, Orientation,
    reduce_to_x, reduce_to_y,
};
use nalgebra::{DMatrix, DVector};

use crate::applied_forces::AppliedForces;
use crate::error::{ForceError, Result, check_len, config_error};
use crate::fitter::{Coefficients, FitCoefficients, VELOCITY_TERMS};

fn full_length<'a>(what: &'static str, v: &'a [f64]) -> Result<&'a [f64; FATABLE_ZFA]> {
    v.try_into().map_err(|_| {
        eyre::Report::new(ForceError::Shape {
            what,
            expected: FATABLE_ZFA,
            actual: v.len(),
        })
    })
}

/// Acceleration and velocity tables are stored in mN.
const KINEMATIC_TABLE_SCALE: f64 = 1.0 / 1000.0;

/// Quadratic velocity model inputs: `[vx², vy², vz², vx·vz, vy·vz]`.
#[inline]
pub fn velocity_terms(v: [f64; 3]) -> [f64; VELOCITY_TERMS] {
    [v[0] * v[0], v[1] * v[1], v[2] * v[2], v[0] * v[2], v[1] * v[2]]
}

#[derive(Debug, Clone)]
struct Matrices {
    hardpoint: DMatrix<f64>,
    fam: [DMatrix<f64>; 3],
    acceleration: [DMatrix<f64>; 3],
    velocity: [DMatrix<f64>; 3],
}

impl Matrices {
    fn build(tables: &ForceTables) -> Result<Self> {
        let hp = &tables.hardpoint_to_forces_moments;
        check_len("hardpoint table rows", 6, hp.n_rows())?;
        check_len("hardpoint table columns", HP_COUNT, hp.headers().len())?;
        let rows = hp.rows();
        let hardpoint = DMatrix::from_fn(6, HP_COUNT, |r, c| rows[r][c]);

        let fam_tables: Vec<&ForceTable> = tables
            .forces_to_mirror
            .iter()
            .chain(&tables.moments_to_mirror)
            .collect();
        let acc_tables: Vec<&ForceTable> = tables.acceleration.iter().collect();
        let vel_tables: Vec<&ForceTable> = tables.velocity.iter().collect();

        let per_axis = |tables: &[&ForceTable], scale: f64| -> Result<[DMatrix<f64>; 3]> {
            Ok([
                axis_matrix(tables, Axis::X, scale)?,
                axis_matrix(tables, Axis::Y, scale)?,
                axis_matrix(tables, Axis::Z, scale)?,
            ])
        };

        let fam = per_axis(&fam_tables, 1.0)?;
        let acceleration = per_axis(&acc_tables, KINEMATIC_TABLE_SCALE)?;
        let velocity = per_axis(&vel_tables, KINEMATIC_TABLE_SCALE)?;
        Ok(Self {
            hardpoint,
            fam,
            acceleration,
            velocity,
        })
    }
}

/// 156×N matrix, column `i` being `axis` of `tables[i]` times `scale`.
fn axis_matrix(tables: &[&ForceTable], axis: Axis, scale: f64) -> Result<DMatrix<f64>> {
    let mut m = DMatrix::zeros(FATABLE_ZFA, tables.len());
    for (c, table) in tables.iter().enumerate() {
        let column = table
            .column(axis.column())
            .ok_or_else(|| eyre::Report::new(ForceError::MissingColumn(axis.column().into())))?;
        check_len("table rows", FATABLE_ZFA, column.len())?;
        for (r, v) in column.into_iter().enumerate() {
            m[(r, c)] = v * scale;
        }
    }
    Ok(m)
}

#[derive(Debug, Clone)]
struct Snapshot {
    tables: ForceTables,
    matrices: Matrices,
}

/// Converts hardpoint loads, mirror forces and moments, and angular
/// kinematics into per-actuator applied forces.
#[derive(Debug, Clone)]
pub struct ForceCalculator {
    state: Arc<Snapshot>,
}

impl ForceCalculator {
    /// Load `_init.yaml` and all tables from a configuration directory.
    ///
    /// Any failure (missing or malformed file, wrong row count) is reported
    /// as `ForceError::Config`.
    pub fn load_config(config_dir: &Path) -> Result<Self> {
        let (_, tables) = ForceTables::load(config_dir).map_err(|e| config_error(&e))?;
        Self::from_tables(tables)
    }

    /// Build from already loaded tables.
    pub fn from_tables(tables: ForceTables) -> Result<Self> {
        let matrices = Matrices::build(&tables)?;
        Ok(Self {
            state: Arc::new(Snapshot { tables, matrices }),
        })
    }

    /// Replace all tables with the content of `config_dir`. On failure the
    /// current tables stay in use.
    pub fn reload_config(&mut self, config_dir: &Path) -> Result<()> {
        *self = Self::load_config(config_dir)?;
        Ok(())
    }

    pub fn tables(&self) -> &ForceTables {
        &self.state.tables
    }

    pub fn settings(&self) -> &ForceActuatorSettings {
        &self.state.tables.settings
    }

    /// Mirror center of gravity used for moment arms.
    pub fn center_of_gravity(&self) -> [f64; 3] {
        self.settings().center_of_gravity()
    }

    /// Zero forces carrying this calculator's center of gravity.
    pub fn zero_forces(&self) -> AppliedForces {
        AppliedForces::zero(Some(self.center_of_gravity()))
    }

    /// Wrap X (12), Y (100) and Z (156) force vectors.
    pub fn get_applied_forces(
        &self,
        x_forces: &[f64],
        y_forces: &[f64],
        z_forces: &[f64],
    ) -> Result<AppliedForces> {
        AppliedForces::new(
            x_forces.to_vec(),
            y_forces.to_vec(),
            z_forces.to_vec(),
            Some(self.center_of_gravity()),
        )
    }

    /// Forces from three full length (156) mirror vectors; X and Y are reduced
    /// to the actuators having those axes.
    pub fn get_applied_forces_from_mirror(
        &self,
        x: &[f64],
        y: &[f64],
        z: &[f64],
    ) -> Result<AppliedForces> {
        let x = full_length("mirror x forces", x)?;
        let y = full_length("mirror y forces", y)?;
        check_len("mirror z forces", FATABLE_ZFA, z.len())?;
        AppliedForces::new(
            reduce_to_x(x),
            reduce_to_y(y),
            z.to_vec(),
            Some(self.center_of_gravity()),
        )
    }

    /// Forces from a single `X | Y | Z` concatenated vector (268 values).
    pub fn get_applied_forces_from_concatenated(&self, forces: &[f64]) -> Result<AppliedForces> {
        check_len(
            "concatenated forces",
            FATABLE_XFA + FATABLE_YFA + FATABLE_ZFA,
            forces.len(),
        )?;
        let (x, rest) = forces.split_at(FATABLE_XFA);
        let (y, z) = rest.split_at(FATABLE_YFA);
        self.get_applied_forces(x, y, z)
    }

    /// Forces from primary (156) and secondary (112) cylinder forces.
    ///
    /// Secondary cylinders push at 45°: `s/√2` adds to Z and `±s/√2` goes to
    /// X or Y, signed by the cylinder orientation.
    pub fn get_applied_forces_from_cylinder_forces(
        &self,
        primary: &[f64],
        secondary: &[f64],
    ) -> Result<AppliedForces> {
        check_len("primary cylinder forces", FATABLE_ZFA, primary.len())?;
        check_len("secondary cylinder forces", FATABLE_SFA, secondary.len())?;

        let mut x = vec![0.0; FATABLE_XFA];
        let mut y = vec![0.0; FATABLE_YFA];
        let mut z = primary.to_vec();
        for fa in &FATABLE {
            let Some(s) = fa.s_index else { continue };
            let force = secondary[s] * std::f64::consts::FRAC_1_SQRT_2;
            z[fa.index] += force;
            match (fa.orientation, fa.x_index, fa.y_index) {
                (Orientation::XPlus, Some(i), _) => x[i] = force,
                (Orientation::XMinus, Some(i), _) => x[i] = -force,
                (Orientation::YPlus, _, Some(i)) => y[i] = force,
                (Orientation::YMinus, _, Some(i)) => y[i] = -force,
                _ => {}
            }
        }
        AppliedForces::new(x, y, z, Some(self.center_of_gravity()))
    }

    /// Mirror forces and moments `[fx, fy, fz, mx, my, mz]` from the six
    /// hardpoint forces.
    pub fn hardpoint_forces_and_moments(&self, hardpoints: &[f64]) -> Result<[f64; 6]> {
        check_len("hardpoint forces", HP_COUNT, hardpoints.len())?;
        let fam = &self.state.matrices.hardpoint * DVector::from_column_slice(hardpoints);
        Ok(std::array::from_fn(|i| fam[i]))
    }

    /// Distribute mirror forces and moments `[fx, fy, fz, mx, my, mz]` to
    /// the actuators.
    pub fn forces_and_moments_forces(&self, fam: &[f64]) -> Result<AppliedForces> {
        check_len("forces and moments", 6, fam.len())?;
        self.mirror_product(&self.state.matrices.fam, fam)
    }

    /// Balance forces from hardpoint forces.
    pub fn hardpoint_forces(&self, hardpoints: &[f64]) -> Result<AppliedForces> {
        let fam = self.hardpoint_forces_and_moments(hardpoints)?;
        self.forces_and_moments_forces(&fam)
    }

    /// Acceleration forces for an XYZ angular acceleration in rad/s².
    pub fn acceleration(&self, accelerations: &[f64]) -> Result<AppliedForces> {
        check_len("angular accelerations", 3, accelerations.len())?;
        self.mirror_product(&self.state.matrices.acceleration, accelerations)
    }

    /// Velocity forces for an XYZ angular velocity in rad/s.
    pub fn velocity(&self, velocities: &[f64]) -> Result<AppliedForces> {
        check_len("angular velocities", 3, velocities.len())?;
        let terms = velocity_terms([velocities[0], velocities[1], velocities[2]]);
        self.mirror_product(&self.state.matrices.velocity, &terms)
    }

    fn mirror_product(&self, matrices: &[DMatrix<f64>; 3], input: &[f64]) -> Result<AppliedForces> {
        let v = DVector::from_column_slice(input);
        let [x, y, z] = matrices.each_ref().map(|m| (m * &v).as_slice().to_vec());
        self.get_applied_forces_from_mirror(&x, &y, &z)
    }

    /// Add fitted coefficients to the current acceleration and velocity
    /// tables. Calling it twice with the same coefficients adds them twice.
    pub fn update_acceleration_and_velocity(&mut self, updates: &FitCoefficients) -> Result<()> {
        let mut tables = self.state.tables.clone();
        apply_coefficients(&mut tables, updates)?;
        self.replace(tables)?;
        tracing::info!("acceleration and velocity tables updated");
        Ok(())
    }

    /// Replace the acceleration and velocity tables with fitted coefficients.
    pub fn set_acceleration_and_velocity(&mut self, sets: &FitCoefficients) -> Result<()> {
        let mut tables = self.state.tables.clone();
        let zero = zero_actuator_table()?;
        tables.acceleration = std::array::from_fn(|_| zero.clone());
        tables.velocity = std::array::from_fn(|_| zero.clone());
        apply_coefficients(&mut tables, sets)?;
        self.replace(tables)?;
        tracing::info!("acceleration and velocity tables set");
        Ok(())
    }

    fn replace(&mut self, tables: ForceTables) -> Result<()> {
        let matrices = Matrices::build(&tables)?;
        self.state = Arc::new(Snapshot { tables, matrices });
        Ok(())
    }

    /// Write the acceleration and velocity tables into `out_dir`, using the
    /// configured file names. `comments` are appended to the tables' comments
    /// (replacing them when `reset_comments` is set) and written first.
    pub fn save<S: AsRef<str>>(
        &mut self,
        out_dir: &Path,
        comments: &[S],
        reset_comments: bool,
    ) -> Result<()> {
        Arc::make_mut(&mut self.state)
            .tables
            .save_kinematic(out_dir, comments, reset_comments)
    }
}

fn apply_coefficients(tables: &mut ForceTables, coefficients: &FitCoefficients) -> Result<()> {
    for fa in &FATABLE {
        if let Some(i) = fa.x_index {
            add_row(tables, fa.index, Axis::X, &coefficients.x()[i])?;
        }
        if let Some(i) = fa.y_index {
            add_row(tables, fa.index, Axis::Y, &coefficients.y()[i])?;
        }
        add_row(tables, fa.index, Axis::Z, &coefficients.z()[fa.z_index])?;
    }
    Ok(())
}

fn add_row(tables: &mut ForceTables, row: usize, axis: Axis, c: &Coefficients) -> Result<()> {
    let (velocity, acceleration) = c.split_at(VELOCITY_TERMS);
    for (table, delta) in tables.velocity.iter_mut().zip(velocity) {
        table.add(row, axis.column(), *delta)?;
    }
    for (table, delta) in tables.acceleration.iter_mut().zip(acceleration) {
        table.add(row, axis.column(), *delta)?;
    }
    Ok(())
}
