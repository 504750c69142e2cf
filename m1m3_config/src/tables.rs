//! The set of tables referenced by `ForceActuatorSettings`.

use std::path::Path;

use eyre::WrapErr;
use m1m3_fatable::{FATABLE, FATABLE_ZFA, HP_COUNT};

use crate::{ForceActuatorSettings, ForceTable, InitConfig, load_init, tables_dir};

/// Mirror axis; also names the X/Y/Z columns of distribution tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn column(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

/// Column holding the actuator ID in per-actuator tables.
pub const ID_COLUMN: &str = "ID";

/// All force calculator tables, as loaded from a configuration directory.
///
/// Distribution, acceleration and velocity tables have one row per force
/// actuator (Z order). The hardpoint table has one row per force/moment
/// component (fx, fy, fz, mx, my, mz) and one column per hardpoint.
#[derive(Debug, Clone)]
pub struct ForceTables {
    pub settings: ForceActuatorSettings,
    pub hardpoint_to_forces_moments: ForceTable,
    /// Indexed by force axis.
    pub forces_to_mirror: [ForceTable; 3],
    /// Indexed by moment axis.
    pub moments_to_mirror: [ForceTable; 3],
    /// Indexed by angular acceleration axis.
    pub acceleration: [ForceTable; 3],
    /// One table per velocity model term `[vx², vy², vz², vx·vz, vy·vz]`, in
    /// that order.
    pub velocity: [ForceTable; 5],
}

impl ForceTables {
    /// Load `_init.yaml` and all tables from `config_dir`.
    pub fn load(config_dir: &Path) -> eyre::Result<(InitConfig, Self)> {
        let init = load_init(config_dir)?;
        let tables = Self::load_with(&init.force_actuator_settings, config_dir)?;
        tracing::info!(
            config_dir = %config_dir.display(),
            "loaded force actuator tables"
        );
        Ok((init, tables))
    }

    /// Load tables referenced by `settings` from `<config_dir>/tables`.
    pub fn load_with(settings: &ForceActuatorSettings, config_dir: &Path) -> eyre::Result<Self> {
        let dir = tables_dir(config_dir);
        let load = |name: &str| ForceTable::load(&dir.join(name), FATABLE_ZFA);
        let load_xyz = |name: &str| -> eyre::Result<ForceTable> {
            let t = load(name)?;
            check_axis_columns(&t, name)?;
            Ok(t)
        };

        let hp_name = &settings.hardpoint_force_moment_table_path;
        let hardpoint = ForceTable::load(&dir.join(hp_name), HP_COUNT)?.without_column(ID_COLUMN);
        if hardpoint.headers().len() != HP_COUNT {
            eyre::bail!(
                "expected {HP_COUNT} hardpoint columns in {hp_name}, found {}",
                hardpoint.headers().len()
            );
        }

        let s = settings;
        Ok(Self {
            settings: settings.clone(),
            hardpoint_to_forces_moments: hardpoint,
            forces_to_mirror: [
                load_xyz(&s.force_distribution_x_table_path)?,
                load_xyz(&s.force_distribution_y_table_path)?,
                load_xyz(&s.force_distribution_z_table_path)?,
            ],
            moments_to_mirror: [
                load_xyz(&s.moment_distribution_x_table_path)?,
                load_xyz(&s.moment_distribution_y_table_path)?,
                load_xyz(&s.moment_distribution_z_table_path)?,
            ],
            acceleration: [
                load_xyz(&s.acceleration_x_table_path)?,
                load_xyz(&s.acceleration_y_table_path)?,
                load_xyz(&s.acceleration_z_table_path)?,
            ],
            velocity: [
                load_xyz(&s.velocity_x_table_path)?,
                load_xyz(&s.velocity_y_table_path)?,
                load_xyz(&s.velocity_z_table_path)?,
                load_xyz(&s.velocity_xz_table_path)?,
                load_xyz(&s.velocity_yz_table_path)?,
            ],
        })
    }

    /// Relative file names of the acceleration tables, in axis order.
    pub fn acceleration_paths(&self) -> [&str; 3] {
        let s = &self.settings;
        [
            &s.acceleration_x_table_path,
            &s.acceleration_y_table_path,
            &s.acceleration_z_table_path,
        ]
    }

    /// Relative file names of the velocity tables, in velocity model order.
    pub fn velocity_paths(&self) -> [&str; 5] {
        let s = &self.settings;
        [
            &s.velocity_x_table_path,
            &s.velocity_y_table_path,
            &s.velocity_z_table_path,
            &s.velocity_xz_table_path,
            &s.velocity_yz_table_path,
        ]
    }

    /// Write acceleration and velocity tables into `out_dir`, under the same
    /// file names as configured. Other tables are never modified and are not
    /// written.
    pub fn save_kinematic<S: AsRef<str>>(
        &mut self,
        out_dir: &Path,
        comments: &[S],
        reset_comments: bool,
    ) -> eyre::Result<()> {
        let acc_paths = self.acceleration_paths().map(str::to_string);
        let vel_paths = self.velocity_paths().map(str::to_string);
        for (table, name) in self.acceleration.iter_mut().zip(&acc_paths) {
            table.save(&out_dir.join(name), comments, reset_comments)?;
        }
        for (table, name) in self.velocity.iter_mut().zip(&vel_paths) {
            table.save(&out_dir.join(name), comments, reset_comments)?;
        }
        tracing::info!(out_dir = %out_dir.display(), "saved acceleration and velocity tables");
        Ok(())
    }
}

/// A zeroed per-actuator table with `ID,X,Y,Z` columns.
pub fn zero_actuator_table() -> eyre::Result<ForceTable> {
    let ids: Vec<f64> = FATABLE.iter().map(|fa| f64::from(fa.actuator_id)).collect();
    let zeros = vec![0.0; FATABLE_ZFA];
    ForceTable::from_columns(&[
        (ID_COLUMN, &ids),
        ("X", &zeros),
        ("Y", &zeros),
        ("Z", &zeros),
    ])
}

fn check_axis_columns(table: &ForceTable, name: &str) -> eyre::Result<()> {
    for axis in Axis::ALL {
        if table.column_index(axis.column()).is_none() {
            return Err(eyre::eyre!("missing column {}", axis.column()))
                .wrap_err_with(|| format!("table {name}"));
        }
    }
    Ok(())
}
