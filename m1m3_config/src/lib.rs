#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Configuration schemas and table loading for the M1M3 force calculator.
//!
//! - `InitConfig` and its settings blocks are deserialized from the CSC
//!   `_init.yaml` and validated.
//! - `ForceTable` loads and saves the CSV distribution tables, keeping
//!   their comment lines.
//! - `ForceTables` loads the full set of tables referenced by
//!   `ForceActuatorSettings` and checks their shapes.
use std::path::{Path, PathBuf};

use eyre::WrapErr;
use serde::Deserialize;

pub mod fixtures;
pub mod table;
pub mod tables;

pub use table::ForceTable;
pub use tables::{Axis, ForceTables, ID_COLUMN, zero_actuator_table};

/// Name of the configuration file inside a configuration directory.
pub const INIT_FILE: &str = "_init.yaml";
/// Subdirectory holding the CSV tables.
pub const TABLES_DIR: &str = "tables";

/// Force actuator settings. Only the keys used by the force calculator are
/// parsed; the CSC file carries many more, which are ignored.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ForceActuatorSettings {
    pub hardpoint_force_moment_table_path: String,
    pub force_distribution_x_table_path: String,
    pub force_distribution_y_table_path: String,
    pub force_distribution_z_table_path: String,
    pub moment_distribution_x_table_path: String,
    pub moment_distribution_y_table_path: String,
    pub moment_distribution_z_table_path: String,
    pub acceleration_x_table_path: String,
    pub acceleration_y_table_path: String,
    pub acceleration_z_table_path: String,
    pub velocity_x_table_path: String,
    pub velocity_y_table_path: String,
    pub velocity_z_table_path: String,
    #[serde(rename = "VelocityXZTablePath")]
    pub velocity_xz_table_path: String,
    #[serde(rename = "VelocityYZTablePath")]
    pub velocity_yz_table_path: String,
    #[serde(default)]
    pub mirror_center_of_gravity_x: f64,
    #[serde(default)]
    pub mirror_center_of_gravity_y: f64,
    #[serde(default)]
    pub mirror_center_of_gravity_z: f64,
}

impl ForceActuatorSettings {
    /// Mirror center of gravity (X, Y, Z), in meters.
    pub fn center_of_gravity(&self) -> [f64; 3] {
        [
            self.mirror_center_of_gravity_x,
            self.mirror_center_of_gravity_y,
            self.mirror_center_of_gravity_z,
        ]
    }

    /// Every table path, keyed by its settings name.
    pub fn table_paths(&self) -> [(&'static str, &str); 15] {
        [
            (
                "HardpointForceMomentTablePath",
                &self.hardpoint_force_moment_table_path,
            ),
            (
                "ForceDistributionXTablePath",
                &self.force_distribution_x_table_path,
            ),
            (
                "ForceDistributionYTablePath",
                &self.force_distribution_y_table_path,
            ),
            (
                "ForceDistributionZTablePath",
                &self.force_distribution_z_table_path,
            ),
            (
                "MomentDistributionXTablePath",
                &self.moment_distribution_x_table_path,
            ),
            (
                "MomentDistributionYTablePath",
                &self.moment_distribution_y_table_path,
            ),
            (
                "MomentDistributionZTablePath",
                &self.moment_distribution_z_table_path,
            ),
            ("AccelerationXTablePath", &self.acceleration_x_table_path),
            ("AccelerationYTablePath", &self.acceleration_y_table_path),
            ("AccelerationZTablePath", &self.acceleration_z_table_path),
            ("VelocityXTablePath", &self.velocity_x_table_path),
            ("VelocityYTablePath", &self.velocity_y_table_path),
            ("VelocityZTablePath", &self.velocity_z_table_path),
            ("VelocityXZTablePath", &self.velocity_xz_table_path),
            ("VelocityYZTablePath", &self.velocity_yz_table_path),
        ]
    }

    pub fn validate(&self) -> eyre::Result<()> {
        for (key, path) in self.table_paths() {
            if path.trim().is_empty() {
                eyre::bail!("ForceActuatorSettings.{key} must not be empty");
            }
        }
        for (axis, v) in ["X", "Y", "Z"].iter().zip(self.center_of_gravity()) {
            if !v.is_finite() {
                eyre::bail!("ForceActuatorSettings.MirrorCenterOfGravity{axis} must be finite");
            }
        }
        Ok(())
    }
}

/// Calibration of a single DC accelerometer channel.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct AccelerometerCfg {
    pub bias: f64,
    pub sensitivity: f64,
    pub offset: f64,
    pub scalar: f64,
}

/// DC accelerometer settings used to derive mirror angular accelerations.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct AccelerometerSettings {
    pub accelerometer1: AccelerometerCfg,
    pub accelerometer2: AccelerometerCfg,
    pub accelerometer3: AccelerometerCfg,
    pub accelerometer4: AccelerometerCfg,
    pub accelerometer5: AccelerometerCfg,
    pub accelerometer6: AccelerometerCfg,
    pub accelerometer7: AccelerometerCfg,
    pub accelerometer8: AccelerometerCfg,
    pub angular_acceleration_x_distance: f64,
    pub angular_acceleration_y_distance: f64,
    pub angular_acceleration_z_distance: f64,
}

impl AccelerometerSettings {
    /// Channels in raw telemetry order (rawAccelerometer0..7).
    pub fn accelerometers(&self) -> [AccelerometerCfg; 8] {
        [
            self.accelerometer1,
            self.accelerometer2,
            self.accelerometer3,
            self.accelerometer4,
            self.accelerometer5,
            self.accelerometer6,
            self.accelerometer7,
            self.accelerometer8,
        ]
    }

    pub fn distances(&self) -> [f64; 3] {
        [
            self.angular_acceleration_x_distance,
            self.angular_acceleration_y_distance,
            self.angular_acceleration_z_distance,
        ]
    }

    pub fn validate(&self) -> eyre::Result<()> {
        for (axis, d) in ["X", "Y", "Z"].iter().zip(self.distances()) {
            if !d.is_finite() || d == 0.0 {
                eyre::bail!(
                    "AccelerometerSettings.AngularAcceleration{axis}Distance must be finite and non-zero"
                );
            }
        }
        Ok(())
    }
}

/// Parsed `_init.yaml`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct InitConfig {
    pub force_actuator_settings: ForceActuatorSettings,
    /// Only needed for accelerometer derived angular accelerations.
    #[serde(default)]
    pub accelerometer_settings: Option<AccelerometerSettings>,
}

impl InitConfig {
    pub fn validate(&self) -> eyre::Result<()> {
        self.force_actuator_settings.validate()?;
        if let Some(acc) = &self.accelerometer_settings {
            acc.validate()?;
        }
        Ok(())
    }
}

pub fn load_yaml(s: &str) -> Result<InitConfig, serde_yaml::Error> {
    serde_yaml::from_str::<InitConfig>(s)
}

/// Read and validate `<config_dir>/_init.yaml`.
pub fn load_init(config_dir: &Path) -> eyre::Result<InitConfig> {
    let path = config_dir.join(INIT_FILE);
    let content = std::fs::read_to_string(&path)
        .wrap_err_with(|| format!("read configuration {}", path.display()))?;
    let config =
        load_yaml(&content).wrap_err_with(|| format!("parse configuration {}", path.display()))?;
    config
        .validate()
        .wrap_err_with(|| format!("invalid configuration {}", path.display()))?;
    Ok(config)
}

/// Directory holding the CSV tables of a configuration directory.
pub fn tables_dir(config_dir: &Path) -> PathBuf {
    config_dir.join(TABLES_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SETTINGS: &str = r"
ForceActuatorSettings:
  HardpointForceMomentTablePath: HardpointForceMomentTable.csv
  ForceDistributionXTablePath: ForceDistributionXTable.csv
  ForceDistributionYTablePath: ForceDistributionYTable.csv
  ForceDistributionZTablePath: ForceDistributionZTable.csv
  MomentDistributionXTablePath: MomentDistributionXTable.csv
  MomentDistributionYTablePath: MomentDistributionYTable.csv
  MomentDistributionZTablePath: MomentDistributionZTable.csv
  AccelerationXTablePath: AccelerationXTable.csv
  AccelerationYTablePath: AccelerationYTable.csv
  AccelerationZTablePath: AccelerationZTable.csv
  VelocityXTablePath: VelocityXTable.csv
  VelocityYTablePath: VelocityYTable.csv
  VelocityZTablePath: VelocityZTable.csv
  VelocityXZTablePath: VelocityXZTable.csv
  VelocityYZTablePath: VelocityYZTable.csv
  MirrorCenterOfGravityX: 0.1
  MirrorCenterOfGravityY: -0.2
  MirrorCenterOfGravityZ: 0.3
  UseInclinometer: true
";

    #[test]
    fn parses_settings_and_ignores_unknown_keys() {
        let cfg = load_yaml(SETTINGS).unwrap();
        let fas = &cfg.force_actuator_settings;
        assert_eq!(fas.velocity_xz_table_path, "VelocityXZTable.csv");
        assert_eq!(fas.center_of_gravity(), [0.1, -0.2, 0.3]);
        assert!(cfg.accelerometer_settings.is_none());
        cfg.validate().unwrap();
    }

    #[test]
    fn missing_table_key_is_an_error() {
        let yaml = SETTINGS.replace("  VelocityYZTablePath: VelocityYZTable.csv\n", "");
        let err = load_yaml(&yaml).unwrap_err();
        assert!(err.to_string().contains("VelocityYZTablePath"));
    }

    #[test]
    fn empty_path_fails_validation() {
        let yaml = SETTINGS.replace("AccelerationYTable.csv", "\"\"");
        let cfg = load_yaml(&yaml).unwrap();
        let err = cfg.validate().unwrap_err();
        assert!(format!("{err}").contains("AccelerationYTablePath"));
    }
}
