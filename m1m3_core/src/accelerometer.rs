//! DC accelerometer calibration.
//!
//! Four two-axis accelerometers (eight channels) are mounted on the mirror.
//! Angular accelerations are derived from differences of linear
//! accelerations measured at two radial distances from the rotation center.

use std::path::Path;

use m1m3_config::{AccelerometerCfg, AccelerometerSettings, load_init};

use crate::error::{ForceError, Result, config_error};

/// Number of raw accelerometer channels.
pub const N_ACCELEROMETERS: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct AccelerationTransformer {
    accelerometers: [AccelerometerCfg; N_ACCELEROMETERS],
    distances: [f64; 3],
}

#[inline]
fn calibrate(cfg: &AccelerometerCfg, raw: f64) -> f64 {
    (raw - cfg.bias) * cfg.sensitivity * cfg.scalar - cfg.offset
}

impl AccelerationTransformer {
    pub fn from_settings(settings: &AccelerometerSettings) -> Self {
        Self {
            accelerometers: settings.accelerometers(),
            distances: settings.distances(),
        }
    }

    /// Read `AccelerometerSettings` from `<config_dir>/_init.yaml`.
    pub fn load_config(config_dir: &Path) -> Result<Self> {
        let init = load_init(config_dir).map_err(|e| config_error(&e))?;
        let settings = init.accelerometer_settings.ok_or_else(|| {
            eyre::Report::new(ForceError::Config(format!(
                "no AccelerometerSettings in {}",
                config_dir.display()
            )))
        })?;
        Ok(Self::from_settings(&settings))
    }

    /// Calibrated values of the raw channels (rawAccelerometer0..7).
    pub fn calibrated(&self, raw: &[f64; N_ACCELEROMETERS]) -> [f64; N_ACCELEROMETERS] {
        std::array::from_fn(|i| calibrate(&self.accelerometers[i], raw[i]))
    }

    /// Angular acceleration (XYZ) from calibrated channels.
    pub fn angular_acceleration(&self, calibrated: &[f64; N_ACCELEROMETERS]) -> [f64; 3] {
        let a = calibrated;
        [
            (a[5] - a[7]) / self.distances[0],
            (a[2] - a[0]) / self.distances[1],
            (a[4] - a[0]) / self.distances[2],
        ]
    }

    /// Angular acceleration straight from raw channels.
    pub fn transform(&self, raw: &[f64; N_ACCELEROMETERS]) -> [f64; 3] {
        self.angular_acceleration(&self.calibrated(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> AccelerometerSettings {
        let ch = |bias: f64| AccelerometerCfg {
            bias,
            sensitivity: 2.0,
            offset: 0.5,
            scalar: 1.5,
        };
        AccelerometerSettings {
            accelerometer1: ch(0.0),
            accelerometer2: ch(0.1),
            accelerometer3: ch(0.2),
            accelerometer4: ch(0.3),
            accelerometer5: ch(0.4),
            accelerometer6: ch(0.5),
            accelerometer7: ch(0.6),
            accelerometer8: ch(0.7),
            angular_acceleration_x_distance: 2.0,
            angular_acceleration_y_distance: 4.0,
            angular_acceleration_z_distance: 8.0,
        }
    }

    #[test]
    fn calibration_formula() {
        let t = AccelerationTransformer::from_settings(&settings());
        let c = t.calibrated(&[1.0; 8]);
        // (1 - 0.1) * 2 * 1.5 - 0.5
        assert!((c[1] - 2.2).abs() < 1e-12);
        assert!((c[0] - 2.5).abs() < 1e-12);
    }

    #[test]
    fn angular_acceleration_uses_channel_differences() {
        let t = AccelerationTransformer::from_settings(&settings());
        let a = t.angular_acceleration(&[1.0, 0.0, 3.0, 0.0, 9.0, 5.0, 0.0, 1.0]);
        assert_eq!(a, [(5.0 - 1.0) / 2.0, (3.0 - 1.0) / 4.0, (9.0 - 1.0) / 8.0]);
    }

    #[test]
    fn equal_channels_mean_no_rotation() {
        let mut s = settings();
        for cfg in [
            &mut s.accelerometer1,
            &mut s.accelerometer3,
            &mut s.accelerometer5,
            &mut s.accelerometer6,
            &mut s.accelerometer8,
        ] {
            cfg.bias = 0.0;
        }
        let t = AccelerationTransformer::from_settings(&s);
        assert_eq!(t.transform(&[0.3; 8]), [0.0; 3]);
    }
}
