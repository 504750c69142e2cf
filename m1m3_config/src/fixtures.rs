//! Synthetic configuration directories for tests and benchmarks.
//!
//! Writes an `_init.yaml` plus a full `tables/` directory using the standard
//! CSC file names, with table values supplied by the caller.

use std::path::Path;

use eyre::WrapErr;
use m1m3_fatable::{FATABLE, FATABLE_ZFA, HP_COUNT};

use crate::{ForceTable, ID_COLUMN, INIT_FILE, TABLES_DIR};

/// X, Y and Z columns of a per-actuator table.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisColumns {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl AxisColumns {
    pub fn zeros() -> Self {
        Self {
            x: vec![0.0; FATABLE_ZFA],
            y: vec![0.0; FATABLE_ZFA],
            z: vec![0.0; FATABLE_ZFA],
        }
    }

    /// Columns filled from `f(row, column)`, column being 0 (X), 1 (Y) or 2 (Z).
    pub fn from_fn(f: impl Fn(usize, usize) -> f64) -> Self {
        Self {
            x: (0..FATABLE_ZFA).map(|r| f(r, 0)).collect(),
            y: (0..FATABLE_ZFA).map(|r| f(r, 1)).collect(),
            z: (0..FATABLE_ZFA).map(|r| f(r, 2)).collect(),
        }
    }

    pub fn to_table(&self) -> eyre::Result<ForceTable> {
        let ids: Vec<f64> = FATABLE.iter().map(|fa| f64::from(fa.actuator_id)).collect();
        ForceTable::from_columns(&[
            (ID_COLUMN, &ids),
            ("X", &self.x),
            ("Y", &self.y),
            ("Z", &self.z),
        ])
    }
}

/// Content of a synthetic configuration directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixture {
    /// Rows fx, fy, fz, mx, my, mz; one column per hardpoint.
    pub hardpoint: [[f64; HP_COUNT]; 6],
    pub forces_to_mirror: [AxisColumns; 3],
    pub moments_to_mirror: [AxisColumns; 3],
    pub acceleration: [AxisColumns; 3],
    pub velocity: [AxisColumns; 5],
    pub center_of_gravity: [f64; 3],
}

/// File names written by `Fixture::write`, in `ForceActuatorSettings` order.
pub const TABLE_FILES: [(&str, &str); 15] = [
    ("HardpointForceMomentTablePath", "HardpointForceMomentTable.csv"),
    ("ForceDistributionXTablePath", "ForceDistributionXTable.csv"),
    ("ForceDistributionYTablePath", "ForceDistributionYTable.csv"),
    ("ForceDistributionZTablePath", "ForceDistributionZTable.csv"),
    ("MomentDistributionXTablePath", "MomentDistributionXTable.csv"),
    ("MomentDistributionYTablePath", "MomentDistributionYTable.csv"),
    ("MomentDistributionZTablePath", "MomentDistributionZTable.csv"),
    ("AccelerationXTablePath", "AccelerationXTable.csv"),
    ("AccelerationYTablePath", "AccelerationYTable.csv"),
    ("AccelerationZTablePath", "AccelerationZTable.csv"),
    ("VelocityXTablePath", "VelocityXTable.csv"),
    ("VelocityYTablePath", "VelocityYTable.csv"),
    ("VelocityZTablePath", "VelocityZTable.csv"),
    ("VelocityXZTablePath", "VelocityXZTable.csv"),
    ("VelocityYZTablePath", "VelocityYZTable.csv"),
];

impl Default for Fixture {
    fn default() -> Self {
        Self {
            hardpoint: [[0.0; HP_COUNT]; 6],
            forces_to_mirror: std::array::from_fn(|_| AxisColumns::zeros()),
            moments_to_mirror: std::array::from_fn(|_| AxisColumns::zeros()),
            acceleration: std::array::from_fn(|_| AxisColumns::zeros()),
            velocity: std::array::from_fn(|_| AxisColumns::zeros()),
            center_of_gravity: [0.0; 3],
        }
    }
}

impl Fixture {
    /// `_init.yaml` text referencing the standard table names.
    pub fn init_yaml(&self) -> String {
        let mut s = String::from("ForceActuatorSettings:\n");
        for (key, file) in TABLE_FILES {
            s.push_str(&format!("  {key}: {file}\n"));
        }
        for (axis, v) in ["X", "Y", "Z"].iter().zip(self.center_of_gravity) {
            s.push_str(&format!("  MirrorCenterOfGravity{axis}: {v:?}\n"));
        }
        s
    }

    /// Write `_init.yaml` and all tables under `dir`.
    pub fn write(&self, dir: &Path) -> eyre::Result<()> {
        let tables = dir.join(TABLES_DIR);
        std::fs::create_dir_all(&tables).wrap_err_with(|| format!("create {tables:?}"))?;
        std::fs::write(dir.join(INIT_FILE), self.init_yaml())
            .wrap_err_with(|| format!("write {INIT_FILE}"))?;

        let mut hp_headers = vec![ID_COLUMN.to_string()];
        hp_headers.extend((1..=HP_COUNT).map(|h| format!("HP{h}")));
        let hp_rows = self
            .hardpoint
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let mut r = vec![i as f64];
                r.extend_from_slice(row);
                r
            })
            .collect();

        let columns = self
            .forces_to_mirror
            .iter()
            .chain(&self.moments_to_mirror)
            .chain(&self.acceleration)
            .chain(&self.velocity);

        let mut all = vec![ForceTable::new(hp_headers, hp_rows)?];
        for c in columns {
            all.push(c.to_table()?);
        }

        for (mut table, (_, file)) in all.into_iter().zip(TABLE_FILES) {
            table.save(&tables.join(file), &["synthetic test table"], true)?;
        }
        Ok(())
    }
}
