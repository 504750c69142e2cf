#![allow(dead_code)]

use m1m3_config::fixtures::Fixture;
use m1m3_core::ForceCalculator;
use m1m3_fatable::FATABLE_ZFA;
use tempfile::{TempDir, tempdir};

pub const CENTER_OF_GRAVITY: [f64; 3] = [0.1, -0.2, 0.3];

/// Identity hardpoint table, fz spread evenly over the Z actuators, and one
/// non-zero column in a few acceleration and velocity tables (mN units).
pub fn standard_fixture() -> Fixture {
    let mut fx = Fixture::default();
    for (i, row) in fx.hardpoint.iter_mut().enumerate() {
        row[i] = 1.0;
    }
    fx.forces_to_mirror[2].z = vec![1.0 / FATABLE_ZFA as f64; FATABLE_ZFA];
    fx.acceleration[0].z = vec![1000.0; FATABLE_ZFA];
    fx.acceleration[1].y = vec![1000.0; FATABLE_ZFA];
    fx.velocity[3].z = vec![1000.0; FATABLE_ZFA];
    fx.center_of_gravity = CENTER_OF_GRAVITY;
    fx
}

pub fn write_config(fx: &Fixture) -> TempDir {
    let dir = tempdir().unwrap();
    fx.write(dir.path()).unwrap();
    dir
}

pub fn standard_calculator() -> (TempDir, ForceCalculator) {
    let dir = write_config(&standard_fixture());
    let calc = ForceCalculator::load_config(dir.path()).unwrap();
    (dir, calc)
}

pub fn assert_close(a: f64, b: f64) {
    assert!(
        (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs())),
        "{a} != {b}"
    );
}
