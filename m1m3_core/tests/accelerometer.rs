mod common;

use std::fs;

use common::{standard_fixture, write_config};
use m1m3_config::INIT_FILE;
use m1m3_core::{AccelerationTransformer, ForceError};

fn accelerometer_yaml() -> String {
    let mut s = String::from("AccelerometerSettings:\n");
    for i in 1..=8 {
        s.push_str(&format!(
            "  Accelerometer{i}:\n    Bias: {b:?}\n    Sensitivity: 2.0\n    Offset: 0.0\n    Scalar: 1.0\n",
            b = f64::from(i) * 0.1
        ));
    }
    s.push_str("  AngularAccelerationXDistance: 2.0\n");
    s.push_str("  AngularAccelerationYDistance: 4.0\n");
    s.push_str("  AngularAccelerationZDistance: 8.0\n");
    s
}

#[test]
fn loads_settings_from_init_file() {
    let fx = standard_fixture();
    let dir = write_config(&fx);
    fs::write(
        dir.path().join(INIT_FILE),
        fx.init_yaml() + &accelerometer_yaml(),
    )
    .unwrap();

    let t = AccelerationTransformer::load_config(dir.path()).unwrap();
    let raw = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8];
    // every channel reads exactly its bias
    assert!(t.calibrated(&raw).iter().all(|v| v.abs() < 1e-12));

    let raw = [1.1, 0.2, 2.3, 0.4, 4.5, 3.6, 0.7, 1.8];
    let a = t.transform(&raw);
    assert!((a[0] - (6.0 - 2.0) / 2.0).abs() < 1e-9);
    assert!((a[1] - (4.0 - 2.0) / 4.0).abs() < 1e-9);
    assert!((a[2] - (8.0 - 2.0) / 8.0).abs() < 1e-9);
}

#[test]
fn missing_settings_is_config_error() {
    let dir = write_config(&standard_fixture());
    let err = AccelerationTransformer::load_config(dir.path()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ForceError>(),
        Some(ForceError::Config(msg)) if msg.contains("AccelerometerSettings")
    ));
}

#[test]
fn zero_distance_is_rejected() {
    let fx = standard_fixture();
    let dir = write_config(&fx);
    let yaml = accelerometer_yaml().replace("XDistance: 2.0", "XDistance: 0.0");
    fs::write(dir.path().join(INIT_FILE), fx.init_yaml() + &yaml).unwrap();
    let err = AccelerationTransformer::load_config(dir.path()).unwrap_err();
    assert!(format!("{err}").contains("AngularAccelerationXDistance"));
}
