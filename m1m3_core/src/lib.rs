#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! M1M3 mirror force calculator.
//!
//! Converts between per-actuator forces (12 X, 100 Y, 156 Z) and mirror
//! level forces and moments, using the distribution tables of an M1M3
//! configuration directory.
//!
//! ## Architecture
//!
//! - **Applied forces**: value object with totals derived from actuator
//!   geometry (`applied_forces` module)
//! - **Calculator**: hardpoint, acceleration and velocity conversions
//!   (`calculator` module)
//! - **Fitter**: least-squares fit of the acceleration and velocity tables
//!   from telemetry (`fitter` module)
//! - **Simulator**: sums force components into total applied forces
//! - **Accelerometers**: raw DC accelerometer readings to angular
//!   accelerations
//!
//! Nothing here performs I/O except configuration loading and `save`.

pub mod accelerometer;
pub mod applied_forces;
pub mod calculator;
pub mod error;
pub mod fitter;
pub mod simulator;
pub mod telemetry;

pub use accelerometer::AccelerationTransformer;
pub use applied_forces::{AppliedForces, ForcesAndMoments};
pub use calculator::{ForceCalculator, velocity_terms};
pub use error::{ForceError, Result};
pub use fitter::{
    AccelerationAndVelocityFitter, AccelerationSource, FitCoefficients, FitResult, lstsq,
};
pub use simulator::{ForceCategory, Simulator};
pub use telemetry::{
    AxisKinematics, ForceVectors, HardpointActuatorSample, KinematicsSample, MeasuredForces,
    TmaKinematics, VelocityKind,
};
