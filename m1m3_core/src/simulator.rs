//! Simulated force balance output.
//!
//! Combines the calculator's acceleration, balance (hardpoint), velocity and
//! offset force components into the total applied forces, remembering the
//! latest value of each.

use crate::applied_forces::AppliedForces;
use crate::calculator::ForceCalculator;
use crate::error::Result;
use crate::telemetry::HardpointActuatorSample;

/// Force component published by the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForceCategory {
    Acceleration,
    Balance,
    Velocity,
    Offset,
    Total,
}

impl ForceCategory {
    pub const ALL: [ForceCategory; 5] = [
        ForceCategory::Acceleration,
        ForceCategory::Balance,
        ForceCategory::Velocity,
        ForceCategory::Offset,
        ForceCategory::Total,
    ];

    /// Name of the telemetry topic (or event) carrying this component.
    pub fn topic(self) -> &'static str {
        match self {
            ForceCategory::Acceleration => "tel_appliedAccelerationForces",
            ForceCategory::Balance => "tel_appliedBalanceForces",
            ForceCategory::Velocity => "tel_appliedVelocityForces",
            ForceCategory::Offset => "evt_appliedOffsetForces",
            ForceCategory::Total => "tel_appliedForces",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone)]
pub struct Simulator {
    calculator: ForceCalculator,
    latest: [Option<AppliedForces>; 5],
}

impl Simulator {
    pub fn new(calculator: ForceCalculator) -> Self {
        Self {
            calculator,
            latest: Default::default(),
        }
    }

    pub fn calculator(&self) -> &ForceCalculator {
        &self.calculator
    }

    /// Mutable access, e.g. to apply fitted coefficients. Retained results
    /// are kept until recomputed.
    pub fn calculator_mut(&mut self) -> &mut ForceCalculator {
        &mut self.calculator
    }

    /// Latest published value of `category`, `None` until first computed.
    pub fn latest(&self, category: ForceCategory) -> Option<&AppliedForces> {
        self.latest[category.slot()].as_ref()
    }

    fn publish(&mut self, category: ForceCategory, forces: AppliedForces) -> &AppliedForces {
        tracing::debug!(
            topic = category.topic(),
            fz = forces.fz(),
            force_magnitude = forces.force_magnitude(),
            "simulated forces"
        );
        self.latest[category.slot()].insert(forces)
    }

    /// Acceleration forces for XYZ angular accelerations (rad/s²).
    pub fn acceleration(&mut self, accelerations: &[f64]) -> Result<&AppliedForces> {
        let f = self.calculator.acceleration(accelerations)?;
        Ok(self.publish(ForceCategory::Acceleration, f))
    }

    /// Balance forces from the six hardpoint forces.
    pub fn hardpoint_forces(&mut self, hardpoints: &[f64]) -> Result<&AppliedForces> {
        let f = self.calculator.hardpoint_forces(hardpoints)?;
        Ok(self.publish(ForceCategory::Balance, f))
    }

    /// Balance forces from a hardpoint load cell sample.
    pub fn hardpoint_sample(&mut self, sample: &HardpointActuatorSample) -> Result<&AppliedForces> {
        let f = self
            .calculator
            .hardpoint_forces(&sample.measured_force)?
            .with_timestamp(sample.timestamp);
        Ok(self.publish(ForceCategory::Balance, f))
    }

    /// Offset forces from mirror forces and moments `[fx, fy, fz, mx, my, mz]`.
    pub fn hardpoint_fam(&mut self, fam: &[f64]) -> Result<&AppliedForces> {
        let f = self.calculator.forces_and_moments_forces(fam)?;
        Ok(self.publish(ForceCategory::Offset, f))
    }

    /// Velocity forces for XYZ angular velocities (rad/s).
    pub fn velocity(&mut self, velocities: &[f64]) -> Result<&AppliedForces> {
        let f = self.calculator.velocity(velocities)?;
        Ok(self.publish(ForceCategory::Velocity, f))
    }

    /// Sum of the latest acceleration, balance, velocity and offset forces.
    /// Components not computed yet count as zero.
    pub fn applied_forces(&mut self) -> &AppliedForces {
        let zero = self.calculator.zero_forces();
        let total = [
            ForceCategory::Acceleration,
            ForceCategory::Balance,
            ForceCategory::Velocity,
            ForceCategory::Offset,
        ]
        .into_iter()
        .filter_map(|c| self.latest(c))
        .fold(zero, |acc, f| acc + f);
        self.publish(ForceCategory::Total, total)
    }
}
