//! Core domain types for the weight simulation.
//!
//! This module defines the values passed between the pipeline stages:
//! - Simulation request parameters
//! - Trajectory points and the trajectory itself
//! - Derived scalars and the full simulation report

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default integration step, in days
pub const DEFAULT_STEP_SIZE_DAYS: f64 = 1.0;

// ============================================================================
// Request Types
// ============================================================================

/// Which daily intake drives the integrator
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IntakeSource {
    /// Use the intake computed by the recommender (the normal path)
    #[default]
    Recommended,
    /// Bypass the recommender and use `daily_intake_kcal` as given
    Supplied,
}

/// Inputs for one simulation request
///
/// Built once per request and passed by reference through the pipeline.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SimulationParameters {
    pub name: String,
    pub initial_weight_kg: f64,
    pub target_weight_kg: f64,
    pub age_years: u32,
    pub daily_intake_kcal: f64,
    pub horizon_days: u32,
    pub step_size_days: f64,
    #[serde(default)]
    pub intake_source: IntakeSource,
}

impl SimulationParameters {
    pub fn new(
        name: impl Into<String>,
        age_years: u32,
        initial_weight_kg: f64,
        target_weight_kg: f64,
        daily_intake_kcal: f64,
        horizon_days: u32,
    ) -> Self {
        Self {
            name: name.into(),
            initial_weight_kg,
            target_weight_kg,
            age_years,
            daily_intake_kcal,
            horizon_days,
            step_size_days: DEFAULT_STEP_SIZE_DAYS,
            intake_source: IntakeSource::Recommended,
        }
    }

    pub fn with_step_size(mut self, step_size_days: f64) -> Self {
        self.step_size_days = step_size_days;
        self
    }

    pub fn with_intake_source(mut self, source: IntakeSource) -> Self {
        self.intake_source = source;
        self
    }

    /// Check the structural requirements the core relies on.
    ///
    /// Only positivity and finiteness are checked here. Plausible human
    /// ranges are the caller's job.
    pub fn validate(&self) -> Result<()> {
        require_positive("initial_weight_kg", self.initial_weight_kg)?;
        require_positive("target_weight_kg", self.target_weight_kg)?;
        require_positive("daily_intake_kcal", self.daily_intake_kcal)?;
        require_positive("step_size_days", self.step_size_days)?;
        if self.age_years == 0 {
            return Err(Error::invalid("age_years must be positive"));
        }
        if self.horizon_days == 0 {
            return Err(Error::invalid("horizon_days must be positive"));
        }
        Ok(())
    }
}

pub(crate) fn require_finite(what: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::invalid(format!("{} must be finite (got {})", what, value)))
    }
}

pub(crate) fn require_positive(what: &str, value: f64) -> Result<()> {
    require_finite(what, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid(format!("{} must be positive (got {})", what, value)))
    }
}

// ============================================================================
// Trajectory Types
// ============================================================================

/// One sample of the simulated weight
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct TrajectoryPoint {
    pub time_days: f64,
    pub weight_kg: f64,
}

/// Chronologically ordered weight samples from one integration run
///
/// Always holds at least the initial point. Only the integrator builds one.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(transparent)]
pub struct Trajectory(Vec<TrajectoryPoint>);

impl Trajectory {
    pub(crate) fn with_capacity(initial: TrajectoryPoint, capacity: usize) -> Self {
        let mut points = Vec::with_capacity(capacity);
        points.push(initial);
        Self(points)
    }

    pub(crate) fn push(&mut self, point: TrajectoryPoint) {
        self.0.push(point);
    }

    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrajectoryPoint> {
        self.0.iter()
    }

    /// The initial condition
    pub fn first(&self) -> TrajectoryPoint {
        self.0[0]
    }

    /// The last recorded point (may fall short of the horizon, see
    /// [`crate::integrator::integrate`])
    pub fn last(&self) -> TrajectoryPoint {
        self.0[self.0.len() - 1]
    }

    pub fn final_weight(&self) -> f64 {
        self.last().weight_kg
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a TrajectoryPoint;
    type IntoIter = std::slice::Iter<'a, TrajectoryPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ============================================================================
// Result Types
// ============================================================================

/// Direction of the requested weight change
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GoalDirection {
    Loss,
    Gain,
    Maintenance,
}

impl GoalDirection {
    /// Classify by the sign of `target - initial`
    pub fn from_weights(initial_weight_kg: f64, target_weight_kg: f64) -> Self {
        if target_weight_kg < initial_weight_kg {
            GoalDirection::Loss
        } else if target_weight_kg > initial_weight_kg {
            GoalDirection::Gain
        } else {
            GoalDirection::Maintenance
        }
    }
}

/// Scalars computed once per request
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct DerivedScalars {
    pub expenditure_kcal: f64,
    pub recommended_intake_kcal: f64,
    /// Intake actually fed to the integrator
    pub intake_used_kcal: f64,
    pub final_weight_kg: f64,
}

/// Everything a presentation layer needs from one run
#[derive(Clone, Debug, Serialize)]
pub struct SimulationReport {
    pub parameters: SimulationParameters,
    pub scalars: DerivedScalars,
    pub goal: GoalDirection,
    pub trajectory: Trajectory,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> SimulationParameters {
        SimulationParameters::new("Test", 25, 80.0, 75.0, 1800.0, 30)
    }

    #[test]
    fn test_default_step_and_source() {
        let p = params();
        assert_eq!(p.step_size_days, 1.0);
        assert_eq!(p.intake_source, IntakeSource::Recommended);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_horizon() {
        let mut p = params();
        p.horizon_days = 0;
        assert!(matches!(p.validate(), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn test_validate_rejects_bad_step() {
        for step in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let p = params().with_step_size(step);
            assert!(
                matches!(p.validate(), Err(Error::InvalidParameter(_))),
                "step {} should be rejected",
                step
            );
        }
    }

    #[test]
    fn test_validate_rejects_non_finite_weight() {
        let mut p = params();
        p.target_weight_kg = f64::NAN;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_goal_direction() {
        assert_eq!(GoalDirection::from_weights(80.0, 75.0), GoalDirection::Loss);
        assert_eq!(GoalDirection::from_weights(80.0, 85.0), GoalDirection::Gain);
        assert_eq!(
            GoalDirection::from_weights(80.0, 80.0),
            GoalDirection::Maintenance
        );
    }

    #[test]
    fn test_params_json_defaults_intake_source() {
        let json = r#"{
            "name": "A",
            "initial_weight_kg": 70.0,
            "target_weight_kg": 72.0,
            "age_years": 40,
            "daily_intake_kcal": 2000.0,
            "horizon_days": 10,
            "step_size_days": 0.5
        }"#;
        let p: SimulationParameters = serde_json::from_str(json).unwrap();
        assert_eq!(p.intake_source, IntakeSource::Recommended);
        assert_eq!(p.step_size_days, 0.5);
    }
}
