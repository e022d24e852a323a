//! Simulation pipeline: one request in, one report out.
//!
//! The stages run in a fixed order:
//! 1. Validate parameters
//! 2. Estimate daily expenditure from initial weight and age
//! 3. Recommend an intake that reaches the target over the horizon
//! 4. Integrate the weight trajectory with the chosen intake

use crate::estimate::{estimate_expenditure, recommend_intake};
use crate::integrator::integrate;
use crate::{
    DerivedScalars, GoalDirection, IntakeSource, Result, SimulationParameters, SimulationReport,
};

/// Run a full simulation for `params`.
///
/// Pure apart from logging: the same parameters always produce the same
/// report. Either the whole report is returned or an error, never a
/// partial trajectory.
pub fn simulate(params: &SimulationParameters) -> Result<SimulationReport> {
    params.validate()?;

    let expenditure = estimate_expenditure(params.initial_weight_kg, params.age_years);
    let recommended = recommend_intake(
        params.initial_weight_kg,
        params.target_weight_kg,
        params.horizon_days,
        expenditure,
    );

    let intake_used = match params.intake_source {
        IntakeSource::Recommended => recommended,
        IntakeSource::Supplied => params.daily_intake_kcal,
    };

    tracing::debug!(
        "Expenditure {:.1} kcal/day, recommended {:.1} kcal/day, using {:.1} ({:?})",
        expenditure,
        recommended,
        intake_used,
        params.intake_source
    );

    let trajectory = integrate(
        params.initial_weight_kg,
        intake_used,
        expenditure,
        params.horizon_days,
        params.step_size_days,
    )?;

    let scalars = DerivedScalars {
        expenditure_kcal: expenditure,
        recommended_intake_kcal: recommended,
        intake_used_kcal: intake_used,
        final_weight_kg: trajectory.final_weight(),
    };
    let goal = GoalDirection::from_weights(params.initial_weight_kg, params.target_weight_kg);

    tracing::info!(
        "Simulated {} days for {:?}: {:.2} kg -> {:.2} kg ({:?})",
        params.horizon_days,
        params.name,
        params.initial_weight_kg,
        scalars.final_weight_kg,
        goal
    );

    Ok(SimulationReport {
        parameters: params.clone(),
        scalars,
        goal,
        trajectory,
    })
}
