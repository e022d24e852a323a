//! Fixed-step fourth-order Runge-Kutta integration of the weight ODE.
//!
//! For a rate law `dW/dt = f(t, W)` and step `h`, each step evaluates
//!
//! ```text
//! k1 = h * f(t,       W)
//! k2 = h * f(t + h/2, W + k1/2)
//! k3 = h * f(t + h/2, W + k2/2)
//! k4 = h * f(t + h,   W + k3)
//! W' = W + (k1 + 2*k2 + 2*k3 + k4) / 6
//! ```
//!
//! The energy-balance law is linear and time-invariant, so all four stages
//! agree and each step adds exactly `h * (intake - expenditure) / 7700`.
//! The stages are still evaluated in full so any [`RateModel`] can be
//! driven through the same routine.

use crate::model::{EnergyBalance, RateModel};
use crate::types::{require_finite, Trajectory, TrajectoryPoint};
use crate::{Error, Result};

/// Upper bound on the number of steps a single run may take
pub const MAX_STEPS: usize = 1_000_000;

/// Classic Runge-Kutta 4th order stepper for a scalar state
#[derive(Clone, Copy, Debug, Default)]
pub struct Rk4;

impl Rk4 {
    /// Advance `(t, weight)` by one step of size `h`, returning the new weight.
    pub fn step(&self, model: &impl RateModel, t: f64, weight_kg: f64, h: f64) -> f64 {
        let half = 0.5 * h;

        let k1 = h * model.rate(t, weight_kg);
        let k2 = h * model.rate(t + half, weight_kg + 0.5 * k1);
        let k3 = h * model.rate(t + half, weight_kg + 0.5 * k2);
        let k4 = h * model.rate(t + h, weight_kg + k3);

        weight_kg + (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0
    }
}

/// Number of whole steps that fit in the horizon.
///
/// Truncates: a horizon that is not a multiple of the step size ends on
/// the last whole step, no partial step is taken.
pub fn step_count(horizon_days: u32, step_size_days: f64) -> Result<usize> {
    validate_grid(horizon_days, step_size_days)?;

    let steps = (f64::from(horizon_days) / step_size_days).floor();
    if steps > MAX_STEPS as f64 {
        return Err(Error::invalid(format!(
            "step_size_days {} gives {} steps over {} days (max {})",
            step_size_days, steps, horizon_days, MAX_STEPS
        )));
    }
    Ok(steps as usize)
}

fn validate_grid(horizon_days: u32, step_size_days: f64) -> Result<()> {
    if horizon_days == 0 {
        return Err(Error::invalid("horizon_days must be positive"));
    }
    require_finite("step_size_days", step_size_days)?;
    if step_size_days <= 0.0 {
        return Err(Error::invalid(format!(
            "step_size_days must be positive (got {})",
            step_size_days
        )));
    }
    Ok(())
}

/// Integrate an arbitrary rate model from day 0 to the horizon.
///
/// Returns `floor(horizon / step) + 1` points, the first being exactly
/// `(0, initial_weight_kg)`. Fails with [`Error::InvalidParameter`] before
/// any work if the grid or the initial weight is invalid.
pub fn integrate_with(
    model: &impl RateModel,
    initial_weight_kg: f64,
    horizon_days: u32,
    step_size_days: f64,
) -> Result<Trajectory> {
    require_finite("initial_weight_kg", initial_weight_kg)?;
    let num_steps = step_count(horizon_days, step_size_days)?;

    let stepper = Rk4;
    let h = step_size_days;
    let mut t = 0.0;
    let mut weight = initial_weight_kg;

    let mut trajectory = Trajectory::with_capacity(
        TrajectoryPoint {
            time_days: t,
            weight_kg: weight,
        },
        num_steps + 1,
    );

    for _ in 0..num_steps {
        weight = stepper.step(model, t, weight, h);
        t += h;
        trajectory.push(TrajectoryPoint {
            time_days: t,
            weight_kg: weight,
        });
    }

    tracing::debug!(
        "Integrated {} steps of {} days: {:.3} kg -> {:.3} kg",
        num_steps,
        h,
        initial_weight_kg,
        weight
    );

    Ok(trajectory)
}

/// Integrate the energy-balance law with fixed daily intake and expenditure.
pub fn integrate(
    initial_weight_kg: f64,
    intake_kcal: f64,
    expenditure_kcal: f64,
    horizon_days: u32,
    step_size_days: f64,
) -> Result<Trajectory> {
    require_finite("intake_kcal", intake_kcal)?;
    require_finite("expenditure_kcal", expenditure_kcal)?;

    let model = EnergyBalance::new(intake_kcal, expenditure_kcal);
    integrate_with(&model, initial_weight_kg, horizon_days, step_size_days)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, rel: f64) {
        let tol = rel * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tol,
            "expected {} got {} (tol {})",
            expected,
            actual,
            tol
        );
    }

    #[test]
    fn test_reference_scenario_reaches_target() {
        let traj = integrate(80.0, 514.1666666666667, 1797.5, 30, 1.0).unwrap();
        assert_eq!(traj.len(), 31);
        assert_close(traj.final_weight(), 75.0, 1e-9);
    }

    #[test]
    fn test_partial_step_not_taken() {
        let traj = integrate(80.0, 2000.0, 2000.0, 29, 1.0).unwrap();
        assert_eq!(traj.len(), 30);
        assert_eq!(traj.last().time_days, 29.0);

        let traj = integrate(80.0, 2000.0, 2000.0, 7, 2.0).unwrap();
        assert_eq!(traj.len(), 4);
        assert_eq!(traj.last().time_days, 6.0);
    }

    #[test]
    fn test_zero_step_rejected() {
        let err = integrate(80.0, 2000.0, 1800.0, 30, 0.0).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let err = integrate(80.0, 2000.0, 1800.0, 0, 1.0).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        assert!(integrate(f64::NAN, 2000.0, 1800.0, 10, 1.0).is_err());
        assert!(integrate(80.0, f64::INFINITY, 1800.0, 10, 1.0).is_err());
        assert!(integrate(80.0, 2000.0, f64::NEG_INFINITY, 10, 1.0).is_err());
        assert!(integrate(80.0, 2000.0, 1800.0, 10, f64::NAN).is_err());
    }

    #[test]
    fn test_tiny_step_rejected() {
        let err = integrate(80.0, 2000.0, 1800.0, 365, 1e-9).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn test_step_larger_than_horizon_keeps_initial_point_only() {
        let traj = integrate(80.0, 2500.0, 1800.0, 3, 5.0).unwrap();
        assert_eq!(traj.len(), 1);
        assert_eq!(traj.first().weight_kg, 80.0);
    }

    #[test]
    fn test_rk4_accuracy_on_exponential_growth() {
        // dW/dt = W, W(0) = 1 => W(t) = e^t
        let growth = |_t: f64, w: f64| w;
        let mut w = 1.0;
        let mut t = 0.0;
        for _ in 0..10 {
            w = Rk4.step(&growth, t, w, 0.1);
            t += 0.1;
        }
        assert!((w - 1.0f64.exp()).abs() < 1e-5);
    }

    #[test]
    fn test_rk4_uses_time_argument() {
        // dW/dt = 2t => W(t) = t^2, integrated exactly by RK4
        let ramp = |t: f64, _w: f64| 2.0 * t;
        let traj = integrate_with(&ramp, 0.0, 4, 0.5).unwrap();
        for p in &traj {
            assert_close(p.weight_kg, p.time_days * p.time_days, 1e-12);
        }
    }

    #[test]
    fn test_balanced_intake_keeps_weight_constant() {
        let traj = integrate(72.5, 1800.0, 1800.0, 30, 1.0).unwrap();
        assert!(traj.iter().all(|p| p.weight_kg == 72.5));
    }
}
