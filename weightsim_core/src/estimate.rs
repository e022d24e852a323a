//! Closed-form estimators feeding the integrator.
//!
//! - Daily energy expenditure from weight and age
//! - Recommended daily intake to reach a target weight over a horizon

use crate::model::KCAL_PER_KG;

/// kcal/day attributed to each kilogram of body weight
pub const EXPENDITURE_KCAL_PER_KG: f64 = 22.0;

/// kcal/day attributed to each year of age
pub const EXPENDITURE_KCAL_PER_YEAR: f64 = 1.5;

/// Estimate daily caloric expenditure.
///
/// `22 * weight + 1.5 * age`. This is a deliberately simple linear proxy
/// for total energy expenditure used by the model, not a clinical
/// formula. No validation beyond what the caller already did.
pub fn estimate_expenditure(weight_kg: f64, age_years: u32) -> f64 {
    EXPENDITURE_KCAL_PER_KG * weight_kg + EXPENDITURE_KCAL_PER_YEAR * f64::from(age_years)
}

/// Recommend a daily intake that reaches `target_weight_kg` after
/// `horizon_days`.
///
/// The total energy needed for the weight change is spread evenly over
/// the horizon and added to expenditure, so a loss goal yields an intake
/// below expenditure and a gain goal one above it.
///
/// Horizons of zero are clamped to one day. Callers validate the horizon
/// first; the clamp only keeps this function total.
pub fn recommend_intake(
    initial_weight_kg: f64,
    target_weight_kg: f64,
    horizon_days: u32,
    expenditure_kcal: f64,
) -> f64 {
    let delta = target_weight_kg - initial_weight_kg;
    let total_kcal = delta * KCAL_PER_KG;
    expenditure_kcal + total_kcal / f64::from(horizon_days.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expenditure_reference_values() {
        assert_eq!(estimate_expenditure(80.0, 25), 1797.5);
        assert_eq!(estimate_expenditure(60.0, 40), 1380.0);
    }

    #[test]
    fn test_recommend_loss_below_expenditure() {
        let e = 1797.5;
        assert!(recommend_intake(80.0, 75.0, 30, e) < e);
    }

    #[test]
    fn test_recommend_gain_above_expenditure() {
        let e = 1797.5;
        assert!(recommend_intake(80.0, 85.0, 30, e) > e);
    }

    #[test]
    fn test_recommend_maintenance_equals_expenditure() {
        assert_eq!(recommend_intake(80.0, 80.0, 30, 2000.0), 2000.0);
    }

    #[test]
    fn test_recommend_reference_scenario() {
        let e = estimate_expenditure(80.0, 25);
        let rec = recommend_intake(80.0, 75.0, 30, e);
        assert!((rec - 514.1666666666667).abs() < 1e-9);
    }

    #[test]
    fn test_zero_horizon_clamped_to_one_day() {
        let rec = recommend_intake(80.0, 79.0, 0, 2000.0);
        assert_eq!(rec, 2000.0 - KCAL_PER_KG);
    }
}
