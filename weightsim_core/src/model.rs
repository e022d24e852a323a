//! Energy-balance rate model.
//!
//! Body weight changes at a rate proportional to the daily caloric
//! surplus or deficit:
//!
//! ```text
//! dW/dt = (intake - expenditure) / KCAL_PER_KG
//! ```

/// Kilocalories needed to change body mass by one kilogram.
///
/// Composite figure for mixed fat/lean tissue. Used both to turn a caloric
/// differential into a mass rate and to turn a mass delta into a total
/// energy budget.
pub const KCAL_PER_KG: f64 = 7700.0;

/// Rate of weight change in kg/day for a given caloric balance.
///
/// `t` and `weight_kg` are unused by this law. They are part of the
/// signature so it lines up with [`RateModel::rate`].
pub fn rate(_t: f64, _weight_kg: f64, intake_kcal: f64, expenditure_kcal: f64) -> f64 {
    (intake_kcal - expenditure_kcal) / KCAL_PER_KG
}

/// Right-hand side of a scalar ODE `dW/dt = f(t, W)`.
pub trait RateModel {
    /// Rate of change of weight (kg/day) at time `t` (days) and weight `weight_kg`.
    fn rate(&self, t: f64, weight_kg: f64) -> f64;
}

/// Linear, time-invariant energy balance with fixed intake and expenditure
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnergyBalance {
    pub intake_kcal: f64,
    pub expenditure_kcal: f64,
}

impl EnergyBalance {
    pub fn new(intake_kcal: f64, expenditure_kcal: f64) -> Self {
        Self {
            intake_kcal,
            expenditure_kcal,
        }
    }

    /// Daily differential in kcal (positive = surplus)
    pub fn differential_kcal(&self) -> f64 {
        self.intake_kcal - self.expenditure_kcal
    }
}

impl RateModel for EnergyBalance {
    fn rate(&self, t: f64, weight_kg: f64) -> f64 {
        rate(t, weight_kg, self.intake_kcal, self.expenditure_kcal)
    }
}

impl<F> RateModel for F
where
    F: Fn(f64, f64) -> f64,
{
    fn rate(&self, t: f64, weight_kg: f64) -> f64 {
        self(t, weight_kg)
    }
}
