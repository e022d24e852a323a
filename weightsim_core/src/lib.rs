#![forbid(unsafe_code)]

//! Core model and numerics for the weight trajectory simulator.
//!
//! This crate provides:
//! - Energy-balance rate model
//! - Expenditure and recommended-intake estimators
//! - Fixed-step RK4 integrator
//! - The simulation pipeline tying them together
//! - Static diet guidance and CSV report export

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod model;
pub mod estimate;
pub mod integrator;
pub mod simulation;
pub mod guidance;
pub mod report;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use model::{rate, EnergyBalance, RateModel, KCAL_PER_KG};
pub use estimate::{estimate_expenditure, recommend_intake};
pub use integrator::{integrate, integrate_with, Rk4};
pub use simulation::simulate;
pub use guidance::{diet_plan, general_recommendations, DietPlan};
pub use report::{save_csv_report, save_csv_report_to, write_csv_report, CsvReportOptions};
