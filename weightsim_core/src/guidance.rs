//! Static diet guidance keyed on goal direction.
//!
//! Pure lookup data for presentation layers. Nothing here feeds back into
//! the numeric pipeline.

use crate::GoalDirection;

/// A canned diet plan for one goal direction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DietPlan {
    pub label: &'static str,
    pub lines: &'static [&'static str],
}

static LOSS_PLAN: DietPlan = DietPlan {
    label: "Weight loss",
    lines: &[
        "Controlled caloric deficit of 400-600 kcal/day.",
        "Breakfast: oatmeal with egg whites and fresh fruit.",
        "Lunch: chicken or fish + brown rice + salad.",
        "Dinner: steamed vegetables with lean protein.",
        "Snacks: plain yogurt, an apple or nuts.",
    ],
};

static GAIN_PLAN: DietPlan = DietPlan {
    label: "Weight gain",
    lines: &[
        "Caloric surplus of 300-500 kcal/day.",
        "Breakfast: oatmeal with milk and nuts.",
        "Lunch: pasta or rice + lean meat + avocado.",
        "Dinner: rice + fish + vegetables.",
        "Snacks: protein shakes or peanut butter.",
    ],
};

static MAINTENANCE_PLAN: DietPlan = DietPlan {
    label: "Maintenance",
    lines: &["Keep your intake balanced and exercise moderately."],
};

static GENERAL_RECOMMENDATIONS: &[&str] = &[
    "Increase or reduce calories gradually.",
    "Combine cardiovascular and strength training.",
    "Sleep between 7 and 9 hours every night.",
    "Stay well hydrated (at least 2 L/day).",
    "Consult a nutrition professional if needed.",
];

/// Diet plan for a goal direction
pub fn diet_plan(goal: GoalDirection) -> &'static DietPlan {
    match goal {
        GoalDirection::Loss => &LOSS_PLAN,
        GoalDirection::Gain => &GAIN_PLAN,
        GoalDirection::Maintenance => &MAINTENANCE_PLAN,
    }
}

/// Advice that applies regardless of goal
pub fn general_recommendations() -> &'static [&'static str] {
    GENERAL_RECOMMENDATIONS
}

impl GoalDirection {
    /// Human-readable goal label
    pub fn label(self) -> &'static str {
        diet_plan(self).label
    }
}
