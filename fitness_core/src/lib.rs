#![forbid(unsafe_code)]

//! Core domain calculations for the fittrack fitness tracker.
//!
//! This crate provides:
//! - Domain types (profiles, workouts, food portions, gamification state)
//! - Calorie burn (MET) and BMR (Mifflin-St Jeor) calculators
//! - Serving-size macro scaling
//! - XP/level progression, streaks, badges and goals
//! - Configuration and a locked state file for callers that persist locally

pub mod types;
pub mod error;
pub mod met;
pub mod calories;
pub mod bmr;
pub mod nutrition;
pub mod progression;
pub mod streak;
pub mod badges;
pub mod goals;
pub mod engine;
pub mod config;
pub mod logging;
pub mod state;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use calories::calories_burned;
pub use bmr::{calculate_bmr, daily_calorie_target};
pub use nutrition::{scale_macros, DailyTotals};
pub use progression::{xp_for_workout, xp_required};
pub use streak::StreakTransition;
pub use engine::{record_workout, WorkoutOutcome};

/// Round to two decimal places (half away from zero)
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
