//! Workout reward pipeline.
//!
//! Applying a logged workout touches every calculator at once:
//! 1. Estimate calories burned (skipped when weight is unknown)
//! 2. Award XP per minute and apply level ups
//! 3. Advance the daily streak
//! 4. Award any badges the new state unlocks

use crate::streak::StreakTransition;
use crate::{
    badges, calories, progression, Badge, Config, Error, GamificationState, Result,
    WorkoutRecord,
};
use chrono::NaiveDate;
use serde::Serialize;

/// Everything that changed when a workout was recorded
#[derive(Clone, Debug, Serialize)]
pub struct WorkoutOutcome {
    pub calories_burned: Option<f64>,
    pub xp_awarded: u64,
    pub level_before: u32,
    pub level_after: u32,
    pub streak: StreakTransition,
    pub new_badges: Vec<Badge>,
}

impl WorkoutOutcome {
    pub fn leveled_up(&self) -> bool {
        self.level_after > self.level_before
    }
}

/// Apply a workout to a user's gamification state
///
/// A missing weight only skips the calorie estimate; XP and streak are
/// still applied.
///
/// # Errors
/// `InvalidRange` for a non-positive duration or weight. The state is not
/// modified when an error is returned.
pub fn record_workout(
    state: &mut GamificationState,
    workout: &WorkoutRecord,
    weight_kg: Option<f64>,
    today: NaiveDate,
    config: &Config,
) -> Result<WorkoutOutcome> {
    Error::ensure_positive("duration_minutes", workout.duration_minutes)?;

    let calories_burned = match calories::calories_burned(workout, weight_kg) {
        Ok(kcal) => Some(kcal),
        Err(Error::MissingInput(field)) => {
            tracing::debug!("Skipping calorie estimate: no {}", field);
            None
        }
        Err(e) => return Err(e),
    };

    let xp_awarded =
        progression::xp_for_workout(workout.duration_minutes, config.gamification.xp_per_minute);
    let level_before = state.progression.current_level;
    let level_after = state.progression.add_xp(xp_awarded);
    let streak = state.streak.update_streak(today);

    let new_badges = badges::award_badges(state, badges::default_badges())
        .into_iter()
        .cloned()
        .collect();

    tracing::info!(
        "Recorded {} ({} min): {} XP, level {}",
        workout.activity_name,
        workout.duration_minutes,
        xp_awarded,
        level_after
    );

    Ok(WorkoutOutcome {
        calories_burned,
        xp_awarded,
        level_before,
        level_after,
        streak,
        new_badges,
    })
}
