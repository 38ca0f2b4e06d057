//! Default badge catalog and award evaluation.

use crate::{Badge, BadgeCondition, GamificationState};
use once_cell::sync::Lazy;

/// Cached default badge catalog
static DEFAULT_BADGES: Lazy<Vec<Badge>> = Lazy::new(build_default_badges);

/// Get a reference to the cached default badge catalog
pub fn default_badges() -> &'static [Badge] {
    &DEFAULT_BADGES
}

fn badge(id: &str, name: &str, description: &str, condition: BadgeCondition) -> Badge {
    Badge {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        condition,
    }
}

fn build_default_badges() -> Vec<Badge> {
    vec![
        badge(
            "streak_7",
            "7-Day Streak",
            "Completed 7 consecutive days of activity",
            BadgeCondition::Streak(7),
        ),
        badge(
            "streak_14",
            "14-Day Streak",
            "Completed 14 consecutive days of activity",
            BadgeCondition::Streak(14),
        ),
        badge(
            "streak_30",
            "30-Day Streak",
            "Completed 30 consecutive days of activity",
            BadgeCondition::Streak(30),
        ),
        badge(
            "xp_1000",
            "1000 XP",
            "Earned 1000 total experience points",
            BadgeCondition::TotalXp(1000),
        ),
        badge(
            "xp_5000",
            "5000 XP",
            "Earned 5000 total experience points",
            BadgeCondition::TotalXp(5000),
        ),
        badge(
            "xp_10000",
            "10000 XP",
            "Earned 10000 total experience points",
            BadgeCondition::TotalXp(10000),
        ),
        badge(
            "level_5",
            "Level 5",
            "Reached level 5",
            BadgeCondition::Level(5),
        ),
        badge(
            "level_10",
            "Level 10",
            "Reached level 10",
            BadgeCondition::Level(10),
        ),
    ]
}

impl BadgeCondition {
    /// Whether the state currently satisfies this condition
    pub fn is_met(&self, state: &GamificationState) -> bool {
        match *self {
            BadgeCondition::Streak(days) => state.streak.current_streak >= days,
            BadgeCondition::TotalXp(xp) => state.progression.total_xp >= xp,
            BadgeCondition::Level(level) => state.progression.current_level >= level,
        }
    }
}

/// Badges whose conditions are met but that the user has not earned yet
pub fn newly_earned<'a>(state: &GamificationState, catalog: &'a [Badge]) -> Vec<&'a Badge> {
    catalog
        .iter()
        .filter(|b| !state.earned_badges.contains(&b.id))
        .filter(|b| b.condition.is_met(state))
        .collect()
}

/// Record newly earned badges on the state and return them
pub fn award_badges<'a>(state: &mut GamificationState, catalog: &'a [Badge]) -> Vec<&'a Badge> {
    let awarded = newly_earned(state, catalog);
    for badge in &awarded {
        state.earned_badges.insert(badge.id.clone());
        tracing::info!("Badge earned: {}", badge.name);
    }
    awarded
}
