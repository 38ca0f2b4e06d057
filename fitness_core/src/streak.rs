//! Daily activity streak tracking.
//!
//! `today` is always supplied by the caller, so the tracker never reads the
//! clock and callers decide which timezone a "day" belongs to.

use crate::StreakState;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// What an `update_streak` call did to the state
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StreakTransition {
    /// First recorded activity
    Started,
    /// Activity already recorded today
    Unchanged,
    /// Activity on the day after the last one
    Extended,
    /// Gap of two or more days, or a date before the last activity
    Reset,
}

impl StreakState {
    /// Record activity on `today`
    pub fn update_streak(&mut self, today: NaiveDate) -> StreakTransition {
        let transition = match self.last_activity_date {
            None => {
                self.current_streak = 1;
                StreakTransition::Started
            }
            Some(last) if last == today => StreakTransition::Unchanged,
            Some(last) if last.succ_opt() == Some(today) => {
                self.current_streak += 1;
                StreakTransition::Extended
            }
            Some(last) => {
                if last > today {
                    tracing::warn!(
                        "Activity on {} is before last activity {}, resetting streak",
                        today,
                        last
                    );
                }
                self.current_streak = 1;
                StreakTransition::Reset
            }
        };

        self.longest_streak = self.longest_streak.max(self.current_streak);
        self.last_activity_date = Some(today);

        tracing::debug!(
            "Streak {:?}: current {}, longest {}",
            transition,
            self.current_streak,
            self.longest_streak
        );

        transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_first_activity_starts_streak() {
        let mut s = StreakState::default();
        assert_eq!(s.update_streak(day(1)), StreakTransition::Started);
        assert_eq!(s.current_streak, 1);
        assert_eq!(s.longest_streak, 1);
        assert_eq!(s.last_activity_date, Some(day(1)));
    }

    #[test]
    fn test_same_day_is_idempotent() {
        let mut s = StreakState::default();
        s.update_streak(day(1));
        s.update_streak(day(2));
        let before = s.clone();

        assert_eq!(s.update_streak(day(2)), StreakTransition::Unchanged);
        assert_eq!(s.update_streak(day(2)), StreakTransition::Unchanged);
        assert_eq!(s, before);
    }

    #[test]
    fn test_consecutive_days_increment() {
        let mut s = StreakState::default();
        for d in 1..=5 {
            s.update_streak(day(d));
        }
        assert_eq!(s.current_streak, 5);
        assert_eq!(s.longest_streak, 5);
    }

    #[test]
    fn test_gap_resets_streak_but_keeps_longest() {
        let mut s = StreakState::default();
        for d in 1..=3 {
            s.update_streak(day(d));
        }
        assert_eq!(s.update_streak(day(5)), StreakTransition::Reset);
        assert_eq!(s.current_streak, 1);
        assert_eq!(s.longest_streak, 3);
        assert_eq!(s.last_activity_date, Some(day(5)));
    }

    #[test]
    fn test_month_boundary_is_consecutive() {
        let mut s = StreakState {
            current_streak: 4,
            longest_streak: 4,
            last_activity_date: NaiveDate::from_ymd_opt(2024, 2, 29),
        };
        assert_eq!(s.update_streak(day(1)), StreakTransition::Extended);
        assert_eq!(s.current_streak, 5);
    }

    #[test]
    fn test_backdated_activity_resets_streak() {
        let mut s = StreakState::default();
        for d in 8..=10 {
            s.update_streak(day(d));
        }
        assert_eq!(s.update_streak(day(8)), StreakTransition::Reset);
        assert_eq!(s.current_streak, 1);
        assert_eq!(s.longest_streak, 3);
        assert_eq!(s.last_activity_date, Some(day(8)));
    }

    #[test]
    fn test_longest_tracks_restored_streak() {
        let mut s = StreakState {
            current_streak: 2,
            longest_streak: 2,
            last_activity_date: Some(day(2)),
        };
        s.update_streak(day(3));
        assert_eq!(s.longest_streak, 3);
    }
}
