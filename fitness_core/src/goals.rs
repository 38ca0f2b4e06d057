//! Goal progress evaluation.

use crate::{Goal, GoalType};

impl Goal {
    /// Progress toward the target as a percentage in [0, 100]
    ///
    /// Weight-loss goals measure how far the current value still is above
    /// the target, relative to the current value.
    pub fn progress_percentage(&self) -> f64 {
        let Some(current) = self.current_value else {
            return 0.0;
        };
        if self.target_value == 0.0 {
            return 0.0;
        }

        let progress = match self.goal_type {
            GoalType::WeightLoss => {
                if current == 0.0 {
                    return 0.0;
                }
                (current - self.target_value) / current * 100.0
            }
            _ => current / self.target_value * 100.0,
        };

        progress.clamp(0.0, 100.0)
    }

    /// Whether the goal has been reached
    pub fn is_completed(&self) -> bool {
        match (self.current_value, &self.goal_type) {
            (None, _) => false,
            (Some(current), GoalType::WeightLoss) => current <= self.target_value,
            (Some(current), _) => current >= self.target_value,
        }
    }
}
