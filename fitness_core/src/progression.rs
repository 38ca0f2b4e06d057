//! XP and level progression.
//!
//! Progression rules:
//! 1. Level N needs `1000 * (N + 1)` XP to advance
//! 2. XP earned past a level's requirement carries into the next level
//! 3. A single award can cross several levels

use crate::ProgressionState;

/// XP awarded per workout minute unless configured otherwise
pub const DEFAULT_XP_PER_MINUTE: u64 = 5;

/// XP needed to advance past `level`
pub fn xp_required(level: u32) -> u64 {
    1000 * (u64::from(level) + 1)
}

/// XP earned for a workout of the given length
///
/// Fractional minutes are truncated.
pub fn xp_for_workout(duration_minutes: f64, xp_per_minute: u64) -> u64 {
    if duration_minutes <= 0.0 {
        return 0;
    }
    (duration_minutes as u64).saturating_mul(xp_per_minute)
}

impl ProgressionState {
    /// Add XP and apply any level ups
    ///
    /// Returns the (possibly unchanged) current level.
    pub fn add_xp(&mut self, amount: u64) -> u32 {
        self.total_xp = self.total_xp.saturating_add(amount);
        self.xp_in_current_level = self.xp_in_current_level.saturating_add(amount);

        let starting_level = self.current_level;
        let mut required = xp_required(self.current_level);
        while self.xp_in_current_level >= required {
            self.xp_in_current_level -= required;
            self.current_level += 1;
            required = xp_required(self.current_level);
        }

        if self.current_level > starting_level {
            tracing::info!(
                "Level up: {} -> {} ({} XP total)",
                starting_level,
                self.current_level,
                self.total_xp
            );
        } else {
            tracing::debug!(
                "Added {} XP: {}/{} toward level {}",
                amount,
                self.xp_in_current_level,
                required,
                self.current_level + 1
            );
        }

        self.current_level
    }

    /// XP required to leave the current level
    pub fn xp_for_next_level(&self) -> u64 {
        xp_required(self.current_level)
    }

    /// XP still missing before the next level up
    pub fn xp_to_next_level(&self) -> u64 {
        self.xp_for_next_level()
            .saturating_sub(self.xp_in_current_level)
    }
}
