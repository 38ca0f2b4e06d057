//! Core domain types for the fitness metrics engine.
//!
//! This module defines the plain records the calculators operate on:
//! - Physical profile and workout inputs
//! - Food portions and scaled macros
//! - Gamification state (progression, streak, earned badges)
//! - Badge and goal definitions

use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Profile Types
// ============================================================================

/// Gender as recorded on a user profile
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    Other,
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "M" | "MALE" => Ok(Gender::Male),
            "F" | "FEMALE" => Ok(Gender::Female),
            "OTHER" => Ok(Gender::Other),
            _ => Err(Error::unsupported("gender", s)),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "M"),
            Gender::Female => write!(f, "F"),
            Gender::Other => write!(f, "Other"),
        }
    }
}

/// Physical attributes used for BMR and calorie math
///
/// Every field is optional because profiles are filled in gradually;
/// calculators report which field is missing.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PhysicalProfile {
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
}

// ============================================================================
// Workout Types
// ============================================================================

/// Perceived workout intensity
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Light,
    #[default]
    Moderate,
    Vigorous,
}

impl Intensity {
    /// Multiplier applied to an activity's MET value
    pub fn met_multiplier(self) -> f64 {
        match self {
            Intensity::Light => 0.8,
            Intensity::Moderate => 1.0,
            Intensity::Vigorous => 1.2,
        }
    }
}

/// Unrecognized intensities are treated as moderate
impl FromStr for Intensity {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "light" => Intensity::Light,
            "moderate" => Intensity::Moderate,
            "vigorous" => Intensity::Vigorous,
            _ => {
                tracing::warn!("Unknown intensity '{}', using moderate", s);
                Intensity::Moderate
            }
        })
    }
}

/// A single logged workout
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkoutRecord {
    pub activity_name: String,
    pub duration_minutes: f64,
    #[serde(default)]
    pub intensity: Intensity,
}

impl WorkoutRecord {
    pub fn new(activity_name: impl Into<String>, duration_minutes: f64) -> Self {
        Self {
            activity_name: activity_name.into(),
            duration_minutes,
            intensity: Intensity::default(),
        }
    }

    pub fn with_intensity(mut self, intensity: Intensity) -> Self {
        self.intensity = intensity;
        self
    }
}

// ============================================================================
// Nutrition Types
// ============================================================================

/// A food's per-100g reference values plus the quantity eaten
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FoodPortion {
    pub calories_per_100g: f64,
    pub protein_g: Option<f64>,
    pub fat_g: Option<f64>,
    pub carbs_g: Option<f64>,
    pub quantity_grams: f64,
}

/// Nutritional values for an actual serving
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ScaledMacros {
    pub calories: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_g: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs_g: Option<f64>,
}

// ============================================================================
// Gamification State Types
// ============================================================================

/// XP and level progression
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressionState {
    pub total_xp: u64,
    pub current_level: u32,
    pub xp_in_current_level: u64,
}

impl Default for ProgressionState {
    fn default() -> Self {
        Self {
            total_xp: 0,
            current_level: 1,
            xp_in_current_level: 0,
        }
    }
}

/// Daily activity streak
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StreakState {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_activity_date: Option<NaiveDate>,
}

/// A user's complete gamification record
///
/// The caller owns persistence; the engine only mutates what it is handed.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GamificationState {
    #[serde(default)]
    pub progression: ProgressionState,
    #[serde(default)]
    pub streak: StreakState,
    #[serde(default)]
    pub earned_badges: BTreeSet<String>,
}

// ============================================================================
// Badge and Goal Types
// ============================================================================

/// Unlock condition for a badge
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum BadgeCondition {
    Streak(u32),
    TotalXp(u64),
    Level(u32),
}

/// A badge template
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub condition: BadgeCondition,
}

/// What a goal measures
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    WeightLoss,
    CalorieIntake,
    ActivityMinutes,
    Other(String),
}

/// Timeframe a goal applies to
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GoalPeriod {
    Daily,
    Weekly,
    Monthly,
    Overall,
}

/// A user health goal
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub goal_type: GoalType,
    pub target_value: f64,
    pub current_value: Option<f64>,
    pub unit: String,
    pub period: GoalPeriod,
}
