//! Basal Metabolic Rate via the Mifflin-St Jeor equation.
//!
//! Formula: BMR = 10 x weight_kg + 6.25 x height_cm - 5 x age + offset
//! - Men: +5
//! - Women: -161

use crate::config::NutritionConfig;
use crate::{Error, Gender, PhysicalProfile, Result};

const WEIGHT_COEF: f64 = 10.0;
const HEIGHT_COEF: f64 = 6.25;
const AGE_COEF: f64 = 5.0;
const MALE_OFFSET: f64 = 5.0;
const FEMALE_OFFSET: f64 = -161.0;

/// Calculate BMR (kcal/day) for a profile
///
/// # Errors
/// * `MissingInput` naming the first absent profile field
/// * `InvalidRange` for non-positive weight or height
/// * `UnsupportedValue` when gender is neither male nor female
pub fn calculate_bmr(profile: &PhysicalProfile) -> Result<f64> {
    let weight_kg = profile.weight_kg.ok_or(Error::MissingInput("weight_kg"))?;
    let height_cm = profile.height_cm.ok_or(Error::MissingInput("height_cm"))?;
    let age = profile.age.ok_or(Error::MissingInput("age"))?;
    let gender = profile.gender.ok_or(Error::MissingInput("gender"))?;

    Error::ensure_positive("weight_kg", weight_kg)?;
    Error::ensure_positive("height_cm", height_cm)?;

    let offset = match gender {
        Gender::Male => MALE_OFFSET,
        Gender::Female => FEMALE_OFFSET,
        Gender::Other => return Err(Error::unsupported("gender", gender.to_string())),
    };

    Ok(WEIGHT_COEF * weight_kg + HEIGHT_COEF * height_cm - AGE_COEF * f64::from(age) + offset)
}

/// Recommended daily calorie intake
///
/// BMR scaled by the configured activity multiplier and truncated to whole
/// calories. Profiles that cannot produce a BMR get the fallback target.
pub fn daily_calorie_target(profile: &PhysicalProfile, config: &NutritionConfig) -> u32 {
    match calculate_bmr(profile) {
        Ok(bmr) => (bmr * config.activity_multiplier).max(0.0) as u32,
        Err(e) => {
            tracing::debug!(
                "Using fallback calorie target {}: {}",
                config.fallback_daily_calories,
                e
            );
            config.fallback_daily_calories
        }
    }
}
