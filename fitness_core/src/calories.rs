//! Calorie burn estimation using the MET formula.
//!
//! `calories = MET * weight_kg * hours`, where the activity's MET is scaled
//! by the workout intensity.

use crate::{met, round2, Error, Result, WorkoutRecord};

/// Estimate calories burned for a workout
///
/// Unknown activities fall back to the default MET rather than failing.
///
/// # Errors
/// * `MissingInput` if `weight_kg` is `None`
/// * `InvalidRange` if the weight or duration is not positive
pub fn calories_burned(workout: &WorkoutRecord, weight_kg: Option<f64>) -> Result<f64> {
    let weight_kg = weight_kg.ok_or(Error::MissingInput("weight_kg"))?;
    Error::ensure_positive("weight_kg", weight_kg)?;
    Error::ensure_positive("duration_minutes", workout.duration_minutes)?;

    let met = met::met_for(&workout.activity_name) * workout.intensity.met_multiplier();
    let hours = workout.duration_minutes / 60.0;
    let calories = round2(met * weight_kg * hours);

    tracing::debug!(
        "{} for {} min ({:?}): MET {:.2} -> {} kcal",
        workout.activity_name,
        workout.duration_minutes,
        workout.intensity,
        met,
        calories
    );

    Ok(calories)
}
