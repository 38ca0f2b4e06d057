//! Serving-size scaling of per-100g nutrition values.

use crate::{round2, Error, FoodPortion, Result, ScaledMacros};
use serde::{Deserialize, Serialize};

/// Scale a food's per-100g values to the quantity eaten
///
/// Macros that are absent on the food stay absent in the output.
///
/// # Errors
/// `InvalidRange` if `quantity_grams` is not positive.
pub fn scale_macros(portion: &FoodPortion) -> Result<ScaledMacros> {
    Error::ensure_positive("quantity_grams", portion.quantity_grams)?;

    let factor = portion.quantity_grams / 100.0;
    let scale = |value: Option<f64>| value.map(|v| round2(v * factor));

    Ok(ScaledMacros {
        calories: round2(portion.calories_per_100g * factor),
        protein_g: scale(portion.protein_g),
        fat_g: scale(portion.fat_g),
        carbs_g: scale(portion.carbs_g),
    })
}

/// Summed intake for a day's food entries
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DailyTotals {
    pub calories: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
}

impl DailyTotals {
    /// Sum entries, counting absent macros as zero
    pub fn from_entries(entries: &[ScaledMacros]) -> Self {
        entries.iter().fold(Self::default(), |mut totals, entry| {
            totals.calories += entry.calories;
            totals.protein_g += entry.protein_g.unwrap_or(0.0);
            totals.fat_g += entry.fat_g.unwrap_or(0.0);
            totals.carbs_g += entry.carbs_g.unwrap_or(0.0);
            totals
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portion(quantity_grams: f64) -> FoodPortion {
        FoodPortion {
            calories_per_100g: 200.0,
            protein_g: None,
            fat_g: Some(3.6),
            carbs_g: Some(0.0),
            quantity_grams,
        }
    }

    #[test]
    fn test_scales_calories_by_quantity() {
        let scaled = scale_macros(&portion(150.0)).unwrap();
        assert!((scaled.calories - 300.0).abs() < 1e-9);
        assert_eq!(scaled.protein_g, None);
        assert!((scaled.fat_g.unwrap() - 5.4).abs() < 1e-9);
    }

    #[test]
    fn test_zero_macro_is_not_absent() {
        let scaled = scale_macros(&portion(150.0)).unwrap();
        assert_eq!(scaled.carbs_g, Some(0.0));
    }

    #[test]
    fn test_rounding() {
        let food = FoodPortion {
            calories_per_100g: 52.0,
            protein_g: Some(0.3),
            fat_g: Some(0.2),
            carbs_g: Some(14.0),
            quantity_grams: 182.0,
        };
        let scaled = scale_macros(&food).unwrap();
        assert!((scaled.calories - 94.64).abs() < 1e-9);
        assert!((scaled.protein_g.unwrap() - 0.55).abs() < 1e-9);
        assert!((scaled.carbs_g.unwrap() - 25.48).abs() < 1e-9);
    }

    #[test]
    fn test_non_positive_quantity_rejected() {
        assert!(matches!(
            scale_macros(&portion(0.0)),
            Err(Error::InvalidRange {
                field: "quantity_grams",
                ..
            })
        ));
        assert!(scale_macros(&portion(-10.0)).is_err());
    }

    #[test]
    fn test_daily_totals() {
        let entries = vec![
            ScaledMacros {
                calories: 300.0,
                protein_g: Some(20.0),
                fat_g: None,
                carbs_g: Some(10.0),
            },
            ScaledMacros {
                calories: 150.5,
                protein_g: None,
                fat_g: Some(4.0),
                carbs_g: Some(2.5),
            },
        ];
        let totals = DailyTotals::from_entries(&entries);
        assert!((totals.calories - 450.5).abs() < 1e-9);
        assert!((totals.protein_g - 20.0).abs() < 1e-9);
        assert!((totals.fat_g - 4.0).abs() < 1e-9);
        assert!((totals.carbs_g - 12.5).abs() < 1e-9);
    }
}
