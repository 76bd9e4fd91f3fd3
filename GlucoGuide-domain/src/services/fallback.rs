use once_cell::sync::Lazy;

use crate::entities::health_input::HealthInput;
use crate::entities::prediction::{
    FoodItem, FoodRecommendations, NutritionTarget, PredictionResult, RiskFactor,
};

/// Accuracy advertised for the offline heuristic
pub const FALLBACK_ACCURACY: f64 = 0.952;

/// Fixed single-item recommendations served when no recommendation data exists
pub static DEFAULT_RECOMMENDATIONS: Lazy<FoodRecommendations> = Lazy::new(|| FoodRecommendations {
    breakfast: vec![FoodItem {
        name: "Steel-cut oats with berries".to_string(),
        calories: 250.0,
        protein: 8.0,
        carbs: 45.0,
        gi: 42.0,
        fiber: None,
    }],
    lunch: vec![FoodItem {
        name: "Grilled chicken salad".to_string(),
        calories: 350.0,
        protein: 35.0,
        carbs: 15.0,
        gi: 25.0,
        fiber: None,
    }],
    dinner: vec![FoodItem {
        name: "Grilled fish with asparagus".to_string(),
        calories: 320.0,
        protein: 30.0,
        carbs: 10.0,
        gi: 15.0,
        fiber: None,
    }],
    snacks: vec![FoodItem {
        name: "Almonds (1 oz)".to_string(),
        calories: 160.0,
        protein: 6.0,
        carbs: 6.0,
        gi: 15.0,
        fiber: None,
    }],
});

/// Compute the local stand-in prediction for an unreachable service
///
/// High risk when glucose > 140 or BMI > 30, low risk otherwise. The
/// probability pairs are fixed per branch, not derived from the tier
/// cutoffs; both sum to 1.0.
pub fn fallback_prediction(input: &HealthInput) -> PredictionResult {
    let high_risk = input.glucose > 140.0 || input.bmi > 30.0;

    PredictionResult {
        prediction: if high_risk { 1 } else { 0 },
        probability: if high_risk { [0.3, 0.7] } else { [0.8, 0.2] },
        accuracy: FALLBACK_ACCURACY,
        risk_factors: if high_risk {
            vec![RiskFactor::Glucose, RiskFactor::Bmi]
        } else {
            Vec::new()
        },
        nutrition: Some(NutritionTarget {
            calories: if input.bmi > 30.0 { 1600.0 } else { 2000.0 },
            protein: if input.bmi > 30.0 { 80.0 } else { 60.0 },
            carbs: if high_risk { 120.0 } else { 200.0 },
        }),
        food_recommendations: Some(DEFAULT_RECOMMENDATIONS.clone()),
        sample_meal_plan: None,
        meal_plan_nutrition: None,
    }
}
