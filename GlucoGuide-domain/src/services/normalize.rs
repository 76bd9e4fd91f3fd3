use crate::entities::health_input::HealthInput;
use crate::entities::prediction::{MealSlot, NutritionTarget, PredictionResult};
use crate::entities::view_model::{
    AssessmentViewModel, BmiCategory, DailyTotals, DietFocus, FeatureReading, GlucoseCategory,
    MealPlanEntry, ProbabilityBreakdown, ProfilePoint, RiskFeature, RiskTier,
};
use crate::services::fallback::DEFAULT_RECOMMENDATIONS;

/// Tier from the diabetic probability in percent
///
/// Strict less-than at each rung: exactly 30 is Moderate, exactly 60 is High.
pub fn risk_tier_for(diabetic_pct: f64) -> RiskTier {
    if diabetic_pct < 30.0 {
        RiskTier::Low
    } else if diabetic_pct < 60.0 {
        RiskTier::Moderate
    } else {
        RiskTier::High
    }
}

/// Weight category from a BMI value
pub fn categorize_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::NormalWeight
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Glucose category from a level in mg/dL
pub fn categorize_glucose(glucose: f64) -> GlucoseCategory {
    if glucose < 70.0 {
        GlucoseCategory::Low
    } else if glucose <= 140.0 {
        GlucoseCategory::Normal
    } else if glucose <= 199.0 {
        GlucoseCategory::PreDiabetic
    } else {
        GlucoseCategory::DiabeticRange
    }
}

/// Submitted value for a monitored feature
fn feature_value(input: &HealthInput, feature: RiskFeature) -> f64 {
    match feature {
        RiskFeature::Glucose => input.glucose,
        RiskFeature::Bmi => input.bmi,
        RiskFeature::Age => input.age,
        RiskFeature::BloodPressure => input.blood_pressure,
        RiskFeature::Insulin => input.insulin,
        RiskFeature::Pregnancies => input.pregnancies,
    }
}

/// Value as percent of a chart scale
fn percent_of(value: f64, scale: f64) -> f64 {
    (value / scale) * 100.0
}

/// Resolve the meal plan to at most one item per slot
///
/// Priority: the served sample plan (paired with slots in serving order),
/// then the first item of each recommendation slot, then the fixed default
/// table. Slots with nothing to serve are skipped.
fn resolve_meal_plan(result: &PredictionResult) -> Vec<MealPlanEntry> {
    if let Some(plan) = &result.sample_meal_plan {
        return MealSlot::ALL
            .iter()
            .zip(plan.iter())
            .map(|(slot, item)| MealPlanEntry {
                slot: *slot,
                item: item.clone(),
            })
            .collect();
    }

    let recommendations = result
        .food_recommendations
        .as_ref()
        .unwrap_or(&DEFAULT_RECOMMENDATIONS);

    MealSlot::ALL
        .iter()
        .filter_map(|slot| {
            recommendations.for_slot(*slot).first().map(|item| MealPlanEntry {
                slot: *slot,
                item: item.clone(),
            })
        })
        .collect()
}

/// Totals across the normalized plan; items without fiber data contribute 0
fn sum_plan(plan: &[MealPlanEntry]) -> DailyTotals {
    let mut totals = DailyTotals {
        calories: 0.0,
        protein: 0.0,
        carbs: 0.0,
        fiber: 0.0,
    };

    for entry in plan {
        totals.calories += entry.item.calories;
        totals.protein += entry.item.protein;
        totals.carbs += entry.item.carbs;
        totals.fiber += entry.item.fiber.unwrap_or(0.0);
    }

    totals
}

/// Project a prediction and its originating input into the canonical view model
///
/// Pure and deterministic: no I/O, no clocks. Optional result fields are
/// resolved here, once; presentation code never substitutes defaults.
pub fn normalize(result: &PredictionResult, input: &HealthInput) -> AssessmentViewModel {
    let diabetic_pct = result.diabetic_percent();
    let healthy_pct = result.probability[0] * 100.0;
    let high_risk = result.is_high_risk();

    let feature_readings: Vec<FeatureReading> = RiskFeature::ALL
        .iter()
        .map(|feature| {
            let value = feature_value(input, *feature);
            FeatureReading {
                feature: *feature,
                value,
                scale_max: feature.scale_max(),
                at_risk: value > feature.threshold(),
            }
        })
        .collect();

    let flagged_features: Vec<RiskFeature> = feature_readings
        .iter()
        .filter(|reading| reading.at_risk)
        .map(|reading| reading.feature)
        .collect();

    let profile = vec![
        ProfilePoint {
            label: "Glucose".to_string(),
            pct: percent_of(input.glucose, 200.0),
        },
        ProfilePoint {
            label: "BMI".to_string(),
            pct: percent_of(input.bmi, 50.0),
        },
        ProfilePoint {
            label: "Age".to_string(),
            pct: percent_of(input.age, 100.0),
        },
        ProfilePoint {
            label: "BP".to_string(),
            pct: percent_of(input.blood_pressure, 150.0),
        },
        ProfilePoint {
            label: "Insulin".to_string(),
            pct: percent_of(input.insulin, 300.0),
        },
        ProfilePoint {
            label: "Pedigree".to_string(),
            pct: percent_of(input.diabetes_pedigree_function, 2.5),
        },
    ];

    let meal_plan = resolve_meal_plan(result);
    let daily_totals = sum_plan(&meal_plan);

    let nutrition = result.nutrition.unwrap_or(NutritionTarget {
        calories: 2000.0,
        protein: 50.0,
        carbs: if high_risk { 120.0 } else { 200.0 },
    });

    let diet_focus = if high_risk || input.glucose > 140.0 {
        DietFocus::LowGlycemic
    } else {
        DietFocus::Balanced
    };

    AssessmentViewModel {
        risk_tier: risk_tier_for(diabetic_pct),
        probability: ProbabilityBreakdown {
            healthy_pct,
            diabetic_pct,
        },
        accuracy: result.accuracy,
        feature_readings,
        flagged_features,
        profile,
        bmi_category: categorize_bmi(input.bmi),
        glucose_category: categorize_glucose(input.glucose),
        nutrition,
        diet_focus,
        meal_plan,
        daily_totals,
    }
}
