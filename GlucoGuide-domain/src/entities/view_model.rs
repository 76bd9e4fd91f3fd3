use serde::{Deserialize, Serialize};

use super::prediction::{FoodItem, MealSlot, NutritionTarget};

/// Coarse risk classification derived from the diabetic probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    /// Diabetic probability below 30%
    Low,

    /// Diabetic probability of 30% up to 60%
    Moderate,

    /// Diabetic probability of 60% or above
    High,
}

impl ToString for RiskTier {
    fn to_string(&self) -> String {
        match self {
            RiskTier::Low => "Low".to_string(),
            RiskTier::Moderate => "Moderate".to_string(),
            RiskTier::High => "High".to_string(),
        }
    }
}

/// Monitored input features, each with a fixed clinical threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RiskFeature {
    Glucose,
    Bmi,
    Age,
    BloodPressure,
    Insulin,
    Pregnancies,
}

impl RiskFeature {
    /// All monitored features in display order
    pub const ALL: [RiskFeature; 6] = [
        RiskFeature::Glucose,
        RiskFeature::Bmi,
        RiskFeature::Age,
        RiskFeature::BloodPressure,
        RiskFeature::Insulin,
        RiskFeature::Pregnancies,
    ];

    /// Threshold above which the feature counts as a risk flag
    pub fn threshold(&self) -> f64 {
        match self {
            RiskFeature::Glucose => 140.0,
            RiskFeature::Bmi => 30.0,
            RiskFeature::Age => 60.0,
            RiskFeature::BloodPressure => 90.0,
            RiskFeature::Insulin => 200.0,
            RiskFeature::Pregnancies => 5.0,
        }
    }

    /// Chart scale maximum for the feature
    pub fn scale_max(&self) -> f64 {
        match self {
            RiskFeature::Glucose => 200.0,
            RiskFeature::Bmi => 50.0,
            RiskFeature::Age => 100.0,
            RiskFeature::BloodPressure => 150.0,
            RiskFeature::Insulin => 300.0,
            RiskFeature::Pregnancies => 15.0,
        }
    }

    /// Display label for charts and summaries
    pub fn label(&self) -> &'static str {
        match self {
            RiskFeature::Glucose => "Glucose",
            RiskFeature::Bmi => "BMI",
            RiskFeature::Age => "Age",
            RiskFeature::BloodPressure => "Blood Pressure",
            RiskFeature::Insulin => "Insulin",
            RiskFeature::Pregnancies => "Pregnancies",
        }
    }
}

/// One monitored feature prepared for bar-chart rendering
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureReading {
    /// Which feature this reading describes
    pub feature: RiskFeature,

    /// Measured value from the submitted input
    pub value: f64,

    /// Fixed chart scale maximum for the feature
    pub scale_max: f64,

    /// Whether the value exceeds the feature's clinical threshold
    pub at_risk: bool,
}

/// Probability split in percent for the classification chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityBreakdown {
    pub healthy_pct: f64,
    pub diabetic_pct: f64,
}

/// One axis of the profile radar: a value as percent of its chart scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfilePoint {
    /// Axis label
    pub label: String,

    /// Value in percent of the axis scale
    pub pct: f64,
}

/// Weight category from the BMI value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,

    /// BMI of 18.5 up to 25
    NormalWeight,

    /// BMI of 25 up to 30
    Overweight,

    /// BMI of 30 or above
    Obese,
}

impl ToString for BmiCategory {
    fn to_string(&self) -> String {
        match self {
            BmiCategory::Underweight => "Underweight".to_string(),
            BmiCategory::NormalWeight => "Normal Weight".to_string(),
            BmiCategory::Overweight => "Overweight".to_string(),
            BmiCategory::Obese => "Obese".to_string(),
        }
    }
}

/// Glucose level category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GlucoseCategory {
    /// Below 70 mg/dL
    Low,

    /// 70 to 140 mg/dL
    Normal,

    /// Above 140, up to 199 mg/dL
    PreDiabetic,

    /// Above 199 mg/dL
    DiabeticRange,
}

impl ToString for GlucoseCategory {
    fn to_string(&self) -> String {
        match self {
            GlucoseCategory::Low => "Low Glucose".to_string(),
            GlucoseCategory::Normal => "Normal Glucose".to_string(),
            GlucoseCategory::PreDiabetic => "Pre-diabetic".to_string(),
            GlucoseCategory::DiabeticRange => "Diabetic Range".to_string(),
        }
    }
}

/// Dietary emphasis derived from the classification and glucose level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DietFocus {
    /// Low glycemic index foods recommended
    LowGlycemic,

    /// Balanced plan with moderate carbohydrates
    Balanced,
}

impl ToString for DietFocus {
    fn to_string(&self) -> String {
        match self {
            DietFocus::LowGlycemic => "Low GI Diet Recommended".to_string(),
            DietFocus::Balanced => "Balanced Diet Plan".to_string(),
        }
    }
}

/// One normalized meal-plan entry: a slot and the food served in it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanEntry {
    pub slot: MealSlot,
    pub item: FoodItem,
}

/// Nutrition totals computed across the normalized plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyTotals {
    /// Total calories in kcal
    pub calories: f64,

    /// Total protein in grams
    pub protein: f64,

    /// Total carbohydrates in grams
    pub carbs: f64,

    /// Total fiber in grams; items without fiber data contribute 0
    pub fiber: f64,
}

/// Canonical projection of a prediction plus its originating input
///
/// Read-only and fully populated: every presentation surface (summary card,
/// charts, meal plan) renders from this shape without further defaulting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentViewModel {
    /// Coarse tier from the diabetic probability
    pub risk_tier: RiskTier,

    /// Probability split in percent
    pub probability: ProbabilityBreakdown,

    /// Accuracy reported by the model that classified the input
    pub accuracy: f64,

    /// All monitored features with values, scales, and flags
    pub feature_readings: Vec<FeatureReading>,

    /// The subset of features whose values exceed their thresholds
    pub flagged_features: Vec<RiskFeature>,

    /// Radar axes for the health profile chart
    pub profile: Vec<ProfilePoint>,

    /// Weight category from the submitted BMI
    pub bmi_category: BmiCategory,

    /// Glucose category from the submitted level
    pub glucose_category: GlucoseCategory,

    /// Resolved daily nutrition target
    pub nutrition: NutritionTarget,

    /// Dietary emphasis for the recommendation views
    pub diet_focus: DietFocus,

    /// Normalized meal plan, at most one item per slot
    pub meal_plan: Vec<MealPlanEntry>,

    /// Totals computed across the normalized plan
    pub daily_totals: DailyTotals,
}
