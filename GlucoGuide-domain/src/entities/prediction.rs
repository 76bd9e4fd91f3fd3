use serde::{Deserialize, Serialize};

/// Daily nutrition target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionTarget {
    /// Daily calorie target in kcal
    pub calories: f64,

    /// Daily protein target in grams
    pub protein: f64,

    /// Daily carbohydrate target in grams
    pub carbs: f64,
}

/// A single food item in a recommendation or meal plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Display name of the food
    pub name: String,

    /// Calories per serving in kcal
    pub calories: f64,

    /// Protein per serving in grams
    pub protein: f64,

    /// Carbohydrates per serving in grams
    pub carbs: f64,

    /// Glycemic index, passed through unmodified from the source
    pub gi: f64,

    /// Fiber per serving in grams, when the source tracks it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
}

/// Meal slots of a daily plan, in serving order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealSlot {
    /// All slots in serving order
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snacks,
    ];

    /// Wire label of the slot
    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snacks => "snacks",
        }
    }
}

/// Per-slot food recommendations as served by the prediction API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodRecommendations {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub breakfast: Vec<FoodItem>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lunch: Vec<FoodItem>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dinner: Vec<FoodItem>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub snacks: Vec<FoodItem>,
}

impl FoodRecommendations {
    /// Items recommended for the given slot
    pub fn for_slot(&self, slot: MealSlot) -> &[FoodItem] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
            MealSlot::Snacks => &self.snacks,
        }
    }
}

/// Input features the service may name as risk drivers
///
/// Unknown labels from newer service versions deserialize as `Other` rather
/// than failing the whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RiskFactor {
    Glucose,
    Bmi,
    Age,
    BloodPressure,
    #[serde(other)]
    Other,
}

/// Daily totals attached to a served meal plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MealPlanNutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
}

/// Prediction produced by the remote service or the local fallback
///
/// The optional fields are resolved once, centrally, by the view-model
/// normalizer; nothing downstream should substitute defaults on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Binary classification: 0 = low risk, 1 = high risk
    pub prediction: u8,

    /// Two-element distribution: [healthy, diabetic], summing to 1.0
    pub probability: [f64; 2],

    /// Accuracy reported for the model that produced the classification
    pub accuracy: f64,

    /// Features the service flagged as risk drivers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub risk_factors: Vec<RiskFactor>,

    /// Daily nutrition target, when the service computed one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<NutritionTarget>,

    /// Per-slot food recommendations, when the service computed them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_recommendations: Option<FoodRecommendations>,

    /// Sample daily plan, one item per slot in serving order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_meal_plan: Option<Vec<FoodItem>>,

    /// Totals the service computed for the sample plan
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_plan_nutrition: Option<MealPlanNutrition>,
}

impl PredictionResult {
    /// True when the classification flag marks high risk
    pub fn is_high_risk(&self) -> bool {
        self.prediction == 1
    }

    /// Diabetic probability as a percentage
    pub fn diabetic_percent(&self) -> f64 {
        self.probability[1] * 100.0
    }
}

/// A prediction tagged with its provenance
///
/// Every assessment resolves to one of these: the adapter never surfaces an
/// error, it degrades to `Fallback` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", content = "result", rename_all = "snake_case")]
pub enum PredictionOutcome {
    /// The remote service answered with a valid payload
    Remote(PredictionResult),

    /// The local heuristic stood in for an unreachable or broken service
    Fallback(PredictionResult),
}

impl PredictionOutcome {
    /// The carried prediction, regardless of provenance
    pub fn result(&self) -> &PredictionResult {
        match self {
            PredictionOutcome::Remote(result) | PredictionOutcome::Fallback(result) => result,
        }
    }

    /// Consume the outcome, keeping the carried prediction
    pub fn into_result(self) -> PredictionResult {
        match self {
            PredictionOutcome::Remote(result) | PredictionOutcome::Fallback(result) => result,
        }
    }

    /// True when the local heuristic produced the prediction
    pub fn is_fallback(&self) -> bool {
        matches!(self, PredictionOutcome::Fallback(_))
    }
}
