pub mod health_input;
pub mod prediction;
pub mod view_model;

// Re-export common types for easier imports
pub use health_input::HealthInput;
pub use prediction::{
    FoodItem, FoodRecommendations, MealSlot, PredictionOutcome, PredictionResult,
};
pub use view_model::{AssessmentViewModel, RiskFeature, RiskTier};
