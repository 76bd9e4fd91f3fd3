pub mod fallback;
pub mod normalize;
pub mod validate;

// Domain services
// This module contains the derivation logic shared by the client.

// Re-export the service entry points
pub use fallback::{fallback_prediction, FALLBACK_ACCURACY};
pub use normalize::normalize;
pub use validate::{validate_health_input, AssessmentInputError};
