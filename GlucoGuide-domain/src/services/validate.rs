use thiserror::Error;
use validator::Validate;

use crate::entities::health_input::HealthInput;

/// Errors for assessment input handling
#[derive(Debug, Error)]
pub enum AssessmentInputError {
    /// Validation error with details
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Validate a health input against the documented field ranges
///
/// All range violations are collected into a single message so the caller
/// can surface them in one pass.
pub fn validate_health_input(input: &HealthInput) -> Result<(), AssessmentInputError> {
    if let Err(validation_errors) = input.validate() {
        let error_messages: Vec<String> = validation_errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| format!("Invalid {}", field))
                })
            })
            .collect();

        return Err(AssessmentInputError::Validation(error_messages.join("; ")));
    }

    Ok(())
}
