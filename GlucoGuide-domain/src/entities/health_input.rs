use serde::{Deserialize, Serialize};
use validator::Validate;

/// Health metrics submitted for a risk assessment
///
/// Field names serialize to the wire format expected by the prediction
/// service (camelCase). Every field has a form default, so a partially
/// specified JSON document deserializes into a complete input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthInput {
    /// Number of pregnancies
    #[validate(range(min = 0.0, max = 17.0, message = "Pregnancies must be between 0 and 17"))]
    pub pregnancies: f64,

    /// Plasma glucose concentration in mg/dL
    #[validate(range(min = 0.0, max = 200.0, message = "Glucose must be between 0 and 200"))]
    pub glucose: f64,

    /// Diastolic blood pressure in mmHg
    #[validate(range(min = 0.0, max = 122.0, message = "Blood pressure must be between 0 and 122"))]
    pub blood_pressure: f64,

    /// Triceps skin-fold thickness in mm
    #[validate(range(min = 0.0, max = 100.0, message = "Skin thickness must be between 0 and 100"))]
    pub skin_thickness: f64,

    /// Serum insulin in μU/mL
    #[validate(range(min = 0.0, max = 846.0, message = "Insulin must be between 0 and 846"))]
    pub insulin: f64,

    /// Body mass index in kg/m²
    #[validate(range(min = 0.0, max = 67.0, message = "BMI must be between 0 and 67"))]
    pub bmi: f64,

    /// Diabetes pedigree function score
    #[validate(range(min = 0.0, max = 2.4, message = "Pedigree must be between 0 and 2.4"))]
    pub diabetes_pedigree_function: f64,

    /// Age in years
    #[validate(range(min = 21.0, max = 88.0, message = "Age must be between 21 and 88"))]
    pub age: f64,
}

impl Default for HealthInput {
    /// Initial values of the assessment intake form
    fn default() -> Self {
        Self {
            pregnancies: 3.0,
            glucose: 120.0,
            blood_pressure: 70.0,
            skin_thickness: 20.0,
            insulin: 79.0,
            bmi: 24.0,
            diabetes_pedigree_function: 0.47,
            age: 33.0,
        }
    }
}

impl HealthInput {
    /// Coerce non-numeric entries to 0
    ///
    /// Mirrors the intake form's handling of unparseable values: every field
    /// that is not a finite non-negative number becomes 0.
    pub fn sanitized(&self) -> Self {
        fn clean(value: f64) -> f64 {
            if value.is_finite() && value >= 0.0 {
                value
            } else {
                0.0
            }
        }

        Self {
            pregnancies: clean(self.pregnancies),
            glucose: clean(self.glucose),
            blood_pressure: clean(self.blood_pressure),
            skin_thickness: clean(self.skin_thickness),
            insulin: clean(self.insulin),
            bmi: clean(self.bmi),
            diabetes_pedigree_function: clean(self.diabetes_pedigree_function),
            age: clean(self.age),
        }
    }
}
