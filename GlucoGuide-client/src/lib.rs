// GlucoGuide Client
// HTTP access to the GlucoGuide prediction service, the fallback-absorbing
// request adapter, and the submission state machine that keeps concurrent
// assessments consistent.

// Service endpoint configuration
pub mod config;

// Client-side error taxonomy
pub mod error;

// HTTP client for the prediction service
pub mod client;

// Request adapter that degrades to the local fallback
pub mod adapter;

// Submission state machine
pub mod state;

// In-memory mock of the prediction service
#[cfg(any(test, feature = "mock"))]
pub mod testing;

// Re-export common types for easier imports
pub use adapter::RequestAdapter;
pub use client::{
    create_default_prediction_client, PredictionApi, PredictionClient, ServiceHealth,
};
pub use config::ClientConfig;
pub use error::PredictionClientError;
pub use state::{AssessmentFlow, AssessmentState, SubmissionHandle};
