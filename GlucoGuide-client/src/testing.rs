// Test doubles for the prediction service
//
// The mock is deterministic: calls are numbered from zero, and per-call
// delays and canned results are indexed by that number.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use gluco_guide_domain::entities::prediction::{NutritionTarget, RiskFactor};
use gluco_guide_domain::entities::{HealthInput, PredictionResult};

use crate::client::{PredictionApi, ServiceHealth};
use crate::error::PredictionClientError;

/// A result shaped like a remote model response
///
/// Values are deliberately distinct from the local fallback so tests can
/// tell the two sources apart.
pub fn sample_remote_result() -> PredictionResult {
    PredictionResult {
        prediction: 1,
        probability: [0.25, 0.75],
        accuracy: 0.91,
        risk_factors: vec![RiskFactor::Glucose],
        nutrition: Some(NutritionTarget {
            calories: 1800.0,
            protein: 70.0,
            carbs: 130.0,
        }),
        food_recommendations: None,
        sample_meal_plan: None,
        meal_plan_nutrition: None,
    }
}

/// In-memory mock of the prediction service
pub struct MockPredictionService {
    results: Vec<PredictionResult>,
    delays: Vec<Duration>,
    fail_all: bool,
    panic_all: bool,
    calls: Arc<AtomicUsize>,
}

impl Default for MockPredictionService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPredictionService {
    /// Create a mock that serves `sample_remote_result` immediately
    pub fn new() -> Self {
        Self {
            results: Vec::new(),
            delays: Vec::new(),
            fail_all: false,
            panic_all: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Serve this result for the first call
    pub fn with_result(mut self, result: PredictionResult) -> Self {
        self.results = vec![result];
        self
    }

    /// Serve these results in call order
    pub fn with_results(mut self, results: Vec<PredictionResult>) -> Self {
        self.results = results;
        self
    }

    /// Sleep this long before answering the first call
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delays = vec![delay];
        self
    }

    /// Sleep these durations before answering, indexed by call order
    pub fn with_delays(mut self, delays: Vec<Duration>) -> Self {
        self.delays = delays;
        self
    }

    /// Fail every call with a 500 status
    pub fn with_failure(mut self) -> Self {
        self.fail_all = true;
        self
    }

    /// Panic on every predict call
    pub fn with_panic(mut self) -> Self {
        self.panic_all = true;
        self
    }

    /// Number of predict calls received so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Shared handle to the call counter, usable after the mock is moved
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl PredictionApi for MockPredictionService {
    async fn predict(
        &self,
        _input: &HealthInput,
    ) -> Result<PredictionResult, PredictionClientError> {
        let index = self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delays.get(index) {
            tokio::time::sleep(*delay).await;
        }

        if self.panic_all {
            panic!("mock prediction service panicked");
        }

        if self.fail_all {
            return Err(PredictionClientError::Status(
                reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            ));
        }

        Ok(self
            .results
            .get(index)
            .cloned()
            .unwrap_or_else(sample_remote_result))
    }

    async fn check_health(&self) -> Result<ServiceHealth, PredictionClientError> {
        if self.fail_all {
            return Err(PredictionClientError::Status(
                reqwest::StatusCode::SERVICE_UNAVAILABLE,
            ));
        }

        Ok(ServiceHealth {
            status: "healthy".to_string(),
            model_loaded: true,
            version: Some("1.0.0".to_string()),
        })
    }

    async fn fetch_report(
        &self,
        _input: &HealthInput,
    ) -> Result<Vec<u8>, PredictionClientError> {
        if self.fail_all {
            return Err(PredictionClientError::Status(
                reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            ));
        }

        Ok(b"%PDF-1.4 mock report".to_vec())
    }
}
