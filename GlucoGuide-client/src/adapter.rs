use tracing::{info, instrument, warn};

use gluco_guide_domain::entities::{HealthInput, PredictionOutcome};
use gluco_guide_domain::services::fallback_prediction;

use crate::client::PredictionApi;

/// Adapter between the assessment flow and the prediction service
///
/// Absorbs every client error into the local fallback heuristic, so
/// submission always yields an outcome. One remote attempt per call,
/// no retries; provenance is recorded on the outcome.
pub struct RequestAdapter<A: PredictionApi> {
    api: A,
}

impl<A: PredictionApi> RequestAdapter<A> {
    /// Create an adapter over the given service client
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Submit a health input and return an outcome from either source
    #[instrument(skip(self, input))]
    pub async fn submit(&self, input: &HealthInput) -> PredictionOutcome {
        match self.api.predict(input).await {
            Ok(result) => {
                info!("Prediction served by the remote model");
                PredictionOutcome::Remote(result)
            }
            Err(err) => {
                warn!(
                    class = err.class(),
                    "Prediction call failed, using local fallback: {}", err
                );
                PredictionOutcome::Fallback(fallback_prediction(input))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample_remote_result, MockPredictionService};

    #[tokio::test]
    async fn test_remote_result_passes_through() {
        let expected = sample_remote_result();
        let adapter = RequestAdapter::new(
            MockPredictionService::new().with_result(expected.clone()),
        );

        let outcome = adapter.submit(&HealthInput::default()).await;
        match outcome {
            PredictionOutcome::Remote(result) => assert_eq!(result, expected),
            PredictionOutcome::Fallback(_) => panic!("expected a remote outcome"),
        }
    }

    #[tokio::test]
    async fn test_service_failure_degrades_to_fallback() {
        let mock = MockPredictionService::new().with_failure();
        let adapter = RequestAdapter::new(mock);

        let outcome = adapter.submit(&HealthInput::default()).await;
        assert!(outcome.is_fallback());

        // Default input is low risk under the fallback heuristic
        let result = outcome.result();
        assert_eq!(result.prediction, 0);
        assert_eq!(result.probability, [0.8, 0.2]);
        assert_eq!(result.accuracy, 0.952);
    }

    #[tokio::test]
    async fn test_single_attempt_no_retry() {
        let mock = MockPredictionService::new().with_failure();
        let counter = mock.call_counter();
        let adapter = RequestAdapter::new(mock);

        adapter.submit(&HealthInput::default()).await;
        assert_eq!(counter.load(std::sync::atomic::Ordering::SeqCst), 1);
    }
}
