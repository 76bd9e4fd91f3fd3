use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use futures::FutureExt;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, error, info, instrument};

use gluco_guide_domain::entities::{AssessmentViewModel, HealthInput, PredictionOutcome};
use gluco_guide_domain::services::normalize;

use crate::adapter::RequestAdapter;
use crate::client::PredictionApi;

/// Lifecycle of an assessment submission
#[derive(Debug, Clone, PartialEq)]
pub enum AssessmentState {
    /// Nothing in flight and nothing resolved
    Idle,

    /// The newest submission is awaiting its outcome
    Submitting {
        generation: u64,
        started_at: DateTime<Utc>,
    },

    /// The newest submission resolved with an outcome from either source
    Resolved {
        generation: u64,
        outcome: PredictionOutcome,
        view: AssessmentViewModel,
        completed_at: DateTime<Utc>,
    },

    /// The newest submission's task died before it could commit
    Failed { generation: u64, message: String },
}

impl AssessmentState {
    /// Whether a submission is currently awaiting its outcome
    pub fn is_submitting(&self) -> bool {
        matches!(self, AssessmentState::Submitting { .. })
    }
}

/// Handle on a spawned submission task
pub struct SubmissionHandle {
    generation: u64,
    task: JoinHandle<()>,
}

impl SubmissionHandle {
    /// Generation number assigned to this submission
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Wait for the submission task to finish
    ///
    /// Completion does not imply the outcome was committed; a newer
    /// submission or a cancel may have made it stale.
    pub async fn wait(self) -> Result<(), JoinError> {
        self.task.await
    }
}

/// State machine that keeps concurrent submissions consistent
///
/// Every submission takes a fresh generation number from a shared counter.
/// A task commits its outcome only while its generation is still the
/// newest, so the final state reflects the latest submission no matter
/// the order responses arrive in. The state lock is never held across
/// an await point.
pub struct AssessmentFlow<A: PredictionApi + 'static> {
    adapter: Arc<RequestAdapter<A>>,
    state: Arc<Mutex<AssessmentState>>,
    generation: Arc<AtomicU64>,
}

impl<A: PredictionApi + 'static> AssessmentFlow<A> {
    /// Create an idle flow over the given adapter
    pub fn new(adapter: RequestAdapter<A>) -> Self {
        Self {
            adapter: Arc::new(adapter),
            state: Arc::new(Mutex::new(AssessmentState::Idle)),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> AssessmentState {
        self.state.lock().unwrap().clone()
    }

    /// Start a submission and return a handle on its task
    ///
    /// The generation bump and the Submitting transition happen under one
    /// lock acquisition, so no other submission can interleave between them.
    #[instrument(skip(self, input))]
    pub fn begin(&self, input: HealthInput) -> SubmissionHandle {
        let generation = {
            let mut state = self.state.lock().unwrap();
            let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *state = AssessmentState::Submitting {
                generation,
                started_at: Utc::now(),
            };
            generation
        };
        info!(generation, "Assessment submission started");

        let adapter = Arc::clone(&self.adapter);
        let state = Arc::clone(&self.state);
        let latest = Arc::clone(&self.generation);

        let task = tokio::spawn(async move {
            let work = async {
                let outcome = adapter.submit(&input).await;
                let view = normalize(outcome.result(), &input);
                (outcome, view)
            };

            match AssertUnwindSafe(work).catch_unwind().await {
                Ok((outcome, view)) => {
                    let mut state = state.lock().unwrap();
                    if latest.load(Ordering::SeqCst) == generation {
                        *state = AssessmentState::Resolved {
                            generation,
                            outcome,
                            view,
                            completed_at: Utc::now(),
                        };
                        info!(generation, "Assessment resolved");
                    } else {
                        debug!(generation, "Discarding stale assessment outcome");
                    }
                }
                Err(panic) => {
                    let message = panic_message(panic);
                    let mut state = state.lock().unwrap();
                    if latest.load(Ordering::SeqCst) == generation {
                        error!(generation, "Assessment task died: {}", message);
                        *state = AssessmentState::Failed {
                            generation,
                            message,
                        };
                    } else {
                        debug!(generation, "Discarding stale assessment failure");
                    }
                }
            }
        });

        SubmissionHandle { generation, task }
    }

    /// Abandon the in-flight submission and return to Idle
    ///
    /// The task itself keeps running; bumping the generation makes its
    /// eventual commit stale, so the outcome is discarded.
    #[instrument(skip(self))]
    pub fn cancel(&self) {
        let mut state = self.state.lock().unwrap();
        let abandoned = self.generation.fetch_add(1, Ordering::SeqCst);
        *state = AssessmentState::Idle;
        info!(abandoned, "Assessment submission cancelled");
    }
}

/// Human-readable message from a caught panic payload
fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "assessment task panicked".to_string()
    }
}
