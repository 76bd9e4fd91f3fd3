// GlucoGuide demo binary
//
// Reads a health input from a JSON file (or uses the form defaults), runs
// one assessment through the submission flow, prints the normalized view,
// and optionally saves the PDF report.

use std::fmt;
use std::fs;

use clap::Parser;
use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use gluco_guide_domain::entities::HealthInput;
use gluco_guide_domain::services::{validate_health_input, AssessmentInputError};

use gluco_guide_client::{
    AssessmentFlow, AssessmentState, ClientConfig, PredictionApi, PredictionClient,
    PredictionClientError, RequestAdapter,
};

const DEFAULT_REPORT_PATH: &str = "diabetes_report.pdf";

/// Top-level application error
#[derive(Debug)]
enum AppError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Validation(AssessmentInputError),
    Service(PredictionClientError),
    Task(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io(err) => write!(f, "I/O error: {}", err),
            AppError::Json(err) => write!(f, "JSON error: {}", err),
            AppError::Validation(err) => write!(f, "{}", err),
            AppError::Service(err) => write!(f, "Service error: {}", err),
            AppError::Task(message) => write!(f, "Assessment failed: {}", message),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<AssessmentInputError> for AppError {
    fn from(err: AssessmentInputError) -> Self {
        AppError::Validation(err)
    }
}

impl From<PredictionClientError> for AppError {
    fn from(err: PredictionClientError) -> Self {
        AppError::Service(err)
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "gluco_guide",
    about = "GlucoGuide diabetes risk assessment client",
    long_about = "Runs one assessment against the prediction service and prints the \
                  canonical view model, degrading to the local fallback heuristic when \
                  the service is unavailable."
)]
struct CliArgs {
    /// Path to a JSON health input file (form defaults when omitted)
    #[arg(long)]
    input: Option<String>,

    /// Save the PDF report, optionally to the given path
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_REPORT_PATH)]
    report: Option<String>,
}

/// Load the health input from a file, or fall back to the form defaults
fn load_input(path: Option<&str>) -> Result<HealthInput, AppError> {
    let input = match path {
        Some(path) => {
            let raw = fs::read_to_string(path)?;
            serde_json::from_str::<HealthInput>(&raw)?
        }
        None => HealthInput::default(),
    };

    Ok(input.sanitized())
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load environment variables from a .env file if present
    if dotenv().is_err() {
        eprintln!("Warning: .env file not found, using environment variables");
    }

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();

    let input = load_input(args.input.as_deref())?;
    validate_health_input(&input)?;

    let config = ClientConfig::from_env();
    info!("Using prediction service at {}", config.base_url());
    let client = PredictionClient::new(config);

    // A failed probe is not fatal; the flow degrades to the local fallback
    match client.check_health().await {
        Ok(health) => info!(
            model_loaded = health.model_loaded,
            "Service reports status \"{}\"", health.status
        ),
        Err(err) => warn!(
            class = err.class(),
            "Health check failed, the assessment may use the local fallback: {}", err
        ),
    }

    let flow = AssessmentFlow::new(RequestAdapter::new(client.clone()));
    let handle = flow.begin(input.clone());
    handle
        .wait()
        .await
        .map_err(|err| AppError::Task(err.to_string()))?;

    match flow.state() {
        AssessmentState::Resolved { outcome, view, .. } => {
            let source = if outcome.is_fallback() {
                "local fallback"
            } else {
                "remote model"
            };
            println!("Assessment source: {}", source);
            println!(
                "Risk tier: {} ({:.1}% diabetic, model accuracy {:.1}%)",
                view.risk_tier.to_string(),
                view.probability.diabetic_pct,
                view.accuracy * 100.0
            );
            println!(
                "Categories: {} / {}, {}",
                view.bmi_category.to_string(),
                view.glucose_category.to_string(),
                view.diet_focus.to_string()
            );
            if !view.flagged_features.is_empty() {
                let flagged: Vec<&str> =
                    view.flagged_features.iter().map(|f| f.label()).collect();
                println!("Elevated: {}", flagged.join(", "));
            }
            for entry in &view.meal_plan {
                println!(
                    "  {}: {} ({} kcal)",
                    entry.slot.as_str(),
                    entry.item.name,
                    entry.item.calories
                );
            }
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        AssessmentState::Failed { message, .. } => return Err(AppError::Task(message)),
        other => {
            return Err(AppError::Task(format!(
                "assessment did not resolve: {:?}",
                other
            )))
        }
    }

    if let Some(report_path) = args.report {
        let bytes = client.fetch_report(&input).await?;
        fs::write(&report_path, &bytes)?;
        info!("Report written to {} ({} bytes)", report_path, bytes.len());
    }

    Ok(())
}
