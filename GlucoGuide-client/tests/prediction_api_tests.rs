// Integration tests against a local stub of the prediction service

use std::net::SocketAddr;
use std::sync::Once;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use gluco_guide_client::{
    ClientConfig, PredictionApi, PredictionClient, RequestAdapter, ServiceHealth,
};
use gluco_guide_domain::entities::prediction::{
    FoodItem, FoodRecommendations, MealPlanNutrition, NutritionTarget, RiskFactor,
};
use gluco_guide_domain::entities::{HealthInput, PredictionOutcome, PredictionResult};

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_env_filter("debug").try_init();
    });
}

/// Serve a router on an ephemeral local port
async fn serve(router: Router) -> SocketAddr {
    init_tracing();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    addr
}

fn client_for(addr: SocketAddr) -> PredictionClient {
    PredictionClient::new(ClientConfig::new(format!("http://{}", addr)))
}

/// Stub predict endpoint that rejects requests missing any form field
async fn predict_checking_fields(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let required = [
        "pregnancies",
        "glucose",
        "bloodPressure",
        "skinThickness",
        "insulin",
        "bmi",
        "diabetesPedigreeFunction",
        "age",
    ];

    for key in required {
        if body.get(key).and_then(Value::as_f64).is_none() {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": format!("missing field {}", key) })),
            );
        }
    }

    (
        StatusCode::OK,
        Json(json!({
            "prediction": 1,
            "probability": [0.2, 0.8],
            "accuracy": 0.93,
            "risk_factors": ["glucose", "bmi"],
            "nutrition": { "calories": 1600.0, "protein": 80.0, "carbs": 120.0 }
        })),
    )
}

#[tokio::test]
async fn test_predict_posts_all_form_fields_in_camel_case() {
    let addr = serve(Router::new().route("/api/predict", post(predict_checking_fields))).await;
    let client = client_for(addr);

    let result = client.predict(&HealthInput::default()).await.unwrap();
    assert_eq!(result.prediction, 1);
    assert_eq!(result.probability, [0.2, 0.8]);
    assert_eq!(result.accuracy, 0.93);
    assert_eq!(
        result.risk_factors,
        vec![RiskFactor::Glucose, RiskFactor::Bmi]
    );
}

#[tokio::test]
async fn test_adapter_reports_remote_provenance_on_success() {
    let addr = serve(Router::new().route("/api/predict", post(predict_checking_fields))).await;
    let adapter = RequestAdapter::new(client_for(addr));

    let outcome = adapter.submit(&HealthInput::default()).await;
    assert!(matches!(outcome, PredictionOutcome::Remote(_)));
}

#[tokio::test]
async fn test_adapter_falls_back_on_server_error() {
    async fn failing() -> (StatusCode, &'static str) {
        (StatusCode::INTERNAL_SERVER_ERROR, "model exploded")
    }

    let addr = serve(Router::new().route("/api/predict", post(failing))).await;
    let adapter = RequestAdapter::new(client_for(addr));

    let outcome = adapter.submit(&HealthInput::default()).await;
    assert!(outcome.is_fallback());
    assert_eq!(outcome.result().probability, [0.8, 0.2]);
}

#[tokio::test]
async fn test_adapter_falls_back_on_malformed_body() {
    async fn garbled() -> &'static str {
        "this is not json"
    }

    let addr = serve(Router::new().route("/api/predict", post(garbled))).await;
    let adapter = RequestAdapter::new(client_for(addr));

    let outcome = adapter.submit(&HealthInput::default()).await;
    assert!(outcome.is_fallback());
}

#[tokio::test]
async fn test_adapter_falls_back_when_the_service_is_unreachable() {
    init_tracing();

    // Bind and immediately drop to get a port with nothing listening
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let adapter = RequestAdapter::new(client_for(addr));
    let outcome = adapter.submit(&HealthInput::default()).await;
    assert!(outcome.is_fallback());
    assert_eq!(outcome.result().accuracy, 0.952);
}

#[tokio::test]
async fn test_full_payload_decodes_every_optional_field() {
    async fn full_payload() -> Json<Value> {
        Json(json!({
            "prediction": 0,
            "probability": [0.7, 0.3],
            "accuracy": 0.93,
            "risk_factors": ["bloodPressure"],
            "nutrition": { "calories": 2000.0, "protein": 60.0, "carbs": 200.0 },
            "food_recommendations": {
                "breakfast": [
                    { "name": "Oatmeal", "calories": 250.0, "protein": 8.0,
                      "carbs": 45.0, "gi": 42.0, "fiber": 4.0 }
                ]
            },
            "sample_meal_plan": [
                { "name": "Veggie omelette", "calories": 300.0, "protein": 20.0,
                  "carbs": 6.0, "gi": 15.0 }
            ],
            "meal_plan_nutrition": { "calories": 1500.0, "protein": 70.0,
                                     "carbs": 150.0, "fiber": 20.0 }
        }))
    }

    let addr = serve(Router::new().route("/api/predict", post(full_payload))).await;
    let client = client_for(addr);

    let result = client.predict(&HealthInput::default()).await.unwrap();
    let expected = PredictionResult {
        prediction: 0,
        probability: [0.7, 0.3],
        accuracy: 0.93,
        risk_factors: vec![RiskFactor::BloodPressure],
        nutrition: Some(NutritionTarget {
            calories: 2000.0,
            protein: 60.0,
            carbs: 200.0,
        }),
        food_recommendations: Some(FoodRecommendations {
            breakfast: vec![FoodItem {
                name: "Oatmeal".to_string(),
                calories: 250.0,
                protein: 8.0,
                carbs: 45.0,
                gi: 42.0,
                fiber: Some(4.0),
            }],
            ..FoodRecommendations::default()
        }),
        sample_meal_plan: Some(vec![FoodItem {
            name: "Veggie omelette".to_string(),
            calories: 300.0,
            protein: 20.0,
            carbs: 6.0,
            gi: 15.0,
            fiber: None,
        }]),
        meal_plan_nutrition: Some(MealPlanNutrition {
            calories: 1500.0,
            protein: 70.0,
            carbs: 150.0,
            fiber: Some(20.0),
        }),
    };

    assert_eq!(result, expected);
}

#[tokio::test]
async fn test_health_check_parses_the_service_report() {
    async fn health() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "model_loaded": true,
            "version": "1.0.0",
            "endpoints": { "predict": "/api/predict" }
        }))
    }

    let addr = serve(Router::new().route("/api/health", get(health))).await;
    let client = client_for(addr);

    let report = client.check_health().await.unwrap();
    assert_eq!(
        report,
        ServiceHealth {
            status: "healthy".to_string(),
            model_loaded: true,
            version: Some("1.0.0".to_string()),
        }
    );
}

#[tokio::test]
async fn test_health_check_surfaces_a_status_error() {
    async fn unavailable() -> StatusCode {
        StatusCode::SERVICE_UNAVAILABLE
    }

    let addr = serve(Router::new().route("/api/health", get(unavailable))).await;
    let client = client_for(addr);

    let err = client.check_health().await.unwrap_err();
    assert_eq!(err.class(), "status");
}

#[tokio::test]
async fn test_report_bytes_are_returned_unchanged() {
    async fn report() -> Vec<u8> {
        b"%PDF-1.4 stub report".to_vec()
    }

    let addr = serve(Router::new().route("/api/report", post(report))).await;
    let client = client_for(addr);

    let bytes = client.fetch_report(&HealthInput::default()).await.unwrap();
    assert_eq!(bytes, b"%PDF-1.4 stub report".to_vec());
}

#[tokio::test]
async fn test_report_failure_surfaces_a_status_error() {
    async fn failing() -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    let addr = serve(Router::new().route("/api/report", post(failing))).await;
    let client = client_for(addr);

    let err = client
        .fetch_report(&HealthInput::default())
        .await
        .unwrap_err();
    assert_eq!(err.class(), "status");
}
