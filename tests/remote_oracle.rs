//! RemoteOracle against a stub comparison service

use axum::{
    extract::{Json, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use preset_duel::config::{OracleConfig, SweepConfig};
use preset_duel::driver::{build_presets, ComparisonDriver, DriverError};
use preset_duel::oracle::{ChoiceOracle, OracleError, RemoteOracle};
use preset_duel::ParameterValues;

#[derive(Clone, Copy)]
enum StubBehaviour {
    PickB,
    Garbage,
    Stranger,
}

#[derive(Clone)]
struct StubState {
    behaviour: StubBehaviour,
    secret: Option<String>,
    seen_auth: Arc<Mutex<Vec<Option<String>>>>,
}

#[derive(Deserialize)]
struct ChoiceRequest {
    #[allow(dead_code)]
    a: ParameterValues,
    b: ParameterValues,
}

async fn prompt_choice(
    State(state): State<StubState>,
    headers: HeaderMap,
    Json(req): Json<ChoiceRequest>,
) -> Response {
    let auth = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.seen_auth.lock().await.push(auth.clone());

    if let Some(secret) = &state.secret {
        if auth.as_deref() != Some(format!("Bearer {}", secret).as_str()) {
            return (StatusCode::UNAUTHORIZED, "bad secret").into_response();
        }
    }

    match state.behaviour {
        StubBehaviour::PickB => Json(serde_json::json!({ "chosen": req.b })).into_response(),
        StubBehaviour::Garbage => (StatusCode::OK, "not json").into_response(),
        StubBehaviour::Stranger => {
            let stranger = ParameterValues { transparency: 0.42, ..req.b };
            Json(serde_json::json!({ "chosen": stranger })).into_response()
        }
    }
}

async fn spawn_stub(behaviour: StubBehaviour, secret: Option<&str>) -> (OracleConfig, StubState) {
    let state = StubState {
        behaviour,
        secret: secret.map(str::to_string),
        seen_auth: Arc::new(Mutex::new(Vec::new())),
    };
    let app = Router::new()
        .route("/prompt_choice", post(prompt_choice))
        .with_state(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = OracleConfig {
        network_port: port,
        ..OracleConfig::default()
    };
    (config, state)
}

fn two_presets() -> (ParameterValues, ParameterValues) {
    let presets = build_presets(2, &SweepConfig::default()).unwrap();
    (presets[0].parameters, presets[1].parameters)
}

#[tokio::test]
async fn test_remote_choice_without_credential() {
    let (config, state) = spawn_stub(StubBehaviour::PickB, None).await;
    let oracle = RemoteOracle::from_config(&config).unwrap();

    let (a, b) = two_presets();
    assert_eq!(oracle.prompt_choice(&a, &b).await.unwrap(), b);
    assert_eq!(*state.seen_auth.lock().await, vec![None]);
}

#[tokio::test]
async fn test_remote_choice_sends_bearer_when_required() {
    let (mut config, state) = spawn_stub(StubBehaviour::PickB, Some("s3cret")).await;
    config.require_credential = true;
    config.credential = Some("s3cret".to_string());

    let oracle = RemoteOracle::from_config(&config).unwrap();
    let (a, b) = two_presets();
    assert_eq!(oracle.prompt_choice(&a, &b).await.unwrap(), b);
    assert_eq!(*state.seen_auth.lock().await, vec![Some("Bearer s3cret".to_string())]);
}

#[tokio::test]
async fn test_rejected_credential_surfaces_status() {
    let (config, _state) = spawn_stub(StubBehaviour::PickB, Some("s3cret")).await;
    let oracle = RemoteOracle::from_config(&config).unwrap();

    let (a, b) = two_presets();
    match oracle.prompt_choice(&a, &b).await {
        Err(OracleError::Status { status, body }) => {
            assert_eq!(status, 401);
            assert_eq!(body, "bad secret");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_undecodable_response_is_protocol_error() {
    let (config, _state) = spawn_stub(StubBehaviour::Garbage, None).await;
    let oracle = RemoteOracle::from_config(&config).unwrap();

    let (a, b) = two_presets();
    assert!(matches!(oracle.prompt_choice(&a, &b).await, Err(OracleError::Protocol(_))));
}

#[tokio::test]
async fn test_unreachable_service_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let oracle = RemoteOracle::new(format!("http://127.0.0.1:{}", port), None);
    let (a, b) = two_presets();
    assert!(matches!(oracle.prompt_choice(&a, &b).await, Err(OracleError::Transport(_))));
}

#[tokio::test]
async fn test_driver_rejects_stranger_from_service() {
    let (config, state) = spawn_stub(StubBehaviour::Stranger, None).await;
    let oracle = Arc::new(RemoteOracle::from_config(&config).unwrap());

    let presets = build_presets(4, &SweepConfig::default()).unwrap();
    let mut driver = ComparisonDriver::new(oracle, presets).with_output(std::io::sink());

    assert!(matches!(driver.run().await, Err(DriverError::MalformedChoice { .. })));
    // aborted on the first pair
    assert_eq!(state.seen_auth.lock().await.len(), 1);
}
