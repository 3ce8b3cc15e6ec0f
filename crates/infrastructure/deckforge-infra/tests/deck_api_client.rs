use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use deckforge_core::{BuildDeckRequest, Card, DeckFormat};
use deckforge_infra::net::{ApiError, ApiErrorKind, DeckApiClient};
use serde_json::{json, Value};
use std::net::SocketAddr;

async fn validate_commander(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    match body["name"].as_str() {
        Some("Thrasios, Triton Hero") => (
            StatusCode::OK,
            Json(json!({
                "name": "Thrasios, Triton Hero",
                "oracle_text": "{4}: Scry 1... Partner",
                "color_identity": ["G", "U"],
                "has_partner": true,
                "echo_is_partner": body["isPartner"],
            })),
        ),
        Some("Grizzly Bears") => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Card must be a legendary creature" })),
        ),
        _ => (StatusCode::NOT_FOUND, Json(json!({}))),
    }
}

async fn check_partner(Json(body): Json<Value>) -> Json<Value> {
    let compatible = body["commander1"] == "Tymna the Weaver";
    let reason = if compatible {
        "Compatible partners"
    } else {
        "One or both commanders lack Partner ability"
    };
    Json(json!({ "is_compatible": compatible, "reason": reason }))
}

async fn build_deck(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["cardList"] == "" {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "empty pool" })),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "commander": body["commander"],
            "partner": body["partnerCommander"],
            "deck_size": 2,
            "cards": [
                { "name": "Sol Ring", "type": "Artifact", "cmc": 1.0 },
                { "name": "Llanowar Elves", "type": "Creature — Elf Druid", "cmc": 1.0 },
            ],
            "format_seen": body["format"],
        })),
    )
}

async fn start_server() -> (SocketAddr, tokio::task::JoinHandle<()>) {
    let app = Router::new()
        .route("/api/validate-commander", post(validate_commander))
        .route("/api/check-partner", post(check_partner))
        .route("/api/build-deck", post(build_deck));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, handle)
}

fn client_for(addr: SocketAddr) -> DeckApiClient {
    let http = deckforge_infra::default_http_client().unwrap();
    DeckApiClient::new(http, &format!("http://{addr}/api")).unwrap()
}

#[tokio::test]
async fn validate_commander_returns_partner_flag() {
    let (addr, server) = start_server().await;
    let client = client_for(addr);

    let info = client
        .validate_commander("Thrasios, Triton Hero", true)
        .await
        .unwrap();
    assert!(info.has_partner);
    assert_eq!(info.name.as_deref(), Some("Thrasios, Triton Hero"));
    assert_eq!(
        info.color_identity,
        Some(vec!["G".to_string(), "U".to_string()])
    );

    server.abort();
}

#[tokio::test]
async fn rejection_surfaces_server_error_message() {
    let (addr, server) = start_server().await;
    let client = client_for(addr);

    let err = client
        .validate_commander("Grizzly Bears", false)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::Rejected);
    assert!(matches!(err, ApiError::Rejected { status: 400, .. }));
    assert_eq!(err.to_string(), "Card must be a legendary creature");

    server.abort();
}

#[tokio::test]
async fn rejection_without_message_uses_endpoint_default() {
    let (addr, server) = start_server().await;
    let client = client_for(addr);

    let err = client
        .validate_commander("Nobody", false)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Rejected { status: 404, .. }));
    assert_eq!(err.to_string(), "Failed to validate commander");

    server.abort();
}

#[tokio::test]
async fn check_partner_reports_reason() {
    let (addr, server) = start_server().await;
    let client = client_for(addr);

    let ok = client
        .check_partner("Tymna the Weaver", "Thrasios, Triton Hero")
        .await
        .unwrap();
    assert!(ok.is_compatible);

    let bad = client
        .check_partner("Atraxa, Praetors' Voice", "Thrasios, Triton Hero")
        .await
        .unwrap();
    assert!(!bad.is_compatible);
    assert_eq!(
        bad.reason.as_deref(),
        Some("One or both commanders lack Partner ability")
    );

    server.abort();
}

#[tokio::test]
async fn build_deck_round_trips_request_contract() {
    let (addr, server) = start_server().await;
    let client = client_for(addr);

    let req = BuildDeckRequest::from_form(
        DeckFormat::Commander,
        "1x Sol Ring\n1x Llanowar Elves",
        "Tymna the Weaver",
        "Thrasios, Triton Hero",
        "",
    );
    let deck = client.build_deck(&req).await.unwrap();
    assert_eq!(deck.commander, Some(Card::named("Tymna the Weaver")));
    assert_eq!(deck.partner, Some(Card::named("Thrasios, Triton Hero")));
    assert_eq!(deck.deck_size, Some(2));
    assert_eq!(deck.cards.len(), 2);

    let err = client
        .build_deck(&BuildDeckRequest::from_form(
            DeckFormat::Standard,
            "",
            "",
            "",
            "",
        ))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "empty pool");

    server.abort();
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    // Bind then drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(addr)
        .validate_commander("Anyone", false)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::Transport);
}
