use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use camino::Utf8PathBuf;
use deckforge_cli::commands::{self, BuildArgs, CardSource};
use deckforge_cli::CliFormat;
use deckforge_core::Card;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::tempdir;

const PARTNERS: [&str; 2] = ["Tymna the Weaver", "Thrasios, Triton Hero"];

fn validate_response(body: &Value) -> (StatusCode, Json<Value>) {
    let name = body["name"].as_str().unwrap_or_default();
    if name == "Grizzly Bears" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Card must be a legendary creature" })),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "name": name,
            "color_identity": ["W", "B"],
            "has_partner": PARTNERS.contains(&name),
        })),
    )
}

fn build_response(body: &Value) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "commander": body["commander"],
            "partner": body["partnerCommander"],
            "cards": [
                { "name": "Sol Ring", "type": "Artifact", "cmc": 1.0 },
                { "name": "Swords to Plowshares", "type": "Instant", "cmc": 1.0 },
                { "name": "Plains", "type": "Basic Land — Plains", "cmc": 0.0 },
            ],
        })),
    )
}

struct MockService {
    addr: SocketAddr,
    builds: Arc<AtomicUsize>,
    last_build: Arc<std::sync::Mutex<Value>>,
}

async fn start_mock_server() -> (MockService, tokio::task::JoinHandle<()>) {
    let builds = Arc::new(AtomicUsize::new(0));
    let last_build = Arc::new(std::sync::Mutex::new(Value::Null));

    let app = Router::new()
        .route(
            "/api/validate-commander",
            post(|Json(body): Json<Value>| async move { validate_response(&body) }),
        )
        .route(
            "/api/check-partner",
            post(|Json(body): Json<Value>| async move {
                let both = [&body["commander1"], &body["commander2"]]
                    .iter()
                    .all(|c| PARTNERS.contains(&c.as_str().unwrap_or_default()));
                let reason = if both {
                    Value::Null
                } else {
                    json!("One or both commanders lack Partner ability")
                };
                Json(json!({ "is_compatible": both, "reason": reason }))
            }),
        )
        .route(
            "/api/build-deck",
            post({
                let builds = builds.clone();
                let last_build = last_build.clone();
                move |Json(body): Json<Value>| async move {
                    builds.fetch_add(1, Ordering::SeqCst);
                    let resp = build_response(&body);
                    *last_build.lock().unwrap() = body;
                    resp
                }
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (
        MockService {
            addr,
            builds,
            last_build,
        },
        handle,
    )
}

fn api_url(mock: &MockService) -> String {
    format!("http://{}/api", mock.addr)
}

fn build_args(format: CliFormat, cards: CardSource) -> BuildArgs {
    BuildArgs {
        format,
        cards,
        commander: None,
        partner: None,
        goal: None,
        json: false,
    }
}

#[tokio::test]
async fn partner_deck_lifecycle() {
    let (mock, server) = start_mock_server().await;

    let info = commands::cmd_validate(&api_url(&mock), "Tymna the Weaver".into(), false)
        .await
        .expect("validate");
    assert!(info.has_partner);

    let compat = commands::cmd_check_partner(
        &api_url(&mock),
        "Tymna the Weaver".into(),
        "Thrasios, Triton Hero".into(),
    )
    .await
    .expect("check partner");
    assert!(compat.is_compatible);

    let mut args = build_args(
        CliFormat::Commander,
        CardSource::Text("1x Sol Ring\n1x Swords to Plowshares\n30x Plains".into()),
    );
    args.commander = Some("Tymna the Weaver".into());
    args.partner = Some("Thrasios, Triton Hero".into());
    args.goal = Some("  card draw  ".into());

    let deck = commands::cmd_build(&api_url(&mock), args)
        .await
        .expect("build");
    assert_eq!(deck.commander, Some(Card::named("Tymna the Weaver")));
    assert_eq!(deck.partner, Some(Card::named("Thrasios, Triton Hero")));
    assert_eq!(deck.total_cards(), 5);

    let sent = mock.last_build.lock().unwrap().clone();
    assert_eq!(sent["format"], "commander");
    assert_eq!(sent["commander"], "Tymna the Weaver");
    assert_eq!(sent["partnerCommander"], "Thrasios, Triton Hero");
    assert_eq!(sent["deckGoal"], "card draw");
    assert_eq!(mock.builds.load(Ordering::SeqCst), 1);

    server.abort();
}

#[tokio::test]
async fn standard_build_from_file_sends_null_commanders() {
    let (mock, server) = start_mock_server().await;
    let dir = tempdir().unwrap();
    let path = Utf8PathBuf::from_path_buf(dir.path().join("pool.txt")).unwrap();
    std::fs::write(&path, "4x Swords to Plowshares\n20x Plains\n").unwrap();

    let mut args = build_args(CliFormat::Standard, CardSource::File(path));
    args.commander = Some("Tymna the Weaver".into());
    args.json = true;

    let deck = commands::cmd_build(&api_url(&mock), args)
        .await
        .expect("build");
    assert_eq!(deck.commander, None);

    let sent = mock.last_build.lock().unwrap().clone();
    assert_eq!(sent["format"], "standard");
    assert_eq!(sent["cardList"], "4x Swords to Plowshares\n20x Plains\n");
    assert!(sent["commander"].is_null());
    assert!(sent["partnerCommander"].is_null());
    assert!(sent["deckGoal"].is_null());

    server.abort();
}

#[tokio::test]
async fn csv_card_file_is_refused() {
    let (mock, server) = start_mock_server().await;
    let dir = tempdir().unwrap();
    let path = Utf8PathBuf::from_path_buf(dir.path().join("pool.csv")).unwrap();
    std::fs::write(&path, "4x Swords to Plowshares\n").unwrap();

    let args = build_args(CliFormat::Standard, CardSource::File(path));
    let err = commands::cmd_build(&api_url(&mock), args)
        .await
        .expect_err("only .txt card lists are accepted");
    assert_eq!(err.to_string(), "Please choose a .txt card list");
    assert_eq!(mock.builds.load(Ordering::SeqCst), 0);

    server.abort();
}

#[tokio::test]
async fn rejected_commander_stops_before_build() {
    let (mock, server) = start_mock_server().await;

    let mut args = build_args(CliFormat::Commander, CardSource::Text("1x Sol Ring".into()));
    args.commander = Some("Grizzly Bears".into());

    let err = commands::cmd_build(&api_url(&mock), args)
        .await
        .expect_err("commander should be rejected");
    assert_eq!(
        err.to_string(),
        "Error validating commander: Card must be a legendary creature"
    );
    assert_eq!(mock.builds.load(Ordering::SeqCst), 0);

    server.abort();
}

#[tokio::test]
async fn incompatible_partner_reports_reason() {
    let (mock, server) = start_mock_server().await;

    let compat = commands::cmd_check_partner(
        &api_url(&mock),
        "Tymna the Weaver".into(),
        "Atraxa, Praetors' Voice".into(),
    )
    .await
    .expect("check partner");
    assert!(!compat.is_compatible);

    let mut args = build_args(CliFormat::Commander, CardSource::Text("1x Sol Ring".into()));
    args.commander = Some("Tymna the Weaver".into());
    args.partner = Some("Atraxa, Praetors' Voice".into());

    let err = commands::cmd_build(&api_url(&mock), args)
        .await
        .expect_err("partner should be refused");
    assert_eq!(err.to_string(), "One or both commanders lack Partner ability");
    assert_eq!(mock.builds.load(Ordering::SeqCst), 0);

    server.abort();
}

#[tokio::test]
async fn empty_pool_is_refused_locally() {
    let (mock, server) = start_mock_server().await;

    let args = build_args(CliFormat::Standard, CardSource::Text("\n  \n".into()));
    let err = commands::cmd_build(&api_url(&mock), args)
        .await
        .expect_err("empty pool");
    assert_eq!(err.to_string(), "Please provide a card list");
    assert_eq!(mock.builds.load(Ordering::SeqCst), 0);

    server.abort();
}

#[tokio::test]
async fn unreachable_service_surfaces_error() {
    let args = build_args(CliFormat::Standard, CardSource::Text("1x Plains".into()));
    let err = commands::cmd_build("http://127.0.0.1:9/api", args)
        .await
        .expect_err("nothing listens on the discard port");
    assert!(err.to_string().starts_with("Error building deck: "));
}
