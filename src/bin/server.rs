//! REST API server backing the FraudShield dashboard.
//!
//! # Usage
//!
//! ```bash
//! # Start server
//! fraudshield-server
//!
//! # With custom port
//! fraudshield-server --port 8080
//! ```

use axum::{
    extract::{Path, Query, State},
    http::{header, Method, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::{Arc, RwLock};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fraudshield::store::{Stats, TransactionStore};
use fraudshield::transaction::{Prediction, Transaction, TransactionInput};
use fraudshield::{brand, generate, normalize, validate, CardBrand};

type SharedStore = Arc<RwLock<TransactionStore>>;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Deserialize)]
struct ValidateRequest {
    /// Card number to validate. Accepts digits with optional spaces or
    /// dashes as separators.
    card_number: String,
}

#[derive(Serialize)]
struct ValidateResponse {
    /// Whether the card number passed all checks (Luhn, length, brand)
    valid: bool,
    /// Lowercase brand tag (visa, mastercard, amex, discover, diners, jcb, unknown)
    #[serde(skip_serializing_if = "Option::is_none")]
    brand: Option<String>,
    /// Last 4 digits (safe for display)
    #[serde(skip_serializing_if = "Option::is_none")]
    last_four: Option<String>,
    /// Masked card number (safe for logging and display)
    #[serde(skip_serializing_if = "Option::is_none")]
    masked: Option<String>,
    /// Why validation failed
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Deserialize)]
struct DetectQuery {
    /// Card number or prefix to classify
    card: String,
}

#[derive(Serialize)]
struct DetectResponse {
    /// Lowercase brand tag; "unknown" when no rule matches
    brand: String,
    /// Valid lengths for this brand
    valid_lengths: Vec<usize>,
}

#[derive(Deserialize)]
struct FormatRequest {
    /// Raw card number input
    card_number: String,
}

#[derive(Serialize)]
struct FormatResponse {
    /// Digits grouped in fours, space-separated
    formatted: String,
    /// Digits only, capped at 16
    digits: String,
}

#[derive(Deserialize)]
struct GenerateRequest {
    /// Brand to generate (visa, mastercard, amex, discover, diners, jcb)
    #[serde(default = "default_brand")]
    brand: String,
}

fn default_brand() -> String {
    "visa".to_string()
}

#[derive(Serialize)]
struct GenerateResponse {
    /// Synthetic Luhn-valid card number
    number: String,
    /// Matching CVV
    cvv: String,
}

#[derive(Deserialize)]
struct TransactionRequest {
    id: String,
    amount: f64,
    time: String,
    location: String,
    merchant: String,
    prediction: PredictionBody,
}

#[derive(Deserialize)]
struct PredictionBody {
    fraudulent: bool,
    confidence: f64,
    #[serde(default)]
    reasoning: String,
}

#[derive(Deserialize, Default)]
struct ListQuery {
    /// Substring filter over id, location, and merchant
    q: Option<String>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

fn bad_request(message: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

// ============================================================================
// Card Handlers
// ============================================================================

async fn validate_card(Json(req): Json<ValidateRequest>) -> Json<ValidateResponse> {
    match validate(&req.card_number) {
        Ok(card) => Json(ValidateResponse {
            valid: true,
            brand: Some(card.brand().tag().to_string()),
            last_four: Some(card.last_four()),
            masked: Some(card.masked()),
            error: None,
        }),
        Err(e) => Json(ValidateResponse {
            valid: false,
            brand: None,
            last_four: None,
            masked: None,
            error: Some(e.to_string()),
        }),
    }
}

async fn detect_brand(Query(query): Query<DetectQuery>) -> Json<DetectResponse> {
    let normalized = normalize::normalize(&query.card);
    let brand = brand::classify(&normalized.digits);
    Json(DetectResponse {
        brand: brand.tag().to_string(),
        valid_lengths: brand.valid_lengths().iter().map(|&l| l as usize).collect(),
    })
}

async fn format_card(Json(req): Json<FormatRequest>) -> Json<FormatResponse> {
    let normalized = normalize::normalize(&req.card_number);
    Json(FormatResponse {
        formatted: normalized.formatted,
        digits: normalized.digits,
    })
}

async fn generate_card(
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, (StatusCode, Json<ErrorResponse>)> {
    let brand = parse_brand(&req.brand)
        .ok_or_else(|| bad_request(format!("unknown brand: {}", req.brand)))?;

    let details = generate::generate_card_details(brand);
    Ok(Json(GenerateResponse {
        number: details.number,
        cvv: details.cvv,
    }))
}

// ============================================================================
// Transaction Handlers
// ============================================================================

async fn record_transaction(
    State(store): State<SharedStore>,
    Json(req): Json<TransactionRequest>,
) -> Result<(StatusCode, Json<Transaction>), (StatusCode, Json<ErrorResponse>)> {
    let input = TransactionInput {
        amount: req.amount,
        time: req.time,
        location: req.location,
        merchant: req.merchant,
    };
    let prediction = Prediction::new(
        req.prediction.fraudulent,
        req.prediction.confidence,
        req.prediction.reasoning,
    );

    let txn = Transaction::new(req.id, input, prediction)
        .map_err(|e| bad_request(e.to_string()))?;

    tracing::info!(id = %txn.id, fraudulent = txn.prediction.fraudulent, "transaction recorded");

    let mut guard = store.write().expect("store lock poisoned");
    let replaced = guard.upsert(txn.clone()).is_some();

    let status = if replaced {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };
    Ok((status, Json(txn)))
}

async fn list_transactions(
    State(store): State<SharedStore>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Transaction>> {
    let guard = store.read().expect("store lock poisoned");
    let results = match query.q.as_deref() {
        Some(q) => guard.search(q),
        None => guard.list(),
    };
    Json(results.into_iter().cloned().collect())
}

async fn get_transaction(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<Transaction>, StatusCode> {
    let guard = store.read().expect("store lock poisoned");
    guard
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn delete_transaction(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> StatusCode {
    let mut guard = store.write().expect("store lock poisoned");
    match guard.delete(&id) {
        Some(_) => StatusCode::NO_CONTENT,
        None => StatusCode::NOT_FOUND,
    }
}

async fn clear_transactions(State(store): State<SharedStore>) -> StatusCode {
    let mut guard = store.write().expect("store lock poisoned");
    guard.clear();
    StatusCode::NO_CONTENT
}

async fn stats(State(store): State<SharedStore>) -> Json<Stats> {
    let guard = store.read().expect("store lock poisoned");
    Json(guard.stats())
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Helpers
// ============================================================================

fn parse_brand(s: &str) -> Option<CardBrand> {
    match s.to_lowercase().as_str() {
        "visa" => Some(CardBrand::Visa),
        "mastercard" | "mc" => Some(CardBrand::Mastercard),
        "amex" | "american express" => Some(CardBrand::Amex),
        "discover" => Some(CardBrand::Discover),
        "diners" | "dinersclub" | "diners club" => Some(CardBrand::DinersClub),
        "jcb" => Some(CardBrand::Jcb),
        _ => None,
    }
}

fn router(store: SharedStore) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/validate", post(validate_card))
        .route("/api/detect", get(detect_brand))
        .route("/api/format", post(format_card))
        .route("/api/generate", post(generate_card))
        .route(
            "/api/transactions",
            post(record_transaction)
                .get(list_transactions)
                .delete(clear_transactions),
        )
        .route(
            "/api/transactions/:id",
            get(get_transaction).delete(delete_transaction),
        )
        .route("/api/stats", get(stats))
        .with_state(store)
        .layer(cors)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse args
    let port: u16 = std::env::args()
        .skip_while(|a| a != "--port")
        .nth(1)
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let store: SharedStore = Arc::new(RwLock::new(TransactionStore::new()));
    let app = router(store);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
