use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Router, routing};
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::formatter::{ParseMode, format_message};
use crate::notification::Notification;
use crate::traits::NotificationSender;

/// Usage hint returned to every non-POST request.
pub const USAGE: &str = "Send a POST request with JSON: { title, description?, url?, from? }";

/// Terminal failure of one relay request. Display strings are the exact
/// response bodies; every variant maps to one status code.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Missing required field: title")]
    MissingTitle,
    #[error("Error: {0}")]
    BadPayload(String),
    #[error("Telegram error: {0}")]
    Provider(String),
    // transport failures surface as 400 like malformed payloads
    #[error("Error: {0}")]
    Delivery(String),
}

impl RelayError {
    fn status(&self) -> StatusCode {
        match self {
            RelayError::MissingTitle => StatusCode::BAD_REQUEST,
            RelayError::BadPayload(_) => StatusCode::BAD_REQUEST,
            RelayError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::Delivery(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

/// Read-only per-process state shared by all requests.
#[derive(Clone)]
pub struct AppState {
    pub parse_mode: ParseMode,
    pub sender: Arc<dyn NotificationSender>,
}

// - POST /
#[tracing::instrument(
    name = "notify",
    skip(state, body),
    fields(
        request_id = %Uuid::new_v4(),
    )
)]
pub async fn notify(
    State(state): State<AppState>,
    body: String,
) -> Result<&'static str, RelayError> {
    let notification: Notification =
        serde_json::from_str(&body).map_err(|e| RelayError::BadPayload(e.to_string()))?;

    if notification.title().is_empty() {
        return Err(RelayError::MissingTitle);
    }

    let text = format_message(&notification, state.parse_mode);

    let result = state
        .sender
        .send(&text)
        .await
        .map_err(|e| RelayError::Delivery(e.to_string()))?;

    if !result.ok {
        let description = result
            .description
            .unwrap_or_else(|| "unknown error".to_string());
        warn!("Telegram rejected message: {}", description);
        return Err(RelayError::Provider(description));
    }

    info!("Notification sent");
    Ok("Notification sent")
}

async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, USAGE)
}

/// Build the router: the relay endpoint at the root (any other method
/// gets the usage hint) plus a liveness route.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", routing::get(|| async { "up" }))
        .route("/", routing::post(notify).fallback(method_not_allowed))
        .with_state(state)
}
