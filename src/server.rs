//! HTTP surface: health check and the Telegram webhook endpoint.

use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::Json;
use axum::routing::{get, post};
use serde::Serialize;
use teloxide::types::Update;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::bot::BotState;

/// Body returned by the webhook endpoint. The HTTP status is always 200;
/// failures are reported in the body only.
#[derive(Debug, Serialize)]
pub struct WebhookReply {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl WebhookReply {
    fn success() -> Self {
        Self {
            status: "success",
            detail: None,
        }
    }

    fn error(detail: String) -> Self {
        Self {
            status: "error",
            detail: Some(detail),
        }
    }
}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    message: &'static str,
}

/// Build the application router.
pub fn router(state: Arc<BotState>) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/webhook", post(webhook))
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(state: Arc<BotState>, port: u16) -> std::io::Result<()> {
    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr).await?;
    info!("Webhook server listening on {addr}");
    axum::serve(listener, router(state)).await
}

/// GET / - static status payload.
async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        message: "menubot is running",
    })
}

/// POST /webhook - parse the update and hand it to the dispatcher.
async fn webhook(State(state): State<Arc<BotState>>, body: Bytes) -> Json<WebhookReply> {
    let started = Instant::now();

    let update: Update = match serde_json::from_slice(&body) {
        Ok(update) => update,
        Err(e) => {
            error!("Failed to parse webhook body: {e}");
            return Json(WebhookReply::error(e.to_string()));
        }
    };

    state.registry.dispatch(&state.sender, &update).await;

    info!("Handled update in {}ms", started.elapsed().as_millis());
    Json(WebhookReply::success())
}
