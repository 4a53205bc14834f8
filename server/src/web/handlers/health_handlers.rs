// server/src/web/handlers/health_handlers.rs

use actix_web::{web, HttpResponse};
use catalog::ProductStore;
use serde_json::json;
use tracing::{error, instrument};

use crate::state::AppState;

/// Liveness probe that also reports whether the store answered.
/// On failure the store's message is returned in the body.
#[instrument(name = "handler::health", skip(app_state))]
pub async fn health_check_handler(app_state: web::Data<AppState>) -> HttpResponse {
  match app_state.store.ping().await {
    Ok(db) => HttpResponse::Ok().json(json!({ "status": "ok", "db": db })),
    Err(e) => {
      error!(error = %e, "Health check failed.");
      HttpResponse::InternalServerError().json(json!({ "status": "error", "message": e.to_string() }))
    }
  }
}
