// server/src/errors.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use catalog::CatalogError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Internal Server Error: {0}")]
  Internal(String), // For miscellaneous errors, including store failures
}

impl From<CatalogError> for AppError {
  fn from(err: CatalogError) -> Self {
    match err {
      CatalogError::Validation(m) => AppError::Validation(m),
      CatalogError::NotFound { id } => AppError::NotFound(format!("Product with ID {} not found.", id)),
      CatalogError::Store { source } => AppError::Internal(format!("{:#}", source)),
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Config(_) | AppError::Sqlx(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    let body = match self {
      AppError::Validation(m) | AppError::NotFound(m) => {
        tracing::warn!(application_error = %self, "Responding with client error");
        json!({"error": m})
      }
      // Store and server-side details stay in the logs.
      AppError::Config(_) | AppError::Sqlx(_) | AppError::Internal(_) => {
        tracing::error!(application_error = %self, "Responding with error");
        json!({"error": "Internal Server Error"})
      }
    };
    HttpResponse::build(self.status_code()).json(body)
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
