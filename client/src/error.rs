// client/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
  #[error("HTTP Error: {0}")]
  Http(#[from] reqwest::Error),

  /// The service answered with a non-2xx status.
  #[error("{message}")]
  Api { status: u16, message: String },

  /// The form was rejected before any request was sent.
  #[error("{0}")]
  Form(String),

  #[error("Product {0} is not in the loaded list.")]
  UnknownProduct(i64),
}

impl ClientError {
  pub fn status(&self) -> Option<u16> {
    match self {
      ClientError::Api { status, .. } => Some(*status),
      ClientError::Http(e) => e.status().map(|s| s.as_u16()),
      _ => None,
    }
  }

  pub fn is_not_found(&self) -> bool {
    self.status() == Some(404)
  }
}

pub type ClientResult<T, E = ClientError> = std::result::Result<T, E>;
