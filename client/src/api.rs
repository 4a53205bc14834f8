// client/src/api.rs

use async_trait::async_trait;
use catalog::{Product, ProductPayload};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::error::{ClientError, ClientResult};

pub const DEFAULT_API_BASE: &str = "http://localhost:3001";

/// Body of `GET /health` when the service is up.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
  pub status: String,
  pub db: bool,
}

/// Operations the catalog service exposes.
#[async_trait]
pub trait CatalogApi: Send + Sync {
  async fn health(&self) -> ClientResult<HealthStatus>;
  async fn list(&self) -> ClientResult<Vec<Product>>;
  async fn get(&self, id: i64) -> ClientResult<Product>;
  async fn create(&self, payload: &ProductPayload) -> ClientResult<Product>;
  async fn update(&self, id: i64, payload: &ProductPayload) -> ClientResult<Product>;
  async fn delete(&self, id: i64) -> ClientResult<()>;
}

/// `CatalogApi` over HTTP/JSON with reqwest.
#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
  http: Client,
  base_url: String,
}

impl HttpCatalogApi {
  pub fn new(base_url: impl Into<String>) -> Self {
    Self::with_client(Client::new(), base_url)
  }

  pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
    let base_url = base_url.into().trim_end_matches('/').to_string();
    Self { http, base_url }
  }

  /// Uses `CATALOG_API_BASE`, falling back to `http://localhost:3001`.
  pub fn from_env() -> Self {
    let base = std::env::var("CATALOG_API_BASE")
      .ok()
      .filter(|v| !v.trim().is_empty())
      .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    Self::new(base)
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.base_url, path)
  }
}

/// Decodes a 2xx body as `T`; anything else becomes `ClientError::Api`.
async fn decode<T: DeserializeOwned>(resp: Response) -> ClientResult<T> {
  let status = resp.status();
  if status.is_success() {
    return Ok(resp.json::<T>().await?);
  }

  // The body may be missing or not JSON at all.
  let body: Option<Value> = resp.json().await.ok();
  let message = body
    .as_ref()
    .and_then(|b| b.get("error").or_else(|| b.get("message")))
    .and_then(Value::as_str)
    .map(str::to_string)
    .unwrap_or_else(|| format!("Request failed: {}", status.as_u16()));
  warn!(status = status.as_u16(), %message, "Catalog service returned an error.");
  Err(ClientError::Api {
    status: status.as_u16(),
    message,
  })
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
  #[instrument(name = "api::health", skip(self))]
  async fn health(&self) -> ClientResult<HealthStatus> {
    let resp = self.http.get(self.url("/health")).send().await?;
    decode(resp).await
  }

  #[instrument(name = "api::list", skip(self))]
  async fn list(&self) -> ClientResult<Vec<Product>> {
    let resp = self.http.get(self.url("/products")).send().await?;
    let rows: Vec<Product> = decode(resp).await?;
    debug!(count = rows.len(), "Fetched products.");
    Ok(rows)
  }

  #[instrument(name = "api::get", skip(self))]
  async fn get(&self, id: i64) -> ClientResult<Product> {
    let resp = self.http.get(self.url(&format!("/products/{}", id))).send().await?;
    decode(resp).await
  }

  #[instrument(name = "api::create", skip(self, payload))]
  async fn create(&self, payload: &ProductPayload) -> ClientResult<Product> {
    let resp = self.http.post(self.url("/products")).json(payload).send().await?;
    decode(resp).await
  }

  #[instrument(name = "api::update", skip(self, payload))]
  async fn update(&self, id: i64, payload: &ProductPayload) -> ClientResult<Product> {
    let resp = self
      .http
      .put(self.url(&format!("/products/{}", id)))
      .json(payload)
      .send()
      .await?;
    decode(resp).await
  }

  #[instrument(name = "api::delete", skip(self))]
  async fn delete(&self, id: i64) -> ClientResult<()> {
    let resp = self.http.delete(self.url(&format!("/products/{}", id))).send().await?;
    let _ack: Value = decode(resp).await?;
    Ok(())
  }
}
