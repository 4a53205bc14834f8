// server/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use catalog::{CatalogError, ProductPayload, ProductStore};
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = app_state.store.list().await?;
  info!("Successfully fetched {} products.", products.len());
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  match app_state.store.get(product_id).await? {
    Some(product) => {
      info!("Product {} fetched successfully.", product_id);
      Ok(HttpResponse::Ok().json(product))
    }
    None => {
      warn!("Product with ID {} not found.", product_id);
      Err(CatalogError::NotFound { id: product_id }.into())
    }
  }
}

#[instrument(name = "handler::create_product", skip(app_state, payload))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<ProductPayload>,
) -> Result<HttpResponse, AppError> {
  // Rejected payloads never reach the store.
  let draft = payload.validate()?;

  let product = app_state.store.insert(&draft).await?;
  info!(product_id = product.id, "Product created.");
  Ok(HttpResponse::Created().json(product))
}

#[instrument(name = "handler::update_product", skip(app_state, path, payload), fields(product_id = %path.as_ref()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  payload: web::Json<ProductPayload>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  let draft = payload.validate()?;

  match app_state.store.update(product_id, &draft).await? {
    Some(product) => {
      info!("Product {} updated.", product_id);
      Ok(HttpResponse::Ok().json(product))
    }
    None => {
      warn!("Update target {} does not exist.", product_id);
      Err(CatalogError::NotFound { id: product_id }.into())
    }
  }
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  if app_state.store.delete(product_id).await? {
    info!("Product {} deleted.", product_id);
    Ok(HttpResponse::Ok().json(json!({
        "message": "Product deleted successfully",
        "id": product_id
    })))
  } else {
    warn!("Delete target {} does not exist.", product_id);
    Err(CatalogError::NotFound { id: product_id }.into())
  }
}
