// server/src/db/pg_store.rs

use async_trait::async_trait;
use catalog::{CatalogError, CatalogResult, Product, ProductDraft, ProductStore};
use sqlx::PgPool;
use tracing::{error, instrument};

const SELECT_ALL: &str = "SELECT id, name, collection, scent_family, size_ml, price_thb, description, image_url \
   FROM product ORDER BY id ASC";

const SELECT_ONE: &str = "SELECT id, name, collection, scent_family, size_ml, price_thb, description, image_url \
   FROM product WHERE id = $1";

const INSERT: &str = "INSERT INTO product (name, collection, scent_family, size_ml, price_thb, description, image_url) \
   VALUES ($1, $2, $3, $4, $5, $6, $7) \
   RETURNING id, name, collection, scent_family, size_ml, price_thb, description, image_url";

const UPDATE: &str = "UPDATE product \
   SET name = $1, collection = $2, scent_family = $3, size_ml = $4, price_thb = $5, description = $6, image_url = $7 \
   WHERE id = $8 \
   RETURNING id, name, collection, scent_family, size_ml, price_thb, description, image_url";

const DELETE: &str = "DELETE FROM product WHERE id = $1";

/// `ProductStore` over the `product` table. Runtime-checked queries only.
#[derive(Debug, Clone)]
pub struct PgProductStore {
  pool: PgPool,
}

impl PgProductStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  pub fn pool(&self) -> &PgPool {
    &self.pool
  }
}

fn store_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> CatalogError {
  move |e| {
    error!(operation = operation, "Database error: {}", e);
    CatalogError::Store {
      source: anyhow::Error::new(e).context(operation),
    }
  }
}

#[async_trait]
impl ProductStore for PgProductStore {
  async fn ping(&self) -> CatalogResult<bool> {
    let ok: i32 = sqlx::query_scalar("SELECT 1")
      .fetch_one(&self.pool)
      .await
      .map_err(store_error("ping"))?;
    Ok(ok == 1)
  }

  #[instrument(name = "pg_store::list", skip(self))]
  async fn list(&self) -> CatalogResult<Vec<Product>> {
    sqlx::query_as::<_, Product>(SELECT_ALL)
      .fetch_all(&self.pool)
      .await
      .map_err(store_error("list products"))
  }

  #[instrument(name = "pg_store::get", skip(self))]
  async fn get(&self, id: i64) -> CatalogResult<Option<Product>> {
    sqlx::query_as::<_, Product>(SELECT_ONE)
      .bind(id)
      .fetch_optional(&self.pool)
      .await
      .map_err(store_error("get product"))
  }

  #[instrument(name = "pg_store::insert", skip(self, draft), fields(name = %draft.name()))]
  async fn insert(&self, draft: &ProductDraft) -> CatalogResult<Product> {
    sqlx::query_as::<_, Product>(INSERT)
      .bind(draft.name())
      .bind(draft.collection())
      .bind(draft.scent_family())
      .bind(draft.size_ml())
      .bind(draft.price_thb())
      .bind(draft.description())
      .bind(draft.image_url())
      .fetch_one(&self.pool)
      .await
      .map_err(store_error("insert product"))
  }

  #[instrument(name = "pg_store::update", skip(self, draft))]
  async fn update(&self, id: i64, draft: &ProductDraft) -> CatalogResult<Option<Product>> {
    sqlx::query_as::<_, Product>(UPDATE)
      .bind(draft.name())
      .bind(draft.collection())
      .bind(draft.scent_family())
      .bind(draft.size_ml())
      .bind(draft.price_thb())
      .bind(draft.description())
      .bind(draft.image_url())
      .bind(id)
      .fetch_optional(&self.pool)
      .await
      .map_err(store_error("update product"))
  }

  #[instrument(name = "pg_store::delete", skip(self))]
  async fn delete(&self, id: i64) -> CatalogResult<bool> {
    let result = sqlx::query(DELETE)
      .bind(id)
      .execute(&self.pool)
      .await
      .map_err(store_error("delete product"))?;
    Ok(result.rows_affected() > 0)
  }
}
