// client/src/session.rs

use catalog::Product;
use tracing::{info, instrument, warn};

use crate::api::CatalogApi;
use crate::error::{ClientError, ClientResult};
use crate::form::{FormMode, ProductForm};

/// Local view of the catalog: the last fetched rows plus one create/edit form.
///
/// The cache only changes after the service confirms a write. Every method
/// takes `&mut self`, so one request is outstanding at a time.
pub struct CatalogSession<A: CatalogApi> {
  api: A,
  rows: Vec<Product>,
  form: ProductForm,
  mode: FormMode,
  last_error: Option<String>,
}

impl<A: CatalogApi> CatalogSession<A> {
  pub fn new(api: A) -> Self {
    Self {
      api,
      rows: Vec::new(),
      form: ProductForm::default(),
      mode: FormMode::Create,
      last_error: None,
    }
  }

  pub fn api(&self) -> &A {
    &self.api
  }

  pub fn rows(&self) -> &[Product] {
    &self.rows
  }

  pub fn form(&self) -> &ProductForm {
    &self.form
  }

  pub fn form_mut(&mut self) -> &mut ProductForm {
    &mut self.form
  }

  pub fn mode(&self) -> FormMode {
    self.mode
  }

  pub fn editing_id(&self) -> Option<i64> {
    match self.mode {
      FormMode::Edit(id) => Some(id),
      FormMode::Create => None,
    }
  }

  /// Message of the most recent failed action, cleared when the next action starts.
  pub fn last_error(&self) -> Option<&str> {
    self.last_error.as_deref()
  }

  /// Replaces the cache with the service's current list.
  #[instrument(name = "session::load", skip(self))]
  pub async fn load(&mut self) -> ClientResult<()> {
    self.last_error = None;
    let result = self.api.list().await;
    let rows = self.record(result)?;
    info!(count = rows.len(), "Catalog loaded.");
    self.rows = rows;
    Ok(())
  }

  /// Switches to edit mode for a cached row and prefills the form from it.
  pub fn start_edit(&mut self, id: i64) -> ClientResult<()> {
    let product = self.rows.iter().find(|p| p.id == id).ok_or(ClientError::UnknownProduct(id))?;
    self.form = ProductForm::from_product(product);
    self.mode = FormMode::Edit(id);
    Ok(())
  }

  pub fn cancel_edit(&mut self) {
    self.reset_form();
  }

  pub fn reset_form(&mut self) {
    self.form = ProductForm::default();
    self.mode = FormMode::Create;
  }

  /// Creates or updates depending on the form mode, then reconciles the cache
  /// with the row the service returned.
  #[instrument(name = "session::submit", skip(self), fields(mode = ?self.mode))]
  pub async fn submit(&mut self) -> ClientResult<Product> {
    self.last_error = None;
    let payload = self.form.to_payload();
    let payload = self.record(payload)?;

    let result = match self.mode {
      FormMode::Create => self.api.create(&payload).await,
      FormMode::Edit(id) => self.api.update(id, &payload).await,
    };
    let saved = self.record(result)?;

    match self.mode {
      FormMode::Create => self.rows.push(saved.clone()),
      FormMode::Edit(id) => {
        for row in self.rows.iter_mut().filter(|p| p.id == id) {
          *row = saved.clone();
        }
      }
    }
    self.reset_form();
    Ok(saved)
  }

  /// Deletes remotely, then drops the row from the cache.
  #[instrument(name = "session::delete", skip(self))]
  pub async fn delete(&mut self, id: i64) -> ClientResult<()> {
    self.last_error = None;
    let result = self.api.delete(id).await;
    self.record(result)?;
    self.rows.retain(|p| p.id != id);
    if self.editing_id() == Some(id) {
      self.reset_form();
    }
    Ok(())
  }

  fn record<T>(&mut self, result: ClientResult<T>) -> ClientResult<T> {
    if let Err(e) = &result {
      warn!(error = %e, "Catalog action failed.");
      self.last_error = Some(e.to_string());
    }
    result
  }
}
