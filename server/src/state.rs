// server/src/state.rs
use crate::config::AppConfig;
use catalog::ProductStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn ProductStore>,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  pub fn new(store: Arc<dyn ProductStore>, config: Arc<AppConfig>) -> Self {
    Self { store, config }
  }
}
