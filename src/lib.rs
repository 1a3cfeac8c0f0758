use std::sync::Arc;

pub mod config;
pub mod services;
pub mod utils;

use crate::utils::purchase_log::{PurchaseLog, TracingPurchaseLog};

#[derive(Clone)]
pub struct AppState {
    pub purchase_log: Arc<dyn PurchaseLog>,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            purchase_log: Arc::new(TracingPurchaseLog),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
