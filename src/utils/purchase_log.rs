use serde_json::Value;
use tracing::info;

pub trait PurchaseLog: Send + Sync {
    fn record(&self, body: &Value);
}

pub struct TracingPurchaseLog;

impl PurchaseLog for TracingPurchaseLog {
    fn record(&self, body: &Value) {
        info!("Received purchase confirmation: {}", body);
    }
}
