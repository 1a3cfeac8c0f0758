pub mod endpoints;
pub mod payloads;
pub mod server;

use axum::Json;

#[derive(serde::Serialize)]
pub struct Message {
    pub message: String,
}

pub async fn root() -> Json<Message> {
    Json(Message {
        message: "Purchase confirmation service".to_string(),
    })
}
