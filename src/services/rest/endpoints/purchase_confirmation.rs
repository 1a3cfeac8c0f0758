use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::StatusCode,
    response::Response,
    routing::post,
    Router,
};
use serde_json::Value;

use crate::{
    services::rest::payloads::purchase_confirmation::PurchaseConfirmationResponsePayload,
    utils::{check_request_body::check_request_body, json_response::json_response},
    AppState,
};

pub fn get_routes() -> Router<AppState> {
    Router::new().route("/api/purchase-confirmation", post(confirm_purchase))
}

// Purchase confirmation services ==================================

async fn confirm_purchase(
    State(AppState { purchase_log }): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let Json(body) = match check_request_body(payload) {
        Ok(success_body) => success_body,
        Err(error_response) => {
            return error_response;
        }
    };
    purchase_log.record(&body);
    json_response(
        StatusCode::OK,
        PurchaseConfirmationResponsePayload {
            message: "Purchase was successful".to_string(),
        },
    )
}
