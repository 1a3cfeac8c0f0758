use axum::{http::StatusCode, response::Response, routing::get, Router};

use crate::{utils::json_response::json_response, AppState};

pub fn get_routes() -> Router<AppState> {
    Router::new().route("/ping", get(ping))
}

pub async fn ping() -> Response {
    json_response(StatusCode::OK, "Purchase backend is up")
}
