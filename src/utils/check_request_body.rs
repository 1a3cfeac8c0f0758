use axum::{
    extract::{rejection::JsonRejection, Json},
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub fn check_request_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<Json<T>, Response> {
    match payload {
        Ok(success_body) => Ok(success_body),
        Err(JsonRejection::JsonSyntaxError(_)) => Err((
            StatusCode::BAD_REQUEST,
            "Request body is not valid JSON".to_string(),
        )
            .into_response()),
        Err(JsonRejection::JsonDataError(_)) => Err((
            StatusCode::BAD_REQUEST,
            "Request body has wrong fields".to_string(),
        )
            .into_response()),
        Err(JsonRejection::MissingJsonContentType(_)) => Err((
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "Request body must be sent as application/json".to_string(),
        )
            .into_response()),
        Err(_) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            "Request body could not be read".to_string(),
        )
            .into_response()),
    }
}
