pub mod check_request_body;
pub mod json_response;
pub mod logging;
pub mod purchase_log;
