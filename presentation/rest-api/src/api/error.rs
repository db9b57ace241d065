use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body of the chat wire contract.
///
/// Every non-success status carries a fixed user-facing text in the same
/// `response` field a success uses, so the front-end renders both alike.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub response: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
