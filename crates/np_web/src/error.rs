use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use serde::Serialize;

/// Any failure in the report chain collapses to HTTP 400 with the raw error
/// text as `detail`.
pub struct ApiError(pub np_core::Error);

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl From<np_core::Error> for ApiError {
    fn from(err: np_core::Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.0.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
