use crate::http::responses::{ApiResponse, METHOD_NOT_ALLOWED_MESSAGE};
use crate::tutorials::catalog::TUTORIALS;
use crate::tutorials::models::Tutorial;
use axum::response::{IntoResponse, Response};
use http::{Method, StatusCode};

/// Lists the whole catalog. Any method other than `GET`, `HEAD` included, gets a 405.
pub async fn list(method: Method) -> Response {
    if method != Method::GET {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            ApiResponse::<()>::error(METHOD_NOT_ALLOWED_MESSAGE),
        )
            .into_response();
    }
    ApiResponse::<&[Tutorial]>::data(&TUTORIALS).into_response()
}
