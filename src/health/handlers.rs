use crate::health::HEALTHY_MESSAGE;
use crate::http::responses::ApiResponse;

#[axum::debug_handler]
pub async fn healthcheck() -> ApiResponse<()> {
    ApiResponse::message(HEALTHY_MESSAGE)
}
