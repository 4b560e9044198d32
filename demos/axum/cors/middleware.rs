use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use cors_header_filter::OwnedRequestContext;

use super::{AppState, SharedCors};

pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let cors: SharedCors = state.cors.clone();

    let owned_ctx = OwnedRequestContext::from_request(&request);
    let context = owned_ctx.as_request_context();

    if let Some(preflight) = cors.on_request(&context) {
        return preflight.into_http_response();
    }

    let mut response = next.run(request).await;
    cors.on_response(&context, response.headers_mut());
    response
}
