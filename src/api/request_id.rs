//! Request Id
//!
//! Every request carries an `x-request-id`: the caller's, or a fresh UUID
//! set by `SetRequestIdLayer`. Error bodies repeat it as `request_id`.

use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use tower_http::request_id::RequestId;

use crate::models::ErrorResponse;

/// Rewrites error bodies to include the request id.
pub async fn stamp_error_request_id(request: Request, next: Next) -> Response {
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .and_then(|id| id.header_value().to_str().ok())
        .map(str::to_owned);

    let response = next.run(request).await;

    let Some(request_id) = request_id else {
        return response;
    };
    let Some(body) = response.extensions().get::<ErrorResponse>().cloned() else {
        return response;
    };

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(header::CONTENT_LENGTH);
    let (_, stamped) = Json(body.with_request_id(request_id))
        .into_response()
        .into_parts();
    Response::from_parts(parts, stamped)
}
