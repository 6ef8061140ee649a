//! Fallback handlers for unmatched routes and methods.

use actix_web::{HttpMessage, HttpRequest, HttpResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;

pub async fn not_found(req: HttpRequest) -> AppResult<HttpResponse> {
    let request_id = req.extensions().get::<RequestId>().map(|id| id.as_str().to_string());

    Err(AppError::NotFound {
        path: req.path().to_string(),
        request_id,
    })
}

pub async fn method_not_allowed() -> AppResult<HttpResponse> {
    Err(AppError::MethodNotAllowed)
}
