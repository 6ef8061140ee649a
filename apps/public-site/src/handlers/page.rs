//! The landing page.

use actix_web::{HttpResponse, http::header::ContentType, web};

use crate::state::AppState;

/// GET /
pub async fn home(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(state.home_page.to_string())
}
