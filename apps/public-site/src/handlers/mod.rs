//! HTTP handlers and route configuration.

mod content;
mod fallback;
mod health;
mod page;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(page::home))
            .default_service(web::to(fallback::method_not_allowed)),
    )
    .service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/content")
                    .route("/services", web::get().to(content::services))
                    .route("/news", web::get().to(content::news)),
            ),
    )
    .default_service(web::to(fallback::not_found));
}
