//! Section content as JSON, for clients that render their own markup.

use actix_web::HttpResponse;

use crate::content::{NEWS_ITEMS, SERVICES};
use crate::response::ApiResponse;

/// GET /api/content/services
pub async fn services() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok(SERVICES))
}

/// GET /api/content/news
pub async fn news() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok(NEWS_ITEMS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test, web};

    #[actix_web::test]
    async fn test_services_lists_all_tiles() {
        let app = test::init_service(App::new().route("/s", web::get().to(services))).await;

        let body: serde_json::Value =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/s").to_request())
                .await;

        assert_eq!(body["success"], true);
        let titles: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["title"].as_str().unwrap())
            .collect();
        assert_eq!(
            titles,
            vec!["Birth Registration", "Family Book", "ID Services", "Address Changes"]
        );
    }

    #[actix_web::test]
    async fn test_news_lists_dated_items() {
        let app = test::init_service(App::new().route("/n", web::get().to(news))).await;

        let body: serde_json::Value =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/n").to_request())
                .await;

        let items = body["data"].as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["published"], "2023-11-15");
        assert_eq!(items[0]["title"], "New Online Registration System Launch");
    }
}
