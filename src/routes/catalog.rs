use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::models::catalog::Catalog;

// GET /api/catalog/packages
pub async fn get_packages(catalog: web::Data<Arc<Catalog>>) -> impl Responder {
    HttpResponse::Ok().json(&catalog.packages)
}

// GET /api/catalog/add-ons
pub async fn get_add_ons(catalog: web::Data<Arc<Catalog>>) -> impl Responder {
    HttpResponse::Ok().json(&catalog.add_ons)
}

// GET /api/catalog/event-types
pub async fn get_event_types(catalog: web::Data<Arc<Catalog>>) -> impl Responder {
    HttpResponse::Ok().json(&catalog.event_types)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_rt::test]
    async fn packages_endpoint_serves_the_catalog() {
        let catalog = Arc::new(Catalog::standard());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(catalog))
                .route("/api/catalog/packages", web::get().to(get_packages)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/catalog/packages")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.as_array().unwrap().len(), 3);
        assert_eq!(body[0]["id"], "digital");
        assert_eq!(body[1]["price"], 649.0);
    }
}
