use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

mod db;
mod models;
mod routes;
mod services;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);
    println!("Attempting to bind to {}:{}", host, port);

    // A broken catalog must stop the boot, never mis-price a quote
    let catalog = Arc::new(models::catalog::Catalog::standard());
    catalog.validate().expect("Booking catalog is invalid");
    println!(
        "Booking catalog loaded: {} packages, {} add-ons",
        catalog.packages.len(),
        catalog.add_ons.len()
    );

    let mongo_uri = std::env::var("MONGODB_URI").expect("MONGODB_URI must be set");
    let client = db::mongo::create_mongo_client(&mongo_uri).await;
    println!("MongoDB connection established");

    println!("Starting HTTP server...");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                // The booking form is served from a separate site
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(web::Data::new(client.clone()))
            .app_data(web::Data::new(catalog.clone()))
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::scope("/api")
                    .service(
                        web::scope("/catalog")
                            .route("/packages", web::get().to(routes::catalog::get_packages))
                            .route("/add-ons", web::get().to(routes::catalog::get_add_ons))
                            .route(
                                "/event-types",
                                web::get().to(routes::catalog::get_event_types),
                            ),
                    )
                    .route("/quote", web::post().to(routes::quote::calculate_quote))
                    .route(
                        "/enquiries",
                        web::post().to(routes::enquiry::submit_enquiry),
                    ),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
