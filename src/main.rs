use crate::config::config::Config;
use crate::model::response::{Response, WelcomeResponse};
use crate::repository::database::Database;
use actix_web::middleware::{Logger, NormalizePath, TrailingSlash};
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder, Result};
use log::info;
use std::io;

mod config;
mod controller;
mod model;
mod repository;
mod service;

#[get("/")]
async fn root() -> impl Responder {
    HttpResponse::Ok().json(WelcomeResponse {
        message: "Welcome to the NFL API".to_string(),
    })
}

// Paths are normalized to a trailing slash before routing.
#[get("/health/")]
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(Response::success("Everything is working as expected"))
}

async fn not_found() -> Result<HttpResponse> {
    Ok(HttpResponse::NotFound().json(Response::failed("Resource not found")))
}

pub struct AppState {
    db: Database,
    config: Config,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    let config = Config::init().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    log4rs::init_file(&config.log_config_path, Default::default()).map_err(|e| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("log config {}: {e}", config.log_config_path),
        )
    })?;
    let db = Database::new(&config)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    let address = (config.server_host.clone(), config.server_port);
    info!("API NFL listening on {}:{}", address.0, address.1);
    let app_data = web::Data::new(AppState { db, config });

    HttpServer::new(move || {
        App::new()
            .app_data(app_data.clone())
            .configure(controller::handler::config)
            .service(root)
            .service(health_check)
            .default_service(web::route().to(not_found))
            .wrap(NormalizePath::new(TrailingSlash::Always))
            .wrap(Logger::default())
    })
    .bind(address)?
    .run()
    .await
}
