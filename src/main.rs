pub mod db;
pub mod handlers;
pub mod service;
pub mod models;
pub mod dto;
pub mod errors;

use actix_web::{HttpServer, App, web};
use db::init_db_pool;
use sqlx::{postgres::Postgres, Pool};
use dotenv::dotenv;
use std::env;

type PGPool = Pool<Postgres>;

/// Session token lifetime in seconds.
const SESSION_TOKEN_EXP: usize = 12 * 60 * 60;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    service::log::init_logger();
    let db_url = env::var("DATABASE_URL")
    .unwrap_or_else(|e| {
        panic!("Failed to get env with name 'DATABASE_URL': {:?}", e);
    });
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8443".to_string());
    let pool: PGPool = init_db_pool(&db_url).await;
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .wrap(service::log::LoggerMiddleware)
            .service(
                web::resource("/authorize")
                    .route(web::post().to(handlers::auth::authorize))
            )
            .service(
                web::scope("")
                    .wrap(service::auth::SessionMiddleware)
                    .configure(handlers::order::init_routes)
                    .configure(handlers::billing::init_routes)
                    .configure(handlers::realtor::init_routes)
                    .configure(handlers::contract::init_routes)
                    .configure(handlers::profile::init_routes)
            )
    })
    .bind(bind_addr)?
    .run()
    .await
}
