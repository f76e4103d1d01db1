pub mod user;
pub mod order;
pub mod billing;
pub mod realtor;
pub mod contract;
use crate::PGPool;
use log::info;
use sqlx::postgres::PgPoolOptions;

pub async fn init_db_pool(db_url: &str) -> PGPool {
    let pool: PGPool = PgPoolOptions::new()
        .max_connections(5)
        .connect(db_url)
        .await
        .unwrap();
    info!("connected to postgresql");
    pool
}
