use uuid::Uuid;

use crate::{models::Order, PGPool};

pub async fn get_by_client(login: &str, pool: &PGPool) -> Result<Vec<Order>, sqlx::Error> {
    sqlx::query_as::<_, Order>(
        "SELECT o.* \
         FROM orders o \
         INNER JOIN clients c ON o.client_id = c.id \
         WHERE c.login = $1",
    )
    .bind(login)
    .fetch_all(pool)
    .await
}

pub async fn get_by_id(id: Uuid, pool: &PGPool) -> Result<Option<Order>, sqlx::Error> {
    sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}
