use uuid::Uuid;

use crate::{models::Contract, PGPool};

pub async fn get_by_id(id: Uuid, pool: &PGPool) -> Result<Option<Contract>, sqlx::Error> {
    sqlx::query_as::<_, Contract>("SELECT * FROM contracts WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}
