use uuid::Uuid;

use crate::{models::Billing, PGPool};

/// Billings never reference orders directly; both lookups go through the
/// billings_orders join table.
pub async fn get_by_client(login: &str, pool: &PGPool) -> Result<Vec<Billing>, sqlx::Error> {
    sqlx::query_as::<_, Billing>(
        "SELECT b.* \
         FROM billings b \
         INNER JOIN billings_orders bo ON b.id = bo.billing_id \
         INNER JOIN orders o ON bo.order_id = o.id \
         INNER JOIN clients c ON o.client_id = c.id \
         WHERE c.login = $1",
    )
    .bind(login)
    .fetch_all(pool)
    .await
}

/// Single billing looked up by the order it pays for.
pub async fn get_by_order(order_id: Uuid, pool: &PGPool) -> Result<Option<Billing>, sqlx::Error> {
    sqlx::query_as::<_, Billing>(
        "SELECT b.* \
         FROM billings b \
         JOIN billings_orders bo ON b.id = bo.billing_id \
         WHERE bo.order_id = $1",
    )
    .bind(order_id)
    .fetch_optional(pool)
    .await
}
