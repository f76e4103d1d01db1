use uuid::Uuid;

use crate::{models::Realtor, PGPool};

pub async fn get_by_id(id: Uuid, pool: &PGPool) -> Result<Option<Realtor>, sqlx::Error> {
    sqlx::query_as::<_, Realtor>(
        "SELECT id, phone_number, rating, experience, full_name, photo FROM realtors WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn get_responses(realtor_id: Uuid, pool: &PGPool) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        "SELECT r.message \
         FROM responses r \
         JOIN responses_realtors rr ON r.id = rr.response_id \
         WHERE rr.realtor_id = $1",
    )
    .bind(realtor_id)
    .fetch_all(pool)
    .await
}

/// Inserts the review row and its realtor link in one transaction, so a
/// failure between the two statements cannot leave an orphaned response.
pub async fn add_response(
    login: &str,
    message: &str,
    realtor_id: Uuid,
    pool: &PGPool,
) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    let response_id = Uuid::new_v4();
    sqlx::query("INSERT INTO responses (id, author_login, message) VALUES ($1, $2, $3)")
        .bind(response_id)
        .bind(login)
        .bind(message)
        .execute(&mut *tx)
        .await?;
    sqlx::query("INSERT INTO responses_realtors (realtor_id, response_id) VALUES ($1, $2)")
        .bind(realtor_id)
        .bind(response_id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    #[actix_web::test]
    #[ignore = "needs a provisioned agency database"]
    async fn response_appears_exactly_once_after_insert() {
        let url = std::env::var("DATABASE_URL").unwrap();
        let pool = PgPoolOptions::new().connect(&url).await.unwrap();
        let realtor_id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO realtors (id, phone_number, rating, experience, full_name, photo) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(realtor_id)
        .bind("+7-900-000-00-00")
        .bind(4.5f64)
        .bind(3i32)
        .bind("Test Realtor")
        .bind(vec![0u8])
        .execute(&pool)
        .await
        .unwrap();

        add_response("tester", "solid work", realtor_id, &pool).await.unwrap();

        let responses = get_responses(realtor_id, &pool).await.unwrap();
        assert_eq!(responses.iter().filter(|m| m.as_str() == "solid work").count(), 1);
    }
}
