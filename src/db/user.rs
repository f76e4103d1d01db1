use crate::{models::{Client, UserAccount}, PGPool};

/// Credential check: one row when login and password hash both match.
pub async fn authorize(
    login: &str,
    password_hash: &str,
    pool: &PGPool,
) -> Result<Option<UserAccount>, sqlx::Error> {
    sqlx::query_as::<_, UserAccount>(
        "SELECT id, login, password_hash, role FROM users WHERE login = $1 AND password_hash = $2",
    )
    .bind(login)
    .bind(password_hash)
    .fetch_optional(pool)
    .await
}

pub async fn get_profile(login: &str, pool: &PGPool) -> Result<Option<Client>, sqlx::Error> {
    sqlx::query_as::<_, Client>(
        "SELECT id, full_name, phone_number, login, photo FROM clients WHERE login = $1",
    )
    .bind(login)
    .fetch_optional(pool)
    .await
}
