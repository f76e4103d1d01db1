use crate::{db, dto::ProfileView, errors::ApiError, service::check, PGPool};

pub async fn get_by_login(login: &str, pool: &PGPool) -> Result<ProfileView, ApiError> {
    check::require(login, check::only_letters_digits_dash, "login")?;
    let client = db::user::get_profile(login, pool)
        .await
        .map_err(|_| ApiError::InternalError)?
        .ok_or(ApiError::NotFound)?;
    Ok(ProfileView::from(client))
}
