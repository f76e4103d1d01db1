use uuid::Uuid;

use crate::{db, dto::RealtorView, errors::ApiError, service::check, PGPool};

/// Realtor card plus every review left for them.
pub async fn get_by_id(id: Uuid, pool: &PGPool) -> Result<RealtorView, ApiError> {
    let realtor = db::realtor::get_by_id(id, pool)
        .await
        .map_err(|_| ApiError::InternalError)?
        .ok_or(ApiError::NotFound)?;
    let responses = db::realtor::get_responses(id, pool)
        .await
        .map_err(|_| ApiError::InternalError)?;
    Ok(RealtorView::new(realtor, responses))
}

/// Insert-only: reviews are never updated or deleted, and repeated calls
/// create repeated reviews.
pub async fn add_response(
    login: &str,
    message: &str,
    realtor_id: Uuid,
    pool: &PGPool,
) -> Result<(), ApiError> {
    check::require(login, check::only_letters_digits_dash, "login")?;
    check::require(message, check::only_printed_chars, "message")?;
    db::realtor::add_response(login, message, realtor_id, pool)
        .await
        .map_err(|_| ApiError::InternalError)
}
