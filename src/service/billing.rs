use uuid::Uuid;

use crate::{db, dto::BillingView, errors::ApiError, service::check, PGPool};

pub async fn list_for_client(login: &str, pool: &PGPool) -> Result<Vec<BillingView>, ApiError> {
    check::require(login, check::only_letters_digits_dash, "login")?;
    let billings = db::billing::get_by_client(login, pool)
        .await
        .map_err(|_| ApiError::InternalError)?;
    Ok(billings.into_iter().map(BillingView::from).collect())
}

/// The id here is the order's id; the billing row is reached through the
/// join table.
pub async fn get_by_order(order_id: Uuid, pool: &PGPool) -> Result<BillingView, ApiError> {
    let billing = db::billing::get_by_order(order_id, pool)
        .await
        .map_err(|_| ApiError::InternalError)?
        .ok_or(ApiError::NotFound)?;
    Ok(BillingView::from(billing))
}
