use uuid::Uuid;

use crate::{
    db,
    dto::{OrderSummaryView, OrderView},
    errors::ApiError,
    service::check,
    PGPool,
};

pub async fn list_for_client(login: &str, pool: &PGPool) -> Result<Vec<OrderSummaryView>, ApiError> {
    check::require(login, check::only_letters_digits_dash, "login")?;
    let orders = db::order::get_by_client(login, pool)
        .await
        .map_err(|_| ApiError::InternalError)?;
    Ok(orders.into_iter().map(OrderSummaryView::from).collect())
}

pub async fn get_by_id(id: Uuid, pool: &PGPool) -> Result<OrderView, ApiError> {
    let order = db::order::get_by_id(id, pool)
        .await
        .map_err(|_| ApiError::InternalError)?
        .ok_or(ApiError::NotFound)?;
    Ok(OrderView::from(order))
}
