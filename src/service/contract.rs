use uuid::Uuid;

use crate::{db, dto::ContractView, errors::ApiError, PGPool};

pub async fn get_by_id(id: Uuid, pool: &PGPool) -> Result<ContractView, ApiError> {
    let contract = db::contract::get_by_id(id, pool)
        .await
        .map_err(|_| ApiError::InternalError)?
        .ok_or(ApiError::NotFound)?;
    Ok(ContractView::from(contract))
}
