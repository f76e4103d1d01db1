use actix_web::{get, web, HttpResponse};
use uuid::Uuid;

use crate::{dto::IdQuery, errors::ApiError, service, PGPool};

#[get("/contract")]
pub async fn get_contract(
    query: web::Query<IdQuery>,
    pool_state: web::Data<PGPool>,
) -> Result<HttpResponse, ApiError> {
    let conn: &PGPool = pool_state.get_ref();
    let id = query.id.as_deref().ok_or(ApiError::MissingField("id"))?;
    let id = Uuid::parse_str(id).map_err(|_| ApiError::InvalidField("id"))?;
    let contract = service::contract::get_by_id(id, conn).await?;
    Ok(HttpResponse::Ok().json(contract))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_contract);
}
