use actix_web::{get, web, HttpResponse};
use uuid::Uuid;

use crate::{
    dto::{IdQuery, LoginQuery},
    errors::ApiError,
    service, PGPool,
};

#[get("/orders")]
pub async fn get_orders(
    query: web::Query<LoginQuery>,
    pool_state: web::Data<PGPool>,
) -> Result<HttpResponse, ApiError> {
    let conn: &PGPool = pool_state.get_ref();
    let login = query.login.as_deref().ok_or(ApiError::MissingField("login"))?;
    let orders = service::order::list_for_client(login, conn).await?;
    Ok(HttpResponse::Ok().json(orders))
}

#[get("/order")]
pub async fn get_order(
    query: web::Query<IdQuery>,
    pool_state: web::Data<PGPool>,
) -> Result<HttpResponse, ApiError> {
    let conn: &PGPool = pool_state.get_ref();
    let id = query.id.as_deref().ok_or(ApiError::MissingField("id"))?;
    let id = Uuid::parse_str(id).map_err(|_| ApiError::InvalidField("id"))?;
    let order = service::order::get_by_id(id, conn).await?;
    Ok(HttpResponse::Ok().json(order))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_orders).service(get_order);
}
