use actix_web::{get, post, web, HttpResponse};
use log::info;
use uuid::Uuid;

use crate::{
    dto::{IdQuery, NewResponseForm},
    errors::ApiError,
    service, PGPool,
};

#[get("/realtor")]
pub async fn get_realtor(
    query: web::Query<IdQuery>,
    pool_state: web::Data<PGPool>,
) -> Result<HttpResponse, ApiError> {
    let conn: &PGPool = pool_state.get_ref();
    let id = query.id.as_deref().ok_or(ApiError::MissingField("id"))?;
    let id = Uuid::parse_str(id).map_err(|_| ApiError::InvalidField("id"))?;
    let realtor = service::realtor::get_by_id(id, conn).await?;
    Ok(HttpResponse::Ok().json(realtor))
}

#[post("/response")]
pub async fn add_response(
    form: web::Form<NewResponseForm>,
    pool_state: web::Data<PGPool>,
) -> Result<HttpResponse, ApiError> {
    let conn: &PGPool = pool_state.get_ref();
    let form = form.into_inner();
    let login = form.login.ok_or(ApiError::MissingField("login"))?;
    let message = form.message.ok_or(ApiError::MissingField("message"))?;
    let realtor_id = form.realtor_id.ok_or(ApiError::MissingField("realtor_id"))?;
    let realtor_id = Uuid::parse_str(&realtor_id).map_err(|_| ApiError::InvalidField("realtor_id"))?;
    service::realtor::add_response(&login, &message, realtor_id, conn).await?;
    info!("response for realtor {} left by {}", realtor_id, login);
    Ok(HttpResponse::Ok().body("OK"))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_realtor).service(add_response);
}
