use actix_web::{get, web, HttpResponse};
use uuid::Uuid;

use crate::{
    dto::{IdQuery, LoginQuery},
    errors::ApiError,
    service, PGPool,
};

#[get("/billings")]
pub async fn get_billings(
    query: web::Query<LoginQuery>,
    pool_state: web::Data<PGPool>,
) -> Result<HttpResponse, ApiError> {
    let conn: &PGPool = pool_state.get_ref();
    let login = query.login.as_deref().ok_or(ApiError::MissingField("login"))?;
    let billings = service::billing::list_for_client(login, conn).await?;
    Ok(HttpResponse::Ok().json(billings))
}

/// The id parameter is the order's id; see the billings_orders join.
#[get("/billing")]
pub async fn get_billing(
    query: web::Query<IdQuery>,
    pool_state: web::Data<PGPool>,
) -> Result<HttpResponse, ApiError> {
    let conn: &PGPool = pool_state.get_ref();
    let id = query.id.as_deref().ok_or(ApiError::MissingField("id"))?;
    let id = Uuid::parse_str(id).map_err(|_| ApiError::InvalidField("id"))?;
    let billing = service::billing::get_by_order(id, conn).await?;
    Ok(HttpResponse::Ok().json(billing))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_billings).service(get_billing);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use sqlx::postgres::PgPoolOptions;

    fn lazy_pool() -> PGPool {
        PgPoolOptions::new()
            .connect_lazy("postgres://postgres@localhost/agency")
            .unwrap()
    }

    #[actix_web::test]
    async fn billings_without_login_is_a_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(lazy_pool()))
                .configure(init_routes),
        )
        .await;
        let req = test::TestRequest::get().uri("/billings").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn billing_with_non_uuid_id_is_a_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(lazy_pool()))
                .configure(init_routes),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/billing?id=42")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
