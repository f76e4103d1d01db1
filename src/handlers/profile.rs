use actix_web::{get, web, HttpResponse};

use crate::{dto::LoginQuery, errors::ApiError, service, PGPool};

#[get("/profile")]
pub async fn get_profile(
    query: web::Query<LoginQuery>,
    pool_state: web::Data<PGPool>,
) -> Result<HttpResponse, ApiError> {
    let conn: &PGPool = pool_state.get_ref();
    let login = query.login.as_deref().ok_or(ApiError::MissingField("login"))?;
    let profile = service::profile::get_by_login(login, conn).await?;
    Ok(HttpResponse::Ok().json(profile))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_profile);
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
    async fn profile_without_login_is_a_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(lazy_pool()))
                .configure(init_routes),
        )
        .await;
        let req = test::TestRequest::get().uri("/profile").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
