use actix_web::{web, HttpResponse};
use log::info;

use crate::{dto::AuthorizeForm, errors::ApiError, service, PGPool};

pub async fn authorize(
    form: web::Form<AuthorizeForm>,
    pool_state: web::Data<PGPool>,
) -> Result<HttpResponse, ApiError> {
    let conn: &PGPool = pool_state.get_ref();
    let form = form.into_inner();
    let login = form.login.ok_or(ApiError::MissingField("login"))?;
    let password = form.password.ok_or(ApiError::MissingField("password"))?;
    let authorized = service::auth::authorize(&login, &password, conn).await?;
    info!("session opened for {}", login);
    Ok(HttpResponse::Ok().json(authorized))
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

    fn app_config(cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(lazy_pool()))
            .service(web::resource("/authorize").route(web::post().to(authorize)));
    }

    #[actix_web::test]
    async fn missing_password_is_a_bad_request() {
        let app = test::init_service(App::new().configure(app_config)).await;
        let req = test::TestRequest::post()
            .uri("/authorize")
            .insert_header(("content-type", "application/x-www-form-urlencoded"))
            .set_payload("login=ivanov")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn missing_login_is_a_bad_request() {
        let app = test::init_service(App::new().configure(app_config)).await;
        let req = test::TestRequest::post()
            .uri("/authorize")
            .insert_header(("content-type", "application/x-www-form-urlencoded"))
            .set_payload("password=hunter2")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn quote_in_login_is_rejected_without_touching_the_db() {
        // The pool is lazy: if the handler reached the database this would
        // surface as an internal error, not a 400.
        let app = test::init_service(App::new().configure(app_config)).await;
        let req = test::TestRequest::post()
            .uri("/authorize")
            .insert_header(("content-type", "application/x-www-form-urlencoded"))
            .set_payload("login=iva%27nov&password=hunter2")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
