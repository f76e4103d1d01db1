use std::future::{ready, Ready};

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    HttpMessage,
};
use futures_util::future::LocalBoxFuture;
use log::error;

use crate::{
    db,
    dto::AuthorizedView,
    errors::ApiError,
    models::Role,
    service::{check, crypto},
    PGPool, SESSION_TOKEN_EXP,
};

/// Identity attached to the request once the session token checks out.
pub struct SessionData {
    pub login: String,
    pub role: Role,
}

/// Credential check against the users table. On success a signed session
/// token is issued; every endpoint except `/authorize` requires it.
pub async fn authorize(login: &str, password: &str, pool: &PGPool) -> Result<AuthorizedView, ApiError> {
    check::require(login, check::only_letters_digits_dash, "login")?;
    let password_hash = crypto::sha3_256_hex(password);
    let account = db::user::authorize(login, &password_hash, pool)
        .await
        .map_err(|_| ApiError::InternalError)?
        .ok_or(ApiError::InvalidCredentials)?;
    let role = Role::parse(&account.role).ok_or_else(|| {
        error!("account {} carries unknown role '{}'", login, account.role);
        ApiError::InternalError
    })?;
    let token = jwt::create(login, role, SESSION_TOKEN_EXP).map_err(|_| ApiError::InternalError)?;
    Ok(AuthorizedView { role, token })
}

pub struct SessionMiddleware;

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Transform = SessionMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionMiddlewareService { service }))
    }
}

pub struct SessionMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for SessionMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let claims = jwt::parse_request(&req).and_then(|token| jwt::decode_claims(&token));
        match claims {
            Ok(data) => {
                req.extensions_mut().insert(SessionData {
                    login: data.claims.login,
                    role: data.claims.role,
                });
                let fut = self.service.call(req);
                Box::pin(async move { fut.await })
            }
            Err(err) => Box::pin(async move { Err(err.into()) }),
        }
    }
}

pub mod jwt {
    use actix_web::dev::ServiceRequest;
    use chrono::Utc;
    use jsonwebtoken::{
        decode, encode, Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation,
    };
    use std::env;

    use crate::{dto::Claims, errors::ApiError, models::Role};

    fn get_secret() -> String {
        env::var("SESSION_TOKEN_SECRET").expect("Session token secret must be set")
    }

    pub fn create(login: &str, role: Role, ttl_secs: usize) -> Result<String, jsonwebtoken::errors::Error> {
        let exp = Utc::now().timestamp() as usize + ttl_secs;
        let claims = Claims::new(login, role, exp);
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(get_secret().as_ref()),
        )
    }

    /// Expiration is checked during decoding; an expired or tampered token
    /// comes back as `Unauthorized`.
    pub fn decode_claims(token: &str) -> Result<TokenData<Claims>, ApiError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(get_secret().as_ref()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|_| ApiError::Unauthorized)
    }

    pub fn parse_request(req: &ServiceRequest) -> Result<String, ApiError> {
        if let Some(auth_header) = req.headers().get("Authorization") {
            if let Ok(auth_value) = auth_header.to_str() {
                if let Some(token) = auth_value.strip_prefix("Bearer ") {
                    return Ok(token.trim().to_string());
                }
            }
        }
        Err(ApiError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test as actix_test, web, App, HttpResponse, Responder};
    use chrono::Utc;
    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

    fn set_test_secret() {
        std::env::set_var("SESSION_TOKEN_SECRET", "unit-test-secret");
    }

    #[test]
    fn token_round_trip_keeps_login_and_role() {
        set_test_secret();
        let token = jwt::create("ivanov", Role::Client, 60).unwrap();
        let data = jwt::decode_claims(&token).unwrap();
        assert_eq!(data.claims.login, "ivanov");
        assert_eq!(data.claims.role, Role::Client);
    }

    #[test]
    fn expired_token_is_refused() {
        set_test_secret();
        let stale = crate::dto::Claims::new(
            "ivanov",
            Role::Client,
            (Utc::now().timestamp() - 600) as usize,
        );
        let token = encode(
            &Header::new(Algorithm::HS256),
            &stale,
            &EncodingKey::from_secret("unit-test-secret".as_ref()),
        )
        .unwrap();
        assert!(matches!(jwt::decode_claims(&token), Err(ApiError::Unauthorized)));
    }

    async fn ping() -> impl Responder {
        HttpResponse::Ok().body("pong")
    }

    #[actix_web::test]
    async fn guarded_route_rejects_missing_token() {
        set_test_secret();
        let app = actix_test::init_service(
            App::new().wrap(SessionMiddleware).route("/ping", web::get().to(ping)),
        )
        .await;
        let req = actix_test::TestRequest::get().uri("/ping").to_request();
        let resp = actix_test::try_call_service(&app, req).await;
        let err = resp.expect_err("request without a token must be refused");
        assert_eq!(err.as_response_error().status_code(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn guarded_route_accepts_issued_token() {
        set_test_secret();
        let token = jwt::create("ivanov", Role::Client, 60).unwrap();
        let app = actix_test::init_service(
            App::new().wrap(SessionMiddleware).route("/ping", web::get().to(ping)),
        )
        .await;
        let req = actix_test::TestRequest::get()
            .uri("/ping")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
