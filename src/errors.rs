use actix_web::{
    error,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use derive_more::{Display, Error};

/// Missing and malformed fields are rejected before any SQL runs; a
/// well-formed lookup with no matching row is a distinct `NotFound`.
#[derive(Debug, Display, Error)]
pub enum ApiError {
    #[display(fmt = "{} field not found", _0)]
    MissingField(#[error(not(source))] &'static str),

    #[display(fmt = "invalid value in the {} field", _0)]
    InvalidField(#[error(not(source))] &'static str),

    #[display(fmt = "invalid credentials")]
    InvalidCredentials,

    #[display(fmt = "not found")]
    NotFound,

    #[display(fmt = "unauthorized")]
    Unauthorized,

    #[display(fmt = "internal error")]
    InternalError,
}

impl error::ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(self.to_string())
    }

    fn status_code(&self) -> StatusCode {
        match *self {
            ApiError::MissingField(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidField(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials => StatusCode::FORBIDDEN,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_names_the_field() {
        assert_eq!(ApiError::MissingField("login").to_string(), "login field not found");
    }

    #[test]
    fn status_codes() {
        use actix_web::error::ResponseError;
        assert_eq!(ApiError::MissingField("id").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidField("id").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidCredentials.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
    }
}
