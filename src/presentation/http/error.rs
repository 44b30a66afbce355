use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    field: String,
    reason: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        let status = match &err {
            ApplicationError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApplicationError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApplicationError::Conflict { .. } => StatusCode::CONFLICT,
            ApplicationError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApplicationError::Persistence { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApplicationError::Domain(inner) => match inner {
                DomainError::Validation(_) => StatusCode::BAD_REQUEST,
                DomainError::Conflict(_) => StatusCode::CONFLICT,
                DomainError::NotFound(_) => StatusCode::NOT_FOUND,
                DomainError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        };
        Self {
            status,
            field: err.field().to_string(),
            reason: err.reason(),
        }
    }

    pub fn unauthenticated(reason: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            field: "user".into(),
            reason: reason.into(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let mut errors = BTreeMap::new();
        errors.insert(self.field, self.reason);
        (self.status, Json(ErrorBody { errors })).into_response()
    }
}

/// The result envelope's failure half: a keyed `field -> reason` map.
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub errors: BTreeMap<String, String>,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
