use std::{error::Error, fmt::Debug};

use actix_web::{error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{db_interaction::QueryError, utils::error_fmt_chain};

// Body of every non 2xx response
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorBody{
    pub detail: String
}

#[derive(Error)]
pub enum ApiError{
    #[error("Invalid request body: {0}")]
    InvalidPayload(String),
    #[error("{0}")]
    ValidationError(#[from] validator::ValidationErrors),
    #[error("{0}")]
    NotFound(String),
    #[error("Failed due to internal server error")]
    UnexpectedError(#[from] anyhow::Error)
}

impl Debug for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

impl From<QueryError> for ApiError {
    fn from(e: QueryError) -> Self {
        match e {
            QueryError::RowNotFound{ .. } => ApiError::NotFound(e.to_string()),
            _ => ApiError::UnexpectedError(anyhow::Error::new(e))
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidPayload(_) | ApiError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        HttpResponse::build(self.status_code()).json(ErrorBody{
            detail: self.to_string()
        })
    }
}

// Malformed / mistyped json bodies get the same 422 as failed length checks
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::InvalidPayload(err.to_string()).into()
}
