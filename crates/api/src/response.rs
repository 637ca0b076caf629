//! Relay of service results onto HTTP responses.
//!
//! Two shapes exist:
//!
//! - [`ServiceResponse`] applies the `{data, errors}` convention: non-empty
//!   `errors` become a 422 whose body is exactly the error array, anything
//!   else is a 200 whose body is exactly `data` (`null` when absent).
//! - [`Raw`] sends whatever the service returned with 200. Used by the feed
//!   routes and the single-activity lookup, which never report errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use cruddur_core::result::ServiceResult;
use serde::Serialize;

/// A service result after the errors-first check.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceResponse<T> {
    Data(Option<T>),
    Errors(Vec<String>),
}

impl<T> From<ServiceResult<T>> for ServiceResponse<T> {
    fn from(result: ServiceResult<T>) -> Self {
        match result.into_outcome() {
            Ok(data) => Self::Data(data),
            Err(errors) => Self::Errors(errors),
        }
    }
}

impl<T: Serialize> IntoResponse for ServiceResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Data(data) => (StatusCode::OK, Json(data)).into_response(),
            Self::Errors(errors) => {
                tracing::debug!(?errors, "Service reported validation errors");
                (StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response()
            }
        }
    }
}

/// A payload relayed verbatim with 200.
#[derive(Debug, Clone, PartialEq)]
pub struct Raw<T>(pub T);

impl<T: Serialize> IntoResponse for Raw<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.0)).into_response()
    }
}
