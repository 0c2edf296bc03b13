use crate::api::error::INVALID_PARAMS_MESSAGE;
use crate::api::validation::field_errors;
use crate::ApiError;

use std::panic::Location;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use error_location::ErrorLocation;
use serde::de::DeserializeOwned;
use validator::Validate;

/// Query string that has been deserialized and passed its `validator` rules
pub struct ValidQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                log::debug!("Rejected query string: {}", rejection.body_text());
                ApiError::Validation {
                    message: INVALID_PARAMS_MESSAGE.to_string(),
                    errors: Vec::new(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

        value.validate().map_err(|errors| ApiError::Validation {
            message: INVALID_PARAMS_MESSAGE.to_string(),
            errors: field_errors(&errors),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(ValidQuery(value))
    }
}
