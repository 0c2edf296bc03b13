use crate::api::error::INVALID_BODY_MESSAGE;
use crate::api::validation::field_errors;
use crate::ApiError;

use std::panic::Location;

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
};
use error_location::ErrorLocation;
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body that has been deserialized and passed its `validator` rules
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection)?;

        value.validate().map_err(|errors| ApiError::Validation {
            message: INVALID_BODY_MESSAGE.to_string(),
            errors: field_errors(&errors),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(ValidJson(value))
    }
}

#[track_caller]
fn json_rejection(rejection: JsonRejection) -> ApiError {
    let location = ErrorLocation::from(Location::caller());

    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ApiError::PayloadTooLarge {
            message: "Corpo da requisição muito grande".to_string(),
            location,
        };
    }

    log::debug!("Rejected request body: {}", rejection.body_text());
    ApiError::Validation {
        message: INVALID_BODY_MESSAGE.to_string(),
        errors: Vec::new(),
        location,
    }
}
