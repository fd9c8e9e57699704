use std::error::Error;

use axum::{
    async_trait,
    extract::{FromRequest, Json, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use super::app_error::AppError;

pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = match Json::<T>::from_request(req, state).await {
            Ok(data) => data,
            Err(e) => match e.source() {
                Some(source) => {
                    return Err(AppError::new(
                        StatusCode::BAD_REQUEST,
                        format!("Invalid body: {}", source).as_str(),
                    ));
                }
                None => {
                    return Err(AppError::new(
                        StatusCode::BAD_REQUEST,
                        e.body_text().as_str(),
                    ));
                }
            },
        };

        data.validate()
            .map_err(|e| AppError::new(StatusCode::BAD_REQUEST, first_message(&e).as_str()))?;

        Ok(ValidatedJson(data))
    }
}

// Field messages are written for the end user, so surface one of them as-is.
fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| format!("Invalid body: {}", errors))
}
