//! `ValidatedJson<T>`: decodes a JSON body and runs its `Validate` rules.
//!
//! Every failure (bad JSON, wrong content type, missing field, empty required
//! field) is turned into `AppError::Validation`, i.e. a 400, so handlers only
//! ever see well-formed input.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::errors::AppError;

pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::Validation(describe(&e)))?;

        Ok(Self(value))
    }
}

/// Flattens field errors into one stable, human-readable line.
fn describe(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .map(|e| match &e.message {
            Some(message) => message.to_string(),
            None => e.code.to_string(),
        })
        .collect();
    messages.sort();
    messages.join("; ")
}
