//! Request extractors.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use folio_core::types::{parse_id, DbId};
use folio_core::validation::into_core_error;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body extractor that also runs [`Validate`] rules.
///
/// Malformed JSON and missing fields become [`AppError::BadRequest`]; rule
/// violations become a validation error. Either way the client gets a JSON
/// 400 instead of axum's plain-text rejection.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        value.validate().map_err(into_core_error)?;
        Ok(Self(value))
    }
}

/// The `{id}` path segment parsed as a project identifier.
///
/// Runs before any body extractor, so a malformed id is reported as
/// `INVALID_IDENTIFIER` regardless of what the body contains.
#[derive(Debug, Clone, Copy)]
pub struct ProjectId(pub DbId);

impl<S> FromRequestParts<S> for ProjectId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(parse_id(&raw)?))
    }
}
