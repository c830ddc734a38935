//! Request extraction with validation and JSON error envelopes.

use std::convert::Infallible;

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use axum_extra::extract::CookieJar;
use charity_core::error::{CoreError, ValidationIssue};
use charity_core::i18n::{Locale, LOCALE_COOKIE};
use charity_core::validation::Payload;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body that has been deserialized and passed every [`Payload`] rule.
///
/// Shape errors (wrong type, unknown enum value, missing field) and rule
/// violations both answer 400 with a list of issues. A body that is not
/// JSON at all answers 400 with a plain message.
///
/// ```ignore
/// async fn create(ValidJson(input): ValidJson<NewPatient>) -> AppResult<Json<Patient>> { .. }
/// ```
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Payload,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;
        value.check()?;
        Ok(ValidJson(value))
    }
}

/// Path parameters whose rejection answers 400 in the JSON error envelope
/// (`/patients/abc` where an id is expected).
#[derive(Debug)]
pub struct ValidPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(ValidPath(value))
    }
}

/// Locale selected by the `lang` cookie, or the default locale.
#[derive(Debug, Clone, Copy)]
pub struct RequestLocale(pub Locale);

impl<S> FromRequestParts<S> for RequestLocale
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state).await?;
        Ok(RequestLocale(Locale::from_cookie(
            jar.get(LOCALE_COOKIE).map(|c| c.value()),
        )))
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(err) => AppError::Core(CoreError::Validation(vec![
            ValidationIssue {
                path: Vec::new(),
                code: "invalid_type".to_string(),
                message: err.body_text(),
            },
        ])),
        other => AppError::BadRequest(other.body_text()),
    }
}
