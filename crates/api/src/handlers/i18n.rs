//! Locale preference and message table endpoints.
//!
//! The preference lives in the `lang` cookie; an absent or unsupported
//! value selects the default locale. These routes are public.

use std::collections::BTreeMap;

use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use charity_core::error::CoreError;
use charity_core::i18n::{self, Locale, LOCALE_COOKIE, SUPPORTED_LOCALES};
use charity_core::validation::locale::SetLocaleRequest;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{RequestLocale, ValidJson, ValidPath};

#[derive(Debug, Serialize)]
pub struct MessagesResponse {
    pub locale: Locale,
    /// `"rtl"` or `"ltr"`.
    pub dir: &'static str,
    pub messages: BTreeMap<&'static str, &'static str>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub key: String,
    pub locale: Locale,
    /// The key itself when no table has it.
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct LocaleResponse {
    pub locale: Locale,
}

/// GET /api/v1/i18n/messages
///
/// Every message resolved for the cookie's locale, keyed by dotted path.
pub async fn messages(RequestLocale(locale): RequestLocale) -> Json<MessagesResponse> {
    Json(MessagesResponse {
        locale,
        dir: if locale.is_rtl() { "rtl" } else { "ltr" },
        messages: i18n::messages(locale).into_iter().collect(),
    })
}

/// GET /api/v1/i18n/messages/{key}
pub async fn message(
    RequestLocale(locale): RequestLocale,
    ValidPath(key): ValidPath<String>,
) -> Json<MessageResponse> {
    let text = i18n::translate_path(locale, &key);
    Json(MessageResponse { key, locale, text })
}

/// PUT /api/v1/i18n/locale
///
/// Persist the preferred locale in the `lang` cookie.
pub async fn set_locale(
    jar: CookieJar,
    ValidJson(input): ValidJson<SetLocaleRequest>,
) -> AppResult<(CookieJar, Json<LocaleResponse>)> {
    let locale = Locale::from_code(&input.locale).ok_or_else(|| {
        let supported: Vec<&str> = SUPPORTED_LOCALES.iter().map(|l| l.code()).collect();
        AppError::Core(CoreError::invalid_field(
            "locale",
            "unsupported_locale",
            format!(
                "Unsupported locale '{}', expected one of: {}",
                input.locale,
                supported.join(", ")
            ),
        ))
    })?;

    let cookie = Cookie::build((LOCALE_COOKIE, locale.code()))
        .path("/")
        .same_site(SameSite::Lax);

    tracing::debug!(locale = locale.code(), "Locale preference set");
    Ok((jar.add(cookie), Json(LocaleResponse { locale })))
}
