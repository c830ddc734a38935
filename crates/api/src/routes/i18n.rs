use axum::routing::{get, put};
use axum::Router;

use crate::handlers::i18n;
use crate::state::AppState;

/// Routes mounted at `/i18n`.
///
/// ```text
/// GET /messages          -> messages
/// GET /messages/{key}    -> message
/// PUT /locale            -> set_locale
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/messages", get(i18n::messages))
        .route("/messages/{key}", get(i18n::message))
        .route("/locale", put(i18n::set_locale))
}
