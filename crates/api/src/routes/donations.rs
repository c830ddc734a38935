//! Route definitions for the `/donations` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::donations;
use crate::state::AppState;

/// Routes mounted at `/donations`.
///
/// ```text
/// GET  /    -> list
/// POST /    -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(donations::list).post(donations::create))
}
