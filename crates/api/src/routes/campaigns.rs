//! Route definitions for the `/campaigns` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::campaigns;
use crate::state::AppState;

/// Routes mounted at `/campaigns`.
///
/// ```text
/// GET  /                  -> list
/// POST /                  -> create (admin, editor)
/// GET  /{id}              -> get_by_id
/// POST /{id}/reconcile    -> reconcile (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(campaigns::list).post(campaigns::create))
        .route("/{id}", get(campaigns::get_by_id))
        .route("/{id}/reconcile", post(campaigns::reconcile))
}
