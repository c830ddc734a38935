pub mod auth;
pub mod campaigns;
pub mod dashboard;
pub mod donations;
pub mod health;
pub mod i18n;
pub mod patients;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                      login (public)
/// /auth/me                         current user
///
/// /patients                        list (filter/search/sort), create
/// /patients/{id}                   get, update, delete
///
/// /campaigns                       list, create
/// /campaigns/{id}                  get
/// /campaigns/{id}/reconcile        recompute total (POST, admin only)
///
/// /donations                       list (own or all), create
///
/// /users                           list, create (admin only)
///
/// /dashboard/stats                 overview counters
///
/// /i18n/messages                   message table for the cookie locale (public)
/// /i18n/messages/{key}             one message by dotted key (public)
/// /i18n/locale                     set locale cookie (PUT, public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/patients", patients::router())
        .nest("/campaigns", campaigns::router())
        .nest("/donations", donations::router())
        .nest("/users", users::router())
        .nest("/dashboard", dashboard::router())
        .nest("/i18n", i18n::router())
}
