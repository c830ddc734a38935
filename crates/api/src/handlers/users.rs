//! Handlers for the `/users` resource (admin only).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use charity_core::roles::Role;
use charity_core::types::DbId;
use charity_core::validation::user::NewUser;
use charity_db::models::user::{CreateUser, UserResponse};
use charity_db::repositories::UserRepo;
use serde::Serialize;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::middleware::rbac::{guard, Permit};
use crate::state::AppState;

/// Summary returned after creating an account.
#[derive(Debug, Serialize)]
pub struct CreatedUser {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// GET /api/v1/users
pub async fn list(
    State(state): State<AppState>,
    _: Permit<guard::ListUsers>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// POST /api/v1/users
///
/// A taken email answers 400. The unique constraint backs up the lookup
/// when two requests race.
pub async fn create(
    State(state): State<AppState>,
    Permit(admin, _): Permit<guard::CreateUser>,
    ValidJson(input): ValidJson<NewUser>,
) -> AppResult<(StatusCode, Json<CreatedUser>)> {
    if UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::BadRequest("Email already in use".into()));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            name: input.name,
            email: input.email,
            phone: input.phone,
            password_hash,
            role: input.role,
        },
    )
    .await?;

    tracing::info!(admin_id = admin.user_id, user_id = user.id, role = %user.role, "User created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedUser {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }),
    ))
}
