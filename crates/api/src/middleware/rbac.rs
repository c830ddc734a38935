//! Role-based access control.
//!
//! [`Permit<G>`] wraps [`AuthUser`] and rejects requests whose role does not
//! permit `G::OPERATION` according to [`Role::permits`]. Because it is a
//! parts extractor it runs before any body extractor, so an unauthorized
//! caller is turned away before the body is parsed.
//!
//! An insufficient role answers 401, the same as a missing token.
//!
//! [`Role::permits`]: charity_core::roles::Role::permits

use std::marker::PhantomData;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use charity_core::error::CoreError;
use charity_core::roles::Operation;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Type-level name for one [`Operation`].
pub trait Guard {
    const OPERATION: Operation;
}

/// An authenticated user allowed to perform `G::OPERATION`.
///
/// ```ignore
/// async fn delete(Permit(user, _): Permit<guard::DeletePatient>) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug)]
pub struct Permit<G: Guard>(pub AuthUser, pub PhantomData<G>);

impl<G: Guard> FromRequestParts<AppState> for Permit<G> {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        ensure_permitted(&user, G::OPERATION)?;
        Ok(Permit(user, PhantomData))
    }
}

/// Reject `user` unless their role permits `op`.
pub fn ensure_permitted(user: &AuthUser, op: Operation) -> Result<(), AppError> {
    if user.role.permits(op) {
        Ok(())
    } else {
        tracing::debug!(user_id = user.user_id, role = %user.role, operation = op.name(), "Permission denied");
        Err(AppError::Core(CoreError::Unauthorized("Unauthorized".into())))
    }
}

macro_rules! guards {
    ($($op:ident),+ $(,)?) => {
        /// One marker type per guarded operation, for use with [`Permit`].
        pub mod guard {
            use charity_core::roles::Operation;

            $(
                #[derive(Debug)]
                pub struct $op;

                impl super::Guard for $op {
                    const OPERATION: Operation = Operation::$op;
                }
            )+
        }
    };
}

guards! {
    ListPatients,
    ViewPatient,
    CreatePatient,
    UpdatePatient,
    DeletePatient,
    ListCampaigns,
    ViewCampaign,
    CreateCampaign,
    ReconcileCampaign,
    ListDonations,
    CreateDonation,
    ListUsers,
    CreateUser,
    ViewDashboard,
}
