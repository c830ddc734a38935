//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated principal from a JWT Bearer token.
//! - [`rbac::Permit`] -- Requires the principal's role to permit one [`Operation`].
//!
//! [`Operation`]: charity_core::roles::Operation

pub mod auth;
pub mod rbac;
