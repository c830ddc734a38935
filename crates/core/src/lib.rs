//! Domain logic shared by the database and API crates.
//!
//! Nothing in here touches the network or the database, so every module is
//! unit-testable in isolation.

pub mod error;
pub mod i18n;
pub mod ledger;
pub mod patient_list;
pub mod roles;
pub mod status;
pub mod types;
pub mod validation;
