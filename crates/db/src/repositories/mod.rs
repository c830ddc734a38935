//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod campaign_repo;
pub mod donation_repo;
pub mod patient_repo;
pub mod user_repo;

pub use campaign_repo::CampaignRepo;
pub use donation_repo::DonationRepo;
pub use patient_repo::PatientRepo;
pub use user_repo::UserRepo;
