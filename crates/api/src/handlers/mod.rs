pub mod auth;
pub mod campaigns;
pub mod dashboard;
pub mod donations;
pub mod i18n;
pub mod patients;
pub mod users;
