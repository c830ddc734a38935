//! Patient aid request model.

use charity_core::patient_list::PatientFields;
use charity_core::status::{MaritalStatus, PatientStatus};
use charity_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `patients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: DbId,
    pub user_id: Option<DbId>,
    pub name: String,
    pub age: i32,
    pub national_id: String,
    pub phone: String,
    #[sqlx(try_from = "String")]
    pub marital_status: MaritalStatus,
    #[sqlx(try_from = "String")]
    pub status: PatientStatus,
    pub children_count: i32,
    pub governorate: String,
    pub address: String,
    pub diagnosis: String,
    pub solution: String,
    pub cost: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl PatientFields for Patient {
    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn phone(&self) -> Option<&str> {
        Some(&self.phone)
    }

    fn national_id(&self) -> Option<&str> {
        Some(&self.national_id)
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn cost(&self) -> Option<f64> {
        Some(self.cost)
    }

    fn created_at(&self) -> Option<Timestamp> {
        Some(self.created_at)
    }
}
