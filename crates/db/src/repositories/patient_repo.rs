//! Repository for the `patients` table.

use charity_core::types::DbId;
use charity_core::validation::patient::{NewPatient, PatientUpdate};
use sqlx::PgPool;

use crate::models::patient::Patient;

const COLUMNS: &str = "id, user_id, name, age, national_id, phone, marital_status, status, \
                       children_count, governorate, address, diagnosis, solution, cost, \
                       created_at, updated_at";

/// Provides CRUD operations for patient aid requests.
pub struct PatientRepo;

impl PatientRepo {
    /// Insert a validated patient record, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewPatient) -> Result<Patient, sqlx::Error> {
        let query = format!(
            "INSERT INTO patients
                (user_id, name, age, national_id, phone, marital_status, status,
                 children_count, governorate, address, diagnosis, solution, cost)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Patient>(&query)
            .bind(input.user_id)
            .bind(&input.name)
            .bind(input.age)
            .bind(&input.national_id)
            .bind(&input.phone)
            .bind(input.marital_status.as_str())
            .bind(input.status.as_str())
            .bind(input.children_count)
            .bind(&input.governorate)
            .bind(&input.address)
            .bind(&input.diagnosis)
            .bind(&input.solution)
            .bind(input.cost)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Patient>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM patients WHERE id = $1");
        sqlx::query_as::<_, Patient>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Every patient, newest first. This is the input order of the list view.
    pub async fn list(pool: &PgPool) -> Result<Vec<Patient>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM patients ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Patient>(&query).fetch_all(pool).await
    }

    /// Update a patient. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &PatientUpdate,
    ) -> Result<Option<Patient>, sqlx::Error> {
        let query = format!(
            "UPDATE patients SET
                user_id = COALESCE($2, user_id),
                name = COALESCE($3, name),
                age = COALESCE($4, age),
                national_id = COALESCE($5, national_id),
                phone = COALESCE($6, phone),
                marital_status = COALESCE($7, marital_status),
                status = COALESCE($8, status),
                children_count = COALESCE($9, children_count),
                governorate = COALESCE($10, governorate),
                address = COALESCE($11, address),
                diagnosis = COALESCE($12, diagnosis),
                solution = COALESCE($13, solution),
                cost = COALESCE($14, cost)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Patient>(&query)
            .bind(id)
            .bind(input.user_id)
            .bind(&input.name)
            .bind(input.age)
            .bind(&input.national_id)
            .bind(&input.phone)
            .bind(input.marital_status.map(|s| s.as_str()))
            .bind(input.status.map(|s| s.as_str()))
            .bind(input.children_count)
            .bind(&input.governorate)
            .bind(&input.address)
            .bind(&input.diagnosis)
            .bind(&input.solution)
            .bind(input.cost)
            .fetch_optional(pool)
            .await
    }

    /// Permanently remove a patient. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM patients WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM patients")
            .fetch_one(pool)
            .await
    }
}
