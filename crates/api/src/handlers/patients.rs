//! Handlers for the `/patients` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use charity_core::error::CoreError;
use charity_core::patient_list::{transform_patients, ListOptions};
use charity_core::types::DbId;
use charity_core::validation::patient::{NewPatient, PatientUpdate};
use charity_db::models::patient::Patient;
use charity_db::repositories::PatientRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::{ValidJson, ValidPath};
use crate::middleware::rbac::{guard, Permit};
use crate::state::AppState;

/// Response header carrying the unfiltered record count.
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// Query parameters for `GET /patients`. Unknown values are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct PatientListParams {
    pub status: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<String>,
}

impl PatientListParams {
    fn to_options(&self) -> ListOptions {
        ListOptions::from_query(
            self.status.as_deref(),
            self.search.as_deref(),
            self.sort.as_deref(),
            self.direction.as_deref(),
        )
    }
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: &'static str,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Patient",
        id,
    })
}

/// GET /api/v1/patients?status=&search=&sort=&direction=
///
/// Runs the list view (status filter, search, sort) over every patient.
/// The total before filtering is returned in `x-total-count`.
pub async fn list(
    State(state): State<AppState>,
    Permit(user, _): Permit<guard::ListPatients>,
    Query(params): Query<PatientListParams>,
) -> AppResult<([(&'static str, String); 1], Json<Vec<Patient>>)> {
    let all = PatientRepo::list(&state.pool).await?;
    let options = params.to_options();
    let shown = transform_patients(&all, &options);

    tracing::debug!(
        user_id = user.user_id,
        total = all.len(),
        shown = shown.len(),
        "Listed patients"
    );

    Ok(([(TOTAL_COUNT_HEADER, all.len().to_string())], Json(shown)))
}

/// POST /api/v1/patients
pub async fn create(
    State(state): State<AppState>,
    Permit(user, _): Permit<guard::CreatePatient>,
    ValidJson(input): ValidJson<NewPatient>,
) -> AppResult<(StatusCode, Json<Patient>)> {
    let patient = PatientRepo::create(&state.pool, &input).await?;
    tracing::info!(user_id = user.user_id, patient_id = patient.id, "Patient created");
    Ok((StatusCode::CREATED, Json(patient)))
}

/// GET /api/v1/patients/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _: Permit<guard::ViewPatient>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<Patient>> {
    let patient = PatientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(patient))
}

/// PUT /api/v1/patients/{id}
///
/// Partial update: fields absent from the body keep their stored values.
pub async fn update(
    State(state): State<AppState>,
    Permit(user, _): Permit<guard::UpdatePatient>,
    ValidPath(id): ValidPath<DbId>,
    ValidJson(input): ValidJson<PatientUpdate>,
) -> AppResult<Json<Patient>> {
    let patient = PatientRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(user_id = user.user_id, patient_id = id, "Patient updated");
    Ok(Json(patient))
}

/// DELETE /api/v1/patients/{id}
pub async fn delete(
    State(state): State<AppState>,
    Permit(user, _): Permit<guard::DeletePatient>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<DeletedResponse>> {
    if !PatientRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(user_id = user.user_id, patient_id = id, "Patient deleted");
    Ok(Json(DeletedResponse {
        message: "Patient deleted successfully",
    }))
}
