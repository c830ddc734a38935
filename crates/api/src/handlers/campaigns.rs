//! Handlers for the `/campaigns` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use charity_core::error::CoreError;
use charity_core::types::DbId;
use charity_core::validation::campaign::NewCampaign;
use charity_db::models::campaign::CampaignResponse;
use charity_db::repositories::CampaignRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{RequestLocale, ValidJson, ValidPath};
use crate::middleware::rbac::{guard, Permit};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Campaign",
        id,
    })
}

/// GET /api/v1/campaigns
pub async fn list(
    State(state): State<AppState>,
    _: Permit<guard::ListCampaigns>,
    RequestLocale(locale): RequestLocale,
) -> AppResult<Json<Vec<CampaignResponse>>> {
    let campaigns = CampaignRepo::list(&state.pool).await?;
    Ok(Json(
        campaigns
            .into_iter()
            .map(|c| CampaignResponse::localized(c, locale))
            .collect(),
    ))
}

/// GET /api/v1/campaigns/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _: Permit<guard::ViewCampaign>,
    RequestLocale(locale): RequestLocale,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<CampaignResponse>> {
    let campaign = CampaignRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(CampaignResponse::localized(campaign, locale)))
}

/// POST /api/v1/campaigns
pub async fn create(
    State(state): State<AppState>,
    Permit(user, _): Permit<guard::CreateCampaign>,
    RequestLocale(locale): RequestLocale,
    ValidJson(input): ValidJson<NewCampaign>,
) -> AppResult<(StatusCode, Json<CampaignResponse>)> {
    let campaign = CampaignRepo::create(&state.pool, &input).await?;
    tracing::info!(
        user_id = user.user_id,
        campaign_id = campaign.id,
        status = %campaign.status,
        "Campaign created"
    );
    Ok((
        StatusCode::CREATED,
        Json(CampaignResponse::localized(campaign, locale)),
    ))
}

/// POST /api/v1/campaigns/{id}/reconcile
///
/// Recompute the running total from the campaign's completed donations.
pub async fn reconcile(
    State(state): State<AppState>,
    Permit(user, _): Permit<guard::ReconcileCampaign>,
    RequestLocale(locale): RequestLocale,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<CampaignResponse>> {
    let before = CampaignRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let campaign = CampaignRepo::reconcile_current_amount(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    if before.current_amount != campaign.current_amount {
        tracing::warn!(
            user_id = user.user_id,
            campaign_id = id,
            stored = before.current_amount,
            recomputed = campaign.current_amount,
            "Campaign total drifted from ledger; corrected"
        );
    }
    Ok(Json(CampaignResponse::localized(campaign, locale)))
}
