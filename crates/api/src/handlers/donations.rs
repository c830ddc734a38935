//! Handlers for the `/donations` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use charity_core::error::CoreError;
use charity_core::roles::Operation;
use charity_core::validation::donation::NewDonation;
use charity_db::models::donation::{Donation, DonationWithCampaign};
use charity_db::repositories::DonationRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::middleware::rbac::{guard, Permit};
use crate::state::AppState;

/// GET /api/v1/donations
///
/// Callers allowed to see every donation get the full ledger; everyone else
/// gets only their own donations.
pub async fn list(
    State(state): State<AppState>,
    Permit(user, _): Permit<guard::ListDonations>,
) -> AppResult<Json<Vec<DonationWithCampaign>>> {
    let donor = if user.role.permits(Operation::ListAllDonations) {
        None
    } else {
        Some(user.user_id)
    };
    let donations = DonationRepo::list_with_campaign(&state.pool, donor).await?;
    Ok(Json(donations))
}

/// POST /api/v1/donations
///
/// The donor defaults to the caller. A completed donation moves its
/// campaign's running total in the same transaction.
pub async fn create(
    State(state): State<AppState>,
    Permit(user, _): Permit<guard::CreateDonation>,
    ValidJson(input): ValidJson<NewDonation>,
) -> AppResult<(StatusCode, Json<Donation>)> {
    let input = input.with_default_donor(user.user_id);
    let campaign_id = input.campaign_id;

    let donation = DonationRepo::create_and_apply(&state.pool, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Campaign",
            id: campaign_id,
        }))?;

    tracing::info!(
        user_id = user.user_id,
        donation_id = donation.id,
        campaign_id,
        amount = donation.amount,
        status = %donation.status,
        "Donation recorded"
    );
    Ok((StatusCode::CREATED, Json(donation)))
}
