//! Handler for the dashboard overview counters.

use axum::extract::State;
use axum::Json;
use charity_core::i18n::{format_number, Locale};
use charity_core::roles::Operation;
use charity_db::models::donation::DonationStats;
use charity_db::repositories::{CampaignRepo, DonationRepo, PatientRepo, UserRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::RequestLocale;
use crate::middleware::rbac::{guard, Permit};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Present only for callers allowed to see user statistics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_count: Option<i64>,
    pub patient_count: i64,
    pub campaign_count: i64,
    /// Every donation for admins, the caller's own otherwise.
    pub donations: DonationStats,
    pub display: DashboardDisplay,
}

/// The counters above rendered for the request locale.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDisplay {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_count: Option<String>,
    pub patient_count: String,
    pub campaign_count: String,
    pub donation_count: String,
    pub donation_total: String,
}

impl DashboardDisplay {
    fn new(
        locale: Locale,
        user_count: Option<i64>,
        patient_count: i64,
        campaign_count: i64,
        donations: DonationStats,
    ) -> Self {
        let count = |n: i64| format_number(locale, n as f64);
        Self {
            user_count: user_count.map(count),
            patient_count: count(patient_count),
            campaign_count: count(campaign_count),
            donation_count: count(donations.count),
            donation_total: format_number(locale, donations.total),
        }
    }
}

/// GET /api/v1/dashboard/stats
pub async fn stats(
    State(state): State<AppState>,
    Permit(user, _): Permit<guard::ViewDashboard>,
    RequestLocale(locale): RequestLocale,
) -> AppResult<Json<DashboardStats>> {
    let user_count = if user.role.permits(Operation::ViewUserStats) {
        Some(UserRepo::count(&state.pool).await?)
    } else {
        None
    };
    let donor = if user.role.permits(Operation::ListAllDonations) {
        None
    } else {
        Some(user.user_id)
    };

    let patient_count = PatientRepo::count(&state.pool).await?;
    let campaign_count = CampaignRepo::count(&state.pool).await?;
    let donations = DonationRepo::stats(&state.pool, donor).await?;

    Ok(Json(DashboardStats {
        user_count,
        patient_count,
        campaign_count,
        donations,
        display: DashboardDisplay::new(
            locale,
            user_count,
            patient_count,
            campaign_count,
            donations,
        ),
    }))
}
