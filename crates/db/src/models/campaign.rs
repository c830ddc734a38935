//! Fundraising campaign model.

use charity_core::i18n::{format_date, format_number, Locale};
use charity_core::ledger::progress_percent;
use charity_core::status::CampaignStatus;
use charity_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `campaigns` table.
///
/// `current_amount` is the running total of completed donations.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub target_amount: f64,
    pub current_amount: f64,
    #[sqlx(try_from = "String")]
    pub status: CampaignStatus,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Campaign as returned by the API, with funding progress attached.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignResponse {
    #[serde(flatten)]
    pub campaign: Campaign,
    /// Percentage of the target raised, `0..=100`.
    pub progress: f64,
    pub display: CampaignDisplay,
}

/// Amounts and dates rendered for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDisplay {
    pub target_amount: String,
    pub current_amount: String,
    pub progress: String,
    pub start_date: String,
    pub end_date: String,
}

impl CampaignResponse {
    pub fn localized(campaign: Campaign, locale: Locale) -> Self {
        let progress = progress_percent(campaign.current_amount, campaign.target_amount);
        let display = CampaignDisplay {
            target_amount: format_number(locale, campaign.target_amount),
            current_amount: format_number(locale, campaign.current_amount),
            progress: format_number(locale, progress),
            start_date: format_date(locale, campaign.start_date),
            end_date: format_date(locale, campaign.end_date),
        };
        Self {
            campaign,
            progress,
            display,
        }
    }
}
