//! Donation ledger models.

use charity_core::status::{DonationStatus, PaymentMethod};
use charity_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `donations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: DbId,
    pub donor_id: Option<DbId>,
    pub campaign_id: DbId,
    pub amount: f64,
    #[sqlx(try_from = "String")]
    pub status: DonationStatus,
    #[sqlx(try_from = "String")]
    pub payment_method: PaymentMethod,
    pub transaction_date: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Donation joined with the title of the campaign it funds.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationWithCampaign {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub donation: Donation,
    pub campaign_title: String,
}

/// Aggregate over a set of donations.
///
/// `total` sums every amount regardless of status; the campaign running
/// totals are the place where only completed donations count.
#[derive(Debug, Clone, Copy, Default, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationStats {
    pub count: i64,
    pub total: f64,
}
