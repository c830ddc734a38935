//! Repository for the `donations` table.
//!
//! Inserting a donation and moving its campaign's running total happen in
//! one transaction, so `campaigns.current_amount` always equals the sum of
//! that campaign's completed donations.

use charity_core::ledger::aggregate_delta;
use charity_core::types::DbId;
use charity_core::validation::donation::NewDonation;
use sqlx::PgPool;

use crate::models::donation::{Donation, DonationStats, DonationWithCampaign};

const COLUMNS: &str = "id, donor_id, campaign_id, amount, status, payment_method, \
                       transaction_date, created_at, updated_at";

/// Donation columns qualified for the campaign join.
const JOINED_COLUMNS: &str = "d.id, d.donor_id, d.campaign_id, d.amount, d.status, \
                              d.payment_method, d.transaction_date, d.created_at, \
                              d.updated_at, c.title AS campaign_title";

pub struct DonationRepo;

impl DonationRepo {
    /// Record a donation and apply it to its campaign.
    ///
    /// The campaign row is locked for the duration of the transaction. A
    /// missing transaction date defaults to now. Returns `None`, with
    /// nothing written, when the campaign does not exist.
    pub async fn create_and_apply(
        pool: &PgPool,
        input: &NewDonation,
    ) -> Result<Option<Donation>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let campaign: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM campaigns WHERE id = $1 FOR UPDATE")
                .bind(input.campaign_id)
                .fetch_optional(&mut *tx)
                .await?;
        if campaign.is_none() {
            return Ok(None);
        }

        let insert_query = format!(
            "INSERT INTO donations
                (donor_id, campaign_id, amount, status, payment_method, transaction_date)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, NOW()))
             RETURNING {COLUMNS}"
        );
        let donation = sqlx::query_as::<_, Donation>(&insert_query)
            .bind(input.donor_id)
            .bind(input.campaign_id)
            .bind(input.amount)
            .bind(input.status.as_str())
            .bind(input.payment_method.as_str())
            .bind(input.transaction_date)
            .fetch_one(&mut *tx)
            .await?;

        let delta = aggregate_delta(donation.status, donation.amount);
        if delta != 0.0 {
            sqlx::query(
                "UPDATE campaigns SET current_amount = current_amount + $2 WHERE id = $1",
            )
            .bind(donation.campaign_id)
            .bind(delta)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(Some(donation))
    }

    /// Donations with their campaign title, newest first. `donor` narrows
    /// the list to one donor's donations.
    pub async fn list_with_campaign(
        pool: &PgPool,
        donor: Option<DbId>,
    ) -> Result<Vec<DonationWithCampaign>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM donations d
             JOIN campaigns c ON c.id = d.campaign_id
             WHERE ($1::BIGINT IS NULL OR d.donor_id = $1)
             ORDER BY d.created_at DESC, d.id DESC"
        );
        sqlx::query_as::<_, DonationWithCampaign>(&query)
            .bind(donor)
            .fetch_all(pool)
            .await
    }

    /// Count and total amount of all donations, or of one donor's.
    pub async fn stats(pool: &PgPool, donor: Option<DbId>) -> Result<DonationStats, sqlx::Error> {
        sqlx::query_as::<_, DonationStats>(
            "SELECT COUNT(*) AS count, COALESCE(SUM(amount), 0)::DOUBLE PRECISION AS total
             FROM donations
             WHERE ($1::BIGINT IS NULL OR donor_id = $1)",
        )
        .bind(donor)
        .fetch_one(pool)
        .await
    }
}
