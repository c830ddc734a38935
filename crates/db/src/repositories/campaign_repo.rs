//! Repository for the `campaigns` table.

use charity_core::status::DonationStatus;
use charity_core::types::DbId;
use charity_core::validation::campaign::NewCampaign;
use sqlx::PgPool;

use crate::models::campaign::Campaign;

const COLUMNS: &str = "id, title, description, target_amount, current_amount, status, \
                       start_date, end_date, created_at, updated_at";

pub struct CampaignRepo;

impl CampaignRepo {
    pub async fn create(pool: &PgPool, input: &NewCampaign) -> Result<Campaign, sqlx::Error> {
        let query = format!(
            "INSERT INTO campaigns
                (title, description, target_amount, current_amount, status, start_date, end_date)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.target_amount)
            .bind(input.current_amount)
            .bind(input.status.as_str())
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campaigns WHERE id = $1");
        sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all campaigns, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Campaign>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campaigns ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Campaign>(&query).fetch_all(pool).await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM campaigns")
            .fetch_one(pool)
            .await
    }

    /// Recompute `current_amount` as the sum of the campaign's completed
    /// donations.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn reconcile_current_amount(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!(
            "UPDATE campaigns SET current_amount = (
                SELECT COALESCE(SUM(amount), 0)::DOUBLE PRECISION
                FROM donations
                WHERE campaign_id = $1 AND status = $2
             )
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .bind(DonationStatus::Completed.as_str())
            .fetch_optional(pool)
            .await
    }
}
