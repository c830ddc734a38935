use serde::Deserialize;
use validator::Validate;

use super::Payload;
use crate::error::ValidationIssue;
use crate::status::CampaignStatus;
use crate::types::{flexible_timestamp, Timestamp};

/// Body of `POST /campaigns`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewCampaign {
    #[validate(length(min = 5, message = "Title must be at least 5 characters"))]
    pub title: String,
    #[validate(length(min = 20, message = "Description must be at least 20 characters"))]
    pub description: String,
    #[validate(range(min = 1.0, message = "Target amount must be greater than 0"))]
    pub target_amount: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "Current amount cannot be negative"))]
    pub current_amount: f64,
    #[serde(default)]
    pub status: CampaignStatus,
    #[serde(deserialize_with = "flexible_timestamp::deserialize")]
    pub start_date: Timestamp,
    #[serde(deserialize_with = "flexible_timestamp::deserialize")]
    pub end_date: Timestamp,
}

impl Payload for NewCampaign {
    fn extra_issues(&self) -> Vec<ValidationIssue> {
        if self.end_date < self.start_date {
            vec![ValidationIssue::new(
                "endDate",
                "date_order",
                "End date must not be before the start date",
            )]
        } else {
            Vec::new()
        }
    }
}
