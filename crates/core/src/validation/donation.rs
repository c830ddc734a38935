use serde::Deserialize;
use validator::Validate;

use super::Payload;
use crate::status::{DonationStatus, PaymentMethod};
use crate::types::{flexible_timestamp, DbId, Timestamp};

/// Body of `POST /donations`.
///
/// `donor_id` is filled from the caller when omitted.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewDonation {
    pub donor_id: Option<DbId>,
    pub campaign_id: DbId,
    #[validate(range(min = 1.0, message = "Donation amount must be at least 1"))]
    pub amount: f64,
    #[serde(default)]
    pub status: DonationStatus,
    pub payment_method: PaymentMethod,
    #[serde(default, deserialize_with = "flexible_timestamp::option::deserialize")]
    pub transaction_date: Option<Timestamp>,
}

impl Payload for NewDonation {}

impl NewDonation {
    /// Attribute the donation to `caller` unless a donor was given.
    pub fn with_default_donor(mut self, caller: DbId) -> Self {
        self.donor_id.get_or_insert(caller);
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn minimal_donation_gets_defaults() {
        let donation: NewDonation = serde_json::from_value(json!({
            "campaignId": 4,
            "amount": 250,
            "paymentMethod": "Cash"
        }))
        .unwrap();
        assert!(donation.check().is_ok());
        assert_eq!(donation.status, DonationStatus::Pending);
        assert!(donation.transaction_date.is_none());

        let attributed = donation.with_default_donor(9);
        assert_eq!(attributed.donor_id, Some(9));
    }

    #[test]
    fn explicit_donor_is_kept() {
        let donation: NewDonation = serde_json::from_value(json!({
            "donorId": 3,
            "campaignId": 4,
            "amount": 10,
            "status": "Completed",
            "paymentMethod": "Credit Card",
            "transactionDate": "2024-05-05"
        }))
        .unwrap();
        assert_eq!(donation.with_default_donor(9).donor_id, Some(3));
    }

    #[test]
    fn amount_below_one_fails() {
        let donation: NewDonation = serde_json::from_value(json!({
            "campaignId": 4,
            "amount": 0.5,
            "paymentMethod": "PayPal"
        }))
        .unwrap();
        assert!(donation.check().is_err());
    }

    #[test]
    fn unknown_payment_method_is_rejected() {
        let result = serde_json::from_value::<NewDonation>(json!({
            "campaignId": 4,
            "amount": 10,
            "paymentMethod": "Bitcoin"
        }));
        assert!(result.is_err());
    }
}
