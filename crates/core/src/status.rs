//! Enumerated text columns.
//!
//! Each enum maps one-to-one onto the values allowed by the matching CHECK
//! constraint in `db/migrations`. The wire name is also the stored name.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A value that is not one of the enum's known names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! define_text_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident = $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            /// The stored and serialized name.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $text ),+
                }
            }

            pub fn parse(value: &str) -> Result<Self, UnknownVariant> {
                match value {
                    $( $text => Ok($name::$variant), )+
                    other => Err(UnknownVariant {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }

            /// Comma-separated list of accepted names, for error messages.
            pub fn expected() -> String {
                [$( $text ),+].join(", ")
            }
        }

        impl TryFrom<String> for $name {
            type Error = UnknownVariant;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                $name::parse(&value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                $name::parse(&raw).map_err(|_| {
                    de::Error::custom(format!(
                        "unknown {} '{raw}', expected one of: {}",
                        $kind,
                        $name::expected()
                    ))
                })
            }
        }
    };
}

define_text_enum! {
    /// Review state of a patient aid request.
    PatientStatus ("patient status") {
        Pending = "pending",
        Approved = "approved",
        Rejected = "rejected",
    }
}

define_text_enum! {
    MaritalStatus ("marital status") {
        Single = "single",
        Married = "married",
        Divorced = "divorced",
        Widowed = "widowed",
    }
}

define_text_enum! {
    /// Fundraising campaign lifecycle.
    CampaignStatus ("campaign status") {
        Active = "Active",
        Completed = "Completed",
        Draft = "Draft",
    }
}

define_text_enum! {
    /// Payment outcome of a donation. Only `Completed` counts toward a
    /// campaign's running total.
    DonationStatus ("donation status") {
        Pending = "Pending",
        Completed = "Completed",
        Failed = "Failed",
    }
}

define_text_enum! {
    PaymentMethod ("payment method") {
        CreditCard = "Credit Card",
        PayPal = "PayPal",
        BankTransfer = "Bank Transfer",
        Cash = "Cash",
    }
}

impl Default for PatientStatus {
    fn default() -> Self {
        PatientStatus::Pending
    }
}

impl Default for MaritalStatus {
    fn default() -> Self {
        MaritalStatus::Single
    }
}

impl Default for CampaignStatus {
    fn default() -> Self {
        CampaignStatus::Draft
    }
}

impl Default for DonationStatus {
    fn default() -> Self {
        DonationStatus::Pending
    }
}
