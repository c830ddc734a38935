//! User roles and the per-operation permission table.
//!
//! Role names must match the CHECK constraint on `users.role` in
//! `20260101000001_create_users_table.sql`.

use serde::{Deserialize, Serialize};

use crate::status::UnknownVariant;

/// Permission level attached to a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Editor,
    User,
    Donor,
    Volunteer,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Admin,
        Role::Editor,
        Role::User,
        Role::Donor,
        Role::Volunteer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Editor => "editor",
            Role::User => "user",
            Role::Donor => "donor",
            Role::Volunteer => "volunteer",
        }
    }

    /// Parse a stored role name. Exact, lowercase match only.
    pub fn parse(name: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|r| r.as_str() == name)
    }

    /// Whether this role may perform `op`.
    pub fn permits(self, op: Operation) -> bool {
        use Operation::*;

        match op {
            ListPatients | ViewPatient | CreatePatient | UpdatePatient | DeletePatient => {
                matches!(self, Role::Admin | Role::User)
            }
            ListCampaigns | ViewCampaign | ListDonations | CreateDonation | ViewDashboard => true,
            CreateCampaign => matches!(self, Role::Admin | Role::Editor),
            ReconcileCampaign | ListAllDonations | ListUsers | CreateUser | ViewUserStats => {
                self == Role::Admin
            }
        }
    }
}

impl TryFrom<String> for Role {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Role::parse(&value).ok_or(UnknownVariant {
            kind: "role",
            value,
        })
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every operation gated by the permission table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListPatients,
    ViewPatient,
    CreatePatient,
    UpdatePatient,
    DeletePatient,
    ListCampaigns,
    ViewCampaign,
    CreateCampaign,
    ReconcileCampaign,
    /// See only the caller's own donations.
    ListDonations,
    /// See every donor's donations.
    ListAllDonations,
    CreateDonation,
    ListUsers,
    CreateUser,
    ViewDashboard,
    /// User counts on the dashboard.
    ViewUserStats,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::ListPatients => "list patients",
            Operation::ViewPatient => "view patient",
            Operation::CreatePatient => "create patient",
            Operation::UpdatePatient => "update patient",
            Operation::DeletePatient => "delete patient",
            Operation::ListCampaigns => "list campaigns",
            Operation::ViewCampaign => "view campaign",
            Operation::CreateCampaign => "create campaign",
            Operation::ReconcileCampaign => "reconcile campaign",
            Operation::ListDonations => "list donations",
            Operation::ListAllDonations => "list all donations",
            Operation::CreateDonation => "create donation",
            Operation::ListUsers => "list users",
            Operation::CreateUser => "create user",
            Operation::ViewDashboard => "view dashboard",
            Operation::ViewUserStats => "view user statistics",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_names_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("Admin"), None);
        assert_eq!(Role::parse("superuser"), None);
        assert!(Role::try_from("owner".to_string()).is_err());
    }

    #[test]
    fn patient_mutation_limited_to_admin_and_user() {
        for op in [
            Operation::CreatePatient,
            Operation::UpdatePatient,
            Operation::DeletePatient,
        ] {
            assert!(Role::Admin.permits(op));
            assert!(Role::User.permits(op));
            assert!(!Role::Editor.permits(op));
            assert!(!Role::Donor.permits(op));
            assert!(!Role::Volunteer.permits(op));
        }
    }

    #[test]
    fn campaign_creation_limited_to_admin_and_editor() {
        assert!(Role::Admin.permits(Operation::CreateCampaign));
        assert!(Role::Editor.permits(Operation::CreateCampaign));
        assert!(!Role::User.permits(Operation::CreateCampaign));
        assert!(!Role::Donor.permits(Operation::CreateCampaign));
    }

    #[test]
    fn user_management_is_admin_only() {
        for role in Role::ALL {
            assert_eq!(role.permits(Operation::CreateUser), role == Role::Admin);
            assert_eq!(role.permits(Operation::ListUsers), role == Role::Admin);
            assert_eq!(
                role.permits(Operation::ListAllDonations),
                role == Role::Admin
            );
        }
    }

    #[test]
    fn every_role_can_donate_and_browse_campaigns() {
        for role in Role::ALL {
            assert!(role.permits(Operation::CreateDonation));
            assert!(role.permits(Operation::ListDonations));
            assert!(role.permits(Operation::ListCampaigns));
            assert!(role.permits(Operation::ViewDashboard));
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Role::Volunteer).unwrap();
        assert_eq!(json, "\"volunteer\"");
        let role: Role = serde_json::from_str("\"editor\"").unwrap();
        assert_eq!(role, Role::Editor);
    }
}
