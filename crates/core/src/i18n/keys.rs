//! Every translatable message, addressed by its dotted path.

macro_rules! define_message_keys {
    ( $( $variant:ident = $path:literal ),+ $(,)? ) => {
        /// A message identifier checked at compile time.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum MessageKey {
            $( $variant ),+
        }

        impl MessageKey {
            pub const ALL: &'static [MessageKey] = &[$( MessageKey::$variant ),+];

            /// Dotted path, also the visible fallback when no table has the key.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( MessageKey::$variant => $path ),+
                }
            }

            pub fn from_path(path: &str) -> Option<MessageKey> {
                match path {
                    $( $path => Some(MessageKey::$variant), )+
                    _ => None,
                }
            }
        }
    };
}

define_message_keys! {
    AuthEmail = "auth.email",
    AuthEmailPlaceholder = "auth.emailPlaceholder",
    AuthErrorGeneric = "auth.errorGeneric",
    AuthLoginButton = "auth.loginButton",
    AuthLoginFailed = "auth.loginFailed",
    AuthLoginSuccess = "auth.loginSuccess",
    AuthPassword = "auth.password",
    AuthPasswordPlaceholder = "auth.passwordPlaceholder",
    CommonEdit = "common.edit",
    CommonDelete = "common.delete",
    CommonCancel = "common.cancel",
    CommonSave = "common.save",
    NavDashboard = "nav.dashboard",
    NavPatients = "nav.patients",
    NavCampaigns = "nav.campaigns",
    NavDonations = "nav.donations",
    NavUsers = "nav.users",
    NavProfile = "nav.profile",
    NavLogout = "nav.logout",
    DashboardTotalUsers = "dashboard.totalUsers",
    DashboardPatients = "dashboard.patients",
    DashboardCampaigns = "dashboard.campaigns",
    DashboardDonations = "dashboard.donations",
    DashboardTotalDonations = "dashboard.totalDonations",
    PatientsAddPatient = "patients.addPatient",
    PatientsSearchPlaceholder = "patients.searchPlaceholder",
    PatientsFilterAll = "patients.filter.all",
    PatientsFilterCompleted = "patients.filter.completed",
    PatientsFilterPending = "patients.filter.pending",
    PatientsTableName = "patients.table.name",
    PatientsTablePhone = "patients.table.phone",
    PatientsTableStatus = "patients.table.status",
    PatientsTableCost = "patients.table.cost",
    PatientsTableCreatedAt = "patients.table.createdAt",
    PatientsTableEmpty = "patients.table.empty",
    PatientsDialogName = "patients.dialog.name",
    PatientsDialogAge = "patients.dialog.age",
    PatientsDialogSsn = "patients.dialog.ssn",
    PatientsDialogPhone = "patients.dialog.phone",
    PatientsDialogMaritalStatus = "patients.dialog.maritalStatus",
    PatientsDialogSelectMaritalStatus = "patients.dialog.selectMaritalStatus",
    PatientsDialogStatus = "patients.dialog.status",
    PatientsDialogSelectStatus = "patients.dialog.selectStatus",
    PatientsDialogChildren = "patients.dialog.children",
    PatientsDialogGovernorate = "patients.dialog.governorate",
    PatientsDialogAddress = "patients.dialog.address",
    PatientsDialogDiagnosis = "patients.dialog.diagnosis",
    PatientsDialogSolution = "patients.dialog.solution",
    PatientsDialogCost = "patients.dialog.cost",
    PatientsDialogError = "patients.dialog.error",
    CampaignsAddCampaign = "campaigns.addCampaign",
    CampaignsTarget = "campaigns.target",
    CampaignsRaised = "campaigns.raised",
    DonationsAddDonation = "donations.addDonation",
    DonationsAmount = "donations.amount",
    DonationsPaymentMethod = "donations.paymentMethod",
    UsersAddUser = "users.addUser",
    UsersDialogTitle = "users.dialog.title",
    UsersDialogDescription = "users.dialog.description",
    UsersDialogName = "users.dialog.name",
    UsersDialogEmail = "users.dialog.email",
    UsersDialogPhone = "users.dialog.phone",
    UsersDialogPassword = "users.dialog.password",
    UsersDialogRole = "users.dialog.role",
    UsersDialogSelectRole = "users.dialog.selectRole",
    UsersDialogSubmit = "users.dialog.submit",
    UsersDialogSuccess = "users.dialog.success",
    UsersDialogError = "users.dialog.error",
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn paths_are_unique_and_reversible() {
        let mut seen = HashSet::new();
        for key in MessageKey::ALL {
            assert!(seen.insert(key.as_str()), "duplicate path {}", key.as_str());
            assert_eq!(MessageKey::from_path(key.as_str()), Some(*key));
        }
    }

    #[test]
    fn unknown_path_has_no_key() {
        assert_eq!(MessageKey::from_path("patients.dialog"), None);
        assert_eq!(MessageKey::from_path(""), None);
    }
}
