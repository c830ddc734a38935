//! English strings.

use super::keys::MessageKey;

pub fn lookup(key: MessageKey) -> Option<&'static str> {
    use MessageKey::*;

    let text = match key {
        AuthEmail => "Email",
        AuthEmailPlaceholder => "name@example.com",
        AuthErrorGeneric => "Something went wrong. Please try again.",
        AuthLoginButton => "Sign in",
        AuthLoginFailed => "Invalid email or password",
        AuthLoginSuccess => "Signed in successfully",
        AuthPassword => "Password",
        AuthPasswordPlaceholder => "Enter your password",
        CommonEdit => "Edit",
        CommonDelete => "Delete",
        CommonCancel => "Cancel",
        CommonSave => "Save",
        NavDashboard => "Dashboard",
        NavPatients => "Patients",
        NavCampaigns => "Campaigns",
        NavDonations => "Donations",
        NavUsers => "Users",
        NavProfile => "Profile",
        NavLogout => "Log out",
        DashboardTotalUsers => "Total Users",
        DashboardPatients => "Patients",
        DashboardCampaigns => "Active Campaigns",
        DashboardDonations => "Donations",
        DashboardTotalDonations => "Total Donations",
        PatientsAddPatient => "Add Patient",
        PatientsSearchPlaceholder => "Search by name, phone or national ID",
        PatientsFilterAll => "All",
        PatientsFilterCompleted => "Completed",
        PatientsFilterPending => "Pending",
        PatientsTableName => "Name",
        PatientsTablePhone => "Phone",
        PatientsTableStatus => "Status",
        PatientsTableCost => "Cost",
        PatientsTableCreatedAt => "Date Added",
        PatientsTableEmpty => "No patients found",
        PatientsDialogName => "Full name",
        PatientsDialogAge => "Age",
        PatientsDialogSsn => "National ID",
        PatientsDialogPhone => "Phone",
        PatientsDialogMaritalStatus => "Marital status",
        PatientsDialogSelectMaritalStatus => "Select marital status",
        PatientsDialogStatus => "Status",
        PatientsDialogSelectStatus => "Select status",
        PatientsDialogChildren => "Children",
        PatientsDialogGovernorate => "Governorate",
        PatientsDialogAddress => "Address",
        PatientsDialogDiagnosis => "Diagnosis",
        PatientsDialogSolution => "Proposed solution",
        PatientsDialogCost => "Estimated cost",
        PatientsDialogError => "Could not save the patient record",
        CampaignsAddCampaign => "New Campaign",
        CampaignsTarget => "Target",
        CampaignsRaised => "Raised",
        DonationsAddDonation => "Make a Donation",
        DonationsAmount => "Amount",
        DonationsPaymentMethod => "Payment method",
        UsersAddUser => "Add User",
        UsersDialogTitle => "Create user",
        UsersDialogDescription => "Create a new account and assign its role.",
        UsersDialogName => "Name",
        UsersDialogEmail => "Email",
        UsersDialogPhone => "Phone",
        UsersDialogPassword => "Password",
        UsersDialogRole => "Role",
        UsersDialogSelectRole => "Select a role",
        UsersDialogSubmit => "Create",
        UsersDialogSuccess => "User created",
        UsersDialogError => "Could not create the user",
    };
    Some(text)
}
