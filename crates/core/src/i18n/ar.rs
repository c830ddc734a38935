//! Arabic strings. Keys missing here fall back to English.

use super::keys::MessageKey;

pub fn lookup(key: MessageKey) -> Option<&'static str> {
    use MessageKey::*;

    let text = match key {
        AuthEmail => "البريد الإلكتروني",
        AuthErrorGeneric => "حدث خطأ ما. حاول مرة أخرى.",
        AuthLoginButton => "تسجيل الدخول",
        AuthLoginFailed => "البريد الإلكتروني أو كلمة المرور غير صحيحة",
        AuthLoginSuccess => "تم تسجيل الدخول بنجاح",
        AuthPassword => "كلمة المرور",
        CommonEdit => "تعديل",
        CommonDelete => "حذف",
        CommonCancel => "إلغاء",
        CommonSave => "حفظ",
        NavDashboard => "لوحة التحكم",
        NavPatients => "المرضى",
        NavCampaigns => "الحملات",
        NavDonations => "التبرعات",
        NavUsers => "المستخدمون",
        NavProfile => "الملف الشخصي",
        NavLogout => "تسجيل الخروج",
        DashboardTotalUsers => "إجمالي المستخدمين",
        DashboardPatients => "المرضى",
        DashboardCampaigns => "الحملات النشطة",
        DashboardDonations => "التبرعات",
        DashboardTotalDonations => "إجمالي التبرعات",
        PatientsAddPatient => "إضافة مريض",
        PatientsSearchPlaceholder => "ابحث بالاسم أو الهاتف أو الرقم القومي",
        PatientsFilterAll => "الكل",
        PatientsFilterCompleted => "مكتمل",
        PatientsFilterPending => "قيد الانتظار",
        PatientsTableName => "الاسم",
        PatientsTablePhone => "الهاتف",
        PatientsTableStatus => "الحالة",
        PatientsTableCost => "التكلفة",
        PatientsTableCreatedAt => "تاريخ الإضافة",
        PatientsTableEmpty => "لا يوجد مرضى",
        PatientsDialogName => "الاسم بالكامل",
        PatientsDialogAge => "السن",
        PatientsDialogSsn => "الرقم القومي",
        PatientsDialogPhone => "الهاتف",
        PatientsDialogMaritalStatus => "الحالة الاجتماعية",
        PatientsDialogSelectMaritalStatus => "اختر الحالة الاجتماعية",
        PatientsDialogStatus => "الحالة",
        PatientsDialogSelectStatus => "اختر الحالة",
        PatientsDialogChildren => "عدد الأبناء",
        PatientsDialogGovernorate => "المحافظة",
        PatientsDialogAddress => "العنوان",
        PatientsDialogDiagnosis => "التشخيص",
        PatientsDialogSolution => "الحل المقترح",
        PatientsDialogCost => "التكلفة التقديرية",
        PatientsDialogError => "تعذر حفظ بيانات المريض",
        CampaignsAddCampaign => "حملة جديدة",
        CampaignsTarget => "المستهدف",
        CampaignsRaised => "تم جمعه",
        DonationsAddDonation => "تبرع الآن",
        DonationsAmount => "المبلغ",
        DonationsPaymentMethod => "طريقة الدفع",
        UsersAddUser => "إضافة مستخدم",
        UsersDialogTitle => "إنشاء مستخدم",
        UsersDialogDescription => "أنشئ حسابًا جديدًا وحدد دوره.",
        UsersDialogName => "الاسم",
        UsersDialogEmail => "البريد الإلكتروني",
        UsersDialogPhone => "الهاتف",
        UsersDialogPassword => "كلمة المرور",
        UsersDialogRole => "الدور",
        UsersDialogSelectRole => "اختر الدور",
        UsersDialogSubmit => "إنشاء",
        UsersDialogSuccess => "تم إنشاء المستخدم",
        UsersDialogError => "تعذر إنشاء المستخدم",
        AuthEmailPlaceholder | AuthPasswordPlaceholder => return None,
    };
    Some(text)
}
