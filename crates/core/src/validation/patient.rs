use serde::Deserialize;
use validator::Validate;

use super::Payload;
use crate::status::{MaritalStatus, PatientStatus};
use crate::types::DbId;

/// Body of `POST /patients`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewPatient {
    pub user_id: Option<DbId>,
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150"))]
    pub age: i32,
    /// Egyptian national ID numbers are 14 digits.
    #[serde(alias = "ssn")]
    #[validate(length(equal = 14, message = "National ID must be exactly 14 characters"))]
    pub national_id: String,
    #[validate(length(min = 10, message = "Phone must be at least 10 digits"))]
    pub phone: String,
    #[serde(default)]
    pub marital_status: MaritalStatus,
    #[serde(default)]
    pub status: PatientStatus,
    #[serde(default, alias = "children")]
    #[validate(range(min = 0, message = "Children count cannot be negative"))]
    pub children_count: i32,
    #[validate(length(min = 2, message = "Governorate must be at least 2 characters"))]
    pub governorate: String,
    #[validate(length(min = 5, message = "Address must be at least 5 characters"))]
    pub address: String,
    #[validate(length(min = 5, message = "Diagnosis must be at least 5 characters"))]
    pub diagnosis: String,
    #[validate(length(min = 5, message = "Solution must be at least 5 characters"))]
    pub solution: String,
    #[validate(range(min = 0.0, message = "Cost cannot be negative"))]
    pub cost: f64,
}

impl Payload for NewPatient {}

/// Body of `PUT /patients/{id}`. Absent fields are left untouched; present
/// fields obey the same rules as on creation.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PatientUpdate {
    pub user_id: Option<DbId>,
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: Option<String>,
    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150"))]
    pub age: Option<i32>,
    #[serde(alias = "ssn")]
    #[validate(length(equal = 14, message = "National ID must be exactly 14 characters"))]
    pub national_id: Option<String>,
    #[validate(length(min = 10, message = "Phone must be at least 10 digits"))]
    pub phone: Option<String>,
    pub marital_status: Option<MaritalStatus>,
    pub status: Option<PatientStatus>,
    #[serde(alias = "children")]
    #[validate(range(min = 0, message = "Children count cannot be negative"))]
    pub children_count: Option<i32>,
    #[validate(length(min = 2, message = "Governorate must be at least 2 characters"))]
    pub governorate: Option<String>,
    #[validate(length(min = 5, message = "Address must be at least 5 characters"))]
    pub address: Option<String>,
    #[validate(length(min = 5, message = "Diagnosis must be at least 5 characters"))]
    pub diagnosis: Option<String>,
    #[validate(length(min = 5, message = "Solution must be at least 5 characters"))]
    pub solution: Option<String>,
    #[validate(range(min = 0.0, message = "Cost cannot be negative"))]
    pub cost: Option<f64>,
}

impl Payload for PatientUpdate {}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;
    use crate::error::CoreError;

    fn valid_body() -> serde_json::Value {
        json!({
            "name": "Mona Adel",
            "age": 42,
            "nationalId": "29001011234567",
            "phone": "01012345678",
            "maritalStatus": "married",
            "status": "pending",
            "childrenCount": 3,
            "governorate": "Cairo",
            "address": "12 Tahrir Street",
            "diagnosis": "Chronic kidney disease",
            "solution": "Dialysis sessions",
            "cost": 12000.0
        })
    }

    #[test]
    fn valid_patient_passes() {
        let patient: NewPatient = serde_json::from_value(valid_body()).unwrap();
        assert!(patient.check().is_ok());
        assert_eq!(patient.marital_status, MaritalStatus::Married);
    }

    #[test]
    fn legacy_field_names_are_accepted() {
        let mut body = valid_body();
        let obj = body.as_object_mut().unwrap();
        let id = obj.remove("nationalId").unwrap();
        obj.insert("ssn".into(), id);
        let kids = obj.remove("childrenCount").unwrap();
        obj.insert("children".into(), kids);

        let patient: NewPatient = serde_json::from_value(body).unwrap();
        assert_eq!(patient.national_id, "29001011234567");
        assert_eq!(patient.children_count, 3);
    }

    #[test]
    fn defaults_apply_when_enums_omitted() {
        let mut body = valid_body();
        let obj = body.as_object_mut().unwrap();
        obj.remove("maritalStatus");
        obj.remove("status");
        obj.remove("childrenCount");

        let patient: NewPatient = serde_json::from_value(body).unwrap();
        assert_eq!(patient.status, PatientStatus::Pending);
        assert_eq!(patient.marital_status, MaritalStatus::Single);
        assert_eq!(patient.children_count, 0);
    }

    #[test]
    fn reports_every_broken_field() {
        let mut body = valid_body();
        body["name"] = json!("M");
        body["age"] = json!(151);
        body["nationalId"] = json!("123");
        body["cost"] = json!(-1);

        let patient: NewPatient = serde_json::from_value(body).unwrap();
        let err = patient.check().unwrap_err();
        assert_matches!(err, CoreError::Validation(ref issues) if issues.len() == 4);
        let CoreError::Validation(issues) = err else {
            unreachable!()
        };
        let fields: Vec<&str> = issues.iter().map(|i| i.path[0].as_str()).collect();
        assert_eq!(fields, ["age", "cost", "name", "nationalId"]);
    }

    #[test]
    fn unknown_status_fails_to_deserialize() {
        let mut body = valid_body();
        body["status"] = json!("archived");
        assert!(serde_json::from_value::<NewPatient>(body).is_err());
    }

    #[test]
    fn partial_update_validates_present_fields_only() {
        let update: PatientUpdate = serde_json::from_value(json!({ "cost": 50 })).unwrap();
        assert!(update.check().is_ok());

        let update: PatientUpdate = serde_json::from_value(json!({ "phone": "123" })).unwrap();
        assert!(update.check().is_err());

        let empty = PatientUpdate::default();
        assert!(empty.check().is_ok());
    }
}
