//! HTTP-level tests for the patient resource and the list view.

mod common;

use axum::http::StatusCode;
use charity_core::roles::Role;
use common::{body_json, delete_auth, get_auth, post_json_auth, put_json_auth};
use serde_json::{json, Value};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn patient_body(name: &str, phone: &str, national_id: &str, status: &str, cost: f64) -> Value {
    json!({
        "name": name,
        "age": 35,
        "nationalId": national_id,
        "phone": phone,
        "status": status,
        "governorate": "Cairo",
        "address": "10 Talaat Harb Street",
        "diagnosis": "Chronic condition",
        "solution": "Monthly medication",
        "cost": cost
    })
}

async fn seed_fixture(app: &axum::Router, token: &str) {
    for body in [
        patient_body("Alice", "555-1111-00", "11111111111111", "approved", 100.0),
        patient_body("Bob", "555-2222-00", "22222222222222", "pending", 200.0),
        patient_body("Charlie", "333-33-3333", "33333333333333", "rejected", 150.0),
    ] {
        let response = post_json_auth(app.clone(), "/api/v1/patients", body, token).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}

fn names(json: &Value) -> Vec<&str> {
    json.as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_get_patient(pool: PgPool) {
    let token = common::token_for(&pool, Role::User).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app.clone(),
        "/api/v1/patients",
        patient_body("Mona", "01012345678", "29001011234567", "pending", 900.0),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["maritalStatus"], "single");
    assert_eq!(created["childrenCount"], 0);

    let id = created["id"].as_i64().unwrap();
    let response = get_auth(app, &format!("/api/v1/patients/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["nationalId"], "29001011234567");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_patient_validation_lists_issues(pool: PgPool) {
    let token = common::token_for(&pool, Role::Admin).await;
    let app = common::build_test_app(pool);

    let mut body = patient_body("M", "0101", "123", "pending", -5.0);
    body["age"] = json!(200);
    let response = post_json_auth(app, "/api/v1/patients", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    let fields: Vec<&str> = json["error"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["path"][0].as_str().unwrap())
        .collect();
    assert_eq!(fields, ["age", "cost", "name", "nationalId", "phone"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_status_is_400(pool: PgPool) {
    let token = common::token_for(&pool, Role::Admin).await;
    let app = common::build_test_app(pool);

    let body = patient_body("Mona", "01012345678", "29001011234567", "archived", 1.0);
    let response = post_json_auth(app, "/api/v1/patients", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_update_keeps_other_fields(pool: PgPool) {
    let token = common::token_for(&pool, Role::Admin).await;
    let app = common::build_test_app(pool);

    let created = body_json(
        post_json_auth(
            app.clone(),
            "/api/v1/patients",
            patient_body("Karim", "01099999999", "44444444444444", "pending", 300.0),
            &token,
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/patients/{id}"),
        json!({ "status": "approved" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["status"], "approved");
    assert_eq!(updated["name"], "Karim");
    assert_eq!(updated["cost"], 300.0);

    let response = put_json_auth(
        app,
        &format!("/api/v1/patients/{id}"),
        json!({ "name": "K" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_patient(pool: PgPool) {
    let token = common::token_for(&pool, Role::User).await;
    let app = common::build_test_app(pool);

    let created = body_json(
        post_json_auth(
            app.clone(),
            "/api/v1/patients",
            patient_body("Sara", "01055555555", "55555555555555", "pending", 10.0),
            &token,
        )
        .await,
    )
    .await;
    let uri = format!("/api/v1/patients/{}", created["id"]);

    let response = delete_auth(app.clone(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Patient deleted successfully");

    let response = delete_auth(app.clone(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get_auth(app, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_numeric_id_is_400_json(pool: PgPool) {
    let token = common::token_for(&pool, Role::Admin).await;
    let app = common::build_test_app(pool);

    for response in [
        get_auth(app.clone(), "/api/v1/patients/abc", &token).await,
        put_json_auth(app.clone(), "/api/v1/patients/abc", json!({}), &token).await,
        delete_auth(app, "/api/v1/patients/abc", &token).await,
    ] {
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "BAD_REQUEST");
        assert!(json["error"].as_str().unwrap().contains("abc"));
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_patient_is_404(pool: PgPool) {
    let token = common::token_for(&pool, Role::Admin).await;
    let app = common::build_test_app(pool);

    let response = put_json_auth(app, "/api/v1/patients/9999", json!({}), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Authorization
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_other_roles_cannot_touch_patients(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    for role in [Role::Editor, Role::Donor, Role::Volunteer] {
        let token = common::token_for(&pool, role).await;

        let response = get_auth(app.clone(), "/api/v1/patients", &token).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{role} list");

        // Authorization is checked before the body is looked at.
        let response =
            post_json_auth(app.clone(), "/api/v1/patients", json!({ "name": "x" }), &token).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{role} create");
    }
}

// ---------------------------------------------------------------------------
// List view
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_defaults_to_newest_first(pool: PgPool) {
    let token = common::token_for(&pool, Role::Admin).await;
    let app = common::build_test_app(pool);
    seed_fixture(&app, &token).await;

    let response = get_auth(app, "/api/v1/patients", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-total-count"], "3");
    assert_eq!(names(&body_json(response).await), ["Charlie", "Bob", "Alice"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_filter_search_sort(pool: PgPool) {
    let token = common::token_for(&pool, Role::Admin).await;
    let app = common::build_test_app(pool);
    seed_fixture(&app, &token).await;

    let cases: [(&str, &[&str]); 7] = [
        ("?status=completed", &["Alice"]),
        ("?status=pending&search=alice", &[]),
        ("?status=completed&search=ALICE", &["Alice"]),
        ("?search=555-2222", &["Bob"]),
        ("?search=cairo", &[]),
        ("?sort=cost&direction=desc", &["Bob", "Charlie", "Alice"]),
        ("?sort=name&direction=asc", &["Alice", "Bob", "Charlie"]),
    ];

    for (query, expected) in cases {
        let response = get_auth(app.clone(), &format!("/api/v1/patients{query}"), &token).await;
        assert_eq!(response.status(), StatusCode::OK, "{query}");
        assert_eq!(response.headers()["x-total-count"], "3", "{query}");
        assert_eq!(names(&body_json(response).await), expected, "{query}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_unknown_values_are_ignored(pool: PgPool) {
    let token = common::token_for(&pool, Role::User).await;
    let app = common::build_test_app(pool);
    seed_fixture(&app, &token).await;

    // Unknown status shows everything; sort without a direction leaves
    // the stored order (newest first) untouched.
    let response = get_auth(app, "/api/v1/patients?status=bogus&sort=cost", &token).await;
    assert_eq!(names(&body_json(response).await), ["Charlie", "Bob", "Alice"]);
}
