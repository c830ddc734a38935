//! HTTP-level tests for donations and their effect on campaign totals.

mod common;

use axum::http::StatusCode;
use charity_core::roles::Role;
use common::{body_json, get_auth, post_json_auth};
use serde_json::{json, Value};
use sqlx::PgPool;

async fn create_campaign(app: &axum::Router, token: &str) -> i64 {
    let response = post_json_auth(
        app.clone(),
        "/api/v1/campaigns",
        json!({
            "title": "Medical Convoy",
            "description": "Mobile clinics for villages without a hospital",
            "targetAmount": 2000,
            "status": "Active",
            "startDate": "2024-01-01",
            "endDate": "2024-12-31"
        }),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

async fn donate(app: &axum::Router, token: &str, campaign_id: i64, amount: f64, status: &str) -> Value {
    let response = post_json_auth(
        app.clone(),
        "/api/v1/donations",
        json!({
            "campaignId": campaign_id,
            "amount": amount,
            "status": status,
            "paymentMethod": "Credit Card"
        }),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

async fn current_amount(app: &axum::Router, token: &str, campaign_id: i64) -> f64 {
    let response = get_auth(app.clone(), &format!("/api/v1/campaigns/{campaign_id}"), token).await;
    body_json(response).await["currentAmount"].as_f64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_only_completed_donations_move_the_total(pool: PgPool) {
    let admin = common::token_for(&pool, Role::Admin).await;
    let (donor, donor_token) =
        common::create_user_with_token(&pool, "giver@test.org", Role::Donor).await;
    let app = common::build_test_app(pool);
    let campaign_id = create_campaign(&app, &admin).await;

    let created = donate(&app, &donor_token, campaign_id, 300.0, "Completed").await;
    assert_eq!(created["donorId"], donor.id);
    assert_eq!(created["paymentMethod"], "Credit Card");
    assert!(created["transactionDate"].is_string());

    donate(&app, &donor_token, campaign_id, 50.0, "Pending").await;
    donate(&app, &donor_token, campaign_id, 70.0, "Failed").await;
    donate(&app, &donor_token, campaign_id, 20.0, "Completed").await;

    assert_eq!(current_amount(&app, &admin, campaign_id).await, 320.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_campaign_is_404(pool: PgPool) {
    let token = common::token_for(&pool, Role::Donor).await;
    let app = common::build_test_app(pool.clone());

    let response = post_json_auth(
        app,
        "/api/v1/donations",
        json!({ "campaignId": 777, "amount": 10, "paymentMethod": "Cash" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Campaign with id 777 not found");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM donations")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_donation_is_400(pool: PgPool) {
    let token = common::token_for(&pool, Role::Donor).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app.clone(),
        "/api/v1/donations",
        json!({ "campaignId": 1, "amount": 0.5, "paymentMethod": "Cash" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"][0]["path"][0], "amount");

    let response = post_json_auth(
        app,
        "/api/v1/donations",
        json!({ "campaignId": 1, "amount": 10, "paymentMethod": "Bitcoin" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_donors_see_only_their_own_donations(pool: PgPool) {
    let admin = common::token_for(&pool, Role::Admin).await;
    let (first, first_token) =
        common::create_user_with_token(&pool, "first@test.org", Role::Donor).await;
    let (_, second_token) =
        common::create_user_with_token(&pool, "second@test.org", Role::Volunteer).await;
    let app = common::build_test_app(pool);
    let campaign_id = create_campaign(&app, &admin).await;

    donate(&app, &first_token, campaign_id, 10.0, "Completed").await;
    donate(&app, &first_token, campaign_id, 15.0, "Pending").await;
    donate(&app, &second_token, campaign_id, 99.0, "Completed").await;

    let response = get_auth(app.clone(), "/api/v1/donations", &first_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let own = body_json(response).await;
    let own = own.as_array().unwrap();
    assert_eq!(own.len(), 2);
    assert!(own.iter().all(|d| d["donorId"] == first.id));
    assert_eq!(own[0]["campaignTitle"], "Medical Convoy");

    let response = get_auth(app, "/api/v1/donations", &admin).await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 3);
}
