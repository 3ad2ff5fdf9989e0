mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

use common::{AsUser, test_server};

#[tokio::test]
async fn requests_without_identity_are_rejected() {
    let server = test_server().await;

    let response = server.get("/household").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["code"], "E_UNAUTHORIZED");
}

#[tokio::test]
async fn invited_member_shares_household_documents() {
    let server = test_server().await;

    let owner: Value = server.get("/household").as_user("vera@example.com").await.json();
    let household_id = owner["data"]["id"].as_str().unwrap().to_string();

    let invite = server
        .post("/household/invite")
        .as_user("vera@example.com")
        .json(&json!({ "email": "noel@example.com" }))
        .await;
    invite.assert_status_ok();
    let invitation: Value = invite.json();
    assert_eq!(invitation["data"]["householdId"], household_id);
    assert_eq!(invitation["data"]["memberEmail"], "noel@example.com");

    server
        .post("/inventory/items")
        .as_user("vera@example.com")
        .json(&json!({ "name": "Eggs", "quantity": "12" }))
        .await
        .assert_status(StatusCode::CREATED);

    let inventory: Value = server.get("/inventory").as_user("NOEL@example.com").await.json();
    assert_eq!(inventory["data"][0]["name"], "Eggs");

    let household: Value = server.get("/household").as_user("noel@example.com").await.json();
    assert_eq!(household["data"]["id"], household_id);
    assert_eq!(household["data"]["members"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn invite_rejects_malformed_email() {
    let server = test_server().await;

    server
        .post("/household/invite")
        .as_user("vera@example.com")
        .json(&json!({ "email": "not-an-address" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn onboarding_tracks_invite() {
    let server = test_server().await;

    let before: Value = server.get("/onboarding").as_user("hiro@example.com").await.json();
    assert_eq!(before["data"]["progress"], 0);

    server
        .post("/household/invite")
        .as_user("hiro@example.com")
        .json(&json!({ "email": "guest@example.com" }))
        .await
        .assert_status_ok();

    let after: Value = server.get("/onboarding").as_user("hiro@example.com").await.json();
    assert_eq!(after["data"]["progress"], 33);
    assert_eq!(after["data"]["allComplete"], false);
}

#[tokio::test]
async fn dismissing_onboarding_keeps_the_invite() {
    let server = test_server().await;

    server
        .post("/household/invite")
        .as_user("hiro@example.com")
        .json(&json!({ "email": "guest@example.com" }))
        .await
        .assert_status_ok();

    let updated: Value = server
        .put("/settings")
        .as_user("hiro@example.com")
        .json(&json!({ "onboardingDismissed": true, "inviteSent": false }))
        .await
        .json();
    assert_eq!(updated["data"]["onboardingDismissed"], true);
    assert_eq!(updated["data"]["inviteSent"], true);

    let onboarding: Value = server.get("/onboarding").as_user("hiro@example.com").await.json();
    assert_eq!(onboarding["data"]["progress"], 33);
    assert_eq!(onboarding["data"]["dismissed"], true);
}
