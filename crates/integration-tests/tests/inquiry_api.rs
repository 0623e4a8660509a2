//! Integration tests for the public and admin inquiry JSON API.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use rocketcall_core::{InquiryId, InquiryStatus};
use rocketcall_integration_tests::{ADMIN_SECRET, TestApp};
use serde_json::{Value, json};

// =============================================================================
// Submission
// =============================================================================

#[tokio::test]
async fn test_submit_stores_pending_inquiry() {
    let app = TestApp::spawn().await;

    let response = app
        .submit(&json!({ "name": "  Kim  ", "phone": "010-1234-5678", "message": "견적 문의" }))
        .await;
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "상담 신청이 완료되었습니다.");

    let id: InquiryId = body["id"].as_str().unwrap().parse().unwrap();
    let rows = app.rows.list().await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, id);
    assert_eq!(rows[0].name, "Kim");
    assert_eq!(rows[0].message, "견적 문의");
    assert_eq!(rows[0].status, InquiryStatus::Pending);
}

#[tokio::test]
async fn test_submit_requires_name_and_phone() {
    let app = TestApp::spawn().await;

    for body in [
        json!({ "phone": "010" }),
        json!({ "name": "Kim" }),
        json!({ "name": "   ", "phone": "010" }),
        json!({ "name": "Kim", "phone": "" }),
    ] {
        let response = app.submit(&body).await;
        assert_eq!(response.status(), 400, "body: {body}");
        let error: Value = response.json().await.unwrap();
        assert_eq!(error["error"], "이름과 전화번호는 필수입니다.");
    }

    assert!(app.rows.is_empty().await);
}

#[tokio::test]
async fn test_submit_ignores_client_status() {
    let app = TestApp::spawn().await;

    app.submit(&json!({ "name": "Kim", "phone": "010", "status": "completed" }))
        .await;

    assert_eq!(app.rows.list().await[0].status.as_str(), "pending");
}

#[tokio::test]
async fn test_submit_rejects_non_json_body() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(app.url("/inquiry"))
        .header("content-type", "application/json")
        .body("name=Kim")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    assert!(app.rows.is_empty().await);
}

// =============================================================================
// Admin operations
// =============================================================================

#[tokio::test]
async fn test_list_requires_admin() {
    let app = TestApp::spawn().await;

    let response = app.list().await;
    assert_eq!(response.status(), 401);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "관리자 인증이 필요합니다.");
}

#[tokio::test]
async fn test_list_with_wrong_bearer_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(app.url("/inquiry"))
        .bearer_auth("not-the-secret")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn test_list_is_newest_first() {
    let app = TestApp::spawn().await;
    for name in ["first", "second", "third"] {
        app.submit(&json!({ "name": name, "phone": "010" })).await;
    }

    let response = app
        .client
        .get(app.url("/inquiry"))
        .bearer_auth(ADMIN_SECRET)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let rows: Vec<Value> = response.json().await.unwrap();
    let names: Vec<_> = rows.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["third", "second", "first"]);
}

#[tokio::test]
async fn test_session_login_unlocks_api() {
    let app = TestApp::spawn().await;
    app.submit(&json!({ "name": "Kim", "phone": "010" })).await;

    assert_eq!(app.list().await.status(), 401);

    let login = app.login(ADMIN_SECRET).await;
    assert_eq!(login.status(), 303);

    let response = app.list().await;
    assert_eq!(response.status(), 200);
    let rows: Vec<Value> = response.json().await.unwrap();
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn test_status_update_round_trip() {
    let app = TestApp::spawn().await;
    app.submit(&json!({ "name": "Kim", "phone": "010" })).await;
    let id = app.rows.list().await[0].id;

    for status in ["contacted", "completed", "pending"] {
        let response = app
            .client
            .patch(app.url(&format!("/inquiry/{id}")))
            .bearer_auth(ADMIN_SECRET)
            .json(&json!({ "status": status }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        let expected: InquiryStatus = status.parse().unwrap();
        assert_eq!(app.rows.list().await[0].status, expected);
    }
}

#[tokio::test]
async fn test_status_update_rejects_unknown_status() {
    let app = TestApp::spawn().await;
    app.submit(&json!({ "name": "Kim", "phone": "010" })).await;
    let id = app.rows.list().await[0].id;

    for body in [json!({ "status": "archived" }), json!({})] {
        let response = app
            .client
            .patch(app.url(&format!("/inquiry/{id}")))
            .bearer_auth(ADMIN_SECRET)
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400);
        let error: Value = response.json().await.unwrap();
        assert_eq!(error["error"], "유효한 상태값이 필요합니다.");
    }

    assert_eq!(app.rows.list().await[0].status.as_str(), "pending");
}

#[tokio::test]
async fn test_delete_removes_and_tolerates_unknown_id() {
    let app = TestApp::spawn().await;
    app.submit(&json!({ "name": "Kim", "phone": "010" })).await;
    let id = app.rows.list().await[0].id;

    for _ in 0..2 {
        let response = app
            .client
            .delete(app.url(&format!("/inquiry/{id}")))
            .bearer_auth(ADMIN_SECRET)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["message"], "문의가 삭제되었습니다.");
    }

    assert!(app.rows.is_empty().await);
}
