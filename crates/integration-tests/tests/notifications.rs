//! Integration tests for the Discord notification side effect.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::time::Duration;

use rocketcall_integration_tests::{
    TestApp, WEBHOOK_PATH, wait_for_requests, webhook_accepting, webhook_answering,
};
use serde_json::{Value, json};

#[tokio::test]
async fn test_accepted_inquiry_notifies_once() {
    let webhook = webhook_accepting().await;
    let app = TestApp::spawn_with(Some(&webhook)).await;

    let response = app
        .submit(&json!({ "name": "Kim", "phone": "010-1234-5678", "message": "" }))
        .await;
    assert_eq!(response.status(), 201);

    let received = wait_for_requests(&webhook, 1).await;
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].url.path(), WEBHOOK_PATH);

    let payload: Value = serde_json::from_slice(&received[0].body).unwrap();
    let embed = &payload["embeds"][0];
    assert_eq!(embed["title"], "📞 새로운 상담 문의가 접수되었습니다!");
    assert_eq!(embed["fields"][0]["value"], "Kim");
    assert_eq!(embed["fields"][1]["value"], "010-1234-5678");
    assert_eq!(embed["fields"][2]["value"], "(내용 없음)");
}

#[tokio::test]
async fn test_rejected_inquiry_does_not_notify() {
    let webhook = webhook_accepting().await;
    let app = TestApp::spawn_with(Some(&webhook)).await;

    let response = app.submit(&json!({ "name": "Kim" })).await;
    assert_eq!(response.status(), 400);

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(webhook.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_webhook_failure_keeps_inquiry() {
    let webhook = webhook_answering(500).await;
    let app = TestApp::spawn_with(Some(&webhook)).await;

    let response = app.submit(&json!({ "name": "Kim", "phone": "010" })).await;
    assert_eq!(response.status(), 201);

    assert_eq!(wait_for_requests(&webhook, 1).await.len(), 1);
    assert_eq!(app.rows.len().await, 1);
}

#[tokio::test]
async fn test_without_webhook_inquiry_is_still_stored() {
    let app = TestApp::spawn().await;

    let response = app.submit(&json!({ "name": "Kim", "phone": "010" })).await;

    assert_eq!(response.status(), 201);
    assert_eq!(app.rows.len().await, 1);
}
