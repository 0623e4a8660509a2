//! Integration tests for the server-rendered admin panel.

#![allow(clippy::unwrap_used)]

use rocketcall_core::InquiryStatus;
use rocketcall_integration_tests::{ADMIN_SECRET, TestApp};
use serde_json::json;

fn location(response: &reqwest::Response) -> &str {
    response
        .headers()
        .get("location")
        .unwrap()
        .to_str()
        .unwrap()
}

#[tokio::test]
async fn test_dashboard_redirects_anonymous_users() {
    let app = TestApp::spawn().await;

    let response = app.client.get(app.url("/admin")).send().await.unwrap();

    assert_eq!(response.status(), 303);
    assert_eq!(location(&response), "/admin/login");
}

#[tokio::test]
async fn test_wrong_password_shows_error() {
    let app = TestApp::spawn().await;

    let response = app.login("guess-1234").await;
    assert_eq!(response.status(), 401);
    let html = response.text().await.unwrap();
    assert!(html.contains("비밀번호가 올바르지 않습니다."));

    let dashboard = app.client.get(app.url("/admin")).send().await.unwrap();
    assert_eq!(dashboard.status(), 303);
}

#[tokio::test]
async fn test_login_then_dashboard_lists_inquiries() {
    let app = TestApp::spawn().await;
    app.submit(&json!({ "name": "Dealer Kim", "phone": "010-1111-2222" }))
        .await;

    let login = app.login(ADMIN_SECRET).await;
    assert_eq!(login.status(), 303);
    assert_eq!(location(&login), "/admin");

    let response = app.client.get(app.url("/admin")).send().await.unwrap();
    assert_eq!(response.status(), 200);
    let html = response.text().await.unwrap();
    assert!(html.contains("Dealer Kim"));
    assert!(html.contains("010-1111-2222"));
}

#[tokio::test]
async fn test_login_page_redirects_when_signed_in() {
    let app = TestApp::spawn().await;
    app.login(ADMIN_SECRET).await;

    let response = app.client.get(app.url("/admin/login")).send().await.unwrap();

    assert_eq!(response.status(), 303);
    assert_eq!(location(&response), "/admin");
}

#[tokio::test]
async fn test_tab_filter_shows_empty_message() {
    let app = TestApp::spawn().await;
    app.submit(&json!({ "name": "Kim", "phone": "010" })).await;
    app.login(ADMIN_SECRET).await;

    let response = app
        .client
        .get(app.url("/admin?tab=completed"))
        .send()
        .await
        .unwrap();
    let html = response.text().await.unwrap();

    assert!(html.contains("처리완료 상태의 문의가 없습니다."));
}

#[tokio::test]
async fn test_form_status_change_and_delete() {
    let app = TestApp::spawn().await;
    app.submit(&json!({ "name": "Kim", "phone": "010" })).await;
    let id = app.rows.list().await[0].id;
    app.login(ADMIN_SECRET).await;

    let response = app
        .post_form(
            &format!("/admin/inquiries/{id}/status"),
            "status=contacted&tab=pending",
        )
        .await;
    assert_eq!(response.status(), 303);
    assert_eq!(location(&response), "/admin?tab=pending");
    assert_eq!(app.rows.list().await[0].status.as_str(), "contacted");

    let response = app
        .post_form(&format!("/admin/inquiries/{id}/delete"), "tab=all")
        .await;
    assert_eq!(response.status(), 303);
    assert!(app.rows.is_empty().await);
}

#[tokio::test]
async fn test_form_bad_status_redirects_back() {
    let app = TestApp::spawn().await;
    app.submit(&json!({ "name": "Kim", "phone": "010" })).await;
    let id = app.rows.list().await[0].id;
    app.login(ADMIN_SECRET).await;

    let response = app
        .post_form(
            &format!("/admin/inquiries/{id}/status"),
            "status=archived&tab=pending",
        )
        .await;
    assert_eq!(response.status(), 303);
    assert_eq!(location(&response), "/admin?tab=pending");
    assert_eq!(app.rows.list().await[0].status, InquiryStatus::Pending);

    let response = app
        .post_form("/admin/inquiries/not-an-id/status", "status=contacted")
        .await;
    assert_eq!(response.status(), 303);
    assert_eq!(location(&response), "/admin?tab=all");
}

#[tokio::test]
async fn test_logout_ends_session() {
    let app = TestApp::spawn().await;
    app.login(ADMIN_SECRET).await;

    let response = app.post_form("/admin/logout", "").await;
    assert_eq!(response.status(), 303);
    assert_eq!(location(&response), "/admin/login");

    assert_eq!(app.list().await.status(), 401);
}
