use crate::helpers::{TOKEN, TestApp, error, location};

#[tokio::test]
async fn should_show_form_for_live_token() {
    let app = TestApp::new().await;

    let response = app.get_create_password(TOKEN).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "token": TOKEN }));
}

#[tokio::test]
async fn should_redirect_expired_link_to_forgot_password() {
    let app = TestApp::new().await;

    let response = app.get_create_password("stale").await;

    assert_eq!(response.status().as_u16(), 302);
    assert_eq!(location(&response), "/customer/account/forgotpassword");
    assert_eq!(
        app.get_messages().await,
        vec![error("Your password reset link has expired.")]
    );
}

#[tokio::test]
async fn should_use_token_remembered_by_session() {
    let app = TestApp::new().await;
    app.get_create_password(TOKEN).await;

    let response = app.get_create_password("").await;

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "token": TOKEN }));
}
