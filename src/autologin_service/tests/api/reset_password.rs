use crate::helpers::{TOKEN, TestApp, error, location, success};

#[tokio::test]
async fn should_log_in_and_redirect_to_cart_when_cart_has_items() {
    let app = TestApp::new().await;
    app.add_cart_item("24-WG085");

    let response = app
        .post_reset_password(TOKEN, "Brand-New-Pass-5", "Brand-New-Pass-5")
        .await;

    assert_eq!(response.status().as_u16(), 302);
    assert_eq!(location(&response), "/checkout/cart");
    assert!(app.password_is("Brand-New-Pass-5").await);
    assert_eq!(
        app.get_messages().await,
        vec![success("You updated your password.")]
    );
}

#[tokio::test]
async fn should_redirect_to_dashboard_without_cart() {
    let app = TestApp::new().await;

    let response = app
        .post_reset_password(TOKEN, "Brand-New-Pass-5", "Brand-New-Pass-5")
        .await;

    assert_eq!(location(&response), "/customer/account");
}

#[tokio::test]
async fn should_return_to_form_when_passwords_differ() {
    let app = TestApp::new().await;

    let response = app
        .post_reset_password(TOKEN, "Brand-New-Pass-5", "Brand-New-Pass-6")
        .await;

    assert_eq!(
        location(&response),
        format!("/customer/account/createpassword?token={TOKEN}")
    );
    assert!(app.password_is("Original-Pass-1").await);
    assert_eq!(
        app.get_messages().await,
        vec![error(
            "New Password and Confirm New Password values didn't match."
        )]
    );
}

#[tokio::test]
async fn should_reject_empty_password() {
    let app = TestApp::new().await;

    let response = app.post_reset_password(TOKEN, "", "").await;

    assert_eq!(
        location(&response),
        format!("/customer/account/createpassword?token={TOKEN}")
    );
    assert_eq!(
        app.get_messages().await,
        vec![error("Please enter a new password.")]
    );
}

#[tokio::test]
async fn should_report_generic_failure_for_unknown_token() {
    let app = TestApp::new().await;

    let response = app
        .post_reset_password("not-issued", "Brand-New-Pass-5", "Brand-New-Pass-5")
        .await;

    assert_eq!(
        location(&response),
        "/customer/account/createpassword?token=not-issued"
    );
    assert_eq!(
        app.get_messages().await,
        vec![error("Something went wrong while saving the new password.")]
    );
}

#[tokio::test]
async fn should_not_reuse_a_consumed_token() {
    let app = TestApp::new().await;
    app.post_reset_password(TOKEN, "Brand-New-Pass-5", "Brand-New-Pass-5")
        .await;
    app.get_messages().await;

    let response = app
        .post_reset_password(TOKEN, "Other-New-Pass-6", "Other-New-Pass-6")
        .await;

    assert_eq!(
        location(&response),
        format!("/customer/account/createpassword?token={TOKEN}")
    );
    assert!(app.password_is("Brand-New-Pass-5").await);
    assert_eq!(
        app.get_messages().await,
        vec![error("Something went wrong while saving the new password.")]
    );
}

#[tokio::test]
async fn should_treat_missing_body_as_empty_password() {
    let app = TestApp::new().await;

    let response = app.post_reset_password_without_body(TOKEN).await;

    assert_eq!(response.status().as_u16(), 302);
    assert_eq!(
        location(&response),
        format!("/customer/account/createpassword?token={TOKEN}")
    );
    assert_eq!(
        app.get_messages().await,
        vec![error("Please enter a new password.")]
    );
}
