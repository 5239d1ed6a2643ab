use crate::helpers::{TestApp, envelope};
use flagboard_core::ResponseResult;

#[tokio::test]
async fn unknown_action_is_rejected() {
    let app = TestApp::new().await;

    let cases = [
        vec![("action", "drop_tables")],
        vec![("action", "login team")],
        vec![("teamname", "Bob")],
        vec![],
    ];

    for form in cases {
        let response = app.post_index(&form).await;
        assert_eq!(response.status().as_u16(), 200, "form: {form:?}");

        let body = envelope(response).await;
        assert_eq!(body.result, ResponseResult::Error);
        assert_eq!(body.message, "Invalid action");
        assert_eq!(body.redirect, "index");
    }
}

#[tokio::test]
async fn non_form_body_is_treated_as_missing_action() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(format!("{}/ajax/index", &app.address))
        .json(&serde_json::json!({ "action": "login_team" }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 200);
    let body = envelope(response).await;
    assert_eq!(body.message, "Invalid action");
}

#[tokio::test]
async fn envelope_has_exactly_three_fields() {
    let app = TestApp::new().await;

    let response = app.post_index(&[("action", "nope")]).await;
    let body: serde_json::Value = response.json().await.unwrap();

    assert_eq!(
        body,
        serde_json::json!({
            "result": "ERROR",
            "message": "Invalid action",
            "redirect": "index"
        })
    );
}
