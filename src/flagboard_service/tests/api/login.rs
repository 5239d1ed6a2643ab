use crate::helpers::{TestApp, envelope, session_cookie};
use flagboard_core::ConfigKey;

#[tokio::test]
async fn login_by_name() {
    let app = TestApp::new().await;
    app.add_team("Bob", "correct horse", false).await;

    let response = app
        .post_index(&[
            ("action", "login_team"),
            ("teamname", "Bob"),
            ("password", "correct horse"),
        ])
        .await;

    assert_eq!(response.status().as_u16(), 200);
    assert!(session_cookie(&response).is_some());
    let body = envelope(response).await;
    assert!(body.is_ok());
    assert_eq!(body.message, "Login succesful");
    assert_eq!(body.redirect, "game");
    assert_eq!(app.session_store.len(), 1);
}

#[tokio::test]
async fn admin_is_sent_to_admin_page() {
    let app = TestApp::new().await;
    app.add_team("root", "toor", true).await;

    let body = envelope(
        app.post_index(&[
            ("action", "login_team"),
            ("teamname", "root"),
            ("password", "toor"),
        ])
        .await,
    )
    .await;

    assert!(body.is_ok());
    assert_eq!(body.redirect, "admin");
}

#[tokio::test]
async fn login_failures() {
    let app = TestApp::new().await;
    app.add_team("Bob", "correct horse", false).await;

    let cases = [
        ("Bob", "battery staple"),
        ("Mallory", "correct horse"),
    ];

    for (name, password) in cases {
        let response = app
            .post_index(&[
                ("action", "login_team"),
                ("teamname", name),
                ("password", password),
            ])
            .await;

        assert_eq!(response.status().as_u16(), 200);
        assert!(session_cookie(&response).is_none());
        let body = envelope(response).await;
        assert_eq!(body.message, "Login failed");
        assert_eq!(body.redirect, "login");
    }

    assert!(app.session_store.is_empty());
}

#[tokio::test]
async fn login_disabled() {
    let app = TestApp::new().await;
    app.add_team("Bob", "pw", false).await;
    app.set_flag(ConfigKey::Login, "0");

    let body = envelope(
        app.post_index(&[
            ("action", "login_team"),
            ("teamname", "Bob"),
            ("password", "pw"),
        ])
        .await,
    )
    .await;

    assert_eq!(body.message, "Login failed");
    assert_eq!(body.redirect, "login");
}

#[tokio::test]
async fn login_by_team_id() {
    let app = TestApp::new().await;
    let team_id = app.add_team("Bob", "pw", false).await;
    app.set_flag(ConfigKey::LoginSelect, "1");

    let id = team_id.to_string();
    let body = envelope(
        app.post_index(&[
            ("action", "login_team"),
            ("team_id", id.as_str()),
            ("password", "pw"),
        ])
        .await,
    )
    .await;
    assert!(body.is_ok());
}

#[tokio::test]
async fn login_by_team_id_rejects_non_integers() {
    let app = TestApp::new().await;
    app.add_team("Bob", "pw", false).await;
    app.set_flag(ConfigKey::LoginSelect, "1");

    let body = envelope(
        app.post_index(&[
            ("action", "login_team"),
            ("team_id", "one"),
            ("password", "pw"),
        ])
        .await,
    )
    .await;

    assert_eq!(body.message, "Invalid input");
    assert_eq!(body.redirect, "index");
}

#[tokio::test]
async fn existing_session_is_kept() {
    let app = TestApp::new().await;
    app.add_team("Bob", "pw", false).await;
    app.add_team("Carol", "pw", false).await;

    let first = app
        .post_index(&[
            ("action", "login_team"),
            ("teamname", "Bob"),
            ("password", "pw"),
        ])
        .await;
    assert!(session_cookie(&first).is_some());

    // Same client, so the cookie from the first login is sent along.
    let second = app
        .post_index(&[
            ("action", "login_team"),
            ("teamname", "Carol"),
            ("password", "pw"),
        ])
        .await;

    assert!(session_cookie(&second).is_none());
    assert!(envelope(second).await.is_ok());
    assert_eq!(app.session_store.len(), 1);
}
