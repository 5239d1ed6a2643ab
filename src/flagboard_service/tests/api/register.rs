use crate::helpers::{TestApp, envelope, session_cookie};
use fake::{Fake, faker::internet::en::SafeEmail, faker::name::en::Name};
use flagboard_core::{ConfigKey, RosterEntry, TeamStore};

#[tokio::test]
async fn register_team_logs_the_team_in() {
    let app = TestApp::new().await;

    let response = app
        .post_index(&[
            ("action", "register_team"),
            ("teamname", "Null Pointers"),
            ("password", "hunter2"),
            ("logo", "badger"),
        ])
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let cookie = response
        .cookies()
        .find(|cookie| cookie.name() == "FBCTF")
        .expect("No session cookie");
    assert!(cookie.http_only());
    assert!(cookie.same_site_lax());
    assert_eq!(cookie.path(), Some("/"));

    let body = envelope(response).await;
    assert!(body.is_ok());
    assert_eq!(body.message, "Login succesful");
    assert_eq!(body.redirect, "game");

    assert_eq!(app.team_store.team_count().await, 1);
    assert_eq!(app.session_store.len(), 1);

    let team = app.team_store.get_team_by_name("Null Pointers").await.unwrap();
    assert_eq!(team.logo().as_str(), "badger");
    assert!(!team.is_admin());
}

#[tokio::test]
async fn long_names_are_cut_to_twenty_characters() {
    let app = TestApp::new().await;

    let body = envelope(
        app.post_index(&[
            ("action", "register_team"),
            ("teamname", "The Quick Brown Fox Jumps Over"),
            ("password", "pw"),
            ("logo", "fox"),
        ])
        .await,
    )
    .await;

    assert!(body.is_ok());
    assert!(app.team_store.team_exists("The Quick Brown Fox ").await.unwrap());
}

#[tokio::test]
async fn unknown_logo_is_replaced() {
    let app = TestApp::new().await;

    let body = envelope(
        app.post_index(&[
            ("action", "register_team"),
            ("teamname", "Logoless"),
            ("password", "pw"),
            ("logo", "not-a-real-logo"),
        ])
        .await,
    )
    .await;

    assert!(body.is_ok());
    let team = app.team_store.get_team_by_name("Logoless").await.unwrap();
    assert_ne!(team.logo().as_str(), "not-a-real-logo");
}

#[tokio::test]
async fn malformed_logo_is_invalid_input() {
    let app = TestApp::new().await;

    let body = envelope(
        app.post_index(&[
            ("action", "register_team"),
            ("teamname", "Sneaky"),
            ("password", "pw"),
            ("logo", "../../etc/passwd"),
        ])
        .await,
    )
    .await;

    assert_eq!(body.message, "Invalid input");
    assert_eq!(body.redirect, "index");
    assert_eq!(app.team_store.team_count().await, 0);
}

#[tokio::test]
async fn registration_refusals() {
    let app = TestApp::new().await;
    app.add_team("Taken", "pw", false).await;

    let cases = [
        ("Taken", "name already used"),
        ("TAKEN", "name used with other case"),
        ("   ", "blank name"),
        ("", "empty name"),
    ];

    for (name, case) in cases {
        let response = app
            .post_index(&[
                ("action", "register_team"),
                ("teamname", name),
                ("password", "pw"),
                ("logo", "owl"),
            ])
            .await;

        assert_eq!(response.status().as_u16(), 200, "{case}");
        assert!(session_cookie(&response).is_none(), "{case}");
        let body = envelope(response).await;
        assert_eq!(body.message, "Registration failed", "{case}");
        assert_eq!(body.redirect, "registration", "{case}");
    }

    assert_eq!(app.team_store.team_count().await, 1);
}

#[tokio::test]
async fn registration_disabled() {
    let app = TestApp::new().await;
    app.set_flag(ConfigKey::Registration, "0");

    let body = envelope(
        app.post_index(&[
            ("action", "register_team"),
            ("teamname", "Late"),
            ("password", "pw"),
            ("logo", "owl"),
        ])
        .await,
    )
    .await;

    assert_eq!(body.message, "Registration failed");
    assert_eq!(app.team_store.team_count().await, 0);
}

#[tokio::test]
async fn tokenized_registration_consumes_the_token() {
    let app = TestApp::new().await;
    app.set_flag(ConfigKey::RegistrationType, "2");
    let token = app.token_store.generate().await;

    for token in ["", "null", "wrong_token"] {
        let body = envelope(
            app.post_index(&[
                ("action", "register_team"),
                ("teamname", "Invited"),
                ("password", "pw"),
                ("logo", "owl"),
                ("token", token),
            ])
            .await,
        )
        .await;
        assert_eq!(body.message, "Registration failed", "token: {token:?}");
    }

    let body = envelope(
        app.post_index(&[
            ("action", "register_team"),
            ("teamname", "Invited"),
            ("password", "pw"),
            ("logo", "owl"),
            ("token", token.as_str()),
        ])
        .await,
    )
    .await;
    assert!(body.is_ok());

    let team = app.team_store.get_team_by_name("Invited").await.unwrap();
    assert_eq!(app.token_store.used_by(&token).await, Some(team.id()));

    let body = envelope(
        app.post_index(&[
            ("action", "register_team"),
            ("teamname", "Freeloader"),
            ("password", "pw"),
            ("logo", "owl"),
            ("token", token.as_str()),
        ])
        .await,
    )
    .await;
    assert_eq!(body.message, "Registration failed");
    assert_eq!(app.team_store.team_count().await, 1);
}

#[tokio::test]
async fn register_names_stores_the_roster() {
    let app = TestApp::new().await;

    let roster: Vec<RosterEntry> = (0..3)
        .map(|_| RosterEntry {
            name: Name().fake(),
            email: SafeEmail().fake(),
        })
        .collect();
    let names =
        serde_json::to_string(&roster.iter().map(|e| &e.name).collect::<Vec<_>>()).unwrap();
    let emails =
        serde_json::to_string(&roster.iter().map(|e| &e.email).collect::<Vec<_>>()).unwrap();

    let body = envelope(
        app.post_index(&[
            ("action", "register_names"),
            ("teamname", "Full Roster"),
            ("password", "pw"),
            ("logo", "wolf"),
            ("names", names.as_str()),
            ("emails", emails.as_str()),
        ])
        .await,
    )
    .await;
    assert!(body.is_ok());

    let team = app.team_store.get_team_by_name("Full Roster").await.unwrap();
    assert_eq!(app.team_store.team_data(team.id()).await, roster);
}

#[tokio::test]
async fn register_names_with_mismatched_lists_is_invalid_input() {
    let app = TestApp::new().await;

    let body = envelope(
        app.post_index(&[
            ("action", "register_names"),
            ("teamname", "Half Roster"),
            ("password", "pw"),
            ("logo", "wolf"),
            ("names", r#"["Ada", "Grace"]"#),
            ("emails", r#"["ada@example.com"]"#),
        ])
        .await,
    )
    .await;

    assert_eq!(body.message, "Invalid input");
    assert_eq!(app.team_store.team_count().await, 0);
}
