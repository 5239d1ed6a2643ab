use crate::helpers::TestApp;

#[tokio::test]
async fn health_returns_ok() {
    let app = TestApp::new().await;

    let response = app.get_health().await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), "OK");
}
