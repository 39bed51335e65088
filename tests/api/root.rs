use crate::helpers::TestApp;

#[tokio::test]
async fn root_returns_the_landing_page() {
    let app = TestApp::new().await;

    let response = app.get_root().await;

    assert_eq!(response.status().as_u16(), 200);
    let content_type = response
        .headers()
        .get("content-type")
        .expect("No content-type header")
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn unknown_routes_get_the_json_fallback() {
    let app = TestApp::new().await;

    let response = app.get("/definitely-not-a-route").await;

    assert_eq!(response.status().as_u16(), 404);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["name"], "PORT RUSSELL");
    assert_eq!(body["message"], "Not found");
}
