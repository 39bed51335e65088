use crate::helpers::{logged_in_app, TestApp};

fn catway_body(number: u32, kind: &str, state: &str) -> serde_json::Value {
    serde_json::json!({
        "catwayNumber": number,
        "catwayType": kind,
        "catwayState": state
    })
}

#[tokio::test]
async fn catway_routes_are_private() {
    let app = TestApp::new().await;

    let response = app.get("/catways").await;

    assert!(response.status().is_redirection());
    assert_eq!(response.headers().get("location").unwrap(), "/");
}

#[tokio::test]
async fn should_create_and_fetch_a_catway() {
    let (app, token) = logged_in_app().await;

    let response = app
        .post_json("/catways", &catway_body(4, "long", "bon état"), &token)
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let response = app.get_auth("/catways/4", &token).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["catwayNumber"], 4);
    assert_eq!(body["catwayType"], "long");
    assert_eq!(body["catwayState"], "bon état");
}

#[tokio::test]
async fn should_return_409_if_catway_number_taken() {
    let (app, token) = logged_in_app().await;

    let body = catway_body(7, "short", "bon état");
    let response = app.post_json("/catways", &body, &token).await;
    assert_eq!(response.status().as_u16(), 201);

    let response = app.post_json("/catways", &body, &token).await;
    assert_eq!(response.status().as_u16(), 409);
}

#[tokio::test]
async fn should_list_catways_in_number_order() {
    let (app, token) = logged_in_app().await;

    for number in [3u32, 1, 2] {
        let _ = app
            .post_json("/catways", &catway_body(number, "short", "bon état"), &token)
            .await;
    }

    let response = app.get_auth("/catways", &token).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    let numbers: Vec<u64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["catwayNumber"].as_u64().unwrap())
        .collect();
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[tokio::test]
async fn only_the_state_is_updatable() {
    let (app, token) = logged_in_app().await;

    let _ = app
        .post_json("/catways", &catway_body(5, "long", "bon état"), &token)
        .await;

    let response = app
        .put_json(
            "/catways/5",
            &serde_json::json!({ "catwayState": "taquet arraché" }),
            &token,
        )
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["catwayState"], "taquet arraché");
    assert_eq!(body["catwayType"], "long");
}

#[tokio::test]
async fn should_return_404_for_unknown_catways() {
    let (app, token) = logged_in_app().await;

    let response = app.get_auth("/catways/999", &token).await;
    assert_eq!(response.status().as_u16(), 404);

    let response = app
        .put_json(
            "/catways/999",
            &serde_json::json!({ "catwayState": "peu importe" }),
            &token,
        )
        .await;
    assert_eq!(response.status().as_u16(), 404);

    let response = app.delete_auth("/catways/999", &token).await;
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn should_delete_a_catway() {
    let (app, token) = logged_in_app().await;

    let _ = app
        .post_json("/catways", &catway_body(6, "short", "bon état"), &token)
        .await;

    let response = app.delete_auth("/catways/6", &token).await;
    assert_eq!(response.status().as_u16(), 200);

    let response = app.get_auth("/catways/6", &token).await;
    assert_eq!(response.status().as_u16(), 404);
}
