use crate::helpers::{get_random_email, logged_in_app, TestApp};

fn user_body(name: &str, email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "name": name, "email": email, "password": password })
}

#[tokio::test]
async fn user_routes_are_private() {
    let app = TestApp::new().await;

    let response = app.get("/users").await;

    assert!(response.status().is_redirection());
    assert_eq!(response.headers().get("location").unwrap(), "/");
}

#[tokio::test]
async fn should_create_and_list_users() {
    let (app, token) = logged_in_app().await;
    let email = get_random_email();

    let response = app
        .post_json(
            "/users",
            &user_body("John Doe", &email, "Password123!"),
            &token,
        )
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let response = app.get_auth("/users", &token).await;
    assert_eq!(response.status().as_u16(), 200);

    let users: serde_json::Value = response.json().await.unwrap();
    let listed = users
        .as_array()
        .unwrap()
        .iter()
        .any(|u| u["email"] == email);
    assert!(listed);
}

#[tokio::test]
async fn should_return_409_if_user_already_exists() {
    let (app, token) = logged_in_app().await;
    let email = get_random_email();
    let body = user_body("John Doe", &email, "Password123!");

    let response = app.post_json("/users", &body, &token).await;
    assert_eq!(response.status().as_u16(), 201);

    let response = app.post_json("/users", &body, &token).await;
    assert_eq!(response.status().as_u16(), 409);
}

#[tokio::test]
async fn should_return_422_if_invalid_email_or_password() {
    let (app, token) = logged_in_app().await;

    let response = app
        .post_json(
            "/users",
            &user_body("John Doe", "not-an-email", "Password123!"),
            &token,
        )
        .await;
    assert_eq!(response.status().as_u16(), 422);

    let response = app
        .post_json(
            "/users",
            &user_body("John Doe", &get_random_email(), "weak"),
            &token,
        )
        .await;
    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn user_detail_never_exposes_the_password() {
    let (app, token) = logged_in_app().await;
    let email = get_random_email();
    let _ = app
        .post_json(
            "/users",
            &user_body("John Doe", &email, "Password123!"),
            &token,
        )
        .await;

    let response = app.get_auth(&format!("/users/{}", email), &token).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["email"], email);
    assert_eq!(body["name"], "John Doe");
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn should_update_and_delete_a_user() {
    let (app, token) = logged_in_app().await;
    let email = get_random_email();
    let _ = app
        .post_json(
            "/users",
            &user_body("John Doe", &email, "Password123!"),
            &token,
        )
        .await;

    let response = app
        .put_json(
            &format!("/users/{}", email),
            &serde_json::json!({ "name": "Jane Doe" }),
            &token,
        )
        .await;
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["name"], "Jane Doe");

    let response = app.delete_auth(&format!("/users/{}", email), &token).await;
    assert_eq!(response.status().as_u16(), 200);

    let response = app.get_auth(&format!("/users/{}", email), &token).await;
    assert_eq!(response.status().as_u16(), 404);
}
