use crate::helpers::logged_in_app;

#[tokio::test]
async fn should_clear_the_cookie_and_redirect_home() {
    let (app, _) = logged_in_app().await;

    let response = app.logout().await;

    assert!(response.status().is_redirection());
    assert_eq!(response.headers().get("location").unwrap(), "/");

    let clearing = response
        .headers()
        .get_all("set-cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("token="))
        .expect("No clearing cookie on the logout response");
    assert!(clearing.starts_with("token=;"));
    assert!(clearing.contains("Max-Age=0"));
}

#[tokio::test]
async fn logout_does_not_revoke_the_token() {
    let (app, token) = logged_in_app().await;

    let response = app.logout().await;
    assert!(response.status().is_redirection());

    // No server-side revocation: a client that kept the token can still
    // use it until it expires on its own.
    let response = app.get_auth("/dashboard", &token).await;
    assert_eq!(response.status().as_u16(), 200);
}
