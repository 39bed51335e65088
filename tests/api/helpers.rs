use std::sync::Arc;

use reqwest::{Client, Response};
use serde::Serialize;
use tokio::net::TcpListener;
use tokio::spawn;
use tokio::sync::RwLock;
use uuid::Uuid;

use port_russell_api::app_router;
use port_russell_api::app_state::AppState;
use port_russell_api::domain::{Email, Password, User, UserStore};
use port_russell_api::services::{
    HashmapCatwayStore, HashmapReservationStore, HashmapUserStore,
};
use port_russell_api::session::TokenCodec;
use port_russell_api::utils::Config;

pub const TEST_SECRET: &str = "integration-test-secret";

pub struct TestApp {
    pub address: String,
    // Redirects are not followed so 3xx responses stay observable; cookies
    // are not stored so every request states its credentials explicitly.
    pub http_client: Client,
    pub app_state: AppState,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = Arc::new(Config::for_tests(TEST_SECRET));
        let token_codec = Arc::new(TokenCodec::new(&config));

        let app_state = AppState::new(
            Arc::new(RwLock::new(HashmapUserStore::new())),
            Arc::new(RwLock::new(HashmapCatwayStore::new())),
            Arc::new(RwLock::new(HashmapReservationStore::new())),
            token_codec,
            config,
        );

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed binding to an ephemeral port");

        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let server = axum::serve(listener, app_router(app_state.clone()));

        spawn(async move {
            if let Err(e) = server.await {
                eprintln!("Test server error: {}", e);
            }
        });

        let http_client = Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("failed building the http client");

        TestApp {
            address,
            http_client,
            app_state,
        }
    }

    /// The codec the server signs with, for inspecting tokens in tests.
    pub fn codec(&self) -> TokenCodec {
        TokenCodec::new(&Config::for_tests(TEST_SECRET))
    }

    // Put a user directly into the store; user management routes are
    // guarded, so tests cannot create their first account over HTTP.
    pub async fn seed_user(&self, name: &str, email: &str, password: &str) {
        let user = User::new(
            name.to_owned(),
            Email::parse(email.to_owned()).expect("invalid seed email"),
            Password::parse(password.to_owned()).expect("invalid seed password"),
        );
        self.app_state
            .user_store
            .write()
            .await
            .add_user(user)
            .await
            .expect("failed seeding user");
    }

    pub async fn get_root(&self) -> Response {
        self.http_client
            .get(format!("{}/", &self.address))
            .send()
            .await
            .expect("Failed to execute root request.")
    }

    pub async fn login(&self, email: &str, password: &str) -> Response {
        self.http_client
            .post(format!("{}/login", &self.address))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute login request.")
    }

    /// Login and return the issued session token, taken from the
    /// `Authorization` response header.
    pub async fn login_for_token(&self, email: &str, password: &str) -> String {
        let response = self.login(email, password).await;
        assert_eq!(response.status().as_u16(), 200);
        bearer_token(&response)
    }

    pub async fn logout(&self) -> Response {
        self.http_client
            .get(format!("{}/logout", &self.address))
            .send()
            .await
            .expect("Failed to execute logout request.")
    }

    pub async fn get(&self, path: &str) -> Response {
        self.http_client
            .get(format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute GET request.")
    }

    pub async fn get_with_header(&self, path: &str, name: &str, value: &str) -> Response {
        self.http_client
            .get(format!("{}{}", &self.address, path))
            .header(name, value)
            .send()
            .await
            .expect("Failed to execute GET request.")
    }

    pub async fn get_auth(&self, path: &str, token: &str) -> Response {
        self.get_with_header(path, "x-access-token", token).await
    }

    pub async fn post_json<T: Serialize>(&self, path: &str, body: &T, token: &str) -> Response {
        self.http_client
            .post(format!("{}{}", &self.address, path))
            .header("x-access-token", token)
            .json(body)
            .send()
            .await
            .expect("Failed to execute POST request.")
    }

    pub async fn put_json<T: Serialize>(&self, path: &str, body: &T, token: &str) -> Response {
        self.http_client
            .put(format!("{}{}", &self.address, path))
            .header("x-access-token", token)
            .json(body)
            .send()
            .await
            .expect("Failed to execute PUT request.")
    }

    pub async fn delete_auth(&self, path: &str, token: &str) -> Response {
        self.http_client
            .delete(format!("{}{}", &self.address, path))
            .header("x-access-token", token)
            .send()
            .await
            .expect("Failed to execute DELETE request.")
    }
}

pub fn get_random_email() -> String {
    format!("{}@example.com", Uuid::new_v4())
}

/// Extract `<token>` from an `Authorization: Bearer <token>` response header.
pub fn bearer_token(response: &Response) -> String {
    response
        .headers()
        .get("authorization")
        .expect("No Authorization header on the response")
        .to_str()
        .unwrap()
        .strip_prefix("Bearer ")
        .expect("Authorization header is not a Bearer value")
        .to_owned()
}

/// The `token=` Set-Cookie value, if the response carries one.
pub fn session_cookie_value(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all("set-cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("token="))
        .map(|v| {
            v.split(';')
                .next()
                .unwrap()
                .trim_start_matches("token=")
                .to_owned()
        })
}

/// Spawn an app with one known user and hand back (app, token).
pub async fn logged_in_app() -> (TestApp, String) {
    let app = TestApp::new().await;
    let email = get_random_email();
    app.seed_user("Capitainerie", &email, "Password123!").await;
    let token = app.login_for_token(&email, "Password123!").await;
    (app, token)
}
