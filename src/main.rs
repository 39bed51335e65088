use std::env;
use std::sync::Arc;
use tokio::sync::RwLock;

use port_russell_api::app_state::AppState;
use port_russell_api::domain::{Email, Password, User, UserStore};
use port_russell_api::services::{
    HashmapCatwayStore, HashmapReservationStore, HashmapUserStore,
};
use port_russell_api::session::TokenCodec;
use port_russell_api::utils::Config;
use port_russell_api::Application;

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = Arc::new(Config::from_env().expect("Failed to load config"));
    let token_codec = Arc::new(TokenCodec::new(&config));

    let app_state = AppState::new(
        Arc::new(RwLock::new(HashmapUserStore::new())),
        Arc::new(RwLock::new(HashmapCatwayStore::new())),
        Arc::new(RwLock::new(HashmapReservationStore::new())),
        token_codec,
        config,
    );

    seed_admin_user(&app_state).await;

    let app = Application::build(app_state, "0.0.0.0:3000")
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}

// User management routes sit behind the session guard, so the very first
// account has to come from the environment.
async fn seed_admin_user(state: &AppState) {
    let (Ok(email), Ok(password)) = (env::var("ADMIN_EMAIL"), env::var("ADMIN_PASSWORD")) else {
        log::warn!("ADMIN_EMAIL/ADMIN_PASSWORD not set, no initial user seeded");
        return;
    };

    let name = env::var("ADMIN_NAME").unwrap_or_else(|_| "Capitainerie".to_owned());

    match (Email::parse(email), Password::parse(password)) {
        (Ok(email), Ok(password)) => {
            let user = User::new(name, email.clone(), password);
            if state.user_store.write().await.add_user(user).await.is_ok() {
                log::info!("seeded initial user {}", email.as_ref());
            }
        }
        _ => log::error!("invalid ADMIN_EMAIL or ADMIN_PASSWORD, no initial user seeded"),
    }
}
