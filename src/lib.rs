use axum::handler::HandlerWithoutStateExt;
use axum::routing::{get, post};
use axum::{middleware, Router};
use axum_server::bind;
use std::{error::Error, future::Future, pin::Pin};
use tower_http::services::ServeDir;

use app_state::AppState;

pub mod app_state;
pub mod domain;
pub mod errors;
pub mod routes;
pub mod services;
pub mod session;
pub mod utils;
pub mod validation;

type ServerFuture = Pin<Box<dyn Future<Output = Result<(), std::io::Error>> + Send>>;

pub fn app_router(app_state: AppState) -> Router {
    // Everything behind the session guard. Paths here must stay disjoint
    // from the public ones below so the two routers can be merged.
    let private = Router::new()
        .route("/dashboard", get(routes::dashboard))
        .route("/users", get(routes::list_users).post(routes::create_user))
        .route(
            "/users/{email}",
            get(routes::get_user)
                .put(routes::update_user)
                .delete(routes::delete_user),
        )
        .route(
            "/catways",
            get(routes::list_catways).post(routes::create_catway),
        )
        .route(
            "/catways/{catwayNumber}",
            get(routes::get_catway)
                .put(routes::update_catway)
                .delete(routes::delete_catway),
        )
        .route(
            "/catways/{catwayNumber}/reservations",
            get(routes::list_reservations).post(routes::create_reservation),
        )
        .route(
            "/catways/{catwayNumber}/reservations/{idReservation}",
            get(routes::get_reservation).delete(routes::delete_reservation),
        )
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            session::check_session,
        ));

    Router::new()
        .route("/login", post(routes::login))
        .route("/users/login", post(routes::login))
        .route("/logout", get(routes::logout))
        .merge(private)
        .fallback_service(
            ServeDir::new("assets").not_found_service(routes::not_found.into_service()),
        )
        .with_state(app_state)
}

// This struct encapsulates our application-related logic.
pub struct Application {
    http_future: ServerFuture,
    // address is exposed as a public field,
    // so we have access to it in tests.
    pub address: String,
}

impl Application {
    pub async fn build(app_state: AppState, address: &str) -> Result<Self, Box<dyn Error>> {
        let router = app_router(app_state);

        let http_future = bind(address.parse()?).serve(router.into_make_service());

        Ok(Self {
            http_future: Box::pin(http_future),
            address: format!("http://{}", address),
        })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        log::info!("listening on {}", &self.address);
        self.http_future.await
    }
}
