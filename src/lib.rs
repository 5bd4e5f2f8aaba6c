pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod session;
pub mod store;
pub mod utils;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use crate::session::SessionStore;
use crate::store::AccountStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<AccountStore>,
    pub sessions: Arc<SessionStore>,
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/register", post(handlers::accounts::register))
        .route("/login", post(handlers::accounts::login))
        .route("/dashboard", get(handlers::accounts::dashboard))
        .route("/balance", get(handlers::accounts::balance))
        .route("/history", get(handlers::accounts::history))
        .route("/logout", post(handlers::accounts::logout))
        .route("/transfer", post(handlers::transfers::transfer))
        .route("/wire", post(handlers::transfers::wire))
        .layer(axum::middleware::from_fn(
            middleware::request_logger::request_logger,
        ))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
