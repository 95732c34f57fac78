use axum::{
    Json, Router,
    http::{HeaderValue, Method, header},
    routing::{delete, get, patch, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer, cookie::SameSite};

use crate::config::Config;
use crate::db::Store;

pub mod auth;
mod error;
pub mod types;

mod assignments;
mod mess;
mod profile;
mod todos;

pub use error::ApiError;

use types::MessageResponse;

pub struct AppState {
    store: Store,
    config: Config,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            store: Store::new(),
            config,
        }
    }

    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }
}

#[must_use]
pub fn router(state: &Arc<AppState>) -> Router {
    // Sessions live in process memory alongside the data tables: the token
    // is an opaque id carried in an HttpOnly cookie, expiry is checked
    // lazily on lookup, and logout flushes the record.
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_name("session")
        .with_secure(state.config.server.secure_cookies)
        .with_same_site(SameSite::None)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(
            state.config.auth.session_days,
        )));

    let origins: Vec<HeaderValue> = state
        .config
        .server
        .cors_allowed_origins
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect();

    // Credentialed CORS cannot use a wildcard origin.
    let cors_layer = CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(root))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/me", get(auth::me))
        .route("/assignments", get(assignments::list))
        .route("/assignments", post(assignments::create))
        .route("/assignments/{id}", patch(assignments::update))
        .route("/assignments/{id}", delete(assignments::delete))
        .route("/todos", get(todos::list))
        .route("/todos", post(todos::create))
        .route("/todos/{id}", patch(todos::update))
        .route("/todos/{id}", delete(todos::delete))
        .route("/mess-menu", get(mess::get_menu))
        .route("/mess-menu/{day}", patch(mess::update_menu))
        .route("/profile", get(profile::get_profile))
        .route("/profile", patch(profile::update_profile))
        .layer(session_layer)
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone())
}

async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "StudyEdge API is running".to_string(),
    })
}
