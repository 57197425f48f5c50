/// Application state and router builder
///
/// # Example
///
/// ```no_run
/// use thoughts_api::{app::AppState, config::Config};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let state = match config.database.clone() {
///     Some(database) => AppState::new(PgPool::connect(&database.url).await?, config),
///     None => AppState::in_memory(config),
/// };
/// let app = thoughts_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, patch, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use thoughts_shared::{
    auth::authenticator::Authenticator,
    services::{accounts::AccountService, thoughts::ThoughtService},
    store::{memory::MemoryStore, postgres::PgStore, ThoughtStore, UserStore},
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor. Services
/// hold `Arc`s to the stores, so cloning is cheap and every clone talks to
/// the same backend.
#[derive(Clone)]
pub struct AppState {
    /// Bearer token validation
    pub authenticator: Authenticator,

    /// Signup and login
    pub accounts: AccountService,

    /// Thought operations
    pub thoughts: ThoughtService,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates state backed by PostgreSQL
    pub fn new(db: PgPool, config: Config) -> Self {
        let store = Arc::new(PgStore::new(db));
        Self::with_stores(store.clone(), store, config)
    }

    /// Creates state backed by the in-memory store (no `DATABASE_URL`)
    pub fn in_memory(config: Config) -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::with_stores(store.clone(), store, config)
    }

    /// Creates state over arbitrary store implementations
    pub fn with_stores(
        users: Arc<dyn UserStore>,
        thoughts: Arc<dyn ThoughtStore>,
        config: Config,
    ) -> Self {
        Self {
            authenticator: Authenticator::new(users.clone()),
            accounts: AccountService::new(users),
            thoughts: ThoughtService::new(thoughts),
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── GET    /                     # Welcome + endpoint list
/// ├── GET    /health               # Store connectivity
/// ├── /user  (alias /users)
/// │   ├── POST /signup
/// │   └── POST /login
/// └── /thoughts
///     ├── GET    /?hearts=N        # List, newest first
///     ├── POST   /                 # Create (bearer)
///     ├── GET    /:id
///     ├── PATCH  /:id              # Update (bearer)
///     ├── DELETE /:id              # Delete (bearer)
///     └── PATCH  /:id/like         # Like (public)
/// ```
///
/// Authentication is enforced per handler through the `AuthenticatedUser`
/// extractor, so public and protected methods can share a path.
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let user_routes = Router::new()
        .route("/signup", post(routes::users::signup))
        .route("/login", post(routes::users::login));

    let thought_routes = Router::new()
        .route(
            "/",
            get(routes::thoughts::list_thoughts).post(routes::thoughts::create_thought),
        )
        .route(
            "/:id",
            get(routes::thoughts::get_thought)
                .patch(routes::thoughts::update_thought)
                .delete(routes::thoughts::delete_thought),
        )
        .route("/:id/like", patch(routes::thoughts::like_thought));

    let cors = if state.config.cors_is_permissive() {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PATCH,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .max_age(std::time::Duration::from_secs(3600))
    };

    Router::new()
        .route("/", get(routes::index::welcome))
        .route("/health", get(routes::health::health_check))
        .nest("/user", user_routes.clone())
        .nest("/users", user_routes)
        .nest("/thoughts", thought_routes)
        .method_not_allowed_fallback(routes::index::method_not_allowed)
        .fallback(routes::index::not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}
