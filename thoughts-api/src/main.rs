//! # Happy Thoughts API Server
//!
//! Serves the thoughts board: signup and login with bearer access tokens,
//! thought create/read/update/delete, likes and filtered listing.
//!
//! ## Startup
//!
//! 1. Load configuration from the environment (`.env` honored)
//! 2. With `DATABASE_URL`: create the database if missing, connect the pool,
//!    run migrations. Without it: use the in-memory store.
//! 3. Optionally replace all thoughts with demo data (`SEED_DATABASE=true`)
//! 4. Serve until Ctrl+C, then drain connections and close the pool
//!
//! ## Usage
//!
//! ```bash
//! DATABASE_URL=postgresql://localhost/thoughts cargo run -p thoughts-api
//! ```

use thoughts_api::{
    app::{build_router, AppState},
    config::Config,
};
use thoughts_shared::{
    db::{
        migrations::{ensure_database_exists, run_migrations},
        pool::{close_pool, create_pool},
    },
    seed::seed_demo_thoughts,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "thoughts_api=debug,thoughts_shared=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Happy Thoughts API v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;
    let bind_address = config.bind_address();
    let seed = config.seed.enabled;

    let (state, pool) = match config.pool_config() {
        Some(pool_config) => {
            ensure_database_exists(&pool_config.url).await?;
            let pool = create_pool(pool_config).await?;
            run_migrations(&pool).await?;
            tracing::info!("Database ready");
            (AppState::new(pool.clone(), config), Some(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using the in-memory store");
            (AppState::in_memory(config), None)
        }
    };

    if seed {
        let inserted = seed_demo_thoughts(state.thoughts.store().as_ref())
            .await
            .map_err(|e| anyhow::anyhow!("Seeding failed: {}", e))?;
        tracing::info!(inserted, "Demo thoughts seeded");
    }

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Server listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    if let Some(pool) = pool {
        tracing::info!("Closing database pool");
        close_pool(pool).await;
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received, exiting...");
}
