use linkhub::config::Config;
use linkhub::resolvers::WritePolicy;
use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tower_sessions_sqlx_store::SqliteStore;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.basic.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.basic.database_url,
        listen_addr = %cfg.basic.listen_addr,
        environment = ?cfg.basic.environment,
        cors_origin = %cfg.cors.allowed_origin,
        posts_require_auth = cfg.posts.require_auth,
    );

    let pool = linkhub::db::connect(&cfg.basic.database_url).await?;
    linkhub::db::init_schema(&pool).await?;

    // Sessions live in the same database as the application tables.
    let session_store = SqliteStore::new(pool.clone());
    session_store.migrate().await?;

    let schema = linkhub::build_schema(pool, WritePolicy::from(&cfg));
    let state = linkhub::router::HubState::new(schema);
    let app = linkhub::router::hub_router(state, session_store, &cfg)?;

    let listener = TcpListener::bind(&cfg.basic.listen_addr).await?;
    info!("HTTP server listening on {}", cfg.basic.listen_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
