use tvshow_web::{routes, AppState, Config};

#[tokio::main]
async fn main() {
    // Load .env from the working directory when present.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Ping once before binding the listener; an unreachable database is a
    // startup failure, not a half-started server.
    let pool = db::pool(&config.db);
    if let Err(e) = db::ping(&pool).await {
        tracing::error!(
            "cannot ping database at {}:{}: {}",
            config.db.host,
            config.db.port,
            e
        );
        std::process::exit(1);
    }
    tracing::info!("database: connected");

    let app = routes::router(AppState { db: pool });

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
