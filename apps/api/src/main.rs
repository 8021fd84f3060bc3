use tracing_subscriber::EnvFilter;

use football_api::api::{self, AppState};
use football_api::config::AppConfig;
use football_api::infrastructure::database;
use football_api::infrastructure::repositories::{
    SqliteMarketRepository, SqlitePlayerRepository, SqliteTeamRepository,
};
use football_api::infrastructure::seed;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("football_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env();

    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = database::connect(&config.database_url, config.max_connections)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Database connected successfully");

    if config.seed_database {
        let players = SqlitePlayerRepository::new(pool.clone());
        let teams = SqliteTeamRepository::new(pool.clone());
        let market = SqliteMarketRepository::new(pool.clone());
        seed::seed_database(&players, &teams, &market)
            .await
            .expect("Failed to seed database");
    }

    let app = api::router(AppState::sqlite(pool));

    // Start server
    tracing::info!("Server listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
