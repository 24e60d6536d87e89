use league_api::{config::Config, db, seed};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env().expect("Invalid configuration");

    let pool = db::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    db::migrate(&pool)
        .await
        .expect("Failed to run database migrations");

    if let Err(e) = seed::run(&pool).await {
        tracing::error!("Seeding failed: {}", e);
        pool.close().await;
        std::process::exit(1);
    }

    pool.close().await;
    tracing::info!("Seeding finished.");
}
