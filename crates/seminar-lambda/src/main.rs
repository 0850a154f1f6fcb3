use tracing_subscriber::EnvFilter;

use seminar_lambda::config::AppConfig;
use seminar_lambda::router;
use seminar_lambda::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(
        max_upload_bytes = config.max_upload_bytes,
        "starting seminar feedback service"
    );

    let app = router(AppState::new(config));

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
