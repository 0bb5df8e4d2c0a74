use tracing_subscriber::EnvFilter;
use users_api::config::{self, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    init_tracing(&config);
    config.print_summary();

    users_api::server::run(config).await
}

/// Initializes the tracing subscriber in text or JSON format per config.
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
