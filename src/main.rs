use dmrelay::{bot, config::Config, error::AppError, http};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    init_tracing();

    // Configuration errors are fatal: log and exit rather than limping along
    // without a token or a relay channel.
    if let Err(e) = run().await {
        tracing::error!("Fatal error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    tracing::info!("Starting DM relay bot");

    // Start the Discord bot in a separate task. A bot failure is logged but
    // does not take down the liveness endpoint, so uptime monitoring keeps
    // reporting while the gateway reconnects or a human intervenes.
    let bot_config = config.clone();
    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(&bot_config).await {
            tracing::error!("Discord bot error: {e}");
        }
    });

    http::serve(config.port).await
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
    );

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
