use std::io::Write;
use std::sync::Arc;

use anyhow::Context;
use portfolio_frontend::{
    graceful_shutdown::shutdown_signal,
    repositories::{http_api::HttpPortfolioApi, preferences::FilePreferenceStore},
    settings::AppConfig,
    web::document::HeadlessDocument,
    PortfolioApp,
};
use tracing_subscriber::EnvFilter;

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = match AppConfig::new() {
        Ok(cfg) => {
            init_tracing(cfg.is_production());
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        }
        Err(e) => {
            init_tracing(false);
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let api = Arc::new(HttpPortfolioApi::new(&config).context("failed to build API client")?);
    let store = Arc::new(
        FilePreferenceStore::open(&config.preferences_path).context("failed to open preference file")?,
    );

    tracing::info!(
        "🚀 Rendering {} v{} against {}",
        config.name,
        env!("CARGO_PKG_VERSION"),
        api.base_url()
    );

    let app = PortfolioApp::new(config, api, store, Arc::new(HeadlessDocument::new()));

    let interrupted = tokio::select! {
        _ = app.mount() => false,
        _ = shutdown_signal() => true,
    };
    if interrupted {
        tracing::warn!("Some resources had not settled; they render as loading");
    }

    let html = app.render_html();
    app.unmount();

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", html).context("failed to write page")?;

    Ok(())
}
