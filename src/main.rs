use anyhow::Context;

use condense::core::config::AppConfig;
use condense::{nlp, shell};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    condense::setup_logging();

    let config = AppConfig::from_env().map_err(anyhow::Error::msg)?;

    // One-time, idempotent language-data setup; kept off the request path
    nlp::resources::ensure_language_data(&config.data_dir)
        .context("preparing language data")?;
    nlp::init(&config.data_dir);

    shell::run(&config).await
}
