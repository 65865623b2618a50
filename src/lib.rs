/// condense - an interactive article summarization tool for the terminal.
///
/// The crate wires three capabilities behind a small form loop:
/// 1. A text acquirer that fetches a URL and isolates the article body
/// 2. Four extractive strategies that rank and select sentences
/// 3. An abstractive summarizer backed by a hosted chat model
///
/// # Architecture
///
/// The system uses:
/// - reqwest + scraper/html2text for article fetching and isolation
/// - an OpenAI-compatible chat endpoint for abstractive summaries
/// - dialoguer/console/indicatif for the interactive form
/// - Tokio for the async runtime
///
/// # Example
///
/// ```no_run
/// use condense::core::config::AppConfig;
/// use condense::summarize::{self, Strategy, SummaryParams};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     condense::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let text = condense::fetch::fetch_article("https://example.com/story").await?;
///
///     let params = SummaryParams::from_length(5);
///     let summary = summarize::generate(&config, Strategy::TextRank, &text, &params).await?;
///     println!("{summary}");
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod core;
pub mod errors;
pub mod fetch;
pub mod nlp;
pub mod shell;
pub mod stats;
pub mod summarize;

/// Configure structured logging for the terminal application.
///
/// Sets up tracing-subscriber writing to stderr so log lines never interleave
/// with the rendered form. The filter honors `RUST_LOG` and defaults to `warn`.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
