//! Rendering for the form loop. Pure output, no state.

use console::style;

use crate::stats::SummaryStats;
use crate::summarize::Strategy;

/// Longest extracted-text preview before eliding.
const PREVIEW_CHARS: usize = 1200;

pub fn banner() {
    println!();
    println!("{}", style("Article Summarization Tool").bold());
    println!("Summarize lengthy articles with extractive or abstractive methods.");
    println!("Paste text directly or provide a URL.");
    println!();
}

/// Show the text extracted from a fetched URL.
pub fn extracted_preview(text: &str) {
    println!();
    println!("{}", style("Extracted Text:").bold());
    let shown: String = text.chars().take(PREVIEW_CHARS).collect();
    println!("{shown}");
    let hidden = text.chars().count().saturating_sub(PREVIEW_CHARS);
    if hidden > 0 {
        println!("{}", style(format!("... ({hidden} more characters)")).dim());
    }
    println!();
}

pub fn summary(strategy: Strategy, text: &str) {
    let heading = if strategy.is_extractive() {
        "Extractive Summary"
    } else {
        "Abstractive Summary"
    };
    println!();
    println!("{}", style(heading).bold().underlined());
    println!("{text}");
    println!();
}

pub fn stats(stats: &SummaryStats) {
    println!("{}", style("Summary Statistics").green().bold());
    println!("  Original: {} words", stats.original_words);
    println!("  Summary: {} words", stats.summary_words);
    println!("  Reduced by: {:.1}%", stats.reduction_pct);
    println!("  Time taken: {:.2}s", stats.elapsed.as_secs_f64());
    println!();
}

pub fn error(message: &str) {
    println!("{}", style(format!("Error: {message}")).red());
}
