//! Summarization strategies behind a single seam.
//!
//! Four extractive strategies rank and select original sentences; the
//! abstractive strategy delegates to a hosted sequence-to-sequence model.
//! All of them implement [`Summarizer`], and [`generate`] dispatches on the
//! chosen [`Strategy`].

pub mod abstractive;
pub mod extractive;

use async_trait::async_trait;

use crate::core::config::AppConfig;
use crate::errors::SummarizeError;
use extractive::{ExtractiveMethod, ExtractiveSummarizer};

/// The five selectable summary types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Lsa,
    LexRank,
    Luhn,
    TextRank,
    Abstractive,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::Lsa,
        Strategy::LexRank,
        Strategy::Luhn,
        Strategy::TextRank,
        Strategy::Abstractive,
    ];

    /// Label shown in the form's summary-type selector.
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Lsa => "Extractive (LSA)",
            Strategy::LexRank => "Extractive (LexRank)",
            Strategy::Luhn => "Extractive (Luhn)",
            Strategy::TextRank => "Extractive (TextRank)",
            Strategy::Abstractive => "Abstractive",
        }
    }

    /// Resolve a strategy tag. Unrecognized tags are an error, never a default.
    pub fn from_tag(tag: &str) -> Result<Self, SummarizeError> {
        match tag.to_lowercase().as_str() {
            "lsa" => Ok(Strategy::Lsa),
            "lex" | "lexrank" => Ok(Strategy::LexRank),
            "luhn" => Ok(Strategy::Luhn),
            "textrank" => Ok(Strategy::TextRank),
            "abstractive" => Ok(Strategy::Abstractive),
            other => Err(SummarizeError::UnknownStrategy(other.to_string())),
        }
    }

    pub fn is_extractive(self) -> bool {
        self.extractive_method().is_some()
    }

    fn extractive_method(self) -> Option<ExtractiveMethod> {
        match self {
            Strategy::Lsa => Some(ExtractiveMethod::Lsa),
            Strategy::LexRank => Some(ExtractiveMethod::LexRank),
            Strategy::Luhn => Some(ExtractiveMethod::Luhn),
            Strategy::TextRank => Some(ExtractiveMethod::TextRank),
            Strategy::Abstractive => None,
        }
    }
}

/// Length parameters derived from the form's 1-10 length setting.
#[derive(Debug, Clone, Copy)]
pub struct SummaryParams {
    /// Target sentence count for extractive strategies.
    pub sentence_count: usize,
    /// Minimum output tokens for the abstractive model.
    pub min_tokens: usize,
    /// Maximum output tokens for the abstractive model.
    pub max_tokens: usize,
}

impl SummaryParams {
    /// Couple both summarizer families to the single length setting:
    /// N sentences for extraction, N x 30 output tokens for generation.
    pub fn from_length(length: u8) -> Self {
        Self {
            sentence_count: length as usize,
            min_tokens: 30,
            max_tokens: length as usize * 30,
        }
    }
}

/// The summarizer seam: text plus parameters in, summary text out.
#[async_trait]
pub trait Summarizer {
    async fn summarize(&self, text: &str, params: &SummaryParams)
    -> Result<String, SummarizeError>;
}

/// Run the chosen strategy over `text`.
pub async fn generate(
    config: &AppConfig,
    strategy: Strategy,
    text: &str,
    params: &SummaryParams,
) -> Result<String, SummarizeError> {
    if text.trim().is_empty() {
        return Err(SummarizeError::TooShort);
    }

    let sentence_picker;
    let summarizer: &dyn Summarizer = match strategy.extractive_method() {
        Some(method) => {
            sentence_picker = ExtractiveSummarizer::new(method);
            &sentence_picker
        }
        None => abstractive::model(config)?,
    };

    summarizer.summarize(text, params).await
}
