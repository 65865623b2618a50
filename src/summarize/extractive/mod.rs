//! Extractive summarization: score sentences, keep the best, preserve order.
//!
//! Each method produces one salience score per sentence; selection is shared.
//! Scoring operates on stopword-filtered lowercase terms so that function
//! words never dominate the ranking.

mod lexrank;
mod lsa;
mod luhn;
mod pagerank;
mod textrank;

use async_trait::async_trait;

use crate::errors::SummarizeError;
use crate::nlp;
use crate::summarize::{Summarizer, SummaryParams};

/// The four extractive ranking methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractiveMethod {
    Lsa,
    LexRank,
    Luhn,
    TextRank,
}

impl ExtractiveMethod {
    /// Resolve a method tag ("lsa", "lexrank", "luhn", "textrank").
    ///
    /// Anything else fails; there is deliberately no default.
    pub fn from_tag(tag: &str) -> Result<Self, SummarizeError> {
        match tag.to_lowercase().as_str() {
            "lsa" => Ok(ExtractiveMethod::Lsa),
            "lex" | "lexrank" => Ok(ExtractiveMethod::LexRank),
            "luhn" => Ok(ExtractiveMethod::Luhn),
            "textrank" => Ok(ExtractiveMethod::TextRank),
            other => Err(SummarizeError::UnknownStrategy(other.to_string())),
        }
    }
}

/// A sentence prepared for scoring.
#[derive(Debug, Clone)]
pub(crate) struct SentenceUnit {
    /// Position in the original document.
    pub index: usize,
    /// Original sentence text.
    pub text: String,
    /// Lowercased, stopword-filtered word tokens.
    pub terms: Vec<String>,
}

/// Summarize `text` down to at most `count` sentences.
pub fn run(method: ExtractiveMethod, text: &str, count: usize) -> Result<String, SummarizeError> {
    let units = prepare(text)?;

    let scores = match method {
        ExtractiveMethod::Lsa => lsa::score(&units),
        ExtractiveMethod::LexRank => lexrank::score(&units),
        ExtractiveMethod::Luhn => luhn::score(&units),
        ExtractiveMethod::TextRank => textrank::score(&units),
    };

    Ok(select_top(&units, &scores, count))
}

/// Tokenize into sentences and scoring terms.
fn prepare(text: &str) -> Result<Vec<SentenceUnit>, SummarizeError> {
    let sentences = nlp::tokenizer().tokenize(text);
    if sentences.is_empty() {
        return Err(SummarizeError::TooShort);
    }

    let stopwords = nlp::stopwords();
    let units = sentences
        .into_iter()
        .enumerate()
        .map(|(index, text)| {
            let terms = nlp::tokenizer::words(&text)
                .into_iter()
                .map(|w| w.to_lowercase())
                .filter(|w| !stopwords.is_stopword(w))
                .collect();
            SentenceUnit { index, text, terms }
        })
        .collect();

    Ok(units)
}

/// Keep the `count` best-scoring sentences, re-emitted in document order.
///
/// Ties break toward the earlier sentence, which keeps the output stable
/// across runs.
fn select_top(units: &[SentenceUnit], scores: &[f64], count: usize) -> String {
    if count >= units.len() {
        return units
            .iter()
            .map(|u| u.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
    }

    let mut ranked: Vec<usize> = (0..units.len()).collect();
    ranked.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.cmp(&b))
    });

    let mut chosen: Vec<usize> = ranked[..count].to_vec();
    chosen.sort_unstable();

    chosen
        .iter()
        .map(|&i| units[i].text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// [`Summarizer`] implementation for the extractive methods.
#[derive(Debug, Clone, Copy)]
pub struct ExtractiveSummarizer {
    method: ExtractiveMethod,
}

impl ExtractiveSummarizer {
    pub fn new(method: ExtractiveMethod) -> Self {
        Self { method }
    }
}

#[async_trait]
impl Summarizer for ExtractiveSummarizer {
    async fn summarize(
        &self,
        text: &str,
        params: &SummaryParams,
    ) -> Result<String, SummarizeError> {
        run(self.method, text, params.sentence_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "Rust is a systems programming language. It has no garbage collector. \
        Memory safety comes from the borrow checker. Many companies now ship Rust in production. \
        The compiler can be strict about ownership.";

    #[test]
    fn selection_preserves_document_order() {
        let summary = run(ExtractiveMethod::TextRank, TEXT, 2).expect("summary");
        let first = summary.split(". ").next().expect("first sentence");
        assert!(TEXT.find(first).is_some());
        // Exactly two sentence terminators
        assert_eq!(summary.matches('.').count(), 2);
    }

    #[test]
    fn requesting_more_sentences_than_available_returns_everything() {
        let summary = run(ExtractiveMethod::Luhn, TEXT, 50).expect("summary");
        assert_eq!(summary.matches('.').count(), 5);
    }
}
