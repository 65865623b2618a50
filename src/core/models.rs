use crate::summarize::Strategy;

/// One summarization request, formed when the user triggers generation.
///
/// Requests are ephemeral: built from the current form state, consumed by the
/// chosen summarizer, and dropped after the render cycle.
#[derive(Debug, Clone)]
pub struct SummaryRequest {
    pub text: String,
    pub strategy: Strategy,
    pub length: u8,
}

impl SummaryRequest {
    pub fn new(text: String, strategy: Strategy, length: u8) -> Self {
        Self {
            text,
            strategy,
            length,
        }
    }
}
