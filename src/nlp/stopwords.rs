use rustc_hash::FxHashSet;
use stop_words::{LANGUAGE, get};

/// A filter for removing English stopwords before sentence scoring.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl StopwordFilter {
    /// Build the filter from the crate's English word list.
    pub fn new() -> Self {
        let stopwords = get(LANGUAGE::English)
            .iter()
            .map(|s| s.to_lowercase())
            .collect();
        Self { stopwords }
    }

    /// Build the filter from a custom word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stopwords = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        Self { stopwords }
    }

    /// Check if a word is a stopword. Matching is case-insensitive.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Number of stopwords in the filter.
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    /// Iterate over the words in the filter.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.stopwords.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_common_english_words() {
        let filter = StopwordFilter::new();
        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The"));
        assert!(!filter.is_stopword("photosynthesis"));
    }

    #[test]
    fn custom_lists_replace_the_default() {
        let filter = StopwordFilter::from_words(["foo", "Bar"]);
        assert_eq!(filter.len(), 2);
        assert!(filter.is_stopword("bar"));
        assert!(!filter.is_stopword("the"));
    }
}
