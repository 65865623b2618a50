use regex::Regex;
use rustc_hash::FxHashSet;

/// Abbreviations whose trailing period does not end a sentence.
///
/// This is the embedded copy of the abbreviation bundle; the on-disk copy
/// written by `resources::ensure_language_data` takes precedence when present.
pub const DEFAULT_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "rev", "gen", "rep", "sen", "gov", "capt", "sgt", "col",
    "st", "sr", "jr", "vs", "etc", "e.g", "i.e", "cf", "inc", "ltd", "co", "corp", "dept",
    "fig", "no", "vol", "pp", "approx", "est", "min", "max", "jan", "feb", "mar", "apr", "jun",
    "jul", "aug", "sep", "sept", "oct", "nov", "dec", "u.s", "u.k",
];

/// Splits plain text into sentences.
///
/// The splitter treats `.`, `!` and `?` as candidate boundaries and confirms
/// them by context: the next non-space character must plausibly start a
/// sentence, and a bare period after a known abbreviation, a single-letter
/// initial, or inside a number never splits.
#[derive(Debug, Clone)]
pub struct SentenceTokenizer {
    abbreviations: FxHashSet<String>,
}

impl Default for SentenceTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceTokenizer {
    /// Tokenizer with the embedded abbreviation list.
    pub fn new() -> Self {
        Self::with_abbreviations(DEFAULT_ABBREVIATIONS.iter().map(|s| s.to_string()))
    }

    /// Tokenizer with a custom abbreviation list (lowercased on insert).
    pub fn with_abbreviations<I>(abbreviations: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            abbreviations: abbreviations
                .into_iter()
                .map(|a| a.to_lowercase())
                .collect(),
        }
    }

    /// Split `text` into sentences, preserving their original text.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences = Vec::new();
        let mut start = 0usize;
        let mut i = 0usize;

        while i < chars.len() {
            let (pos, c) = chars[i];
            if !matches!(c, '.' | '!' | '?') {
                i += 1;
                continue;
            }

            // Consume a run of terminators and closing punctuation ("?!", ".'")
            let mut end = i;
            while end + 1 < chars.len()
                && matches!(chars[end + 1].1, '.' | '!' | '?' | '"' | '\'' | ')' | ']' | '\u{201d}')
            {
                end += 1;
            }

            let splits = if c == '.' && end == i {
                !self.is_abbreviation_context(text, pos) && next_starts_sentence(&chars, end)
            } else {
                next_starts_sentence(&chars, end)
            };

            if !splits {
                i = end + 1;
                continue;
            }

            let sentence_end = chars[end].0 + chars[end].1.len_utf8();
            let sentence = text[start..sentence_end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }

            i = end + 1;
            while i < chars.len() && chars[i].1.is_whitespace() {
                i += 1;
            }
            start = if i < chars.len() { chars[i].0 } else { text.len() };
        }

        let tail = text[start..].trim();
        if !tail.is_empty() {
            sentences.push(tail.to_string());
        }

        sentences
    }

    /// True when the period at `dot_pos` follows an abbreviation or initial.
    fn is_abbreviation_context(&self, text: &str, dot_pos: usize) -> bool {
        let word = text[..dot_pos]
            .rsplit(|ch: char| ch.is_whitespace())
            .next()
            .unwrap_or("")
            .trim_matches(|ch: char| !ch.is_alphanumeric() && ch != '.');
        let word = word.trim_matches('.');
        if word.is_empty() {
            return false;
        }
        if word.chars().count() == 1 && word.chars().all(char::is_alphabetic) {
            return true;
        }
        self.abbreviations.contains(&word.to_lowercase())
    }
}

/// Whether the text after the terminator run at `end` plausibly starts a
/// new sentence (or the text ends there).
fn next_starts_sentence(chars: &[(usize, char)], end: usize) -> bool {
    let mut j = end + 1;
    if j >= chars.len() {
        return true;
    }
    if !chars[j].1.is_whitespace() {
        // "3.14", "example.com"
        return false;
    }
    while j < chars.len() && chars[j].1.is_whitespace() {
        j += 1;
    }
    if j >= chars.len() {
        return true;
    }
    let c = chars[j].1;
    c.is_uppercase() || c.is_ascii_digit() || matches!(c, '"' | '\'' | '(' | '\u{201c}' | '\u{2018}')
}

/// Tokenize `text` into word tokens (used for counting and scoring).
pub fn words(text: &str) -> Vec<String> {
    static WORD_RE: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
        Regex::new(r"[\p{Alphabetic}\p{N}]+(?:['\u{2019}-][\p{Alphabetic}\p{N}]+)*")
            .unwrap_or_else(|_| {
                // Extremely defensive: in practice this cannot fail.
                Regex::new(r"$^").expect("fallback regex compiles")
            })
    });

    WORD_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_plain_sentences() {
        let t = SentenceTokenizer::new();
        let out = t.tokenize("The sky is blue. The grass is green. Water is wet.");
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], "The sky is blue.");
        assert_eq!(out[2], "Water is wet.");
    }

    #[test]
    fn abbreviations_and_decimals_do_not_split() {
        let t = SentenceTokenizer::new();
        let out = t.tokenize("Dr. Smith measured 3.14 meters. He wrote it down.");
        assert_eq!(out.len(), 2);
        assert!(out[0].starts_with("Dr. Smith"));
    }

    #[test]
    fn words_ignore_punctuation() {
        let out = words("Hello, world! It's 2024.");
        assert_eq!(out, vec!["Hello", "world", "It's", "2024"]);
    }
}
