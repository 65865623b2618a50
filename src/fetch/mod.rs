//! Text acquisition: fetch a URL and isolate the article body.
//!
//! One outbound GET per call, no retries, no caching. Article isolation picks
//! the densest content container by text mass with link-density penalties;
//! this is deliberately "good enough" and deterministic, not a full
//! readability engine. Pages with no usable container fall back to a plain
//! HTML-to-text conversion of the whole document.

use std::io::Cursor;
use std::time::Duration;

use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};
use url::Url;

use crate::errors::FetchError;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);
/// Render width for the html2text fallback.
const FALLBACK_WIDTH: usize = 80;
/// Containers with less text than this are never article candidates.
const MIN_CONTAINER_CHARS: usize = 40;

/// Parse and normalize a URL the user typed.
///
/// Only `http`/`https` are accepted; fragments are stripped. Anything that
/// fails to parse is rejected here, before any network I/O happens.
pub fn normalize_url(raw: &str) -> Result<Url, FetchError> {
    let raw = raw.trim();
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(FetchError::InvalidUrl(format!(
            "expected an http(s) URL, got \"{raw}\""
        )));
    }

    let mut url = Url::parse(raw)?;
    url.set_fragment(None);
    Ok(url)
}

/// Fetch `raw_url` and return the extracted plain-text article body.
pub async fn fetch_article(raw_url: &str) -> Result<String, FetchError> {
    let url = normalize_url(raw_url)?;

    info!("Fetching article from {url}");

    let client = Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()?;

    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let html = response.text().await?;
    extract_text(&html)
}

/// Isolate the readable body of `html` as plain text.
///
/// Exposed separately so extraction can be exercised without a network.
pub fn extract_text(html: &str) -> Result<String, FetchError> {
    if let Some(text) = article_text(html) {
        debug!("Content container extracted, {} chars", text.len());
        return Ok(text);
    }

    // No recognizable article container; render the whole document instead
    let text =
        html2text::from_read(Cursor::new(html.as_bytes()), FALLBACK_WIDTH).unwrap_or_default();
    let text = normalize_whitespace(&text);
    if text.is_empty() {
        return Err(FetchError::EmptyDocument);
    }

    debug!("Fell back to html2text, {} chars", text.len());
    Ok(text)
}

/// Pick the best content container: dense non-link text wins, with tag
/// bonuses for `article`/`main` and penalties for link-heavy blocks.
fn article_text(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let candidates = Selector::parse("article, main, section, div").ok()?;

    let mut best_score = 0i64;
    let mut best: Option<ElementRef> = None;

    for element in document.select(&candidates) {
        if is_boilerplate_container(&element) {
            continue;
        }
        let text_len = text_chars(&element);
        if text_len < MIN_CONTAINER_CHARS {
            continue;
        }

        let link_len = link_text_chars(&element);
        // Link text is usually navigation, tag clouds, or related-story boxes
        let mut score = text_len as i64 - 2 * link_len as i64;
        match element.value().name() {
            "article" => score += 500,
            "main" => score += 300,
            _ => {}
        }
        if link_len > text_len / 2 {
            score -= 500;
        }

        if score > best_score {
            best_score = score;
            best = Some(element);
        }
    }

    best.map(|element| normalize_whitespace(&element.text().collect::<Vec<_>>().join(" ")))
}

/// Structural UI words in class/id that disqualify a container outright.
fn is_boilerplate_container(element: &ElementRef) -> bool {
    let mut markers = String::new();
    if let Some(class) = element.value().attr("class") {
        markers.push_str(class);
        markers.push(' ');
    }
    if let Some(id) = element.value().attr("id") {
        markers.push_str(id);
    }
    let markers = markers.to_ascii_lowercase();
    if markers.is_empty() {
        return false;
    }

    [
        "nav", "navbar", "menu", "sidebar", "footer", "header", "banner", "cookie", "consent",
        "ads", "advert", "promo", "subscribe", "newsletter", "comment",
    ]
    .iter()
    .any(|marker| markers.contains(marker))
}

fn text_chars(element: &ElementRef) -> usize {
    element.text().map(|t| t.chars().count()).sum()
}

fn link_text_chars(element: &ElementRef) -> usize {
    let Ok(anchors) = Selector::parse("a") else {
        return 0;
    };
    element
        .select(&anchors)
        .map(|a| a.text().map(|t| t.chars().count()).sum::<usize>())
        .sum()
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments_are_stripped() {
        let url = normalize_url("https://example.com/story#comments").expect("valid");
        assert_eq!(url.as_str(), "https://example.com/story");
    }

    #[test]
    fn non_http_schemes_are_rejected() {
        assert!(matches!(
            normalize_url("ftp://example.com/file"),
            Err(FetchError::InvalidUrl(_))
        ));
    }

    #[test]
    fn boilerplate_containers_are_skipped() {
        let html = r#"<html><body>
            <div class="sidebar">Popular stories and many other links here today.</div>
            <div class="story-body">The committee voted to extend the program for two more
            years after a long public hearing about costs and benefits.</div>
        </body></html>"#;
        let text = extract_text(html).expect("extraction");
        assert!(text.contains("committee voted"));
        assert!(!text.contains("Popular stories"));
    }
}
