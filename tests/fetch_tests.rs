use condense::errors::FetchError;
use condense::fetch::{extract_text, normalize_url};

#[test]
fn test_malformed_url_is_rejected_before_any_request() {
    let result = normalize_url("not a url");
    assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
}

#[test]
fn test_non_http_scheme_is_rejected() {
    assert!(matches!(
        normalize_url("file:///etc/passwd"),
        Err(FetchError::InvalidUrl(_))
    ));
}

#[test]
fn test_valid_url_is_normalized() {
    let url = normalize_url("  https://example.com/story#section-2 ").expect("valid URL");
    assert_eq!(url.as_str(), "https://example.com/story");
}

#[test]
fn test_article_markup_extracts_body_text() {
    let html = r#"<!DOCTYPE html>
        <html><head><title>Quarterly Report</title></head>
        <body>
        <nav><a href="/">Home</a><a href="/news">News</a></nav>
        <article>
          <h1>Quarterly Report</h1>
          <p>Revenue climbed twelve percent over the previous quarter, driven by
          strong demand in the transit division and steady subscription growth.</p>
          <p>Operating costs held flat, and the company reaffirmed its guidance
          for the remainder of the fiscal year.</p>
        </article>
        <footer>Copyright 2024</footer>
        </body></html>"#;

    let text = extract_text(html).expect("extraction");
    assert!(text.contains("Revenue climbed twelve percent"));
    assert!(text.contains("reaffirmed its guidance"));
}

#[test]
fn test_empty_document_is_an_error() {
    assert!(matches!(extract_text(""), Err(FetchError::EmptyDocument)));
}
