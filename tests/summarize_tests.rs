use std::env;

use condense::core::config::AppConfig;
use condense::errors::SummarizeError;
use condense::summarize::{self, Strategy, SummaryParams};

fn test_config() -> AppConfig {
    AppConfig {
        openai_api_key: None,
        openai_model: None,
        data_dir: env::temp_dir(),
    }
}

#[test]
fn test_strategy_tags_resolve_all_five_types() {
    assert_eq!(Strategy::from_tag("lsa").unwrap(), Strategy::Lsa);
    assert_eq!(Strategy::from_tag("lexrank").unwrap(), Strategy::LexRank);
    assert_eq!(Strategy::from_tag("luhn").unwrap(), Strategy::Luhn);
    assert_eq!(Strategy::from_tag("textrank").unwrap(), Strategy::TextRank);
    assert_eq!(
        Strategy::from_tag("Abstractive").unwrap(),
        Strategy::Abstractive
    );
    assert!(matches!(
        Strategy::from_tag("frequency"),
        Err(SummarizeError::UnknownStrategy(_))
    ));
}

#[test]
fn test_strategy_labels_match_the_form_options() {
    let labels: Vec<&str> = Strategy::ALL.iter().map(|s| s.label()).collect();
    assert_eq!(
        labels,
        vec![
            "Extractive (LSA)",
            "Extractive (LexRank)",
            "Extractive (Luhn)",
            "Extractive (TextRank)",
            "Abstractive",
        ]
    );
}

#[test]
fn test_length_setting_drives_both_summarizer_families() {
    let params = SummaryParams::from_length(5);
    assert_eq!(params.sentence_count, 5);
    assert_eq!(params.min_tokens, 30);
    assert_eq!(params.max_tokens, 150);

    let short = SummaryParams::from_length(1);
    assert_eq!(short.sentence_count, 1);
    assert_eq!(short.max_tokens, 30);
}

#[tokio::test]
async fn test_empty_input_is_rejected_before_any_strategy_runs() {
    let config = test_config();
    let params = SummaryParams::from_length(3);
    let result = summarize::generate(&config, Strategy::TextRank, "   ", &params).await;
    assert!(matches!(result, Err(SummarizeError::TooShort)));
}

#[tokio::test]
async fn test_abstractive_without_an_api_key_is_unavailable() {
    let config = test_config();
    let params = SummaryParams::from_length(3);
    let result = summarize::generate(
        &config,
        Strategy::Abstractive,
        "Some article text to summarize.",
        &params,
    )
    .await;
    match result {
        Err(SummarizeError::ModelUnavailable(message)) => {
            assert!(message.contains("OPENAI_API_KEY"));
        }
        other => panic!("expected ModelUnavailable, got {other:?}"),
    }
}
