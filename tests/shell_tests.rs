use condense::shell::state::{Event, InputSource, Session, ShellState};

fn accepted(text: &str) -> Event {
    Event::InputAccepted {
        text: text.to_string(),
        source: InputSource::Pasted,
    }
}

#[test]
fn test_new_session_awaits_input() {
    let session = Session::new();
    assert_eq!(session.state, ShellState::AwaitingInput);
    assert!(!session.can_generate());
}

#[test]
fn test_pasted_text_moves_to_input_provided() {
    let mut session = Session::new();
    session.apply(accepted("Some article text."));
    assert_eq!(session.state, ShellState::InputProvided);
    assert!(session.can_generate());
}

#[test]
fn test_empty_input_stays_awaiting() {
    let mut session = Session::new();
    session.apply(accepted("   "));
    assert_eq!(session.state, ShellState::AwaitingInput);
    assert!(!session.can_generate());
}

#[test]
fn test_fetch_failure_shows_error_without_enabling_generation() {
    let mut session = Session::new();
    session.apply(Event::FetchFailed("Invalid URL: not a url".to_string()));
    assert_eq!(session.state, ShellState::ErrorDisplayed);
    assert!(session.last_error.as_deref().unwrap().contains("Invalid URL"));
    // No text was acquired, so no summarizer can be invoked
    assert!(!session.can_generate());
}

#[test]
fn test_successful_generation_displays_summary() {
    let mut session = Session::new();
    session.apply(accepted("Some article text."));
    session.apply(Event::GenerateSucceeded);
    assert_eq!(session.state, ShellState::SummaryDisplayed);
    assert!(session.last_error.is_none());
}

#[test]
fn test_failed_generation_displays_error_and_keeps_input() {
    let mut session = Session::new();
    session.apply(accepted("Some article text."));
    session.apply(Event::GenerateFailed("Model request failed".to_string()));
    assert_eq!(session.state, ShellState::ErrorDisplayed);
    assert!(session.can_generate());
}

#[test]
fn test_new_input_after_summary_returns_to_input_provided() {
    let mut session = Session::new();
    session.apply(accepted("First article."));
    session.apply(Event::GenerateSucceeded);
    session.apply(accepted("Second article."));
    assert_eq!(session.state, ShellState::InputProvided);
    assert_eq!(session.text, "Second article.");
}

#[test]
fn test_new_input_after_error_returns_to_input_provided() {
    let mut session = Session::new();
    session.apply(accepted("First article."));
    session.apply(Event::GenerateFailed("boom".to_string()));
    session.apply(accepted("Second article."));
    assert_eq!(session.state, ShellState::InputProvided);
    assert!(session.last_error.is_none());
}

#[test]
fn test_clearing_input_resets_the_session() {
    let mut session = Session::new();
    session.apply(accepted("Some article text."));
    session.apply(Event::InputCleared);
    assert_eq!(session.state, ShellState::AwaitingInput);
    assert!(session.text.is_empty());
    assert!(session.source.is_none());
}
