//! Session state for the form loop.
//!
//! Every user action produces an [`Event`]; [`Session::apply`] is the single
//! transition function. The render loop owns no state of its own, which keeps
//! the transitions testable without a terminal.

/// Where the current input text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Pasted,
    Fetched { url: String },
}

/// The four states of the interaction shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    AwaitingInput,
    InputProvided,
    SummaryDisplayed,
    ErrorDisplayed,
}

/// One user-visible outcome of an interaction.
#[derive(Debug, Clone)]
pub enum Event {
    /// Text was pasted or a fetch succeeded.
    InputAccepted { text: String, source: InputSource },
    /// The user started over.
    InputCleared,
    /// A URL fetch failed.
    FetchFailed(String),
    /// The chosen summarizer produced a summary.
    GenerateSucceeded,
    /// The chosen summarizer failed.
    GenerateFailed(String),
}

/// Session-scoped input state. Discarded when the process exits.
#[derive(Debug, Clone)]
pub struct Session {
    pub state: ShellState,
    pub text: String,
    pub source: Option<InputSource>,
    pub last_error: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: ShellState::AwaitingInput,
            text: String::new(),
            source: None,
            last_error: None,
        }
    }

    /// Whether generation can be offered: input must be non-empty.
    pub fn can_generate(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Apply one event to the session.
    pub fn apply(&mut self, event: Event) {
        match event {
            Event::InputAccepted { text, source } => {
                if text.trim().is_empty() {
                    // Empty input never leaves AwaitingInput
                    self.text.clear();
                    self.source = None;
                    self.state = ShellState::AwaitingInput;
                } else {
                    self.text = text;
                    self.source = Some(source);
                    self.last_error = None;
                    self.state = ShellState::InputProvided;
                }
            }
            Event::InputCleared => {
                self.text.clear();
                self.source = None;
                self.last_error = None;
                self.state = ShellState::AwaitingInput;
            }
            Event::FetchFailed(message) => {
                self.last_error = Some(message);
                self.state = ShellState::ErrorDisplayed;
            }
            Event::GenerateSucceeded => {
                self.last_error = None;
                self.state = ShellState::SummaryDisplayed;
            }
            Event::GenerateFailed(message) => {
                self.last_error = Some(message);
                self.state = ShellState::ErrorDisplayed;
            }
        }
    }
}
