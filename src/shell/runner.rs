//! The interactive loop: prompt, dispatch, render, repeat.

use std::time::{Duration, Instant};

use anyhow::Result;
use console::style;
use dialoguer::{Editor, Input, Select, theme::ColorfulTheme};
use indicatif::ProgressBar;

use crate::core::config::AppConfig;
use crate::core::models::SummaryRequest;
use crate::fetch;
use crate::shell::render;
use crate::shell::state::{Event, InputSource, Session, ShellState};
use crate::stats::SummaryStats;
use crate::summarize::{self, Strategy, SummaryParams};

const DEFAULT_LENGTH: u8 = 5;

/// Run the form loop until the user quits.
pub async fn run(config: &AppConfig) -> Result<()> {
    let theme = ColorfulTheme::default();
    let mut session = Session::new();

    render::banner();

    loop {
        let keep_going = match session.state {
            ShellState::AwaitingInput => prompt_input(&theme, &mut session).await?,
            _ => prompt_action(&theme, config, &mut session).await?,
        };
        if !keep_going {
            return Ok(());
        }
    }
}

/// Collect input text; returns false when the user quits.
async fn prompt_input(theme: &ColorfulTheme, session: &mut Session) -> Result<bool> {
    let items = ["Text", "URL", "Quit"];
    let choice = Select::with_theme(theme)
        .with_prompt("Input method")
        .items(&items)
        .default(0)
        .interact()?;

    match choice {
        0 => {
            // The editor is the closest terminal analog of a paste box; fall
            // back to a single-line prompt when no editor is available.
            let pasted = match Editor::new().edit("") {
                Ok(contents) => contents.unwrap_or_default(),
                Err(_) => Input::with_theme(theme)
                    .with_prompt("Paste your article text here")
                    .allow_empty(true)
                    .interact_text()?,
            };
            if pasted.trim().is_empty() {
                println!("{}", style("No text provided.").yellow());
                session.apply(Event::InputCleared);
            } else {
                session.apply(Event::InputAccepted {
                    text: pasted.trim().to_string(),
                    source: InputSource::Pasted,
                });
            }
        }
        1 => {
            let url: String = Input::with_theme(theme)
                .with_prompt("Enter article URL")
                .interact_text()?;

            let spinner = busy("Fetching article...");
            let fetched = fetch::fetch_article(&url).await;
            spinner.finish_and_clear();

            match fetched {
                Ok(text) => {
                    render::extracted_preview(&text);
                    session.apply(Event::InputAccepted {
                        text,
                        source: InputSource::Fetched { url },
                    });
                }
                Err(err) => {
                    render::error(&err.to_string());
                    session.apply(Event::FetchFailed(err.to_string()));
                }
            }
        }
        _ => return Ok(false),
    }

    Ok(true)
}

/// Offer the next action on existing input; returns false when the user quits.
async fn prompt_action(
    theme: &ColorfulTheme,
    config: &AppConfig,
    session: &mut Session,
) -> Result<bool> {
    let mut items: Vec<&str> = Vec::new();
    if session.can_generate() {
        items.push("Generate Summary");
    }
    items.push("New input");
    items.push("Quit");

    let choice = Select::with_theme(theme)
        .with_prompt("Next")
        .items(&items)
        .default(0)
        .interact()?;

    match items[choice] {
        "Generate Summary" => {
            generate(theme, config, session).await?;
            Ok(true)
        }
        "New input" => {
            session.apply(Event::InputCleared);
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Ask for strategy and length, then run the chosen summarizer.
async fn generate(
    theme: &ColorfulTheme,
    config: &AppConfig,
    session: &mut Session,
) -> Result<()> {
    let labels: Vec<&str> = Strategy::ALL.iter().map(|s| s.label()).collect();
    let strategy_idx = Select::with_theme(theme)
        .with_prompt("Summary type")
        .items(&labels)
        .default(0)
        .interact()?;
    let strategy = Strategy::ALL[strategy_idx];

    let length: u8 = Input::with_theme(theme)
        .with_prompt("Summary length (1-10)")
        .default(DEFAULT_LENGTH)
        .validate_with(|value: &u8| {
            if (1..=10).contains(value) {
                Ok(())
            } else {
                Err("length must be between 1 and 10")
            }
        })
        .interact_text()?;

    let request = SummaryRequest::new(session.text.clone(), strategy, length);
    let params = SummaryParams::from_length(request.length);

    let spinner = busy("Generating summary...");
    let started = Instant::now();
    let outcome = summarize::generate(config, request.strategy, &request.text, &params).await;
    spinner.finish_and_clear();

    match outcome {
        Ok(summary) => {
            let stats = SummaryStats::compute(&request.text, &summary, started.elapsed());
            render::summary(request.strategy, &summary);
            render::stats(&stats);
            session.apply(Event::GenerateSucceeded);
        }
        Err(err) => {
            render::error(&err.to_string());
            session.apply(Event::GenerateFailed(err.to_string()));
        }
    }

    Ok(())
}

fn busy(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
