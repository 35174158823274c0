//! Result screen: transcript display, copy-to-clipboard, restart actions.

use anyhow::Result;
use console::{style, Term};
use std::time::Duration;

use crate::flow::TranscriptionOutcome;

/// Transient copy feedback reverts after this long
const COPY_FEEDBACK_DURATION: Duration = Duration::from_secs(2);

/// What the user decided on the result screen
#[derive(Debug, PartialEq, Eq)]
pub enum ResultAction {
    GoBack,
    TranscribeAgain,
    Quit,
}

/// Run the result screen until the user leaves it. "Go back" and
/// "transcribe again" are behaviorally identical here; both clear the
/// session.
pub async fn run(term: &Term, outcome: &TranscriptionOutcome) -> Result<ResultAction> {
    let mut feedback: Option<String> = None;

    loop {
        term.clear_screen()?;
        render(outcome);

        if let Some(message) = feedback.take() {
            println!("\n{message}");
            tokio::time::sleep(COPY_FEEDBACK_DURATION).await;
            continue;
        }

        println!("\n[c] copy  [b] go back  [t] transcribe again  [q] quit");

        let command = term.read_line()?;
        match command.trim().to_lowercase().as_str() {
            "c" => {
                feedback = Some(match copy_to_clipboard(&outcome.transcript) {
                    Ok(()) => style("Copied!").green().to_string(),
                    Err(err) => {
                        tracing::warn!(error = %format!("{err:#}"), "Clipboard write failed");
                        style("Failed!").red().to_string()
                    }
                });
            }
            "b" => return Ok(ResultAction::GoBack),
            "t" => return Ok(ResultAction::TranscribeAgain),
            "q" => return Ok(ResultAction::Quit),
            _ => {}
        }
    }
}

fn render(outcome: &TranscriptionOutcome) {
    let title = if outcome.is_success() {
        style(&outcome.title).green().bold()
    } else {
        style(&outcome.title).red().bold()
    };
    println!("{title}\n");
    println!("{}", outcome.transcript);
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
