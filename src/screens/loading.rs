//! Loading screen: cosmetic progress while the transcription call runs.
//!
//! Progress and message are pure functions of elapsed time, independent of
//! real progress, so they stay testable without a clock.

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::time::{Duration, Instant};

/// Status phrases, cycled on a fixed timer
pub const LOADING_MESSAGES: &[&str] = &[
    "Warming up the AI model...",
    "Analyzing audio patterns...",
    "Converting speech to text...",
    "Applying punctuation and formatting...",
    "Finalizing the transcript...",
    "Almost there, Gemini is thinking hard!",
];

/// How long each phrase stays up
const MESSAGE_PERIOD: Duration = Duration::from_millis(2500);

/// The bar ramps to this cap and then freezes until the call settles
const PROGRESS_CAP: u64 = 90;

/// Elapsed time over which the ramp reaches the cap
const RAMP_DURATION: Duration = Duration::from_secs(30);

/// Phrase shown after `elapsed` time on the loading screen
pub fn message_at(elapsed: Duration) -> &'static str {
    let index = (elapsed.as_millis() / MESSAGE_PERIOD.as_millis()) as usize;
    LOADING_MESSAGES[index % LOADING_MESSAGES.len()]
}

/// Progress percentage after `elapsed` time; linear ramp, capped below 100
pub fn progress_at(elapsed: Duration) -> u64 {
    let ramped = elapsed.as_secs_f64() / RAMP_DURATION.as_secs_f64() * PROGRESS_CAP as f64;
    (ramped as u64).min(PROGRESS_CAP)
}

/// Animate the loading screen until the transcription future settles.
/// There is no cancellation; the call always runs to completion.
pub async fn run<F>(source_name: &str, transcription: F) -> Result<()>
where
    F: Future<Output = Result<()>>,
{
    println!("\n{}", style("Transcribing").cyan().bold());
    if !source_name.is_empty() {
        println!("{source_name}");
    }

    let bar = ProgressBar::new(100);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}% {msg}")
            .unwrap(),
    );

    let start = Instant::now();
    let mut ticker = tokio::time::interval(Duration::from_millis(120));

    tokio::pin!(transcription);

    loop {
        tokio::select! {
            result = &mut transcription => {
                bar.finish_and_clear();
                return result;
            }
            _ = ticker.tick() => {
                let elapsed = start.elapsed();
                bar.set_position(progress_at(elapsed));
                bar.set_message(message_at(elapsed));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_cycle_in_order() {
        assert_eq!(message_at(Duration::ZERO), LOADING_MESSAGES[0]);
        assert_eq!(message_at(Duration::from_millis(2499)), LOADING_MESSAGES[0]);
        assert_eq!(message_at(Duration::from_millis(2500)), LOADING_MESSAGES[1]);
        assert_eq!(message_at(Duration::from_millis(12_500)), LOADING_MESSAGES[5]);
        // Wraps around after the last phrase
        assert_eq!(message_at(Duration::from_millis(15_000)), LOADING_MESSAGES[0]);
    }

    #[test]
    fn test_progress_ramps_and_caps() {
        assert_eq!(progress_at(Duration::ZERO), 0);
        assert_eq!(progress_at(Duration::from_secs(15)), 45);
        assert_eq!(progress_at(Duration::from_secs(30)), 90);
        // Never reaches 100 on its own
        assert_eq!(progress_at(Duration::from_secs(300)), 90);
    }

    #[tokio::test]
    async fn test_run_returns_future_outcome() {
        let result = run("File: a.mp3", async { Ok(()) }).await;
        assert!(result.is_ok());

        let result = run("", async { anyhow::bail!("call failed") }).await;
        assert!(result.is_err());
    }
}
