use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::settings::Settings;

#[derive(Parser)]
#[command(
    name = "transcriber",
    about = "Transcribe audio and video files or URLs with the Google Gemini API",
    version,
    long_about = "An interactive terminal app that sends audio/video media to the Google Gemini \
                  API and renders the returned transcript. Start it with no arguments for the \
                  interactive flow, or pass --file/--url to submit a source directly."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Transcribe this local media file (skips the input screen)
    #[arg(short, long, value_name = "FILE", conflicts_with = "url")]
    pub file: Option<PathBuf>,

    /// Transcribe media behind this URL (mocked; no media is fetched)
    #[arg(short, long, value_name = "URL")]
    pub url: Option<String>,

    /// Primary spoken language code (e.g. en-US)
    #[arg(short, long, value_name = "LANG")]
    pub language: Option<String>,

    /// Model identifier to request
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Custom words, names, or acronyms to transcribe verbatim
    #[arg(long, value_name = "WORDS")]
    pub vocabulary: Option<String>,

    /// Do not ask the model for punctuation
    #[arg(long)]
    pub no_punctuation: bool,

    /// Do not label speakers
    #[arg(long)]
    pub no_diarization: bool,

    /// Do not censor profanity
    #[arg(long)]
    pub no_profanity_filter: bool,

    /// Append a summary section after the transcript
    #[arg(long)]
    pub summarize: bool,

    /// Insert [HH:MM:SS] markers at meaningful boundaries
    #[arg(long)]
    pub timestamps: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the active configuration
    Config,

    /// List selectable models and languages
    Models,
}

impl Cli {
    /// Whether a source was supplied on the command line
    pub fn has_source(&self) -> bool {
        self.file.is_some() || self.url.is_some()
    }

    /// Fold command line overrides into the configured defaults
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(language) = &self.language {
            settings.language = language.clone();
        }
        if let Some(model) = &self.model {
            settings.model = model.clone();
        }
        if let Some(vocabulary) = &self.vocabulary {
            settings.custom_vocabulary = vocabulary.clone();
        }
        if self.no_punctuation {
            settings.enable_punctuation = false;
        }
        if self.no_diarization {
            settings.enable_diarization = false;
        }
        if self.no_profanity_filter {
            settings.filter_profanity = false;
        }
        if self.summarize {
            settings.enable_summarization = true;
        }
        if self.timestamps {
            settings.add_timestamps = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_file_and_url_conflict() {
        let result = Cli::try_parse_from(["transcriber", "-f", "a.mp3", "-u", "https://x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides_applied() {
        let cli = Cli::try_parse_from([
            "transcriber",
            "--language",
            "de-DE",
            "--no-punctuation",
            "--summarize",
            "--vocabulary",
            "Rust, Tokio",
        ])
        .unwrap();

        let mut settings = Settings::default();
        cli.apply_overrides(&mut settings);

        assert_eq!(settings.language, "de-DE");
        assert!(!settings.enable_punctuation);
        assert!(settings.enable_summarization);
        assert_eq!(settings.custom_vocabulary, "Rust, Tokio");
        // Untouched flags keep their defaults
        assert!(settings.enable_diarization);
        assert!(settings.filter_profanity);
    }

    #[test]
    fn test_has_source() {
        let cli = Cli::try_parse_from(["transcriber"]).unwrap();
        assert!(!cli.has_source());

        let cli = Cli::try_parse_from(["transcriber", "-u", "https://example.com/v"]).unwrap();
        assert!(cli.has_source());
    }
}
