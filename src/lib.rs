//! Gemini Transcriber - a terminal app for transcribing audio and video
//!
//! This library provides the pieces behind the `transcriber` binary: a
//! settings model, a prompt compiler, a Gemini-backed transcription client,
//! and the screen state machine driving the interactive session.

pub mod cli;
pub mod config;
pub mod flow;
pub mod media;
pub mod prompt;
pub mod screens;
pub mod settings;
pub mod transcribe;
pub mod utils;

pub use cli::{Cli, Commands};
pub use config::Config;
pub use flow::{ScreenState, SessionController, TranscriptionOutcome, TranscriptionSource};
pub use settings::Settings;
pub use transcribe::{GeminiTranscriber, TranscriptionService};

/// Result type used throughout the library
pub type Result<T> = anyhow::Result<T>;
