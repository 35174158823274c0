//! Session state machine: Main → Loading → Result → Main.
//!
//! The controller owns the in-flight source, the active settings, and the
//! last outcome. Screens never transition the session themselves.

use anyhow::Result;
use std::path::PathBuf;

use crate::settings::Settings;
use crate::transcribe::{TranscriptionService, FAILURE_MARKER};
use crate::utils::truncate_for_display;

/// Which screen is active. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    Main,
    Loading,
    Result,
}

/// The media to transcribe: a local file or a URL, never both
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptionSource {
    File { path: PathBuf, size: u64 },
    Url(String),
}

impl TranscriptionSource {
    /// Short name shown on the loading screen
    pub fn display_name(&self) -> String {
        match self {
            TranscriptionSource::File { path, .. } => {
                let name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                format!("File: {name}")
            }
            TranscriptionSource::Url(url) => {
                format!("From URL: {}", truncate_for_display(url, 60))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptionStatus {
    Success,
    Failure,
}

/// Normalized outcome of one transcription attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionOutcome {
    pub status: TranscriptionStatus,
    pub title: String,
    pub transcript: String,
}

impl TranscriptionOutcome {
    pub fn is_success(&self) -> bool {
        self.status == TranscriptionStatus::Success
    }

    /// Classify a transcript string by the failure marker
    fn from_transcript(transcript: String) -> Self {
        let is_failure = transcript.starts_with(FAILURE_MARKER);
        Self {
            status: if is_failure {
                TranscriptionStatus::Failure
            } else {
                TranscriptionStatus::Success
            },
            title: if is_failure {
                "Transcription Failed".to_string()
            } else {
                "Transcription Successful".to_string()
            },
            transcript,
        }
    }

    /// Outcome for an error that escaped the client's own classification
    fn from_unexpected_error(err: &anyhow::Error) -> Self {
        let message = format!("{err:#}");
        Self {
            status: TranscriptionStatus::Failure,
            title: "Transcription Failed".to_string(),
            transcript: if message.is_empty() {
                "An unknown error occurred.".to_string()
            } else {
                message
            },
        }
    }
}

/// Drives the three-screen session
pub struct SessionController {
    screen: ScreenState,
    settings: Settings,
    source: Option<TranscriptionSource>,
    result: Option<TranscriptionOutcome>,
    service: Box<dyn TranscriptionService>,
}

impl SessionController {
    pub fn new(service: Box<dyn TranscriptionService>, settings: Settings) -> Self {
        Self {
            screen: ScreenState::Main,
            settings,
            source: None,
            result: None,
            service,
        }
    }

    pub fn screen(&self) -> ScreenState {
        self.screen
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace the settings wholesale, as the input screen does on every change
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    pub fn source(&self) -> Option<&TranscriptionSource> {
        self.source.as_ref()
    }

    pub fn result(&self) -> Option<&TranscriptionOutcome> {
        self.result.as_ref()
    }

    /// Main → Loading. Records the source, clears any previous result.
    /// Synchronous; the call itself runs in [`Self::run_transcription`].
    pub fn submit(&mut self, source: TranscriptionSource) -> Result<()> {
        if self.screen != ScreenState::Main {
            anyhow::bail!("A transcription is already in progress");
        }
        self.result = None;
        self.source = Some(source);
        self.screen = ScreenState::Loading;
        Ok(())
    }

    /// Loading → Result. Runs the call to completion; both success and
    /// failure (including unexpected errors) land in Result.
    pub async fn run_transcription(&mut self) -> Result<()> {
        if self.screen != ScreenState::Loading {
            anyhow::bail!("No transcription has been submitted");
        }
        let source = self
            .source
            .clone()
            .ok_or_else(|| anyhow::anyhow!("No source recorded for this attempt"))?;

        let call = match &source {
            TranscriptionSource::File { path, .. } => {
                self.service.transcribe_file(path, &self.settings).await
            }
            TranscriptionSource::Url(url) => self.service.transcribe_url(url, &self.settings).await,
        };

        self.result = Some(match call {
            Ok(transcript) => TranscriptionOutcome::from_transcript(transcript),
            Err(err) => {
                tracing::error!(error = %format!("{err:#}"), "Unexpected transcription error");
                TranscriptionOutcome::from_unexpected_error(&err)
            }
        });
        self.screen = ScreenState::Result;
        Ok(())
    }

    /// Result (or anywhere) → Main. Clears source and result; idempotent.
    pub fn reset(&mut self) {
        self.source = None;
        self.result = None;
        self.screen = ScreenState::Main;
    }
}
