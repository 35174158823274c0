//! Transcription client: the real file-upload path backed by the Gemini
//! `generateContent` API and the mocked URL path.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;

use crate::media::MediaFormat;
use crate::prompt::build_prompt;
use crate::settings::{enabled_label, Settings};

pub mod gemini;

/// Prefix marking a classified failure in the returned transcript string.
/// Callers detect failure by checking for this marker.
pub const FAILURE_MARKER: &str = "Transcription Failed:";

/// Model used when the configured identifier is not a supported one
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Model identifiers the backend actually accepts. Anything else (such as
/// the "aura-hf" catalog placeholder) silently falls back to
/// [`DEFAULT_MODEL`] instead of erroring.
pub const SUPPORTED_MODELS: &[&str] = &["gemini-2.5-flash", "gemini-2.5-pro", "gemini-2.0-flash"];

/// Simulated latency of the mocked URL path
const MOCK_URL_DELAY: Duration = Duration::from_secs(2);

/// Classified transcription failures
#[derive(thiserror::Error, Debug)]
pub enum TranscribeError {
    #[error("Invalid API Key. Please ensure your API key is configured correctly.")]
    InvalidApiKey,

    #[error("An unexpected error occurred. Details: {0}")]
    Remote(String),
}

/// Resolve a usable model identifier for the outgoing request
pub fn resolve_model(requested: &str) -> &str {
    if SUPPORTED_MODELS.contains(&requested) {
        requested
    } else {
        DEFAULT_MODEL
    }
}

/// Map an arbitrary error from the call path into the failure taxonomy
pub fn classify_error(err: &anyhow::Error) -> TranscribeError {
    let detail = format!("{err:#}");
    if detail.contains("API key not valid") {
        TranscribeError::InvalidApiKey
    } else if detail.is_empty() {
        TranscribeError::Remote("Unknown error".to_string())
    } else {
        TranscribeError::Remote(detail)
    }
}

/// Render a classified failure as a marker-prefixed transcript string
pub fn failure_text(err: &TranscribeError) -> String {
    format!("{FAILURE_MARKER} {err}")
}

/// Abstraction over the two transcription entry points, so the screen
/// controller can be exercised without a network
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranscriptionService: Send + Sync {
    /// Transcribe a local media file. Classified failures are returned as
    /// marker-prefixed strings, not errors; only unexpected failures
    /// propagate as `Err`.
    async fn transcribe_file(&self, path: &Path, settings: &Settings) -> Result<String>;

    /// Transcribe media behind a URL. Mocked: no network fetch occurs.
    async fn transcribe_url(&self, url: &str, settings: &Settings) -> Result<String>;
}

/// Gemini-backed transcription client.
///
/// The credential is injected at construction and never read from ambient
/// process state. A missing credential surfaces as an invalid-key failure
/// at call time.
pub struct GeminiTranscriber {
    http: reqwest::Client,
    api_key: Option<String>,
}

impl GeminiTranscriber {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
        }
    }

    async fn upload_and_generate(&self, path: &Path, settings: &Settings) -> Result<String> {
        let format = MediaFormat::from_path(path)
            .with_context(|| format!("Unsupported media type: {}", path.display()))?;

        let data = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let model = resolve_model(&settings.model);
        if model != settings.model {
            tracing::debug!(requested = %settings.model, using = %model, "Falling back to supported model");
        }

        let prompt = build_prompt(settings);
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .context("API key not valid: no API key configured")?;

        gemini::generate_content(&self.http, api_key, model, &prompt, format.mime_type(), &data)
            .await
    }
}

#[async_trait]
impl TranscriptionService for GeminiTranscriber {
    async fn transcribe_file(&self, path: &Path, settings: &Settings) -> Result<String> {
        tracing::info!(file = %path.display(), "Starting file transcription");

        match self.upload_and_generate(path, settings).await {
            Ok(text) => Ok(text),
            Err(err) => {
                tracing::error!(error = %format!("{err:#}"), "Transcription call failed");
                Ok(failure_text(&classify_error(&err)))
            }
        }
    }

    async fn transcribe_url(&self, url: &str, settings: &Settings) -> Result<String> {
        // Fetching arbitrary third-party media needs a server-side
        // component; this path only demonstrates the session flow.
        tracing::warn!(%url, "URL transcription is mocked; a backend is required for this feature");

        tokio::time::sleep(MOCK_URL_DELAY).await;

        Ok(mock_url_report(url, settings))
    }
}

/// Deterministic report returned by the mocked URL path
pub fn mock_url_report(url: &str, settings: &Settings) -> String {
    let vocabulary = settings.custom_vocabulary.trim();
    let vocabulary = if vocabulary.is_empty() { "None" } else { vocabulary };

    format!(
        "## Mock Transcription for URL\n\n\
         This is a simulated transcription for the URL: `{url}`.\n\n\
         **Disclaimer:** In a real-world application, a server-side component would be necessary \
         to download and process content from web links before sending it to the AI for \
         transcription. This client-side demonstration mimics that process.\n\n\
         ### Applied Settings:\n\
         - **Model:** {model}\n\
         - **Language:** {language}\n\
         - **Speaker Diarization:** {diarization}\n\
         - **Punctuation:** {punctuation}\n\
         - **Timestamps:** {timestamps}\n\
         - **Profanity Filter:** {profanity}\n\
         - **Summary:** {summary}\n\
         - **Custom Vocabulary:** {vocabulary}\n\n\
         The actual transcription would appear here.",
        model = settings.model,
        language = settings.language,
        diarization = enabled_label(settings.enable_diarization),
        punctuation = enabled_label(settings.enable_punctuation),
        timestamps = enabled_label(settings.add_timestamps),
        profanity = enabled_label(settings.filter_profanity),
        summary = enabled_label(settings.enable_summarization),
    )
}
