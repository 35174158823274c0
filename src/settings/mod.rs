use serde::{Deserialize, Serialize};

/// A selectable option with a machine value and a display label
#[derive(Debug, Clone, Copy)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

/// Languages offered by the input screen
pub const LANGUAGES: &[Choice] = &[
    Choice { value: "en-US", label: "English (US)" },
    Choice { value: "en-GB", label: "English (UK)" },
    Choice { value: "es-ES", label: "Spanish" },
    Choice { value: "fr-FR", label: "French" },
    Choice { value: "de-DE", label: "German" },
    Choice { value: "it-IT", label: "Italian" },
    Choice { value: "ja-JP", label: "Japanese" },
    Choice { value: "ko-KR", label: "Korean" },
    Choice { value: "zh-CN", label: "Chinese (Mandarin)" },
];

/// Models offered by the input screen. "aura-hf" is a placeholder for
/// demonstration; the client falls back to a supported model when it is
/// selected.
pub const MODELS: &[Choice] = &[
    Choice { value: "gemini-2.5-flash", label: "Gemini 2.5 Flash (Fast & Efficient)" },
    Choice { value: "aura-hf", label: "Aura High-Fidelity (Premium)" },
];

/// Transcription options for a single attempt.
///
/// Always fully populated; the input screen replaces the whole value on
/// every change instead of patching fields in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Primary spoken language, as a BCP-47 style code
    pub language: String,

    /// Model identifier requested by the user
    pub model: String,

    /// Label transcript segments by speaker
    pub enable_diarization: bool,

    /// Ask the model for proper punctuation
    pub enable_punctuation: bool,

    /// Append a summary section after the transcript
    pub enable_summarization: bool,

    /// Insert [HH:MM:SS] markers at meaningful boundaries
    pub add_timestamps: bool,

    /// Censor profanity with asterisks
    pub filter_profanity: bool,

    /// Free-text words, names, or acronyms to transcribe verbatim
    pub custom_vocabulary: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            model: "gemini-2.5-flash".to_string(),
            enable_diarization: true,
            enable_punctuation: true,
            enable_summarization: false,
            add_timestamps: false,
            filter_profanity: true,
            custom_vocabulary: String::new(),
        }
    }
}

impl Settings {
    /// Display label for the configured language, falling back to the raw code
    pub fn language_label(&self) -> &str {
        lookup_label(LANGUAGES, &self.language).unwrap_or(&self.language)
    }

    /// Display label for the configured model, falling back to the raw identifier
    pub fn model_label(&self) -> &str {
        lookup_label(MODELS, &self.model).unwrap_or(&self.model)
    }
}

fn lookup_label<'a>(choices: &'a [Choice], value: &str) -> Option<&'a str> {
    choices
        .iter()
        .find(|choice| choice.value == value)
        .map(|choice| choice.label)
}

/// Render a boolean option the way the mock report and the settings menu do
pub fn enabled_label(flag: bool) -> &'static str {
    if flag {
        "Enabled"
    } else {
        "Disabled"
    }
}
