//! Input screen: pick a file or URL, edit settings, submit.

use anyhow::Result;
use console::{style, Term};
use std::path::PathBuf;

use crate::flow::TranscriptionSource;
use crate::media::{MediaFormat, MAX_FILE_SIZE_BYTES, MAX_FILE_SIZE_MB};
use crate::settings::{Settings, LANGUAGES, MODELS};
use crate::utils::format_file_size;

/// What the user decided on the input screen
#[derive(Debug, PartialEq, Eq)]
pub enum InputAction {
    Submit(TranscriptionSource),
    Quit,
}

/// Source-selection state behind the input screen. Exactly one of file or
/// URL is active; choosing one clears the other.
#[derive(Debug, Default)]
pub struct InputState {
    file: Option<(PathBuf, u64)>,
    url: Option<String>,
    error: Option<String>,
}

impl InputState {
    /// Accept a file, enforcing the size limit and media-type check. A
    /// rejected file leaves no file selected and sets a visible error.
    pub fn select_file(&mut self, path: PathBuf, size: u64) {
        if size > MAX_FILE_SIZE_BYTES {
            self.error = Some(format!(
                "File is too large. Maximum size is {MAX_FILE_SIZE_MB}MB."
            ));
            self.file = None;
            return;
        }
        if MediaFormat::from_path(&path).is_none() {
            self.error = Some("Not a recognized audio or video file.".to_string());
            self.file = None;
            return;
        }
        self.error = None;
        self.file = Some((path, size));
        self.url = None;
    }

    /// Accept a URL verbatim; an empty string clears the selection
    pub fn set_url(&mut self, url: &str) {
        let url = url.trim();
        self.url = if url.is_empty() {
            None
        } else {
            Some(url.to_string())
        };
        self.file = None;
        self.error = None;
    }

    /// Surface a selection problem without touching the chosen source
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected_file(&self) -> Option<(&PathBuf, u64)> {
        self.file.as_ref().map(|(path, size)| (path, *size))
    }

    /// The active source, if exactly one has been chosen
    pub fn source(&self) -> Option<TranscriptionSource> {
        if let Some((path, size)) = &self.file {
            Some(TranscriptionSource::File {
                path: path.clone(),
                size: *size,
            })
        } else {
            self.url.clone().map(TranscriptionSource::Url)
        }
    }

    pub fn can_submit(&self) -> bool {
        self.source().is_some()
    }
}

/// Run the interactive input screen until the user submits or quits
pub fn run(term: &Term, state: &mut InputState, settings: &mut Settings) -> Result<InputAction> {
    loop {
        term.clear_screen()?;
        println!("{}", style("Gemini Transcriber").cyan().bold());
        println!("Transform your audio and video into accurate, readable text.\n");

        if let Some(error) = state.error() {
            println!("{}\n", style(error).red());
        }

        match state.source() {
            Some(TranscriptionSource::File { path, size }) => {
                println!(
                    "Selected: {} ({})",
                    style(path.display()).green(),
                    format_file_size(size)
                );
            }
            Some(TranscriptionSource::Url(url)) => {
                println!("Selected URL: {}", style(&url).green());
            }
            None => println!("No source selected yet."),
        }

        println!(
            "\nSettings: {} | {} | diarization {} | punctuation {} | summary {} | timestamps {} | profanity filter {}",
            settings.language_label(),
            settings.model_label(),
            on_off(settings.enable_diarization),
            on_off(settings.enable_punctuation),
            on_off(settings.enable_summarization),
            on_off(settings.add_timestamps),
            on_off(settings.filter_profanity),
        );

        println!(
            "\n[f] choose file  [u] enter URL  [s] settings  [t] transcribe  [q] quit"
        );

        let command = term.read_line()?;
        match command.trim().to_lowercase().as_str() {
            "f" => {
                println!("Path to an audio or video file:");
                let path = PathBuf::from(term.read_line()?.trim());
                match fs_err::metadata(&path) {
                    Ok(metadata) if metadata.is_file() => {
                        state.select_file(path, metadata.len());
                    }
                    Ok(_) => {
                        state.set_error(format!("Not a file: {}", path.display()));
                    }
                    Err(err) => {
                        state.set_error(format!("Cannot access file: {err}"));
                    }
                }
            }
            "u" => {
                println!("Media URL (YouTube, social media, or any link):");
                let url = term.read_line()?;
                state.set_url(&url);
            }
            "s" => settings_menu(term, settings)?,
            "t" | "" => {
                if let Some(source) = state.source() {
                    return Ok(InputAction::Submit(source));
                }
                state.set_error("Select a file or URL first.");
            }
            "q" => return Ok(InputAction::Quit),
            other => {
                state.set_error(format!("Unknown command: {other}"));
            }
        }
    }
}

/// Interactive settings editor. Every change replaces the settings value
/// wholesale rather than patching it in place.
fn settings_menu(term: &Term, settings: &mut Settings) -> Result<()> {
    loop {
        term.clear_screen()?;
        println!("{}\n", style("Advanced Settings").cyan().bold());
        println!("[1] Language: {}", settings.language_label());
        println!("[2] Model: {}", settings.model_label());
        println!("[3] Auto punctuation: {}", on_off(settings.enable_punctuation));
        println!("[4] Identify speakers: {}", on_off(settings.enable_diarization));
        println!("[5] Generate summary: {}", on_off(settings.enable_summarization));
        println!("[6] Add timestamps: {}", on_off(settings.add_timestamps));
        println!("[7] Filter profanity: {}", on_off(settings.filter_profanity));
        println!(
            "[8] Custom vocabulary: {}",
            if settings.custom_vocabulary.trim().is_empty() {
                "(none)".to_string()
            } else {
                settings.custom_vocabulary.clone()
            }
        );
        println!("\n[b] back");

        let command = term.read_line()?;
        let next = match command.trim().to_lowercase().as_str() {
            "1" => Settings {
                language: pick_choice(term, "Language", LANGUAGES, &settings.language)?,
                ..settings.clone()
            },
            "2" => Settings {
                model: pick_choice(term, "AI Model", MODELS, &settings.model)?,
                ..settings.clone()
            },
            "3" => Settings {
                enable_punctuation: !settings.enable_punctuation,
                ..settings.clone()
            },
            "4" => Settings {
                enable_diarization: !settings.enable_diarization,
                ..settings.clone()
            },
            "5" => Settings {
                enable_summarization: !settings.enable_summarization,
                ..settings.clone()
            },
            "6" => Settings {
                add_timestamps: !settings.add_timestamps,
                ..settings.clone()
            },
            "7" => Settings {
                filter_profanity: !settings.filter_profanity,
                ..settings.clone()
            },
            "8" => {
                println!("Comma-separated words, names, or acronyms (empty to clear):");
                Settings {
                    custom_vocabulary: term.read_line()?.trim().to_string(),
                    ..settings.clone()
                }
            }
            "b" | "" => return Ok(()),
            _ => continue,
        };
        *settings = next;
    }
}

fn pick_choice(
    term: &Term,
    heading: &str,
    choices: &[crate::settings::Choice],
    current: &str,
) -> Result<String> {
    println!("\n{heading}:");
    for (index, choice) in choices.iter().enumerate() {
        let marker = if choice.value == current { "*" } else { " " };
        println!("  {marker} [{}] {}", index + 1, choice.label);
    }
    println!("Number (empty to keep current):");

    let line = term.read_line()?;
    let picked = line
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|number| choices.get(number.wrapping_sub(1)));

    Ok(picked.map_or_else(|| current.to_string(), |choice| choice.value.to_string()))
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}
