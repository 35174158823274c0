//! Compiles a [`Settings`] value into the natural-language instruction sent
//! to the model alongside the media.

use crate::settings::Settings;

/// Heading under which the optional summary section is requested
pub const SUMMARY_HEADING: &str = "## Summary";

/// Build the instruction string for a transcription attempt.
///
/// Pure function. Clause order is fixed: punctuation (always, polarity from
/// the flag), diarization, timestamps, profanity, custom vocabulary, output
/// format, then the summary request after a blank line. Reordering changes
/// how the remote model interprets the request.
pub fn build_prompt(settings: &Settings) -> String {
    let mut prompt = format!(
        "Transcribe the following audio/video content. The primary language is {}.",
        settings.language
    );

    if settings.enable_punctuation {
        prompt.push_str(" Ensure proper punctuation is used throughout the transcript.");
    } else {
        prompt.push_str(" Do not add any punctuation.");
    }

    if settings.enable_diarization {
        prompt.push_str(
            " Identify different speakers and label them clearly (e.g., Speaker 1:, Speaker 2:).",
        );
    }

    if settings.add_timestamps {
        prompt.push_str(
            " Include timestamps in the format [HH:MM:SS] at meaningful intervals or speaker changes.",
        );
    }

    if settings.filter_profanity {
        prompt.push_str(" If any profanity is present, censor it using asterisks (e.g., f***).");
    }

    let vocabulary = settings.custom_vocabulary.trim();
    if !vocabulary.is_empty() {
        prompt.push_str(&format!(
            " Pay special attention to the following custom words, names, or acronyms and ensure they are transcribed correctly: {}.",
            vocabulary
        ));
    }

    prompt.push_str(" The output should be in well-structured Markdown format.");

    if settings.enable_summarization {
        prompt.push_str(&format!(
            "\n\nAfter the full transcription, provide a concise summary of the content under a '{}' heading.",
            SUMMARY_HEADING
        ));
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_occurrences(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_base_instruction_names_language() {
        let settings = Settings {
            language: "ja-JP".to_string(),
            ..Settings::default()
        };
        let prompt = build_prompt(&settings);
        assert!(prompt.starts_with(
            "Transcribe the following audio/video content. The primary language is ja-JP."
        ));
    }

    #[test]
    fn test_punctuation_clause_always_present() {
        let enabled = build_prompt(&Settings::default());
        assert!(enabled.contains("Ensure proper punctuation"));
        assert!(!enabled.contains("Do not add any punctuation"));

        let disabled = build_prompt(&Settings {
            enable_punctuation: false,
            ..Settings::default()
        });
        assert!(disabled.contains("Do not add any punctuation"));
        assert!(!disabled.contains("Ensure proper punctuation"));
    }

    #[test]
    fn test_exactly_one_punctuation_and_format_clause() {
        // Exhaustive over the boolean flags
        for bits in 0..32u8 {
            let settings = Settings {
                enable_diarization: bits & 1 != 0,
                enable_punctuation: bits & 2 != 0,
                enable_summarization: bits & 4 != 0,
                add_timestamps: bits & 8 != 0,
                filter_profanity: bits & 16 != 0,
                ..Settings::default()
            };
            let prompt = build_prompt(&settings);

            // The positive and negative clauses are mutually exclusive
            let punctuation_clauses = count_occurrences(&prompt, "Ensure proper punctuation")
                + count_occurrences(&prompt, "Do not add any punctuation");
            assert_eq!(punctuation_clauses, 1, "expected exactly one punctuation clause: {prompt}");
            assert_eq!(
                count_occurrences(&prompt, "well-structured Markdown format"),
                1
            );
            assert_eq!(
                prompt.contains(SUMMARY_HEADING),
                settings.enable_summarization
            );
        }
    }

    #[test]
    fn test_optional_clauses_toggle() {
        let none = build_prompt(&Settings {
            enable_diarization: false,
            add_timestamps: false,
            filter_profanity: false,
            ..Settings::default()
        });
        assert!(!none.contains("Speaker 1:"));
        assert!(!none.contains("[HH:MM:SS]"));
        assert!(!none.contains("asterisks"));

        let all = build_prompt(&Settings {
            enable_diarization: true,
            add_timestamps: true,
            filter_profanity: true,
            ..Settings::default()
        });
        assert!(all.contains("Speaker 1:"));
        assert!(all.contains("[HH:MM:SS]"));
        assert!(all.contains("asterisks"));
    }

    #[test]
    fn test_clause_order_is_fixed() {
        let settings = Settings {
            enable_diarization: true,
            add_timestamps: true,
            filter_profanity: true,
            enable_summarization: true,
            custom_vocabulary: "Kubernetes".to_string(),
            ..Settings::default()
        };
        let prompt = build_prompt(&settings);

        let positions: Vec<usize> = [
            "punctuation",
            "Speaker 1:",
            "[HH:MM:SS]",
            "asterisks",
            "Kubernetes",
            "Markdown format",
            SUMMARY_HEADING,
        ]
        .iter()
        .map(|needle| prompt.find(needle).expect("clause missing"))
        .collect();

        for pair in positions.windows(2) {
            assert!(pair[0] < pair[1], "clauses out of order: {prompt}");
        }
    }

    #[test]
    fn test_whitespace_vocabulary_treated_as_empty() {
        let empty = build_prompt(&Settings {
            custom_vocabulary: String::new(),
            ..Settings::default()
        });
        let whitespace = build_prompt(&Settings {
            custom_vocabulary: "   \t\n  ".to_string(),
            ..Settings::default()
        });
        assert_eq!(empty, whitespace);
        assert!(!empty.contains("custom words"));
    }

    #[test]
    fn test_vocabulary_embedded_verbatim_after_trim() {
        let prompt = build_prompt(&Settings {
            custom_vocabulary: "  Gemini, AI Studio, UX  ".to_string(),
            ..Settings::default()
        });
        assert!(prompt.contains("transcribed correctly: Gemini, AI Studio, UX."));
    }

    #[test]
    fn test_summary_clause_after_blank_line() {
        let prompt = build_prompt(&Settings {
            enable_summarization: true,
            ..Settings::default()
        });
        let tail = prompt.split("\n\n").nth(1).expect("missing separator");
        assert!(tail.contains(SUMMARY_HEADING));
    }
}
