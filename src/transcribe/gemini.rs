//! Wire types and the single HTTP call against the Gemini
//! `generateContent` endpoint.

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
enum Part {
    Text(String),
    InlineData(InlineData),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// Send one prompt-plus-media request and return the raw text response
pub(crate) async fn generate_content(
    http: &reqwest::Client,
    api_key: &str,
    model: &str,
    prompt: &str,
    mime_type: &str,
    data: &[u8],
) -> Result<String> {
    let request = GenerateContentRequest {
        contents: vec![Content {
            parts: vec![
                Part::Text(prompt.to_string()),
                Part::InlineData(InlineData {
                    mime_type: mime_type.to_string(),
                    data: BASE64.encode(data),
                }),
            ],
        }],
    };

    let url = format!("{API_BASE}/{model}:generateContent");
    tracing::debug!(%model, payload_bytes = data.len(), "Calling generateContent");

    let response = http
        .post(&url)
        .header("x-goog-api-key", api_key)
        .json(&request)
        .send()
        .await
        .context("Failed to reach the Gemini API")?;

    let status = response.status();
    let body = response
        .bytes()
        .await
        .context("Failed to read the Gemini API response")?;

    if !status.is_success() {
        // Surface the server's own message so failure classification can
        // recognize credential errors.
        let message = serde_json::from_slice::<ApiErrorEnvelope>(&body)
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| format!("HTTP {status}"));
        anyhow::bail!("{message}");
    }

    let parsed: GenerateContentResponse =
        serde_json::from_slice(&body).context("Failed to parse the Gemini API response")?;

    let text = parsed
        .candidates
        .into_iter()
        .filter_map(|candidate| candidate.content)
        .flat_map(|content| content.parts)
        .map(|part| part.text)
        .collect::<Vec<_>>()
        .join("");

    if text.is_empty() {
        anyhow::bail!("The model returned no transcript text");
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization_shape() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text("transcribe this".to_string()),
                    Part::InlineData(InlineData {
                        mime_type: "audio/mpeg".to_string(),
                        data: BASE64.encode(b"abc"),
                    }),
                ],
            }],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "transcribe this");
        assert_eq!(
            json["contents"][0]["parts"][1]["inlineData"]["mimeType"],
            "audio/mpeg"
        );
        assert_eq!(json["contents"][0]["parts"][1]["inlineData"]["data"], "YWJj");
    }

    #[test]
    fn test_response_text_extraction() {
        let body = serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [{"text": "Hello "}, {"text": "world"}]
                }
            }]
        });

        let parsed: GenerateContentResponse = serde_json::from_value(body).unwrap();
        let text = parsed
            .candidates
            .into_iter()
            .filter_map(|candidate| candidate.content)
            .flat_map(|content| content.parts)
            .map(|part| part.text)
            .collect::<String>();
        assert_eq!(text, "Hello world");
    }

    #[test]
    fn test_error_envelope_parsing() {
        let body = br#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","status":"INVALID_ARGUMENT"}}"#;
        let envelope: ApiErrorEnvelope = serde_json::from_slice(body).unwrap();
        assert!(envelope.error.message.contains("API key not valid"));
    }
}
