use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// What the generation service handed back, before text extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelResponse {
    DirectText(String),
    CandidateList(Vec<Candidate>),
}

impl ModelResponse {
    /// Direct text wins; otherwise the first part of the first candidate; otherwise "".
    pub fn into_text(self) -> String {
        match self {
            ModelResponse::DirectText(text) => text,
            ModelResponse::CandidateList(candidates) => candidates
                .into_iter()
                .next()
                .and_then(|candidate| candidate.content)
                .and_then(|content| content.parts.into_iter().next())
                .and_then(|part| part.text)
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ContentPart>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContentPart {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl From<GenerateContentResponse> for ModelResponse {
    fn from(raw: GenerateContentResponse) -> Self {
        match raw.text {
            Some(text) if !text.is_empty() => ModelResponse::DirectText(text),
            _ => ModelResponse::CandidateList(raw.candidates),
        }
    }
}

pub(crate) fn parse_generate_response(body: &str) -> AppResult<ModelResponse> {
    let raw: GenerateContentResponse = serde_json::from_str(body)?;
    Ok(raw.into())
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelService: Send + Sync {
    /// Sends one prompt, once. No retries.
    async fn generate(&self, prompt: &str) -> AppResult<ModelResponse>;
}

pub struct GeminiModelService {
    client: Client,
    api_key: SecretString,
    model: String,
    base_url: String,
}

impl GeminiModelService {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
            base_url: config.gemini_base_url.clone(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl ModelService for GeminiModelService {
    async fn generate(&self, prompt: &str) -> AppResult<ModelResponse> {
        log::debug!("Sending prompt ({} chars) to {}", prompt.len(), self.model);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&json!({
                "contents": [{ "parts": [{ "text": prompt }] }]
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|err| {
                log::debug!("Could not read error body from model service: {}", err);
                String::new()
            });
            return Err(AppError::GenerationFailed(format!(
                "model service returned {}: {}",
                status,
                body.trim()
            )));
        }

        let body = response.text().await?;
        parse_generate_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(text: &str) -> Candidate {
        Candidate {
            content: Some(CandidateContent {
                parts: vec![ContentPart {
                    text: Some(text.to_string()),
                }],
            }),
        }
    }

    #[test]
    fn direct_text_is_returned_as_is() {
        let response = ModelResponse::DirectText("Q1: direct".into());
        assert_eq!(response.into_text(), "Q1: direct");
    }

    #[test]
    fn candidate_list_uses_first_part_of_first_candidate() {
        let response = ModelResponse::CandidateList(vec![candidate("first"), candidate("second")]);
        assert_eq!(response.into_text(), "first");
    }

    #[test]
    fn empty_candidate_list_yields_empty_text() {
        assert_eq!(ModelResponse::CandidateList(vec![]).into_text(), "");
        assert_eq!(
            ModelResponse::CandidateList(vec![Candidate { content: None }]).into_text(),
            ""
        );
    }

    #[test]
    fn parses_gemini_candidates_shape() {
        let body = r#"{
            "candidates": [
                { "content": { "parts": [{ "text": "Q1: What?" }], "role": "model" },
                  "finishReason": "STOP" }
            ],
            "usageMetadata": { "totalTokenCount": 12 }
        }"#;

        let response = parse_generate_response(body).unwrap();
        assert_eq!(response, ModelResponse::CandidateList(vec![candidate("Q1: What?")]));
    }

    #[test]
    fn non_empty_direct_text_takes_priority() {
        let body = r#"{ "text": "direct", "candidates": [{ "content": { "parts": [{ "text": "nested" }] } }] }"#;

        let response = parse_generate_response(body).unwrap();
        assert_eq!(response.into_text(), "direct");
    }

    #[test]
    fn empty_direct_text_falls_back_to_candidates() {
        let body = r#"{ "text": "", "candidates": [{ "content": { "parts": [{ "text": "nested" }] } }] }"#;

        assert_eq!(parse_generate_response(body).unwrap().into_text(), "nested");
    }

    #[test]
    fn undecodable_body_is_a_generation_failure() {
        let result = parse_generate_response("<html>bad gateway</html>");
        assert!(matches!(result, Err(AppError::GenerationFailed(_))));
    }

    #[test]
    fn endpoint_includes_model_name() {
        let config = Config {
            gemini_base_url: "https://example.test/".to_string(),
            ..Config::test_config()
        };
        let service = GeminiModelService::new(&config);

        assert_eq!(
            service.endpoint(),
            "https://example.test/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    async fn serve_once(status: u16, body: &'static str) -> (String, actix_web::dev::ServerHandle) {
        use actix_web::{http::StatusCode, web, App, HttpResponse, HttpServer};

        let server = HttpServer::new(move || {
            App::new().default_service(web::to(move || async move {
                HttpResponse::build(StatusCode::from_u16(status).unwrap()).body(body)
            }))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        (format!("http://{}", addr), handle)
    }

    #[actix_web::test]
    async fn error_status_is_reported_with_body() {
        let (base_url, handle) = serve_once(403, "API key not valid").await;
        let config = Config {
            gemini_base_url: base_url,
            ..Config::test_config()
        };

        let result = GeminiModelService::new(&config).generate("prompt").await;
        handle.stop(false).await;

        match result {
            Err(AppError::GenerationFailed(msg)) => {
                assert!(msg.contains("403"), "unexpected message: {}", msg);
                assert!(msg.contains("API key not valid"), "unexpected message: {}", msg);
            }
            other => panic!("expected generation failure, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn successful_reply_is_parsed() {
        let (base_url, handle) = serve_once(
            200,
            r#"{ "candidates": [{ "content": { "parts": [{ "text": "Q1: served" }] } }] }"#,
        )
        .await;
        let config = Config {
            gemini_base_url: base_url,
            ..Config::test_config()
        };

        let result = GeminiModelService::new(&config).generate("prompt").await;
        handle.stop(false).await;

        assert_eq!(result.unwrap().into_text(), "Q1: served");
    }

    #[tokio::test]
    async fn unreachable_service_propagates_generation_failure() {
        let service = GeminiModelService::new(&Config::test_config());

        let result = service.generate("prompt").await;
        assert!(matches!(result, Err(AppError::GenerationFailed(_))));
    }
}
