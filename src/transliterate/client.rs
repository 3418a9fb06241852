use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::interface::{PhoneticEngine, XlitOutput};

#[derive(Debug, Serialize)]
struct LoadRequest<'a> {
    lang_codes: &'a [&'a str],
    beam_width: u32,
}

/// The sidecar may answer 200 and still report a failed load in `error`.
#[derive(Debug, Default, Deserialize)]
struct LoadResponse {
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct XlitRequest<'a> {
    text: &'a str,
    lang_code: &'a str,
}

#[derive(Debug, Deserialize)]
struct XlitResponse {
    result: Option<XlitOutput>,
    #[serde(default)]
    error: Option<String>,
}

/// Client for the phonetic model sidecar.
///
/// A client only exists once the sidecar has confirmed the model is loaded,
/// so holding one means the transliteration path is initialized.
#[derive(Debug, Clone)]
pub struct XlitServiceClient {
    client: Client,
    base_url: String,
}

impl XlitServiceClient {
    /// Ask the sidecar to load the model for `lang_codes`.
    ///
    /// This is the one-time startup step; an error here leaves the
    /// transliteration path uninitialized for the life of the process.
    pub async fn load(
        base_url: &str,
        lang_codes: &[&str],
        beam_width: u32,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build transliteration HTTP client")?;
        let base_url = base_url.trim_end_matches('/').to_string();

        let url = format!("{}/xlit/load", base_url);
        let response = client
            .post(&url)
            .json(&LoadRequest {
                lang_codes,
                beam_width,
            })
            .send()
            .await
            .with_context(|| format!("Failed to reach transliteration service at {}", base_url))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            anyhow::bail!("Transliteration model load failed ({}): {}", status, body);
        }

        let body = response
            .text()
            .await
            .context("Failed to read transliteration load response")?;
        let reported: LoadResponse = if body.trim().is_empty() {
            LoadResponse::default()
        } else {
            serde_json::from_str(&body).unwrap_or_default()
        };
        if let Some(error) = reported.error {
            anyhow::bail!("Transliteration model load failed: {}", error);
        }

        debug!("Transliteration model loaded for {:?}", lang_codes);
        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl PhoneticEngine for XlitServiceClient {
    async fn transliterate(&self, text: &str, lang_code: &str) -> Result<XlitOutput> {
        let url = format!("{}/xlit/transliterate", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&XlitRequest { text, lang_code })
            .send()
            .await
            .context("Failed to send transliteration request")?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            anyhow::bail!("Transliteration service error ({}): {}", status, body);
        }

        let parsed: XlitResponse = response
            .json()
            .await
            .context("Failed to parse transliteration response")?;

        match (parsed.result, parsed.error) {
            (_, Some(error)) => anyhow::bail!("Transliteration service reported: {}", error),
            (Some(output), None) => Ok(output),
            (None, None) => anyhow::bail!("Transliteration response contained no result"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    const TIMEOUT: Duration = Duration::from_secs(5);

    async fn loaded_client(server: &MockServer) -> XlitServiceClient {
        Mock::given(method("POST"))
            .and(path("/xlit/load"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ready"})))
            .mount(server)
            .await;
        XlitServiceClient::load(&server.uri(), &["hi"], 10, TIMEOUT)
            .await
            .expect("load should succeed")
    }

    #[tokio::test]
    async fn test_load_sends_languages_and_beam_width() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/xlit/load"))
            .and(body_json(json!({"lang_codes": ["hi", "ta"], "beam_width": 10})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let result = XlitServiceClient::load(&server.uri(), &["hi", "ta"], 10, TIMEOUT).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_load_failure_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/xlit/load"))
            .respond_with(ResponseTemplate::new(500).set_body_string("model download failed"))
            .mount(&server)
            .await;

        let err = XlitServiceClient::load(&server.uri(), &["hi"], 10, TIMEOUT)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("model download failed"));
    }

    #[tokio::test]
    async fn test_load_reported_error_with_ok_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/xlit/load"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"error": "model download failed"})),
            )
            .mount(&server)
            .await;

        let err = XlitServiceClient::load(&server.uri(), &["hi"], 10, TIMEOUT)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("model download failed"));
    }

    #[tokio::test]
    async fn test_load_accepts_plain_text_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/xlit/load"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .mount(&server)
            .await;

        let result = XlitServiceClient::load(&server.uri(), &["hi"], 10, TIMEOUT).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_load_unreachable_service() {
        let result = XlitServiceClient::load("http://127.0.0.1:1", &["hi"], 10, TIMEOUT).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_transliterate_ranked_result() {
        let server = MockServer::start().await;
        let client = loaded_client(&server).await;
        Mock::given(method("POST"))
            .and(path("/xlit/transliterate"))
            .and(body_json(json!({"text": "namaste", "lang_code": "hi"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"result": ["नमस्ते", "नमस्तें"]})),
            )
            .mount(&server)
            .await;

        let output = client.transliterate("namaste", "hi").await.unwrap();
        assert_eq!(output.best_candidate("hi").as_deref(), Some("नमस्ते"));
    }

    #[tokio::test]
    async fn test_transliterate_sentence_result() {
        let server = MockServer::start().await;
        let client = loaded_client(&server).await;
        Mock::given(method("POST"))
            .and(path("/xlit/transliterate"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"result": "नमस्ते दुनिया"})),
            )
            .mount(&server)
            .await;

        let output = client.transliterate("namaste duniya", "hi").await.unwrap();
        assert_eq!(output, XlitOutput::Single("नमस्ते दुनिया".to_string()));
    }

    #[tokio::test]
    async fn test_transliterate_sentence_by_language_result() {
        let server = MockServer::start().await;
        let client = loaded_client(&server).await;
        Mock::given(method("POST"))
            .and(path("/xlit/transliterate"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"result": {"hi": "नमस्ते दुनिया"}})),
            )
            .mount(&server)
            .await;

        let output = client.transliterate("namaste duniya", "hi").await.unwrap();
        assert_eq!(output.best_candidate("hi").as_deref(), Some("नमस्ते दुनिया"));
    }

    #[tokio::test]
    async fn test_transliterate_service_error_status() {
        let server = MockServer::start().await;
        let client = loaded_client(&server).await;
        Mock::given(method("POST"))
            .and(path("/xlit/transliterate"))
            .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
            .mount(&server)
            .await;

        let err = client.transliterate("namaste", "hi").await.unwrap_err();
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn test_transliterate_reported_error() {
        let server = MockServer::start().await;
        let client = loaded_client(&server).await;
        Mock::given(method("POST"))
            .and(path("/xlit/transliterate"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"error": "beam search failed"})),
            )
            .mount(&server)
            .await;

        let err = client.transliterate("namaste", "hi").await.unwrap_err();
        assert!(err.to_string().contains("beam search failed"));
    }

    #[tokio::test]
    async fn test_transliterate_malformed_body() {
        let server = MockServer::start().await;
        let client = loaded_client(&server).await;
        Mock::given(method("POST"))
            .and(path("/xlit/transliterate"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client.transliterate("namaste", "hi").await.unwrap_err();
        assert!(err.to_string().contains("parse"));
    }
}
