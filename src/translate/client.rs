use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use super::error::TranslateError;
use super::interface::TranslateInterface;
use super::languages::TargetLanguage;
use crate::config::TranslateConfig;

const TRANSLATED_TEXT_POINTER: &str = "/data/translations/0/translatedText";

/// Translator backed by the Google Translate API published on RapidAPI
#[derive(Debug, Clone)]
pub struct RapidApiTranslator {
    client: Client,
    endpoint: String,
    api_host: String,
    api_key: String,
    source_lang: String,
}

#[derive(Debug, Serialize)]
struct ProviderRequest<'a> {
    q: &'a str,
    target: &'a str,
    source: &'a str,
}

impl RapidApiTranslator {
    pub fn new(config: &TranslateConfig, api_key: String) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_host: config.api_host.clone(),
            api_key,
            source_lang: config.source_lang.clone(),
        })
    }
}

#[async_trait]
impl TranslateInterface for RapidApiTranslator {
    async fn translate(
        &self,
        text: &str,
        target: TargetLanguage,
    ) -> Result<String, TranslateError> {
        let body = ProviderRequest {
            q: text,
            target: target.code(),
            source: &self.source_lang,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.api_host)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!("Translation provider unreachable: {}", e);
                TranslateError::Unavailable(e.to_string())
            })?;

        let status = response.status();
        let payload = response.text().await.map_err(|e| {
            warn!("Failed to read translation provider response: {}", e);
            TranslateError::Unavailable(e.to_string())
        })?;
        debug!("Provider responded with {} ({} bytes)", status, payload.len());

        if !status.is_success() {
            let message = provider_message(&payload);
            warn!("Translation provider returned {}: {}", status, message);
            return Err(TranslateError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        extract_translation(&payload).ok_or_else(|| TranslateError::Provider {
            status: status.as_u16(),
            message: "Unexpected response format".to_string(),
        })
    }
}

/// Stand-in used when no API key is configured. Every call reports the
/// service as unavailable; the rest of the app keeps working.
#[derive(Debug, Clone, Default)]
pub struct UnconfiguredTranslator;

#[async_trait]
impl TranslateInterface for UnconfiguredTranslator {
    async fn translate(
        &self,
        _text: &str,
        _target: TargetLanguage,
    ) -> Result<String, TranslateError> {
        warn!("Translation requested but no API key is configured");
        Err(TranslateError::Unavailable(
            "no translation API key configured".to_string(),
        ))
    }
}

/// Error message carried by a provider error body, if any
fn provider_message(payload: &str) -> String {
    serde_json::from_str::<Value>(payload)
        .ok()
        .and_then(|json| {
            json.get("message")
                .and_then(|v| v.as_str())
                .map(|s| s.to_string())
        })
        .unwrap_or_else(|| "Unknown error".to_string())
}

fn extract_translation(payload: &str) -> Option<String> {
    let json: Value = serde_json::from_str(payload).ok()?;
    json.pointer(TRANSLATED_TEXT_POINTER)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}
