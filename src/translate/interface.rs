use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::TranslateError;
use super::languages::TargetLanguage;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    #[serde(default)]
    pub target: TargetLanguage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translated_text: String,
}

/// A backend able to translate text into one of the supported languages.
#[async_trait]
pub trait TranslateInterface: Send + Sync {
    /// Translate `text` into `target`. Callers validate the text beforehand.
    async fn translate(
        &self,
        text: &str,
        target: TargetLanguage,
    ) -> Result<String, TranslateError>;
}
