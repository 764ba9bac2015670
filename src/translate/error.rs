use serde::Serialize;
use thiserror::Error;

/// Everything a translation submission can fail with
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("Please enter some text to translate")]
    EmptyInput,

    #[error("Translation failed: {status} - {message}")]
    Provider { status: u16, message: String },

    #[error("Translation service is currently unavailable. Please try again later.")]
    Unavailable(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslateErrorKind {
    EmptyInput,
    Provider,
    Unavailable,
}

impl TranslateError {
    pub fn kind(&self) -> TranslateErrorKind {
        match self {
            TranslateError::EmptyInput => TranslateErrorKind::EmptyInput,
            TranslateError::Provider { .. } => TranslateErrorKind::Provider,
            TranslateError::Unavailable(_) => TranslateErrorKind::Unavailable,
        }
    }
}
