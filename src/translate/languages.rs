use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Target languages offered by the translate page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TargetLanguage {
    #[default]
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "zh")]
    Chinese,
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "nl")]
    Dutch,
    #[serde(rename = "sv")]
    Swedish,
    #[serde(rename = "no")]
    Norwegian,
    #[serde(rename = "da")]
    Danish,
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 15] = [
        TargetLanguage::Hindi,
        TargetLanguage::French,
        TargetLanguage::Spanish,
        TargetLanguage::German,
        TargetLanguage::Italian,
        TargetLanguage::Portuguese,
        TargetLanguage::Russian,
        TargetLanguage::Japanese,
        TargetLanguage::Korean,
        TargetLanguage::Chinese,
        TargetLanguage::Arabic,
        TargetLanguage::Dutch,
        TargetLanguage::Swedish,
        TargetLanguage::Norwegian,
        TargetLanguage::Danish,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            TargetLanguage::Hindi => "hi",
            TargetLanguage::French => "fr",
            TargetLanguage::Spanish => "es",
            TargetLanguage::German => "de",
            TargetLanguage::Italian => "it",
            TargetLanguage::Portuguese => "pt",
            TargetLanguage::Russian => "ru",
            TargetLanguage::Japanese => "ja",
            TargetLanguage::Korean => "ko",
            TargetLanguage::Chinese => "zh",
            TargetLanguage::Arabic => "ar",
            TargetLanguage::Dutch => "nl",
            TargetLanguage::Swedish => "sv",
            TargetLanguage::Norwegian => "no",
            TargetLanguage::Danish => "da",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TargetLanguage::Hindi => "Hindi",
            TargetLanguage::French => "French",
            TargetLanguage::Spanish => "Spanish",
            TargetLanguage::German => "German",
            TargetLanguage::Italian => "Italian",
            TargetLanguage::Portuguese => "Portuguese",
            TargetLanguage::Russian => "Russian",
            TargetLanguage::Japanese => "Japanese",
            TargetLanguage::Korean => "Korean",
            TargetLanguage::Chinese => "Chinese (Simplified)",
            TargetLanguage::Arabic => "Arabic",
            TargetLanguage::Dutch => "Dutch",
            TargetLanguage::Swedish => "Swedish",
            TargetLanguage::Norwegian => "Norwegian",
            TargetLanguage::Danish => "Danish",
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for TargetLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        TargetLanguage::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| format!("Unsupported target language: {}", s))
    }
}
