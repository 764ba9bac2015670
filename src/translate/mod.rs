pub mod client;
pub mod error;
pub mod interface;
pub mod languages;
pub mod session;

pub use client::{RapidApiTranslator, UnconfiguredTranslator};
pub use error::TranslateError;
pub use interface::{TranslateInterface, TranslateRequest, TranslateResponse};
pub use languages::TargetLanguage;
pub use session::{TranslationSession, TranslationState};
