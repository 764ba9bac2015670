use std::sync::Arc;
use tracing::warn;

use crate::config::Config;
use crate::translate::{RapidApiTranslator, TranslateInterface, UnconfiguredTranslator};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub translator: Arc<dyn TranslateInterface>,
}

impl AppState {
    /// Build the state used in production. Without an API key the service
    /// still starts, and translation reports itself unavailable.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let api_key = match config.translate_config.resolve_api_key() {
            Ok(key) => Some(key),
            Err(e) => {
                warn!("{}; translation is disabled", e);
                None
            }
        };

        Self::from_api_key(config, api_key)
    }

    fn from_api_key(config: Config, api_key: Option<String>) -> anyhow::Result<Self> {
        let translator: Arc<dyn TranslateInterface> = match api_key {
            Some(key) => Arc::new(RapidApiTranslator::new(&config.translate_config, key)?),
            None => Arc::new(UnconfiguredTranslator),
        };

        Ok(Self::with_translator(config, translator))
    }

    pub fn with_translator(config: Config, translator: Arc<dyn TranslateInterface>) -> Self {
        Self {
            config: Arc::new(config),
            translator,
        }
    }
}
