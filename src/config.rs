use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable consulted when the config carries no API key
pub const API_KEY_ENV: &str = "RAPIDAPI_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub translate_config: TranslateConfig,
    #[serde(default)]
    pub generator_config: GeneratorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_api_host")]
    pub api_host: String,
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_length")]
    pub default_length: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_endpoint() -> String {
    "https://google-translate1.p.rapidapi.com/language/translate/v2".to_string()
}

fn default_api_host() -> String {
    "google-translate1.p.rapidapi.com".to_string()
}

fn default_source_lang() -> String {
    "en".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_length() -> usize {
    12
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_host: default_api_host(),
            source_lang: default_source_lang(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_length: default_length(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            anyhow::bail!("Configuration file not found: {}", path);
        }

        let content = substitute_env_vars(&read_text_file(path)?)?;

        // Determine file type by extension
        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".jsonld") || path_lower.ends_with(".json") {
            let mut json_value: serde_json::Value = serde_json::from_str(&content)?;
            if let Some(obj) = json_value.as_object_mut() {
                obj.remove("@context");
            }
            Ok(serde_json::from_value(json_value)?)
        } else {
            Ok(serde_yaml::from_str(&content)?)
        }
    }
}

impl TranslateConfig {
    /// Resolve the provider API key. There is no built-in fallback.
    pub fn resolve_api_key(&self) -> Result<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    fn resolve_api_key_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Result<String> {
        let usable = |key: &str| !key.trim().is_empty() && !key.contains("${");

        if let Some(key) = self.api_key.as_deref().filter(|k| usable(*k)) {
            return Ok(key.trim().to_string());
        }

        match lookup(API_KEY_ENV) {
            Some(key) if usable(key.as_str()) => Ok(key.trim().to_string()),
            _ => anyhow::bail!(
                "No translation API key configured: set translate_config.api_key or {}",
                API_KEY_ENV
            ),
        }
    }
}

/// Replace `${VAR}` with the variable's value; unset variables are left as-is.
pub fn substitute_env_vars(content: &str) -> Result<String> {
    substitute_with(content, |name| std::env::var(name).ok())
}

fn substitute_with(content: &str, lookup: impl Fn(&str) -> Option<String>) -> Result<String> {
    let pattern = Regex::new(r"\$\{(\w+)\}")?;
    Ok(pattern
        .replace_all(content, |caps: &regex::Captures| {
            lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned())
}

/// Read a UTF-8 text file, dropping a leading BOM
fn read_text_file(path: &str) -> Result<String> {
    let bytes = fs::read(path)?;
    let (content, _, had_errors) = encoding_rs::UTF_8.decode(&bytes);
    if had_errors {
        tracing::warn!("Config file {} contains invalid UTF-8; replaced bad sequences", path);
    }
    Ok(content.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn substitutes_known_and_keeps_unknown() {
        let out = substitute_with(
            "key: ${KEY}\nother: ${MISSING}",
            env(&[("KEY", "abc123")]),
        )
        .unwrap();
        assert_eq!(out, "key: abc123\nother: ${MISSING}");
    }

    #[test]
    fn api_key_prefers_config_value() {
        let config = TranslateConfig {
            api_key: Some("from-config".into()),
            ..Default::default()
        };
        let key = config
            .resolve_api_key_with(env(&[(API_KEY_ENV, "from-env")]))
            .unwrap();
        assert_eq!(key, "from-config");
    }

    #[test]
    fn api_key_falls_back_to_env() {
        let config = TranslateConfig {
            api_key: Some("${RAPIDAPI_KEY}".into()),
            ..Default::default()
        };
        let key = config
            .resolve_api_key_with(env(&[(API_KEY_ENV, "from-env")]))
            .unwrap();
        assert_eq!(key, "from-env");
    }

    #[test]
    fn api_key_is_required() {
        let config = TranslateConfig::default();
        assert!(config.resolve_api_key_with(env(&[])).is_err());
        assert!(config
            .resolve_api_key_with(env(&[(API_KEY_ENV, "   ")]))
            .is_err());
    }

    #[test]
    fn loads_yaml_with_defaults() {
        let dir = std::env::temp_dir().join(format!("webapp-conf-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("conf.yaml");
        fs::write(
            &path,
            "\u{feff}system_config:\n  port: 9000\ntranslate_config:\n  timeout_secs: 5\n",
        )
        .unwrap();

        let config = Config::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.system_config.port, 9000);
        assert_eq!(config.system_config.static_dir, "static");
        assert_eq!(config.translate_config.timeout_secs, 5);
        assert_eq!(config.translate_config.source_lang, "en");
        assert_eq!(config.generator_config.default_length, 12);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn loads_jsonld() {
        let dir = std::env::temp_dir().join(format!("webapp-conf-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("conf.jsonld");
        fs::write(
            &path,
            r#"{"@context": {"@vocab": "https://example.org/"}, "system_config": {"port": 7000}}"#,
        )
        .unwrap();

        let config = Config::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.system_config.port, 7000);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Config::load("/definitely/not/here/conf.yaml").is_err());
    }
}
