//! Random string generation over configurable character classes.

pub mod charset;
pub mod config;
pub mod error;

pub use charset::{CharClass, DEFAULT_ALPHABET};
pub use config::{GenerationConfig, MAX_LENGTH, MIN_LENGTH};
pub use error::GeneratorError;

use rand::Rng;
use serde::Serialize;

/// A generated string along with the figures shown next to it
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedString {
    pub value: String,
    pub length: usize,
    pub charset_size: usize,
    pub entropy_bits: u32,
}

/// Build the charset for `config`, falling back to [`DEFAULT_ALPHABET`]
/// when no class is enabled.
pub fn charset(config: &GenerationConfig) -> String {
    let charset: String = config
        .enabled_classes()
        .iter()
        .map(|class| class.chars())
        .collect();

    if charset.is_empty() {
        DEFAULT_ALPHABET.to_string()
    } else {
        charset
    }
}

/// Generate a string with the thread-local RNG
pub fn generate(config: &GenerationConfig) -> GeneratedString {
    generate_with(config, &mut rand::thread_rng())
}

/// Sample `config.length` characters uniformly, with replacement, from the charset.
pub fn generate_with<R: Rng + ?Sized>(config: &GenerationConfig, rng: &mut R) -> GeneratedString {
    let chars: Vec<char> = charset(config).chars().collect();

    let value: String = (0..config.length)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect();

    GeneratedString {
        value,
        length: config.length,
        charset_size: chars.len(),
        entropy_bits: entropy_bits(config),
    }
}

/// floor(log2(charset_size ^ length)). Informational only.
pub fn entropy_bits(config: &GenerationConfig) -> u32 {
    let size = charset(config).chars().count() as f64;
    (config.length as f64 * size.log2()).floor() as u32
}
