use serde::{Deserialize, Serialize};

use super::charset::CharClass;
use super::error::GeneratorError;

pub const MIN_LENGTH: usize = 1;
pub const MAX_LENGTH: usize = 100;

/// Parameters for a single random string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: false,
        }
    }
}

impl GenerationConfig {
    /// Config with exactly one class enabled
    pub fn only(class: CharClass, length: usize) -> Self {
        let mut config = Self {
            length,
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
        };
        config.set_class(class, true);
        config
    }

    pub fn includes(&self, class: CharClass) -> bool {
        match class {
            CharClass::Uppercase => self.include_uppercase,
            CharClass::Lowercase => self.include_lowercase,
            CharClass::Numbers => self.include_numbers,
            CharClass::Symbols => self.include_symbols,
        }
    }

    pub fn set_class(&mut self, class: CharClass, enabled: bool) {
        match class {
            CharClass::Uppercase => self.include_uppercase = enabled,
            CharClass::Lowercase => self.include_lowercase = enabled,
            CharClass::Numbers => self.include_numbers = enabled,
            CharClass::Symbols => self.include_symbols = enabled,
        }
    }

    /// Enabled classes, in charset order
    pub fn enabled_classes(&self) -> Vec<CharClass> {
        CharClass::ALL
            .into_iter()
            .filter(|class| self.includes(*class))
            .collect()
    }

    pub fn validate(&self) -> Result<(), GeneratorError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            return Err(GeneratorError::LengthOutOfRange {
                length: self.length,
                min: MIN_LENGTH,
                max: MAX_LENGTH,
            });
        }
        Ok(())
    }

    pub fn with_clamped_length(mut self) -> Self {
        self.length = self.length.clamp(MIN_LENGTH, MAX_LENGTH);
        self
    }
}
