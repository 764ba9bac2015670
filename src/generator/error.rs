use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Length must be between {min} and {max}, got {length}")]
    LengthOutOfRange { length: usize, min: usize, max: usize },

    #[error("Length must be a whole number, got {0:?}")]
    InvalidLength(String),
}
