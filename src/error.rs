use thiserror::Error;

#[derive(Debug, Error)]
pub enum HangmanError {
    #[error("max errors must be between 1 and 8, got {0}")]
    InvalidMaxErrors(u32),

    #[error("word bank must contain at least one word")]
    EmptyWordBank,
}
