// Library surface for headless/integration tests and alternative front ends.
pub mod app;
pub mod app_dirs;
pub mod config;
pub mod error;
pub mod logging;
pub mod plain;
pub mod rng;
pub mod runtime;
pub mod session;
pub mod ui;
pub mod word_bank;

pub use error::HangmanError;
pub use session::{GameSession, GameState, StatusSnapshot};
pub use word_bank::WordBank;
