use std::path::PathBuf;

use crate::rng::GameRng;
use crate::session::MaxErrors;
use crate::word_bank::DEFAULT_WORD_LIST;

/// Runtime settings for one program run. Nothing here is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub word_list: PathBuf,
    pub max_errors: MaxErrors,
    pub show_history: bool,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            word_list: PathBuf::from(DEFAULT_WORD_LIST),
            max_errors: MaxErrors::default(),
            show_history: true,
            seed: None,
        }
    }
}

impl Settings {
    /// Word-selection RNG. The seed is logged so a round can be replayed with `--seed`.
    pub fn rng(&self) -> GameRng {
        let rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        tracing::info!(seed = rng.seed(), fixed = self.seed.is_some(), "word rng seeded");
        rng
    }
}
