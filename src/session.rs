use serde::Serialize;

use crate::error::HangmanError;
use crate::rng::GameRng;
use crate::word_bank::WordBank;

/// Character shown for a letter that has not been guessed yet.
pub const PLACEHOLDER: char = '_';

/// Highest illustration index; also the largest allowed error limit.
pub const MAX_ERROR_LEVEL: u8 = 8;

/// Allowed number of wrong guesses before a round is lost, in `1..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxErrors(u8);

impl MaxErrors {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = MAX_ERROR_LEVEL;

    pub fn new(n: u32) -> Result<Self, HangmanError> {
        match u8::try_from(n) {
            Ok(v) if (Self::MIN..=Self::MAX).contains(&v) => Ok(Self(v)),
            _ => Err(HangmanError::InvalidMaxErrors(n)),
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for MaxErrors {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl TryFrom<u32> for MaxErrors {
    type Error = HangmanError;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameState::InProgress)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    RoundOver,
    NotALetter,
    AlreadyGuessed,
}

/// What a single call to [`GameSession::guess`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GuessOutcome {
    Hit { letter: char, occurrences: usize },
    Miss { letter: char },
    Ignored { reason: IgnoreReason },
}

/// Read-only view of a session for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusSnapshot {
    pub revealed: String,
    pub guessed_letters: Vec<char>,
    pub error_count: u8,
    pub max_errors: u8,
    pub state: GameState,
    /// Only set once the round is over.
    pub secret_word: Option<String>,
    pub last_outcome: Option<GuessOutcome>,
}

impl StatusSnapshot {
    /// Revealed word with a space between positions, e.g. `C _ _`.
    pub fn display_word(&self) -> String {
        itertools::join(self.revealed.chars(), " ")
    }

    /// Index of the illustration to show, `0..=8`.
    pub fn error_level(&self) -> u8 {
        self.error_count.min(MAX_ERROR_LEVEL)
    }

    pub fn history(&self) -> String {
        itertools::join(&self.guessed_letters, ", ")
    }

    pub fn message(&self) -> Option<String> {
        let word = self.secret_word.as_deref()?;
        match self.state {
            GameState::Won => Some(format!("You Win! Word: {word}")),
            GameState::Lost => Some(format!("Game Over! Word was: {word}")),
            GameState::InProgress => None,
        }
    }
}

/// One round of hangman plus the limit to use for the next round
#[derive(Debug, Clone)]
pub struct GameSession {
    secret_word: Vec<char>,
    revealed: Vec<Option<char>>,
    guessed_letters: Vec<char>,
    error_count: u8,
    max_errors: MaxErrors,
    configured_max_errors: MaxErrors,
    state: GameState,
    last_outcome: Option<GuessOutcome>,
    rng: GameRng,
}

impl GameSession {
    /// Start a first round with the default error limit.
    pub fn new(bank: &WordBank, rng: GameRng) -> Self {
        Self::with_max_errors(bank, rng, MaxErrors::default())
    }

    pub fn with_max_errors(bank: &WordBank, rng: GameRng, max_errors: MaxErrors) -> Self {
        let mut session = Self {
            secret_word: Vec::new(),
            revealed: Vec::new(),
            guessed_letters: Vec::new(),
            error_count: 0,
            max_errors,
            configured_max_errors: max_errors,
            state: GameState::InProgress,
            last_outcome: None,
            rng,
        };
        session.new_round(bank);
        session
    }

    /// Configure `max_errors` and start a new round. An out-of-range limit is
    /// rejected and leaves the session untouched.
    pub fn reset(&mut self, bank: &WordBank, max_errors: u32) -> Result<(), HangmanError> {
        self.configured_max_errors = MaxErrors::new(max_errors)?;
        self.new_round(bank);
        Ok(())
    }

    /// Start a new round with the configured limit.
    pub fn new_round(&mut self, bank: &WordBank) {
        let word = bank.pick_random(&mut self.rng).to_uppercase();

        self.secret_word = word.chars().collect();
        self.revealed = vec![None; self.secret_word.len()];
        self.guessed_letters.clear();
        self.error_count = 0;
        self.max_errors = self.configured_max_errors;
        self.state = GameState::InProgress;
        self.last_outcome = None;

        tracing::info!(
            letters = self.secret_word.len(),
            max_errors = self.max_errors.get(),
            "new round"
        );
    }

    /// Set the limit for the next round. Returns `false` for values outside `1..=8`.
    pub fn configure_max_errors(&mut self, n: u32) -> bool {
        match MaxErrors::new(n) {
            Ok(max) => {
                self.configured_max_errors = max;
                tracing::debug!(max_errors = n, "max errors configured");
                true
            }
            Err(err) => {
                tracing::debug!(%err, "max errors rejected");
                false
            }
        }
    }

    pub fn configured_max_errors(&self) -> MaxErrors {
        self.configured_max_errors
    }

    /// Guess with raw front-end input. Anything other than exactly one letter
    /// is ignored.
    pub fn guess(&mut self, input: &str) -> StatusSnapshot {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.guess_letter(c),
            _ => self.ignore(IgnoreReason::NotALetter),
        }
    }

    pub fn guess_letter(&mut self, c: char) -> StatusSnapshot {
        if self.state.is_terminal() {
            return self.ignore(IgnoreReason::RoundOver);
        }

        let letter = match normalize_letter(c) {
            Some(letter) => letter,
            None => return self.ignore(IgnoreReason::NotALetter),
        };

        if self.guessed_letters.contains(&letter) {
            return self.ignore(IgnoreReason::AlreadyGuessed);
        }

        self.guessed_letters.push(letter);

        let mut occurrences = 0;
        for (slot, &secret) in self.revealed.iter_mut().zip(&self.secret_word) {
            if secret == letter {
                *slot = Some(secret);
                occurrences += 1;
            }
        }

        let outcome = if occurrences == 0 {
            self.error_count += 1;
            GuessOutcome::Miss { letter }
        } else {
            GuessOutcome::Hit {
                letter,
                occurrences,
            }
        };
        tracing::debug!(?outcome, errors = self.error_count, "guess");
        self.last_outcome = Some(outcome);

        if self.error_count >= self.max_errors.get() {
            self.state = GameState::Lost;
        } else if self.revealed.iter().all(Option::is_some) {
            self.state = GameState::Won;
        }

        if self.state.is_terminal() {
            tracing::info!(state = %self.state, errors = self.error_count, "round over");
        }

        self.status()
    }

    pub fn status(&self) -> StatusSnapshot {
        StatusSnapshot {
            revealed: self
                .revealed
                .iter()
                .map(|slot| slot.unwrap_or(PLACEHOLDER))
                .collect(),
            guessed_letters: self.guessed_letters.clone(),
            error_count: self.error_count,
            max_errors: self.max_errors.get(),
            state: self.state,
            secret_word: self
                .state
                .is_terminal()
                .then(|| self.secret_word.iter().collect()),
            last_outcome: self.last_outcome,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    fn ignore(&mut self, reason: IgnoreReason) -> StatusSnapshot {
        tracing::trace!(?reason, "guess ignored");
        self.last_outcome = Some(GuessOutcome::Ignored { reason });
        self.status()
    }
}

/// Uppercase form of `c` when it is a letter with a single-character uppercase.
pub(crate) fn normalize_letter(c: char) -> Option<char> {
    if !c.is_alphabetic() {
        return None;
    }
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => Some(u),
        _ => None,
    }
}
