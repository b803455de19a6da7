use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Settings;
use crate::session::{GameSession, GuessOutcome, IgnoreReason, MaxErrors, StatusSnapshot};
use crate::word_bank::{FileWordSource, WordBank};

#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Playing,
    /// "Set Max Attempts" prompt with the digits typed so far
    EditingMaxErrors { input: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Continue,
    Quit,
}

/// Terminal front end state wrapped around a [`GameSession`]
#[derive(Debug)]
pub struct App {
    pub session: GameSession,
    pub bank: WordBank,
    pub show_history: bool,
    pub mode: AppMode,
    /// One-line feedback below the word, cleared by the next useful action
    pub notice: Option<String>,
}

impl App {
    /// Load the configured word list and start the first round.
    pub fn new(settings: &Settings) -> Self {
        let bank = WordBank::load(&FileWordSource::new(&settings.word_list));
        Self::with_bank(bank, settings)
    }

    pub fn with_bank(bank: WordBank, settings: &Settings) -> Self {
        let session = GameSession::with_max_errors(&bank, settings.rng(), settings.max_errors);
        Self {
            session,
            bank,
            show_history: settings.show_history,
            mode: AppMode::Playing,
            notice: None,
        }
    }

    pub fn status(&self) -> StatusSnapshot {
        self.session.status()
    }

    pub fn new_round(&mut self) {
        self.session.new_round(&self.bank);
        self.notice = None;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return AppAction::Quit;
        }

        if self.mode == AppMode::Playing {
            return self.handle_playing_key(key);
        }
        self.handle_prompt_key(key);
        AppAction::Continue
    }

    fn handle_playing_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Esc => return AppAction::Quit,
            KeyCode::F(2) => {
                self.mode = AppMode::EditingMaxErrors {
                    input: self.session.configured_max_errors().get().to_string(),
                };
            }
            KeyCode::F(3) => self.show_history = !self.show_history,
            KeyCode::F(5) => self.new_round(),
            KeyCode::Enter if self.session.state().is_terminal() => self.new_round(),
            // Shift is allowed for capitals; Alt and Ctrl chords are not guesses.
            KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                let snapshot = self.session.guess_letter(c);
                self.notice = notice_for(&snapshot);
            }
            _ => {}
        }
        AppAction::Continue
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        let AppMode::EditingMaxErrors { input } = &mut self.mode else {
            return;
        };

        match key.code {
            KeyCode::Esc => self.mode = AppMode::Playing,
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() && input.len() < 3 => input.push(c),
            KeyCode::Enter => {
                let accepted = input
                    .parse::<u32>()
                    .map(|n| self.session.configure_max_errors(n))
                    .unwrap_or(false);

                self.notice = Some(if accepted {
                    format!(
                        "Max attempts set to {} for the next round",
                        self.session.configured_max_errors().get()
                    )
                } else {
                    format!(
                        "Max attempts must be between {} and {}",
                        MaxErrors::MIN,
                        MaxErrors::MAX
                    )
                });
                self.mode = AppMode::Playing;
            }
            _ => {}
        }
    }
}

fn notice_for(snapshot: &StatusSnapshot) -> Option<String> {
    match snapshot.last_outcome? {
        GuessOutcome::Ignored { reason } => Some(
            match reason {
                IgnoreReason::AlreadyGuessed => "Already guessed",
                IgnoreReason::NotALetter => "Letters only",
                IgnoreReason::RoundOver => "Round over, press Enter for a new word",
            }
            .to_string(),
        ),
        GuessOutcome::Hit { .. } | GuessOutcome::Miss { .. } => None,
    }
}
