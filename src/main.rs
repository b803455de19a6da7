use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::Duration,
};

use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use hangman::{
    app::{App, AppAction},
    config::Settings,
    logging, plain,
    runtime::{CrosstermEventSource, GameEvent, GameEventSource, Runner},
    session::{GameSession, MaxErrors},
    word_bank::{FileWordSource, WordBank, DEFAULT_WORD_LIST},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

const IDLE_INTERVAL_MS: u64 = 250;

/// guess the word one letter at a time before the gallows is complete
#[derive(Parser, Debug, Clone)]
#[clap(version, about)]
pub struct Cli {
    /// word list, one word per line (built-in words are used if it cannot be read)
    #[clap(long, default_value = DEFAULT_WORD_LIST)]
    words: PathBuf,

    /// wrong guesses allowed per round (1-8)
    #[clap(short = 'm', long, default_value_t = 8, value_parser = parse_max_errors)]
    max_errors: u8,

    /// seed for word selection, for reproducible rounds
    #[clap(long)]
    seed: Option<u64>,

    /// hide the list of guessed letters
    #[clap(long)]
    no_history: bool,

    /// read guesses from stdin and print JSON status lines instead of the TUI
    #[clap(long)]
    plain: bool,
}

fn parse_max_errors(s: &str) -> Result<u8, String> {
    let n: u32 = s.parse().map_err(|e| format!("{e}"))?;
    MaxErrors::new(n)
        .map(MaxErrors::get)
        .map_err(|e| e.to_string())
}

impl From<&Cli> for Settings {
    fn from(cli: &Cli) -> Self {
        Self {
            word_list: cli.words.clone(),
            // Range is enforced by the value parser.
            max_errors: MaxErrors::new(u32::from(cli.max_errors)).unwrap_or_default(),
            show_history: !cli.no_history,
            seed: cli.seed,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    logging::init();

    let settings = Settings::from(&cli);
    tracing::info!(?settings, "starting");

    if cli.plain {
        let bank = WordBank::load(&FileWordSource::new(&settings.word_list));
        let mut session = GameSession::with_max_errors(&bank, settings.rng(), settings.max_errors);
        plain::run(&mut session, &bank, stdin().lock(), io::stdout().lock())?;
        return Ok(());
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty (use --plain for piped input)")
            .exit();
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&settings);
    let runner = Runner::new(
        CrosstermEventSource::new(),
        Duration::from_millis(IDLE_INTERVAL_MS),
    );
    let result = run_tui(&mut terminal, &mut app, &runner);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_tui<B: Backend, E: GameEventSource>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &Runner<E>,
) -> Result<(), Box<dyn Error>> {
    terminal.draw(|f| f.render_widget(&*app, f.area()))?;

    loop {
        match runner.step() {
            GameEvent::Tick => continue,
            GameEvent::Disconnected => {
                tracing::error!("terminal event stream closed");
                return Err("terminal event stream closed".into());
            }
            GameEvent::Resize => {}
            GameEvent::Key(key) => {
                if app.handle_key(key) == AppAction::Quit {
                    break;
                }
            }
        }
        terminal.draw(|f| f.render_widget(&*app, f.area()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use hangman::runtime::TestEventSource;
    use ratatui::backend::TestBackend;
    use std::sync::mpsc;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["hangman"]);

        assert_eq!(cli.words, PathBuf::from("words.txt"));
        assert_eq!(cli.max_errors, 8);
        assert_eq!(cli.seed, None);
        assert!(!cli.no_history);
        assert!(!cli.plain);
    }

    #[test]
    fn test_cli_max_errors() {
        let cli = Cli::parse_from(["hangman", "-m", "3"]);
        assert_eq!(cli.max_errors, 3);

        let cli = Cli::parse_from(["hangman", "--max-errors", "1"]);
        assert_eq!(cli.max_errors, 1);
    }

    #[test]
    fn test_cli_rejects_out_of_range_max_errors() {
        assert!(Cli::try_parse_from(["hangman", "-m", "9"]).is_err());
        assert!(Cli::try_parse_from(["hangman", "-m", "0"]).is_err());
        assert!(Cli::try_parse_from(["hangman", "-m", "many"]).is_err());
    }

    #[test]
    fn test_cli_to_settings() {
        let cli = Cli::parse_from([
            "hangman",
            "--words",
            "list.txt",
            "-m",
            "5",
            "--seed",
            "42",
            "--no-history",
        ]);

        let settings = Settings::from(&cli);

        assert_eq!(settings.word_list, PathBuf::from("list.txt"));
        assert_eq!(settings.max_errors.get(), 5);
        assert_eq!(settings.seed, Some(42));
        assert!(!settings.show_history);
    }

    #[test]
    fn test_run_tui_quits_on_esc() {
        let bank = WordBank::from_words(["cat"]).unwrap();
        let mut app = App::with_bank(bank, &Settings::default());

        let (tx, rx) = mpsc::channel();
        for code in [KeyCode::Char('c'), KeyCode::Char('q'), KeyCode::Esc] {
            tx.send(GameEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
                .unwrap();
        }
        let runner = Runner::new(TestEventSource::new(rx), Duration::from_millis(5));

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        run_tui(&mut terminal, &mut app, &runner).unwrap();

        let status = app.status();
        assert_eq!(status.revealed, "C__");
        assert_eq!(status.error_count, 1);
    }

    #[test]
    fn test_run_tui_returns_when_events_stop() {
        let bank = WordBank::from_words(["cat"]).unwrap();
        let mut app = App::with_bank(bank, &Settings::default());

        let (tx, rx) = mpsc::channel();
        tx.send(GameEvent::Key(KeyEvent::new(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
        )))
        .unwrap();
        drop(tx);
        let runner = Runner::new(TestEventSource::new(rx), Duration::from_millis(250));

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let err = run_tui(&mut terminal, &mut app, &runner).unwrap_err();

        assert_eq!(err.to_string(), "terminal event stream closed");
        assert_eq!(app.status().revealed, "_A_");
    }

    #[test]
    fn test_idle_interval_constant() {
        const _: () = assert!(IDLE_INTERVAL_MS > 0);
        const _: () = assert!(IDLE_INTERVAL_MS <= 1000);
    }
}
