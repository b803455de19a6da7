//! Line-oriented front end: one guess or command per input line, one JSON
//! object per output line. Works without a terminal.
//!
//! Commands:
//! - `:new` starts a new round
//! - `:max N` sets the error limit for the next round
//! - `:quit` stops reading
//!
//! Any other line is passed to [`GameSession::guess`] after trimming.

use std::io::{self, BufRead, Write};

use serde::Serialize;

use crate::session::{GameSession, StatusSnapshot};
use crate::word_bank::WordBank;

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Response {
    Status(StatusSnapshot),
    Configured { accepted: bool, configured_max_errors: u8 },
}

pub fn run<R: BufRead, W: Write>(
    session: &mut GameSession,
    bank: &WordBank,
    input: R,
    mut output: W,
) -> io::Result<()> {
    emit(&mut output, &Response::Status(session.status()))?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();

        let response = match line.split_once(' ').unwrap_or((line, "")) {
            (":quit", _) => break,
            (":new", _) => {
                session.new_round(bank);
                Response::Status(session.status())
            }
            (":max", arg) => {
                let accepted = arg
                    .trim()
                    .parse::<u32>()
                    .map(|n| session.configure_max_errors(n))
                    .unwrap_or(false);
                Response::Configured {
                    accepted,
                    configured_max_errors: session.configured_max_errors().get(),
                }
            }
            _ => Response::Status(session.guess(line)),
        };

        emit(&mut output, &response)?;
    }

    output.flush()
}

fn emit<W: Write>(output: &mut W, response: &Response) -> io::Result<()> {
    serde_json::to_writer(&mut *output, response)?;
    writeln!(output)
}
