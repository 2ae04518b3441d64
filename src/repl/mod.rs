//! Read-eval loop over a line-oriented input.

pub mod commands;
pub mod input;

pub use commands::{find, Command, CommandError, Flow, COMMANDS};
pub use input::clean_input;

use crate::app::Session;
use std::io::{self, BufRead, Write};

pub const PROMPT: &str = "Pokedex > ";

/// Tokenize `line` and dispatch it. Blank lines do nothing.
pub fn execute_line(session: &mut Session, line: &str, out: &mut dyn Write) -> Result<Flow, CommandError> {
    let words = clean_input(line);
    let Some((name, args)) = words.split_first() else {
        return Ok(Flow::Continue);
    };

    let command = find(name).ok_or_else(|| CommandError::UnknownCommand(name.clone()))?;
    log::debug!("Running {} {:?}", command.name, args);
    (command.handler)(session, args, out)
}

/// Prompt, read and run commands until `exit` or end of input.
///
/// Command failures are printed and the loop continues; only I/O errors on
/// `input` or `output` end it early.
pub fn run<R: BufRead, W: Write>(session: &mut Session, mut input: R, output: &mut W) -> io::Result<()> {
    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        match execute_line(session, &line, output) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => return Ok(()),
            Err(CommandError::Io(e)) => return Err(e),
            Err(e) => writeln!(output, "{}", e)?,
        }
    }
}
