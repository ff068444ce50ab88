//! Interactive prompt
//!
//! Each input line is either a comma-separated opponent selection or a
//! `:command`. Errors are reported and the prompt keeps going.

use super::store::RosterStore;
use crate::batch::parse_selection_line;
use crate::error::{BpError, BpResult};
use crate::report::{render_roster, Report};
use log::debug;
use std::io::{BufRead, Write};

const HELP: &str = "\
Enter opponent decks separated by commas, e.g. Gardevoir, Charizard, Charizard
Commands:
  :roster   list players and known opponent decks
  :reload   re-read the roster file
  :help     show this help
  :quit     leave
";

enum Reply {
    Text(String),
    Quit,
}

/// Prompt over a roster store
pub struct Session<'a> {
    store: &'a RosterStore,
    json: bool,
    color: bool,
}

impl<'a> Session<'a> {
    pub fn new(store: &'a RosterStore, json: bool, color: bool) -> Self {
        Self { store, json, color }
    }

    /// Read lines from `input` until EOF or `:quit`
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> BpResult<()> {
        output.write_all(HELP.as_bytes())?;
        write!(output, "> ")?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            match self.handle_line(&line) {
                Ok(Reply::Quit) => break,
                Ok(Reply::Text(text)) => output.write_all(text.as_bytes())?,
                Err(e) => writeln!(output, "Error: {}", e)?,
            }
            write!(output, "> ")?;
            output.flush()?;
        }

        writeln!(output)?;
        Ok(())
    }

    fn handle_line(&self, line: &str) -> BpResult<Reply> {
        let trimmed = line.trim();
        if let Some(command) = trimmed.strip_prefix(':') {
            return self.handle_command(command.trim());
        }

        let Some(selection) = parse_selection_line(trimmed) else {
            return Ok(Reply::Text(String::new()));
        };
        debug!("Selection: {:?}", selection);

        let roster = self.store.snapshot();
        let report = Report::build(&roster, &selection)?;
        let text = if self.json {
            let mut json = report.to_json()?;
            json.push('\n');
            json
        } else {
            report.render(self.color)
        };
        Ok(Reply::Text(text))
    }

    fn handle_command(&self, command: &str) -> BpResult<Reply> {
        match command {
            "q" | "quit" | "exit" => Ok(Reply::Quit),
            "h" | "help" => Ok(Reply::Text(HELP.to_string())),
            "roster" => Ok(Reply::Text(render_roster(&self.store.snapshot()))),
            "reload" => {
                let roster = self.store.reload()?;
                Ok(Reply::Text(format!(
                    "Reloaded {:?}: {} players\n",
                    self.store.path(),
                    roster.len()
                )))
            }
            other => Err(BpError::UnknownCommand(other.to_string())),
        }
    }
}
