//! Read-eval loop over any line source.

use crate::ui::header::{parse_input, Header, Input};
use crate::ui::process_table::ProcessTable;
use backend::{ProcessKiller, ProcessManager, SnapshotProvider};
use std::io::{self, BufRead, Write};
use tracing::error;

pub struct Repl<S, K> {
    manager: ProcessManager<S, K>,
    header: Header,
}

impl<S, K> Repl<S, K>
where
    S: SnapshotProvider,
    K: ProcessKiller,
{
    pub fn new(manager: ProcessManager<S, K>, header: Header) -> Self {
        Self { manager, header }
    }

    /// Prompt and evaluate until `exit` or end of input.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, out: &mut W) -> io::Result<()> {
        loop {
            self.header.show(out)?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                return Ok(());
            }

            match parse_input(&line) {
                Input::Exit => return Ok(()),
                parsed => {
                    self.eval(parsed, out)?;
                }
            }
        }
    }

    /// Evaluate one parsed line. Returns `false` when the line was rejected
    /// or the command failed.
    pub fn eval<W: Write>(&self, input: Input, out: &mut W) -> io::Result<bool> {
        let command = match input {
            Input::Run(command) => command,
            Input::Exit => return Ok(true),
            Input::Empty => {
                writeln!(out, "Bad input!")?;
                return Ok(false);
            }
            Input::WrongFormat(usage) => {
                writeln!(out, "Wrong format! Usage: {}", usage)?;
                return Ok(false);
            }
            Input::Unknown => {
                writeln!(out, "Unknown command!")?;
                return Ok(false);
            }
        };

        match self.manager.execute(command) {
            Ok(response) => {
                ProcessTable::show(out, command, &response)?;
                Ok(true)
            }
            Err(e) => {
                error!(?command, error = %e, "command failed");
                writeln!(out, "Error: {}", e)?;
                Ok(false)
            }
        }
    }
}
