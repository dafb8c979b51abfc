//! Renders command responses as text lines.

use crate::ui::status_bar::StatusBar;
use backend::{Command, Outcome, Response};
use std::io::{self, Write};

pub struct ProcessTable;

impl ProcessTable {
    /// Write the response to `command`.
    pub fn show<W: Write>(out: &mut W, command: Command, response: &Response) -> io::Result<()> {
        match response {
            Response::Processes(processes) => {
                for p in processes {
                    writeln!(
                        out,
                        "Process ID: {}, Parent Process ID: {}, Name: {}",
                        p.pid, p.parent_pid, p.name
                    )?;
                }
                writeln!(out, "{}", StatusBar::processes(processes))?;
            }
            Response::Children { pid, children } => {
                writeln!(out, "\nProcesses with Parent Process ID {}:", pid)?;
                for child in children {
                    writeln!(out, "Process ID: {}", child)?;
                }
            }
            Response::Terminated { pid, results } => {
                writeln!(out, "\nStopping processes with Parent Process ID {}:", pid)?;
                for result in results {
                    match &result.outcome {
                        Outcome::Success => {
                            writeln!(out, "Process with PID {} is stopped.", result.pid)?
                        }
                        Outcome::Failed(reason) => writeln!(
                            out,
                            "Error while stopping with PID {}: {}",
                            result.pid, reason
                        )?,
                    }
                }
                writeln!(out, "{}", StatusBar::terminations(results))?;
            }
            Response::NotFound(pid) => match command {
                Command::KillTree(_) => writeln!(out, "Process with PID {} wasn't found.", pid)?,
                _ => {
                    writeln!(out, "\nProcesses with Parent Process ID {}:", pid)?;
                    writeln!(out, "No processes found with Parent Process ID {}.", pid)?;
                }
            },
        }
        Ok(())
    }
}
