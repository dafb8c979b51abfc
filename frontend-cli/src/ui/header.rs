//! Header component with the usage block, prompt, and command parsing.

use backend::Command;
use std::io::{self, Write};

pub const SHOW_TREE_USAGE: &str = "show process tree <PID>";
pub const KILL_TREE_USAGE: &str = "kill process tree <PID>";

/// A line of user input, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Run(Command),
    Exit,
    Empty,
    /// Known verb with a missing or malformed pid; carries the usage line.
    WrongFormat(&'static str),
    Unknown,
}

pub struct Header {
    pub prompt: String,
    pub show_usage: bool,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            show_usage: true,
        }
    }
}

impl Header {
    pub fn show<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.show_usage {
            writeln!(out)?;
            writeln!(out, "Usage:")?;
            writeln!(out, "show all processes")?;
            writeln!(out, "{}", SHOW_TREE_USAGE)?;
            writeln!(out, "{}", KILL_TREE_USAGE)?;
            writeln!(out, "exit")?;
            writeln!(out)?;
        }
        write!(out, "{}", self.prompt)?;
        out.flush()
    }
}

/// Parse one input line. Words match case-insensitively and may be
/// separated by any run of whitespace.
pub fn parse_input(line: &str) -> Input {
    let words: Vec<String> = line.split_whitespace().map(str::to_lowercase).collect();
    let words: Vec<&str> = words.iter().map(String::as_str).collect();

    match words.as_slice() {
        [] => Input::Empty,
        ["exit"] | ["quit"] => Input::Exit,
        ["show", "all", "processes"] => Input::Run(Command::ListProcesses),
        ["show", "process", "tree", rest @ ..] => {
            parse_pid(rest).map_or(Input::WrongFormat(SHOW_TREE_USAGE), |pid| {
                Input::Run(Command::ShowTree(pid))
            })
        }
        ["kill", "process", "tree", rest @ ..] => {
            parse_pid(rest).map_or(Input::WrongFormat(KILL_TREE_USAGE), |pid| {
                Input::Run(Command::KillTree(pid))
            })
        }
        _ => Input::Unknown,
    }
}

fn parse_pid(rest: &[&str]) -> Option<u32> {
    match rest {
        [pid] => pid.parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("show all processes", Input::Run(Command::ListProcesses))]
    #[case("  SHOW All   Processes \n", Input::Run(Command::ListProcesses))]
    #[case("show process tree 42", Input::Run(Command::ShowTree(42)))]
    #[case("Kill Process Tree 7\n", Input::Run(Command::KillTree(7)))]
    #[case("kill process tree 0", Input::Run(Command::KillTree(0)))]
    #[case("show process tree", Input::WrongFormat(SHOW_TREE_USAGE))]
    #[case("show process tree abc", Input::WrongFormat(SHOW_TREE_USAGE))]
    #[case("show process tree -5", Input::WrongFormat(SHOW_TREE_USAGE))]
    #[case("kill process tree 1 2", Input::WrongFormat(KILL_TREE_USAGE))]
    #[case("kill process tree 99999999999", Input::WrongFormat(KILL_TREE_USAGE))]
    #[case("EXIT", Input::Exit)]
    #[case("quit", Input::Exit)]
    #[case("", Input::Empty)]
    #[case("   \n", Input::Empty)]
    #[case("show all", Input::Unknown)]
    #[case("kill 42", Input::Unknown)]
    fn parses_input(#[case] line: &str, #[case] expected: Input) {
        assert_eq!(parse_input(line), expected);
    }

    #[test]
    fn usage_block_precedes_prompt() {
        let mut out = Vec::new();
        Header::default().show(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\nUsage:\nshow all processes\n"));
        assert!(text.ends_with("exit\n\n> "));
    }

    #[test]
    fn usage_block_can_be_hidden() {
        let header = Header {
            prompt: "$ ".to_string(),
            show_usage: false,
        };
        let mut out = Vec::new();
        header.show(&mut out).unwrap();
        assert_eq!(out, b"$ ");
    }
}
