use anyhow::{Context, Result};
use backend::{ChildlessPolicy, ProcessManager};
use clap::Parser;
use config::Config;
use repl::Repl;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use ui::header::{parse_input, Header};

mod config;
mod repl;
mod ui;

/// Inspect and kill process trees.
#[derive(Parser)]
#[command(name = "proctree", version, about)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, env = "PROCTREE_CONFIG")]
    config: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `backend=trace`
    #[arg(long)]
    log_level: Option<String>,

    /// Kill a pid that has no children instead of reporting it as not found
    #[arg(long)]
    kill_childless: bool,

    /// Run a single command, e.g. "kill process tree 1234", and exit
    #[arg(long, value_name = "COMMAND")]
    once: Option<String>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if cli.kill_childless {
        config.kill_childless = true;
    }

    init_logging(&config.log_level);

    let manager = ProcessManager::system().with_policy(config.policy());
    if manager.policy() == ChildlessPolicy::KillProcess {
        tracing::info!("childless pids will be killed on their own");
    }

    let header = Header {
        prompt: config.prompt.clone(),
        show_usage: config.show_usage,
    };
    let repl = Repl::new(manager, header);
    let mut stdout = io::stdout().lock();

    if let Some(line) = cli.once {
        let ok = repl
            .eval(parse_input(&line), &mut stdout)
            .context("Failed to write output")?;
        return Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE });
    }

    repl.run(io::stdin().lock(), &mut stdout)
        .context("Console I/O failed")?;
    Ok(ExitCode::SUCCESS)
}

fn init_logging(level: &str) {
    // Logs go to stderr so they never interleave with command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}
