use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use rxstate::config::Config;
use rxstate::logging::init_tracing;
use rxstate::pipeline::ViewInput;
use rxstate::service::SimulatedUserService;
use rxstate::ui::root::RootScreen;
use rxstate::ui::view::{AccountView, ViewCommand};

/// Interactive console front end for the create-account screen.
#[derive(Debug, Parser)]
#[command(name = "rxstate", version)]
struct Cli {
    /// Config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Quiet interval before an email check runs, in milliseconds.
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// Simulated account-creation latency, in milliseconds.
    #[arg(long)]
    create_latency_ms: Option<u64>,

    /// Shortest accepted password.
    #[arg(long)]
    min_password_len: Option<usize>,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(ms) = self.debounce_ms {
            config.pipeline.check_debounce_ms = ms;
        }
        if let Some(ms) = self.create_latency_ms {
            config.service.create_latency_ms = ms;
        }
        if let Some(len) = self.min_password_len {
            config.service.min_password_len = len;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum ConsoleCommand {
    Email(String),
    Submit { email: String, password: String },
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<ConsoleCommand> {
    let line = line.trim();
    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
    match verb {
        "email" => Some(ConsoleCommand::Email(rest.trim().to_string())),
        "submit" => {
            let mut parts = rest.split_whitespace();
            let email = parts.next()?.to_string();
            let password = parts.next().unwrap_or_default().to_string();
            Some(ConsoleCommand::Submit { email, password })
        }
        "help" | "?" => Some(ConsoleCommand::Help),
        "quit" | "exit" => Some(ConsoleCommand::Quit),
        _ => None,
    }
}

const HELP: &str = "commands: email <text> | submit <email> <password> | help | quit";

struct ConsoleView;

impl AccountView for ConsoleView {
    fn apply(&mut self, command: ViewCommand) {
        match command {
            ViewCommand::SetInputsEnabled(enabled) => {
                println!("[view] inputs {}", if enabled { "enabled" } else { "disabled" })
            }
            ViewCommand::SetProgressVisible(true) => println!("[view] working..."),
            ViewCommand::SetProgressVisible(false) => {}
            ViewCommand::ShowError(message) => println!("[view] error: {}", message),
            ViewCommand::Dismiss => println!("[view] account created, closing screen"),
        }
    }
}

fn dispatch(input: &ViewInput, command: ConsoleCommand) -> anyhow::Result<bool> {
    match command {
        ConsoleCommand::Email(text) => input.email_changed(text)?,
        ConsoleCommand::Submit { email, password } => input.submit_pressed(email, password)?,
        ConsoleCommand::Help => println!("{}", HELP),
        ConsoleCommand::Quit => return Ok(false),
    }
    Ok(true)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)
        .with_context(|| format!("loading {}", path.display()))?;
    cli.apply(&mut config);
    config.validate()?;

    init_tracing(&config.logging.level);

    let service = Arc::new(SimulatedUserService::from_config(&config.service));
    let root = RootScreen::new(service, config.pipeline.clone());
    let screen = root.open_create_account();
    let input = screen.input();
    let mut view = screen.bind_view(ConsoleView);

    println!("{}", HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            _ = &mut view => break,
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_command(&line) {
                    Some(command) => {
                        if !dispatch(&input, command)? {
                            break;
                        }
                    }
                    None if line.trim().is_empty() => {}
                    None => println!("unknown command; {}", HELP),
                }
            }
        }
    }

    screen.shutdown().await;
    Ok(())
}
