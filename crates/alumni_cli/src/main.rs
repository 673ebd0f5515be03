//! Command-line driver for the alumni core.
//!
//! # Responsibility
//! - Open one session from command-line credentials.
//! - Invoke any domain operation by identifier and print its outcome.
//!
//! # Invariants
//! - A session that cannot be opened ends the process with a non-zero code.
//! - Deletes run only with `--yes`.

mod dispatch;
mod output;

use alumni_core::{
    default_log_level, init_logging, Operation, Session, StoreConfig, StoreLocation,
};
use clap::{Parser, Subcommand, ValueEnum};
use dispatch::Fields;
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "alumni", version, about = "Alumni network store")]
struct Cli {
    /// SQLite database file.
    #[arg(long, default_value = "alumni.db")]
    db: PathBuf,

    /// Use a throwaway in-memory store instead of `--db`.
    #[arg(long)]
    memory: bool,

    /// Session role: admin, student or alumni.
    #[arg(long)]
    role: String,

    /// Store user; must be the account of the role.
    #[arg(long)]
    user: String,

    #[arg(long, env = "ALUMNI_PASSWORD", hide_env_values = true)]
    password: String,

    /// Absolute directory for rotating log files; logging is off when omitted.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    #[arg(long)]
    log_level: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create or upgrade the store schema.
    Init,
    /// Print which operations the role may invoke.
    Capabilities,
    /// Invoke one operation by identifier, e.g. `alumni.view`.
    Run {
        #[arg(value_parser = parse_operation)]
        operation: Operation,

        /// Form field as `key=value`; repeatable.
        #[arg(short, long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,

        /// Confirm deletes.
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("warning: file logging disabled: {err}");
        }
    }

    let location = if cli.memory {
        StoreLocation::Memory
    } else {
        StoreLocation::File(cli.db.clone())
    };
    let config = StoreConfig {
        location,
        user: cli.user.clone(),
        password: cli.password.clone(),
    };

    let session = match Session::login(&cli.role, &config) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
    };

    let code = match cli.command {
        Command::Init => {
            info!(
                "event=cli_init module=cli status=ok session_id={}",
                session.id()
            );
            println!("{}", init_message());
            ExitCode::SUCCESS
        }
        Command::Capabilities => {
            println!("{}", output::render_capabilities(&session.capabilities(), cli.format));
            ExitCode::SUCCESS
        }
        Command::Run {
            operation,
            fields,
            yes,
        } => {
            let fields = Fields::new(fields);
            match dispatch::dispatch(&session, operation, &fields, yes) {
                Ok(outcome) => {
                    println!("{}", output::render(&outcome, cli.format));
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    eprintln!("error: {err}");
                    ExitCode::FAILURE
                }
            }
        }
    };

    if let Err(err) = session.close() {
        eprintln!("warning: {err}");
    }
    code
}

fn init_message() -> String {
    format!(
        "store ready (alumni_core {}, schema version {})",
        alumni_core::core_version(),
        alumni_core::db::migrations::latest_version()
    )
}

fn parse_operation(value: &str) -> Result<Operation, String> {
    Operation::parse(value).map_err(|err| err.to_string())
}

fn parse_field(value: &str) -> Result<(String, String), String> {
    let (key, raw) = value
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{value}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("field name is empty in `{value}`"));
    }
    Ok((key.to_string(), raw.to_string()))
}
