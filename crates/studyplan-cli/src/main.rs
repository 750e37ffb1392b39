use std::path::PathBuf;

use clap::{Parser, Subcommand};
use studyplan_core::{Config, CoreError, ErrorKind};

mod commands;

#[derive(Parser)]
#[command(name = "studyplan", version, about = "Study session planner")]
struct Cli {
    /// Config file (default: ~/.config/studyplan/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack a request into study sessions
    Plan(commands::plan::PlanArgs),
    /// Print the prompt the model planner would send
    Prompt(commands::prompt::PromptArgs),
    /// Parse a saved model reply into a schedule
    ParseReply(commands::reply::ReplyArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("STUDYPLAN_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Exit code: 2 for requests that can never succeed as sent, 1 otherwise.
fn exit_code(err: &(dyn std::error::Error + 'static)) -> i32 {
    match err.downcast_ref::<CoreError>().map(CoreError::kind) {
        Some(ErrorKind::BadRequest) => 2,
        _ => 1,
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = cli.config.as_deref();
    let result = match cli.command {
        Commands::Plan(args) => commands::plan::run(args, &Config::load_or_default(config_path)),
        Commands::Prompt(args) => {
            commands::prompt::run(args, &Config::load_or_default(config_path))
        }
        Commands::ParseReply(args) => commands::reply::run(args),
        Commands::Config { action } => commands::config::run(action, config_path),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(exit_code(e.as_ref()));
    }
}
