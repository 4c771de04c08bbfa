use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod common;

#[derive(Parser)]
#[command(name = "terminalplus-cli", version, about = "Terminal+ vibe ranking CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ranked vibes, status and boosts for now or a given time
    Context(commands::context::ContextArgs),
    /// Boost multipliers for a tier and hour
    Boosts(commands::boosts::BoostsArgs),
    /// Time-of-day profile
    Profile(commands::profile::ProfileArgs),
    /// Urgency tiers with their thresholds and orders
    Tiers,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Context(args) => commands::context::run(args),
        Commands::Boosts(args) => commands::boosts::run(args),
        Commands::Profile(args) => commands::profile::run(args),
        Commands::Tiers => commands::tiers::run(),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
