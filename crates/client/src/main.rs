//! `decon` command-line client.
//!
//! Loads a content data directory into a runtime session and runs one
//! deconstructor operation against it.
//!
//! ```bash
//! decon --data-dir crates/game/content/data materials
//! decon inspect Potion
//! decon --seed 7 --hold 5=3 process "Crystal Cluster" --times 3
//! decon --var 1=8 command "Deconstructor process-item 1"
//! ```

mod commands;
mod session;

use anyhow::Result;
use clap::Parser;
use commands::{Inspect, Materials, Process, RunCommand};
use session::SessionArgs;

/// Deconstruct items into their materials
#[derive(Parser)]
#[command(name = "decon")]
#[command(about = "Deconstruct items into their materials", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    session: SessionArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// List registered materials
    Materials(Materials),

    /// Show the drop table of an item
    Inspect(Inspect),

    /// Deconstruct an item held by the party
    Process(Process),

    /// Run a plugin command line
    Command(RunCommand),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for DECON_DATA_DIR and RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let session = cli.session.build()?;

    match cli.command {
        Command::Materials(cmd) => cmd.execute(session),
        Command::Inspect(cmd) => cmd.execute(session),
        Command::Process(cmd) => cmd.execute(session),
        Command::Command(cmd) => cmd.execute(session),
    }
}
