//! recordkeep CLI - run one of the record-keeping web apps
//!
//! - `school`: students, courses and teachers (HTML forms)
//! - `catalog`: book catalog with a paginated, sortable JSON API
//! - `inventory`: product inventory (HTML forms)

use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use commands::{run_serve, App, ServeArgs};
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "recordkeep",
    author,
    version,
    about = "Minimal record-keeping web apps over SQLite"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Students, courses and teachers
    School(ServeArgs),
    /// Book catalog JSON API
    Catalog(ServeArgs),
    /// Product inventory
    Inventory(ServeArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = tracing_setup::init(&TracingConfig { debug: cli.debug }) {
        eprintln!("warning: {:#}", err);
    }

    let result = match cli.command {
        Commands::School(args) => run_serve(App::School, args).await,
        Commands::Catalog(args) => run_serve(App::Catalog, args).await,
        Commands::Inventory(args) => run_serve(App::Inventory, args).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
