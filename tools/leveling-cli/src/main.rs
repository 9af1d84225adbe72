//! Leveling CLI - Command line tool for previewing the storefront.
//!
//! Commands:
//! - `leveling routes` - List the route table
//! - `leveling render` - Stream a page's initial HTML
//! - `leveling simulate` - Run a browsing session on the simulated host
//! - `leveling submit` - Fill and submit a form

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{RenderArgs, SimulateArgs, SubmitArgs};

/// Leveling CLI - Preview and exercise the Leveling storefront
#[derive(Parser)]
#[command(name = "leveling")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the storefront routes
    Routes,

    /// Stream the initial HTML of a page to stdout
    Render(RenderArgs),

    /// Run a browsing session and print the resulting page
    Simulate(SimulateArgs),

    /// Fill and submit a form
    Submit(SubmitArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Routes => commands::routes::run(&ctx).await,
        Commands::Render(args) => commands::render::run(args, &ctx).await,
        Commands::Simulate(args) => commands::simulate::run(args, &ctx).await,
        Commands::Submit(args) => commands::submit::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
