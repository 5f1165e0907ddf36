//! gs1 - encode GS1-128 element strings from the command line.
//!
//! Thin front end over the `gs1-128` crate: reads an element string or
//! product-label fields, prints the FNC1-delimited stream a Code 128
//! renderer consumes.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{CommandExecutor, ComposeCommand, EncodeCommand, InspectCommand, TableCommand};

/// Encode GS1 Application Identifier data for GS1-128 barcodes
#[derive(Parser)]
#[command(name = "gs1")]
#[command(version)]
#[command(about = "Encode GS1 Application Identifier data for GS1-128 barcodes")]
#[command(long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a bracketed element string such as "(01)12345678901234(10)LOT42"
    ///
    /// Input that does not start with '(' is passed through unchanged.
    Encode(EncodeCommand),

    /// Build and encode a product label from GTIN, lot number, and production date
    Compose(ComposeCommand),

    /// Split an encoded stream back into its AI segments
    Inspect(InspectCommand),

    /// Print the fixed-length AI table
    Table(TableCommand),
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| default.to_string()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Encode(cmd) => cmd.execute(),
        Commands::Compose(cmd) => cmd.execute(),
        Commands::Inspect(cmd) => cmd.execute(),
        Commands::Table(cmd) => cmd.execute(),
    }
}
