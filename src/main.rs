//
//  nifty-cli
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use nifty_cli::cli::{Cli, Commands};
use nifty_cli::exit_codes;
use nifty_cli::output::write_error;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    init_logging();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    let result = run(cli).await;

    // Handle result and exit
    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            write_error(&format!("{e:#}"));
            std::process::exit(exit_codes::for_error(&e));
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("NIFTY_DEBUG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Main command dispatcher
async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Props(cmd) => cmd.run(&cli.global).await,
        Commands::Options(cmd) => cmd.run(&cli.global).await,
        Commands::Call(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("nifty version {}", nifty_cli::VERSION);
            Ok(())
        }
    }
}
