// CredWatch - Credential expiry monitor for Entra ID app registrations
// Copyright (C) 2026 CredWatch Team
// Licensed under GPL-3.0
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, version 3.

use anyhow::Result;
use clap::Parser;
use credwatch::commands::CommandRouter;
use credwatch::{Args, NotifierConfig};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging - respect RUST_LOG environment variable
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse::<Level>().ok())
        .unwrap_or(Level::INFO);

    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    // Parse command line arguments
    let args = Args::parse();

    // Handle --version (display version and exit)
    if args.version {
        println!("CredWatch v{}", env!("CARGO_PKG_VERSION"));
        println!("Credential expiry monitor for Entra ID app registrations");
        println!("Licensed under GPL-3.0");
        return Ok(());
    }

    // Handle --config-example (generate example config and exit)
    if let Some(config_path) = &args.notify.config_example {
        NotifierConfig::create_example(config_path)?;
        println!(
            "✓ Example configuration saved to: {}",
            config_path.display()
        );
        return Ok(());
    }

    display_banner(&args);

    // Validate argument combinations, then route to the matching command
    args.validate()?;
    CommandRouter::validate_routing(&args)?;

    let command = CommandRouter::route(args)?;
    command.execute().await
}

fn display_banner(args: &Args) {
    if !args.output.quiet {
        println!(
            r#"
    ╔═══════════════════════════════════════════════════════╗
    ║                   CredWatch v0.1.0                    ║
    ║   Entra ID App Credential Expiry Notifier (Rust)      ║
    ╚═══════════════════════════════════════════════════════╝
    "#
        );
    }
}
