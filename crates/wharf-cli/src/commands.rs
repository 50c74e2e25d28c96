use std::net::SocketAddr;

use colored::Colorize;

use wharf_server::{PubConfig, WharfServer};

use crate::cli::{Cli, Command, ServeArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = build_config(args)?;
    println!(
        "{} Wharf pub on {}",
        "✓".green().bold(),
        format!("http://{}", config.bind_addr).bold()
    );
    if config.readonly {
        println!("  {}", "read-only mode".yellow());
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(WharfServer::new(config).serve())?;
    Ok(())
}

/// Config file first, then CLI flags on top.
fn build_config(args: ServeArgs) -> anyhow::Result<PubConfig> {
    let mut config = match &args.config {
        Some(path) => PubConfig::load(path)?,
        None => PubConfig::default(),
    };
    let ip = args.bind.unwrap_or_else(|| config.bind_addr.ip());
    let port = args.port.unwrap_or_else(|| config.bind_addr.port());
    config.bind_addr = SocketAddr::new(ip, port);
    if args.readonly {
        config.readonly = true;
    }
    if args.closed {
        config.allow_push_to_new_workspaces = false;
    }
    if args.unlisted {
        config.discoverable_workspaces = false;
    }
    if args.title.is_some() {
        config.title = args.title;
    }
    if args.notes.is_some() {
        config.notes = args.notes;
    }
    Ok(config)
}
