use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "wharf",
    about = "Wharf — a pub server hosting syncable document workspaces",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the pub server
    Serve(ServeArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// TOML configuration file; flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Address to bind
    #[arg(long)]
    pub bind: Option<IpAddr>,

    /// Refuse all writes
    #[arg(long)]
    pub readonly: bool,

    /// Refuse pushes that would create a new workspace
    #[arg(long)]
    pub closed: bool,

    /// Do not list hosted workspaces on the homepage
    #[arg(long)]
    pub unlisted: bool,

    /// Pub title for the homepage
    #[arg(long)]
    pub title: Option<String>,

    /// Longer notes for the homepage
    #[arg(long)]
    pub notes: Option<String>,
}
