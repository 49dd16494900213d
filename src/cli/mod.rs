//! CLI module for the contract dashboard API

pub mod serve;

use clap::{Parser, Subcommand};

/// Contract Dashboard - data service for the contract management UI
#[derive(Parser)]
#[command(name = "contract-dashboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,
}
