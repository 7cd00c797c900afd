//! CLI structure and command definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::commands::{
    AddGuestCommand, AddHostCommand, CancelCommand, CompletionsCommand, HostsCommand,
    ListCommand, QuoteCommand, ReserveCommand, UpdateCommand,
};

/// Command-line tool for lodging reservations.
#[derive(Parser)]
#[command(name = "roost")]
#[command(version, about = "Validate, price and track lodging reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "ROOST_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the database lock wait (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "ROOST_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u32>,

    /// Refuse to create a missing database
    #[arg(long, global = true)]
    pub disable_autoinit: bool,

    /// Treat this date as today (YYYY-MM-DD)
    #[arg(long, value_name = "DATE", global = true)]
    pub today: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Register a host or change its email and rates
    AddHost(AddHostCommand),

    /// Register a guest or change its email
    AddGuest(AddGuestCommand),

    /// List registered hosts
    Hosts(HostsCommand),

    /// List a host's reservations
    List(ListCommand),

    /// Price a stay without booking it
    Quote(QuoteCommand),

    /// Book a stay
    Reserve(ReserveCommand),

    /// Change the dates or guest of a reservation
    Update(UpdateCommand),

    /// Cancel a future reservation
    Cancel(CancelCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
