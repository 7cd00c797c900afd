//! Main entry point for the roost CLI.
//!
//! Commands:
//! - `add-host` / `add-guest`: Register hosts and guests
//! - `hosts`: List registered hosts
//! - `list`: List a host's reservations
//! - `quote`: Price a stay without booking it
//! - `reserve`, `update`, `cancel`: Manage reservations

use clap::Parser;
use roost_cli::cli::{Cli, Command};
use roost_cli::error::CliError;
use roost_cli::utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    roost::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
        disable_autoinit: cli.disable_autoinit,
        today: cli.today,
    };

    let result = match cli.command {
        Command::AddHost(cmd) => cmd.execute(&global),
        Command::AddGuest(cmd) => cmd.execute(&global),
        Command::Hosts(cmd) => cmd.execute(&global),
        Command::List(cmd) => cmd.execute(&global),
        Command::Quote(cmd) => cmd.execute(&global),
        Command::Reserve(cmd) => cmd.execute(&global),
        Command::Update(cmd) => cmd.execute(&global),
        Command::Cancel(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(CliError::Rejected(messages)) => {
            for message in &messages {
                eprintln!("{message}");
            }
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
