//! Build script for roost-cli.
//!
//! Renders the `roost.1` man page into `OUT_DIR` with clap_mangen. Build
//! scripts cannot depend on the crate being built, so the command tree is
//! restated here.

use std::fs;
use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;

/// Keep in step with src/cli.rs.
fn build_cli() -> Command {
    Command::new("roost")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Validate, price and track lodging reservations")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("ROOST_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the database lock wait (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("ROOST_BUSY_TIMEOUT"),
        )
        .arg(
            Arg::new("disable-autoinit")
                .long("disable-autoinit")
                .help("Refuse to create a missing database")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("today")
                .long("today")
                .help("Treat this date as today (YYYY-MM-DD)")
                .value_name("DATE")
                .global(true),
        )
        .subcommands(vec![
            Command::new("add-host").about("Register a host or change its email and rates"),
            Command::new("add-guest").about("Register a guest or change its email"),
            Command::new("hosts").about("List registered hosts"),
            Command::new("list").about("List a host's reservations"),
            Command::new("quote").about("Price a stay without booking it"),
            Command::new("reserve").about("Book a stay"),
            Command::new("update").about("Change the dates or guest of a reservation"),
            Command::new("cancel").about("Cancel a future reservation"),
            Command::new("completions").about("Generate shell completion scripts"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("roost.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
