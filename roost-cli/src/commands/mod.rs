//! CLI command implementations.
//!
//! - `add_host` / `add_guest`: Registry maintenance
//! - `hosts`: List registered hosts
//! - `list`: List a host's reservations
//! - `quote`: Price a stay
//! - `reserve`, `update`, `cancel`: Reservation lifecycle
//! - `completions`: Shell completion scripts

pub mod add_guest;
pub mod add_host;
pub mod cancel;
pub mod completions;
pub mod hosts;
pub mod list;
pub mod quote;
pub mod reserve;
pub mod update;

pub use add_guest::AddGuestCommand;
pub use add_host::AddHostCommand;
pub use cancel::CancelCommand;
pub use completions::CompletionsCommand;
pub use hosts::HostsCommand;
pub use list::ListCommand;
pub use quote::QuoteCommand;
pub use reserve::ReserveCommand;
pub use update::UpdateCommand;

use roost::Outcome;

use crate::error::CliError;

/// Turns a service outcome into its payload or a rejection.
fn accepted<T>(outcome: Outcome<T>) -> Result<T, CliError> {
    match outcome.into_result() {
        Ok(Some(payload)) => Ok(payload),
        Ok(None) => Err(CliError::Rejected(Vec::new())),
        Err(messages) => Err(CliError::Rejected(messages)),
    }
}
