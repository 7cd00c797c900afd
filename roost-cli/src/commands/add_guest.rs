//! Add-guest command implementation.

use clap::Args;
use roost::Guest;

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};

/// Register a guest or change its email.
#[derive(Args)]
pub struct AddGuestCommand {
    /// Guest identifier
    #[arg(long, value_name = "ID")]
    pub id: u32,

    /// Guest email, used to look the guest up
    #[arg(long, value_name = "EMAIL")]
    pub email: String,
}

impl AddGuestCommand {
    /// Execute the add-guest command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let guest = Guest::new(self.id, &self.email)?;

        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        db.upsert_guest(&guest)?;

        if !global.quiet {
            eprintln!("Registered guest {} ({})", guest.id(), guest.email());
        }
        Ok(())
    }
}
