//! Configuration initialization command.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the initialization command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the existing configuration instead of creating a new one
    #[arg(short, long)]
    pub delete: bool,
}

/// Writes a default configuration file, or removes it with `--delete`.
pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        let path = Config::path()?;
        if Config::delete()? {
            msg_success!(Message::ConfigDeleted(path.display().to_string()));
        } else {
            msg_warning!(Message::ConfigNotFound);
        }
        return Ok(());
    }

    // Keep whatever sections already exist.
    let path = Config::read()?.save()?;
    msg_success!(Message::ConfigSaved(path.display().to_string()));
    Ok(())
}
