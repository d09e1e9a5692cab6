use log::info;

use crate::config::Config;
use crate::utils::error::BuildResult;
use crate::utils::fs::remove_directory;

/// Handle the clean command
pub fn handle_clean_command(config: &Config) -> BuildResult<()> {
    info!("Cleaning site at {}", config.destination.display());
    remove_directory(&config.destination)?;
    info!("Site cleaned successfully");
    Ok(())
}
