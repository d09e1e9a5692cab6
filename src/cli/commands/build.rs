use log::info;

use crate::builder::{self, BuildOptions};
use crate::config::Config;
use crate::utils::error::BuildResult;

/// Handle the build command
pub fn handle_build_command(config: &Config, drafts: bool) -> BuildResult<()> {
    info!("Building site...");

    let options = BuildOptions {
        include_drafts: drafts,
        dry_run: false,
    };
    let stats = builder::build_site(config, &options)?;

    info!(
        "Site built successfully at {} ({} files)",
        config.destination.display(),
        stats.files_written
    );
    Ok(())
}
