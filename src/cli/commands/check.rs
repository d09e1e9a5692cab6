use log::info;

use crate::builder::{self, BuildOptions};
use crate::config::Config;
use crate::utils::error::BuildResult;

/// Handle the check command
pub fn handle_check_command(config: &Config, drafts: bool) -> BuildResult<()> {
    info!("Checking site...");

    let options = BuildOptions {
        include_drafts: drafts,
        dry_run: true,
    };
    let stats = builder::build_site(config, &options)?;

    info!(
        "{} documents OK ({} publishable, {} drafts)",
        stats.documents, stats.published, stats.drafts_skipped
    );
    Ok(())
}
