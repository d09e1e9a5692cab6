use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser, Debug)]
#[command(name = "markpress")]
#[command(about = "Static site generator for Markdown blogs", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Site root holding content/, templates/ and public/ (defaults to ./)
    #[arg(short, long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Destination directory (defaults to ./build)
    #[arg(short, long, value_name = "DIR")]
    pub destination: Option<PathBuf>,

    /// Custom configuration file
    #[arg(long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Build your site
    #[command(alias = "b")]
    Build {
        /// Publish documents marked as drafts
        #[arg(short = 'D', long, default_value_t = false)]
        drafts: bool,

        /// Silence output
        #[arg(short, long, default_value_t = false)]
        quiet: bool,

        /// Print verbose output
        #[arg(short = 'V', long, default_value_t = false)]
        verbose: bool,
    },

    /// Run the full pipeline without writing anything
    Check {
        /// Check drafts as if they were published
        #[arg(short = 'D', long, default_value_t = false)]
        drafts: bool,
    },

    /// Remove the destination directory
    Clean {},
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Build {
            drafts: false,
            quiet: false,
            verbose: false,
        }
    }
}
