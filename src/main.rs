use std::process::ExitCode;

// Module declarations
mod assets;
mod builder;
mod cli;
mod config;
mod front_matter;
mod layout;
mod markdown;
mod template;
mod utils;

fn main() -> ExitCode {
    // Run the CLI
    cli::run()
}
