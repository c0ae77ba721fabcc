//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use clap::Subcommand;

pub mod create_quota;

use crate::app::AppContext;
use crate::cli::output::Ui;
use crate::error::Result;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Define a new resource quota
    CreateQuota(create_quota::CreateQuotaArgs),
}

/// Argument checks that need no configuration; run before config is loaded.
pub fn validate(command: &Commands) -> Result<()> {
    match command {
        Commands::CreateQuota(args) => args.quota_name().map(|_| ()),
    }
}

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands, ui: &mut dyn Ui) -> Result<()> {
    match command {
        Commands::CreateQuota(args) => create_quota::run(ctx, args, ui),
    }
}
