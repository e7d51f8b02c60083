use clap::Args;

use crate::cli::{CommandContext, NameFlags};
use crate::utils::error::Result;

/// Create folders from normalized names under the standardized root
#[derive(Debug, Args)]
pub struct StandardizedCommand {
    /// Names to normalize, e.g. "North America"
    #[arg(required = true)]
    pub names: Vec<String>,

    #[command(flatten)]
    pub flags: NameFlags,
}

impl StandardizedCommand {
    pub async fn run(&self, context: &CommandContext) -> Result<()> {
        let report = context
            .creator
            .create_standardized_folders(&self.names, self.flags.into())
            .await?;
        context.print_report(&report)
    }
}
