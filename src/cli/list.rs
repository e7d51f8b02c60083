use clap::Args;

use crate::cli::{CommandContext, NameFlags};
use crate::utils::error::Result;

/// Create folders from a list of names
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Folder names; each is trimmed before use
    #[arg(required = true)]
    pub names: Vec<String>,

    #[command(flatten)]
    pub flags: NameFlags,
}

impl ListCommand {
    pub async fn run(&self, context: &CommandContext) -> Result<()> {
        let report = context
            .creator
            .create_folders_from_list(&self.names, self.flags.into())
            .await?;
        context.print_report(&report)
    }
}
