use clap::Args;

use crate::cli::CommandContext;
use crate::utils::error::Result;

/// Create one folder per integer in an inclusive range
#[derive(Debug, Args)]
pub struct RangeCommand {
    /// First integer of the range (inclusive)
    #[arg(allow_negative_numbers = true)]
    pub start: i64,

    /// Last integer of the range (inclusive)
    #[arg(allow_negative_numbers = true)]
    pub end: i64,
}

impl RangeCommand {
    pub async fn run(&self, context: &CommandContext) -> Result<()> {
        if self.end < self.start {
            tracing::warn!(start = self.start, end = self.end, "Empty range, no folders will be created");
        }

        let report = context
            .creator
            .create_folders_for_range(self.start, self.end)
            .await?;
        context.print_report(&report)
    }
}
