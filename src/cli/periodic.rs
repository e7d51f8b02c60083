use clap::Args;
use std::time::Duration;

use crate::cli::CommandContext;
use crate::services::folder_creator::PERIODIC_FOLDER_COUNT;
use crate::utils::error::Result;

/// Create timestamped folders with a pause between them
#[derive(Debug, Default, Args)]
pub struct PeriodicCommand {
    /// Seconds to wait between folders (default: periodic.interval_secs, 5)
    #[arg(long)]
    pub interval: Option<u64>,
}

impl PeriodicCommand {
    pub fn interval(&self, context: &CommandContext) -> Duration {
        self.interval
            .map_or_else(|| context.config().periodic_interval(), Duration::from_secs)
    }

    pub async fn run(&self, context: &CommandContext) -> Result<()> {
        let interval = self.interval(context);
        if !context.json {
            println!(
                "Creating {PERIODIC_FOLDER_COUNT} folders, {} seconds apart...",
                interval.as_secs()
            );
        }

        let report = context.creator.create_folders_periodically(interval).await?;
        context.print_report(&report)
    }
}
