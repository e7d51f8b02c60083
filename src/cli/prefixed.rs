use clap::Args;

use crate::cli::CommandContext;
use crate::utils::error::Result;

/// Create one folder per label named prefix + label
#[derive(Debug, Args)]
pub struct PrefixedCommand {
    /// Labels appended to the prefix as-is
    #[arg(required = true)]
    pub labels: Vec<String>,

    /// Prefix put in front of every label, e.g. "output-"
    #[arg(long, allow_hyphen_values = true)]
    pub prefix: String,
}

impl PrefixedCommand {
    pub async fn run(&self, context: &CommandContext) -> Result<()> {
        let report = context
            .creator
            .create_prefixed_folders(&self.labels, &self.prefix)
            .await?;
        context.print_report(&report)
    }
}
