use clap::Args;
use serde::Serialize;

use crate::cli::periodic::PeriodicCommand;
use crate::cli::{print_json, CommandContext};
use crate::models::creation_report::CreationReport;
use crate::services::orchestrator::{run_all, RunPlan};
use crate::utils::error::Result;

/// Run every folder rule in order with the demo inputs
#[derive(Debug, Default, Args)]
pub struct AllCommand {
    #[command(flatten)]
    pub periodic: PeriodicCommand,
}

/// JSON response format for the all command
#[derive(Debug, Serialize)]
pub struct AllResponse<'a> {
    pub status: &'static str,
    pub total_created: usize,
    pub reports: &'a [CreationReport],
}

impl AllCommand {
    pub async fn run(&self, context: &CommandContext) -> Result<()> {
        let plan = RunPlan::with_interval(self.periodic.interval(context));
        let reports = run_all(&context.creator, &plan).await?;

        if context.json {
            let response = AllResponse {
                status: "success",
                total_created: reports.iter().map(CreationReport::created_count).sum(),
                reports: &reports,
            };
            return print_json(&response);
        }

        context.print_reports(&reports)
    }
}
