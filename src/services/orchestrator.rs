use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::models::creation_report::CreationReport;
use crate::models::folder_name::NameOptions;
use crate::services::folder_creator::FolderCreator;
use crate::utils::error::Result;

/// Regions used by the default standardized run
pub const REGIONS: &[&str] = &[
    "North America",
    "South America",
    "Europe",
    "Asia",
    "Africa",
    "Oceania",
    "Middle East",
];

const BANNER: &str = "#####################################";

/// Inputs for a full run of all five creators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunPlan {
    pub start_year: i64,
    pub end_year: i64,
    pub names: Vec<String>,
    pub name_options: NameOptions,
    pub labels: Vec<String>,
    pub prefix: String,
    pub interval: Duration,
    pub regions: Vec<String>,
    pub region_options: NameOptions,
}

impl RunPlan {
    /// Default plan with a custom pause between timed folders
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            ..Self::default()
        }
    }
}

impl Default for RunPlan {
    fn default() -> Self {
        Self {
            start_year: 2020,
            end_year: 2023,
            names: vec!["data-csv".into(), "data-excel".into(), "data-json".into()],
            name_options: NameOptions::default(),
            labels: vec!["csv".into(), "excel".into(), "json".into()],
            prefix: "output-".to_string(),
            interval: Duration::from_secs(5),
            regions: REGIONS.iter().map(ToString::to_string).collect(),
            region_options: NameOptions::standard(),
        }
    }
}

/// Byline logged at the start of every full run
pub fn byline() -> String {
    format!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Run every creator in order. The first error aborts the remaining steps.
pub async fn run_all(creator: &FolderCreator, plan: &RunPlan) -> Result<Vec<CreationReport>> {
    let observer = creator.observer();
    observer.message(BANNER);
    observer.message("# Starting execution of run_all()");
    observer.message(BANNER);
    observer.message(&format!("Byline: {}", byline()));

    let reports = vec![
        creator
            .create_folders_for_range(plan.start_year, plan.end_year)
            .await?,
        creator
            .create_folders_from_list(&plan.names, plan.name_options)
            .await?,
        creator
            .create_prefixed_folders(&plan.labels, &plan.prefix)
            .await?,
        creator.create_folders_periodically(plan.interval).await?,
        creator
            .create_standardized_folders(&plan.regions, plan.region_options)
            .await?,
    ];

    observer.message(BANNER);
    observer.message("# Completed execution of run_all()");
    observer.message(BANNER);

    Ok(reports)
}
