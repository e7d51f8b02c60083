// dirbot - folder hierarchy automation
// Core library functionality

pub mod cli;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use models::category::Category;
pub use models::creation_report::CreationReport;
pub use models::folder_name::NameOptions;
pub use services::folder_creator::{Clock, FolderCreator, SystemClock, PERIODIC_FOLDER_COUNT};
pub use services::observer::{CreationObserver, NoopObserver, TracingObserver};
pub use services::orchestrator::{run_all, RunPlan};
pub use utils::config::DirbotConfig;
pub use utils::error::{DirbotError, Result};
