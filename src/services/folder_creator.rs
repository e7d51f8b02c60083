use std::fmt::Display;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::models::category::Category;
use crate::models::creation_report::CreationReport;
use crate::models::folder_name::NameOptions;
use crate::services::observer::{CreationObserver, TracingObserver};
use crate::utils::config::DirbotConfig;
use crate::utils::error::Result;
use crate::utils::fs_utils::{create_folder, ensure_directory_exists};

/// Number of folders the periodic creator makes per run
pub const PERIODIC_FOLDER_COUNT: u32 = 5;

/// Source of the timestamps embedded in timed folder names
pub trait Clock: Send + Sync {
    /// Seconds since the Unix epoch
    fn unix_timestamp(&self) -> i64;
}

/// Wall clock backed by `chrono::Utc`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_timestamp(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// Creates folder hierarchies under the category roots of a `DirbotConfig`
#[derive(Clone)]
pub struct FolderCreator {
    config: DirbotConfig,
    observer: Arc<dyn CreationObserver>,
    clock: Arc<dyn Clock>,
}

impl FolderCreator {
    /// Create a FolderCreator that logs through `tracing` and uses the wall clock
    pub fn new(config: DirbotConfig) -> Self {
        Self::with_observer(config, Arc::new(TracingObserver))
    }

    pub fn with_observer(config: DirbotConfig, observer: Arc<dyn CreationObserver>) -> Self {
        Self {
            config,
            observer,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the timestamp source used by the periodic creator
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &DirbotConfig {
        &self.config
    }

    pub fn observer(&self) -> &dyn CreationObserver {
        self.observer.as_ref()
    }

    /// Root directory a category writes into
    pub fn root(&self, category: Category) -> PathBuf {
        self.config.category_root(category)
    }

    async fn prepare_root(&self, category: Category) -> Result<CreationReport> {
        let root = self.root(category);
        ensure_directory_exists(&root).await?;
        Ok(CreationReport::new(category, root))
    }

    async fn create_in(&self, report: &mut CreationReport, name: &str) -> Result<()> {
        let path = report.root.join(name);
        create_folder(&path).await?;
        self.observer.created(report.category, &path);
        report.record_created(path);
        Ok(())
    }

    /// Create one folder per integer in `start..=end`, named by its decimal
    /// string. An empty range (`end < start`) creates nothing.
    pub async fn create_folders_for_range(&self, start: i64, end: i64) -> Result<CreationReport> {
        const OPERATION: &str = "create_folders_for_range";
        self.observer
            .invoked(OPERATION, &format!("start = {start}, end = {end}"));

        let mut report = self.prepare_root(Category::Range).await?;
        for value in start..=end {
            self.create_in(&mut report, &value.to_string()).await?;
        }

        self.observer.finished(OPERATION, report.created_count());
        Ok(report)
    }

    /// Create one folder per normalized item under the named root
    pub async fn create_folders_from_list<I>(&self, items: I, options: NameOptions) -> Result<CreationReport>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.create_normalized(Category::Named, "create_folders_from_list", items, options)
            .await
    }

    /// Create one folder per label named exactly `prefix + label`
    pub async fn create_prefixed_folders<I>(&self, labels: I, prefix: &str) -> Result<CreationReport>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        const OPERATION: &str = "create_prefixed_folders";
        let labels: Vec<String> = labels.into_iter().map(|label| label.to_string()).collect();
        self.observer.invoked(
            OPERATION,
            &format!("labels = {labels:?}, prefix = {prefix:?}"),
        );

        let mut report = self.prepare_root(Category::Prefixed).await?;
        for label in &labels {
            self.create_in(&mut report, &format!("{prefix}{label}")).await?;
        }

        self.observer.finished(OPERATION, report.created_count());
        Ok(report)
    }

    /// Create `PERIODIC_FOLDER_COUNT` timestamped folders, pausing `interval`
    /// between consecutive creations.
    pub async fn create_folders_periodically(&self, interval: Duration) -> Result<CreationReport> {
        const OPERATION: &str = "create_folders_periodically";
        self.observer.invoked(
            OPERATION,
            &format!("interval_secs = {}", interval.as_secs_f64()),
        );

        let mut report = self.prepare_root(Category::Timed).await?;
        let mut counter = 1;
        while counter <= PERIODIC_FOLDER_COUNT {
            let name = format!("timed_folder_{}_{}", counter, self.clock.unix_timestamp());
            self.create_in(&mut report, &name).await?;

            if counter < PERIODIC_FOLDER_COUNT {
                self.observer.waiting(interval);
                tokio::time::sleep(interval).await;
            }
            counter += 1;
        }

        self.observer.message(&format!(
            "Created {PERIODIC_FOLDER_COUNT} folders periodically"
        ));
        self.observer.finished(OPERATION, report.created_count());
        Ok(report)
    }

    /// Create one folder per normalized item under the standardized root
    pub async fn create_standardized_folders<I>(&self, items: I, options: NameOptions) -> Result<CreationReport>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.create_normalized(Category::Standardized, "create_standardized_folders", items, options)
            .await
    }

    async fn create_normalized<I>(
        &self,
        category: Category,
        operation: &str,
        items: I,
        options: NameOptions,
    ) -> Result<CreationReport>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let items: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
        self.observer.invoked(
            operation,
            &format!(
                "items = {items:?}, lowercase = {}, remove_spaces = {}",
                options.lowercase, options.remove_spaces
            ),
        );

        let mut report = self.prepare_root(category).await?;
        for raw in items {
            match options.normalize(&raw) {
                Some(name) => self.create_in(&mut report, &name).await?,
                None => {
                    self.observer.skipped(category, &raw);
                    report.record_skipped(raw);
                }
            }
        }

        self.observer.finished(operation, report.created_count());
        Ok(report)
    }
}
