use std::path::Path;
use std::time::Duration;

use crate::models::category::Category;

/// Receives progress notifications from `FolderCreator`.
///
/// Keeps folder creation free of any particular logging backend; the CLI
/// plugs in `TracingObserver`, tests record events instead.
pub trait CreationObserver: Send + Sync {
    /// A creator was invoked with the given parameter summary
    fn invoked(&self, operation: &str, parameters: &str);

    /// A folder now exists at `path`
    fn created(&self, category: Category, path: &Path);

    /// A raw name was dropped because it normalized to nothing
    fn skipped(&self, category: Category, raw: &str);

    /// The periodic creator is about to pause
    fn waiting(&self, interval: Duration);

    /// A creator finished
    fn finished(&self, operation: &str, created: usize);

    /// Free-form progress line, e.g. run banners
    fn message(&self, text: &str);
}

/// Observer that emits structured `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl CreationObserver for TracingObserver {
    fn invoked(&self, operation: &str, parameters: &str) {
        tracing::info!(operation, "FUNCTION: {operation}()");
        tracing::info!(operation, "PARAMETERS: {parameters}");
    }

    fn created(&self, category: Category, path: &Path) {
        tracing::info!(%category, path = %path.display(), "Created folder: {}", path.display());
    }

    fn skipped(&self, category: Category, raw: &str) {
        tracing::warn!(%category, raw, "Skipping empty folder name from: {raw:?}");
    }

    fn waiting(&self, interval: Duration) {
        tracing::info!(
            interval_secs = interval.as_secs_f64(),
            "Waiting {} seconds before the next folder...",
            interval.as_secs_f64()
        );
    }

    fn finished(&self, operation: &str, created: usize) {
        tracing::debug!(operation, created, "{operation}() ensured {created} folders");
    }

    fn message(&self, text: &str) {
        tracing::info!("{text}");
    }
}

/// Observer that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl CreationObserver for NoopObserver {
    fn invoked(&self, _operation: &str, _parameters: &str) {}
    fn created(&self, _category: Category, _path: &Path) {}
    fn skipped(&self, _category: Category, _raw: &str) {}
    fn waiting(&self, _interval: Duration) {}
    fn finished(&self, _operation: &str, _created: usize) {}
    fn message(&self, _text: &str) {}
}
