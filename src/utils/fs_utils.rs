// File system utilities

use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

use crate::utils::error::{DirbotError, Result};

/// Create a directory and any missing parents
pub async fn ensure_directory_exists(path: &Path) -> Result<()> {
    match fs::metadata(path).await {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(DirbotError::NotADirectory(path.to_path_buf())),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            fs::create_dir_all(path).await?;
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// Create a single directory whose parent already exists.
///
/// An existing directory counts as success; an existing file does not.
pub async fn create_folder(path: &Path) -> Result<()> {
    match fs::create_dir(path).await {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::AlreadyExists => {
            if fs::metadata(path).await?.is_dir() {
                Ok(())
            } else {
                Err(DirbotError::NotADirectory(path.to_path_buf()))
            }
        }
        Err(err) => Err(err.into()),
    }
}
