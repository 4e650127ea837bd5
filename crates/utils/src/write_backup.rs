use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs::write;

/// Write `content` verbatim to `backup_path`, replacing any earlier backup.
///
/// # Errors
/// Returns error if the backup file cannot be written.
pub async fn write_backup(backup_path: &Path, content: &str) -> Result<()> {
    write(backup_path, content)
        .await
        .with_context(|| format!("Failed to write backup {}", backup_path.display()))
}
