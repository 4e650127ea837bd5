use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs::{remove_file, rename, write};

/// Replace `target` with `content` by writing `temp_path` first and renaming it over `target`.
///
/// Readers see either the old or the new file, provided both paths are on the same filesystem.
///
/// # Errors
/// Returns error if the staging file cannot be written or the rename fails.
pub async fn write_atomic(target: &Path, temp_path: &Path, content: &str) -> Result<()> {
    write(temp_path, content)
        .await
        .with_context(|| format!("Failed to write {}", temp_path.display()))?;

    if let Err(e) = rename(temp_path, target).await {
        // the staging file is useless once the rename failed
        let _ = remove_file(temp_path).await;
        return Err(e).with_context(|| {
            format!(
                "Failed to replace {} with {}",
                target.display(),
                temp_path.display()
            )
        });
    }
    Ok(())
}
