use anyhow::{Context, Result};
use buildbump_core::{
    BuildNumberMatcher, BumpConfig, BumpOutcome, DeclarationMatcher, SkipReason,
    next_build_number, splice_value,
};
use buildbump_utils::{
    display_field_width_warning, display_outcome, sibling_path, write_atomic, write_backup,
};
use std::io::Write;
use tokio::fs::{read_to_string, try_exists};

/// Advances the `BUILD` counter of one version file by exactly one.
///
/// A missing file or a file without a `BUILD` declaration is reported as
/// [`BumpOutcome::Skipped`]; every other failure is returned as an error.
pub struct BuildNumberIncrementer {
    config: BumpConfig,
    matcher: Box<dyn BuildNumberMatcher>,
}

impl BuildNumberIncrementer {
    #[must_use]
    pub fn new(config: BumpConfig) -> Self {
        Self::with_matcher(config, Box::new(DeclarationMatcher))
    }

    #[must_use]
    pub fn with_matcher(config: BumpConfig, matcher: Box<dyn BuildNumberMatcher>) -> Self {
        Self { config, matcher }
    }

    #[must_use]
    pub fn config(&self) -> &BumpConfig {
        &self.config
    }

    /// Bump the counter and print the outcome.
    ///
    /// # Errors
    /// Returns error on any filesystem failure.
    pub async fn run(&self) -> Result<BumpOutcome> {
        let outcome = self.bump().await?;
        report(&outcome, &mut std::io::stdout(), &mut std::io::stderr())?;
        Ok(outcome)
    }

    /// Bump the counter without printing anything.
    ///
    /// # Errors
    /// Returns error on any filesystem failure, including a version file whose
    /// existence cannot be checked.
    pub async fn bump(&self) -> Result<BumpOutcome> {
        let version_file = &self.config.version_file;
        if !try_exists(version_file)
            .await
            .with_context(|| format!("Failed to access {}", version_file.display()))?
        {
            return Ok(BumpOutcome::Skipped(SkipReason::MissingFile(
                version_file.clone(),
            )));
        }

        let text = read_to_string(version_file)
            .await
            .with_context(|| format!("Failed to read {}", version_file.display()))?;

        let Some(found) = self.matcher.find(&text) else {
            return Ok(BumpOutcome::Skipped(SkipReason::MissingPattern(
                version_file.clone(),
            )));
        };

        let old = found.value().clone();
        let new = next_build_number(&old);
        let updated = splice_value(&text, found.span(), &new);

        write_backup(
            &sibling_path(version_file, &self.config.backup_suffix),
            &text,
        )
        .await?;
        write_atomic(
            version_file,
            &sibling_path(version_file, &self.config.temp_suffix),
            &updated,
        )
        .await?;

        Ok(BumpOutcome::Bumped {
            old,
            new,
            path: version_file.clone(),
        })
    }
}

impl Default for BuildNumberIncrementer {
    fn default() -> Self {
        Self::new(BumpConfig::default())
    }
}

/// Success line to `stdout`; skip and out-of-range warnings to `stderr`.
///
/// # Errors
/// Returns error if either stream cannot be written.
pub fn report(
    outcome: &BumpOutcome,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> std::io::Result<()> {
    match outcome {
        BumpOutcome::Bumped { .. } => writeln!(stdout, "{}", display_outcome(outcome))?,
        BumpOutcome::Skipped(_) => writeln!(stderr, "{}", display_outcome(outcome))?,
    }
    if let Some(warning) = display_field_width_warning(outcome) {
        writeln!(stderr, "{warning}")?;
    }
    Ok(())
}
