use std::{
    fmt::Display,
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::build_number::{BUILD_FIELD_MAX, BuildNumber};

/// Expected conditions under which a bump is skipped without failing the build.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SkipReason {
    #[error("{} not found, skipping build increment", .0.display())]
    MissingFile(PathBuf),
    #[error("BUILD pattern not found in {}, skipping", .0.display())]
    MissingPattern(PathBuf),
}

impl SkipReason {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::MissingFile(path) | Self::MissingPattern(path) => path,
        }
    }
}

/// Result of one incrementer run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BumpOutcome {
    /// The declaration was rewritten from `old` to `new`
    Bumped {
        old: BuildNumber,
        new: BuildNumber,
        path: PathBuf,
    },
    /// Nothing was written
    Skipped(SkipReason),
}

impl BumpOutcome {
    #[must_use]
    pub fn is_bumped(&self) -> bool {
        matches!(self, Self::Bumped { .. })
    }

    /// The written value no longer fits the `uint16_t` it is declared as.
    #[must_use]
    pub fn exceeds_field_width(&self) -> bool {
        matches!(
            self,
            Self::Bumped { new, .. } if new.as_u64().is_none_or(|value| value > BUILD_FIELD_MAX)
        )
    }
}

impl Display for BumpOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bumped { old, new, path } => {
                write!(f, "updated BUILD: {old} -> {new} ({})", path.display())
            }
            Self::Skipped(reason) => write!(f, "warning: {reason}"),
        }
    }
}
