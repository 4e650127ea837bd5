use std::path::PathBuf;

/// Version header edited on every build, relative to the project root.
pub const DEFAULT_VERSION_FILE: &str = "src/version.h";
/// Appended to the version file name to form the backup path.
pub const DEFAULT_BACKUP_SUFFIX: &str = ".bak";
/// Appended to the version file name to form the staging path for the atomic write.
pub const DEFAULT_TEMP_SUFFIX: &str = ".tmp";

/// Locations used by a single build number bump.
///
/// The command line always uses [`BumpConfig::default`]; the path is not user configurable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpConfig {
    /// File holding the `BUILD` declaration
    pub version_file: PathBuf,

    /// Suffix for the pre-edit copy (e.g. `version.h.bak`)
    pub backup_suffix: String,

    /// Suffix for the staging file promoted by rename (e.g. `version.h.tmp`)
    pub temp_suffix: String,
}

impl BumpConfig {
    /// Same suffixes as the default, pointed at another version file.
    #[must_use]
    pub fn with_version_file(version_file: impl Into<PathBuf>) -> Self {
        Self {
            version_file: version_file.into(),
            ..Self::default()
        }
    }
}

impl Default for BumpConfig {
    fn default() -> Self {
        Self {
            version_file: PathBuf::from(DEFAULT_VERSION_FILE),
            backup_suffix: DEFAULT_BACKUP_SUFFIX.to_string(),
            temp_suffix: DEFAULT_TEMP_SUFFIX.to_string(),
        }
    }
}
