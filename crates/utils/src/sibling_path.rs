use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

/// Path next to `path` whose file name is the original name with `suffix` appended.
///
/// `src/version.h` + `.bak` gives `src/version.h.bak`.
#[must_use]
pub fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let mut file_name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    file_name.push(suffix);
    path.with_file_name(file_name)
}
