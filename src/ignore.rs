//! Ignore patterns for local template directories.
//! A `.scaffoldignore` file lists one glob per line; blank lines and `#` comments are skipped.

use crate::constants::DEFAULT_IGNORE_PATTERNS;
use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::{fs::read_to_string, path::Path};

pub use crate::constants::IGNORE_FILE;

fn add_pattern(builder: &mut GlobSetBuilder, pattern: &str) -> Result<()> {
    let glob = Glob::new(pattern)
        .map_err(|e| Error::IgnoreError(format!("{IGNORE_FILE} loading failed: {e}")))?;
    builder.add(glob);
    Ok(())
}

/// Reads an ignore file and compiles its patterns together with the default ones.
///
/// # Arguments
/// * `ignore_path` - Path to the `.scaffoldignore` file, which may not exist
///
/// # Returns
/// * `Result<GlobSet>` - Compiled patterns; only the defaults when the file is missing
///
/// # Errors
/// * `Error::IgnoreError` if a pattern is not a valid glob
pub fn parse_ignore_file<P: AsRef<Path>>(ignore_path: P) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in DEFAULT_IGNORE_PATTERNS {
        add_pattern(&mut builder, pattern)?;
    }

    match read_to_string(ignore_path.as_ref()) {
        Ok(contents) => {
            for line in contents.lines().map(str::trim) {
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                add_pattern(&mut builder, line)?;
            }
        }
        Err(_) => debug!("{} does not exist", ignore_path.as_ref().display()),
    }

    builder
        .build()
        .map_err(|e| Error::IgnoreError(format!("{IGNORE_FILE} loading failed: {e}")))
}
