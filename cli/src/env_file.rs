use std::{io::Write, path::Path};

use anyhow::{Context as _, Result};
use envkey_format::{find_assignment, EncodedSecret, EnvAssignment, EnvKey};
use tracing::debug;

/// Truncates the env file at `path` and writes the single `assignment` line to it.
///
/// Symlinks are written through and new files get the default creation mode.
pub fn replace(path: &Path, assignment: &EnvAssignment) -> Result<()> {
    let mut file = fs_err::File::create(path).context("failed to open env file")?;
    writeln!(file, "{}", assignment.display_unmasked())?;
    file.flush()?;
    debug!(?path, "env file replaced");
    Ok(())
}

/// Reads the env file at `path` and returns the value assigned to `key`, if any.
pub fn read_value(path: &Path, key: &EnvKey) -> Result<Option<EncodedSecret>> {
    let content = fs_err::read_to_string(path)?;
    find_assignment(&content, key).with_context(|| format!("invalid env file {}", path.display()))
}
