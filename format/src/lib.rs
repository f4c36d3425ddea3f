mod key;
mod secret;

pub use crate::{key::EnvKey, secret::EncodedSecret};

use {
    anyhow::{Context as _, Result},
    std::fmt::{self, Display},
};

/// A single `KEY=VALUE` line of an environment file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvAssignment {
    pub key: EnvKey,
    pub value: EncodedSecret,
}

impl EnvAssignment {
    #[must_use]
    #[inline]
    pub fn new(key: EnvKey, value: EncodedSecret) -> Self {
        Self { key, value }
    }

    /// Line as written to the env file, without the trailing newline.
    ///
    /// No quoting is applied: base64 output never needs escaping.
    #[must_use]
    #[inline]
    pub fn display_unmasked(&self) -> impl Display + '_ {
        UnmaskedAssignment(self)
    }
}

struct UnmaskedAssignment<'a>(&'a EnvAssignment);

impl Display for UnmaskedAssignment<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.0.key, self.0.value.as_unmasked_str())
    }
}

/// Finds the value assigned to `key` in the contents of an env file.
///
/// Blank lines, `#` comments and lines without `=` are skipped. If the key is assigned more than once,
/// the last assignment wins, matching how dotenv loaders behave.
#[inline]
pub fn find_assignment(content: &str, key: &EnvKey) -> Result<Option<EncodedSecret>> {
    let mut found = None;
    for (index, line) in content.lines().enumerate() {
        let line_number = index.saturating_add(1);
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((name, value)) = line.split_once('=') else {
            continue;
        };
        if name.trim() != key.as_str() {
            continue;
        }
        let value = value
            .trim()
            .parse::<EncodedSecret>()
            .with_context(|| format!("line {line_number}: invalid value for {key}"))?;
        found = Some(value);
    }
    Ok(found)
}
