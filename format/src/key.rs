use {
    anyhow::{bail, ensure, Error},
    derive_more::Display,
    serde::{de, Deserialize, Deserializer},
    std::{borrow::Cow, str::FromStr},
};

/// Name of an environment variable, e.g. `GOOGLE_KEY_BASE64`.
///
/// Must start with an ASCII letter or `_` and contain only ASCII alphanumerics and `_`.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub struct EnvKey(String);

impl EnvKey {
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for EnvKey {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let Some(first) = chars.next() else {
            bail!("variable name cannot be empty");
        };
        ensure!(
            first.is_ascii_alphabetic() || first == '_',
            "variable name must start with a letter or `_` but starts with `{first}`",
        );
        if let Some(c) = chars.find(|c| !c.is_ascii_alphanumeric() && *c != '_') {
            bail!("variable name contains invalid character `{c}`");
        }
        Ok(Self(s.to_owned()))
    }
}

impl<'de> Deserialize<'de> for EnvKey {
    #[inline]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Cow::<'_, str>::deserialize(deserializer)?
            .parse()
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_key_from_str() {
        for name in ["GOOGLE_KEY_BASE64", "_private", "a", "X1_2"] {
            assert_eq!(EnvKey::from_str(name).unwrap().as_str(), name);
        }
        for name in ["", "1KEY", "KEY-NAME", "KEY NAME", "KEY=", "ключ"] {
            EnvKey::from_str(name).unwrap_err();
        }
    }
}
