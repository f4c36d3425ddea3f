use {
    anyhow::{Context as _, Error},
    base64::{engine::general_purpose::STANDARD, Engine},
    std::{
        fmt::{self, Debug},
        str::FromStr,
    },
};

/// Secret bytes encoded with the standard base64 alphabet (RFC 4648, `+`, `/`, `=` padding).
///
/// `Debug` never prints the value; use [`EncodedSecret::as_unmasked_str`] to get it.
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedSecret(String);

impl EncodedSecret {
    #[must_use]
    #[inline]
    pub fn encode(bytes: impl AsRef<[u8]>) -> Self {
        Self(STANDARD.encode(bytes))
    }

    #[inline]
    pub fn decode(&self) -> anyhow::Result<Vec<u8>> {
        Ok(STANDARD.decode(&self.0)?)
    }

    #[must_use]
    #[inline]
    pub fn as_unmasked_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for EncodedSecret {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        STANDARD.decode(s).context("invalid base64 value")?;
        Ok(Self(s.to_owned()))
    }
}

impl Debug for EncodedSecret {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedSecret")
            .field("len", &self.0.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        assert_eq!(
            EncodedSecret::encode([0x4D_u8, 0x61, 0x6E]).as_unmasked_str(),
            "TWFu"
        );
        assert_eq!(EncodedSecret::encode("Ma").as_unmasked_str(), "TWE=");
        assert_eq!(EncodedSecret::encode("M").as_unmasked_str(), "TQ==");
        assert_eq!(EncodedSecret::encode([0xFB_u8, 0xFF]).as_unmasked_str(), "+/8=");
        assert_eq!(EncodedSecret::encode(b"").as_unmasked_str(), "");
    }

    #[test]
    fn random_bytes_decode_to_input() {
        for len in 0..200 {
            let input: Vec<u8> = (0..len).map(|_| rand::random::<u8>()).collect();
            let encoded = EncodedSecret::encode(&input);
            assert_eq!(encoded.as_unmasked_str().len() % 4, 0);
            assert_eq!(encoded.decode().unwrap(), input);
            let parsed = EncodedSecret::from_str(encoded.as_unmasked_str()).unwrap();
            assert_eq!(parsed, encoded);
        }
    }

    #[test]
    fn from_str_rejects_invalid() {
        EncodedSecret::from_str("TWFu").unwrap();
        EncodedSecret::from_str("").unwrap();
        EncodedSecret::from_str("TWF").unwrap_err();
        EncodedSecret::from_str("TW-u").unwrap_err();
        EncodedSecret::from_str("TWFu\"").unwrap_err();
    }

    #[test]
    fn debug_is_masked() {
        let secret = EncodedSecret::encode(b"private key material");
        let debug = format!("{secret:?}");
        assert!(!debug.contains(secret.as_unmasked_str()));
        assert!(debug.starts_with("EncodedSecret"));
    }
}
