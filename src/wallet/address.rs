//! Account addresses.

use super::{WalletError, WalletErrorKind};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Longest address, in hex digits.
const MAX_HEX_DIGITS: usize = 64;

/// A `0x`-prefixed hex account address, stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(try_from = "String", into = "String")]
pub struct AccountAddress(String);

impl AccountAddress {
    /// Parses `0x` followed by 1 to 64 hex digits.
    #[track_caller]
    pub fn parse(raw: &str) -> Result<Self, WalletError> {
        let trimmed = raw.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .ok_or_else(|| WalletError::new(WalletErrorKind::InvalidAddress(raw.to_string())))?;
        if digits.is_empty()
            || digits.len() > MAX_HEX_DIGITS
            || !digits.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(WalletError::new(WalletErrorKind::InvalidAddress(
                raw.to_string(),
            )));
        }
        Ok(Self(format!("0x{}", digits.to_ascii_lowercase())))
    }

    /// The full address.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `0x1234...cdef`: the first six characters, an ellipsis, the last
    /// four. Short addresses are returned whole.
    pub fn truncated(&self) -> String {
        if self.0.len() <= 10 {
            return self.0.clone();
        }
        format!("{}...{}", &self.0[..6], &self.0[self.0.len() - 4..])
    }
}

impl FromStr for AccountAddress {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for AccountAddress {
    type Error = WalletError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<AccountAddress> for String {
    fn from(address: AccountAddress) -> Self {
        address.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_case() {
        let addr = AccountAddress::parse("0xABCdef01").unwrap();
        assert_eq!(addr.as_str(), "0xabcdef01");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        for raw in ["", "0x", "abcd", "0xzz", &format!("0x{}", "1".repeat(65))] {
            let err = AccountAddress::parse(raw).unwrap_err();
            assert!(matches!(err.kind, WalletErrorKind::InvalidAddress(_)), "{raw}");
        }
    }

    #[test]
    fn test_truncated() {
        let addr = AccountAddress::parse("0x1234567890abcdef").unwrap();
        assert_eq!(addr.truncated(), "0x1234...cdef");
        assert_eq!(AccountAddress::parse("0x1").unwrap().truncated(), "0x1");
    }
}
