//! # Value Objects
//!
//! Immutable domain primitives. A `DomainName` is always valid once
//! constructed; everything downstream can rely on that.

use crate::errors::ContractError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length of a domain name, in bytes.
pub const MAX_DOMAIN_LENGTH: usize = 64;

/// A validated domain name.
///
/// Rules: 1..=64 bytes, lowercase ASCII alphanumerics and `-`, and `-`
/// neither leads nor trails.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DomainName(String);

impl DomainName {
    /// Validates and wraps a raw name.
    pub fn new(raw: impl Into<String>) -> Result<Self, ContractError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(ContractError::InvalidDomain {
                reason: "empty name".into(),
            });
        }
        if raw.len() > MAX_DOMAIN_LENGTH {
            return Err(ContractError::InvalidDomain {
                reason: format!("longer than {MAX_DOMAIN_LENGTH} bytes"),
            });
        }
        if !raw
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        {
            return Err(ContractError::InvalidDomain {
                reason: "only lowercase alphanumerics and '-' allowed".into(),
            });
        }
        if raw.starts_with('-') || raw.ends_with('-') {
            return Err(ContractError::InvalidDomain {
                reason: "'-' cannot lead or trail".into(),
            });
        }
        Ok(Self(raw))
    }

    /// The name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes. Nonzero by construction.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept so clippy's `len_without_is_empty` is satisfied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for DomainName {
    type Error = ContractError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<DomainName> for String {
    fn from(name: DomainName) -> Self {
        name.0
    }
}
