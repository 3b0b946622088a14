//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DomainError;

/// Identifier of a catalog product.
///
/// Affiliate feeds publish product ids either as JSON integers or as strings,
/// so the id is kept opaque and compared by value. Every text form (feed
/// strings, fragment values, [`ProductId::text`]) is canonicalised: text that
/// is an integer literal becomes `Numeric`, which makes `"1005006"` and
/// `1005006` the same product. `Text` never holds an integer literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ProductId {
    Numeric(i64),
    Text(String),
}

impl ProductId {
    pub fn numeric(value: i64) -> Self {
        Self::Numeric(value)
    }

    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        match value.trim().parse::<i64>() {
            Ok(n) => Self::Numeric(n),
            Err(_) => Self::Text(value),
        }
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Numeric(i64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Numeric(n) => Self::Numeric(n),
            Raw::Text(s) => Self::text(s),
        })
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ProductId::Numeric(n) => core::fmt::Display::fmt(n, f),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self::Numeric(value)
    }
}

impl From<i32> for ProductId {
    fn from(value: i32) -> Self {
        Self::Numeric(i64::from(value))
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_id("ProductId: empty"));
        }
        Ok(Self::text(trimmed))
    }
}
