use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{CoreError, CoreResult};

/// Three-letter IATA location identifier, always stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IataCode(String);

impl IataCode {
    /// Trim, validate and uppercase a raw code such as `" jfk"`.
    pub fn parse(raw: &str) -> CoreResult<Self> {
        let code = raw.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CoreError::ValidationError(format!(
                "Invalid IATA code: {:?}",
                raw
            )));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against user input.
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other.trim())
    }
}

impl TryFrom<String> for IataCode {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<IataCode> for String {
    fn from(code: IataCode) -> Self {
        code.0
    }
}

impl AsRef<str> for IataCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IataCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
