use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Token class, selects which refresh endpoint a client uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenType {
    Legacy,
    Developer,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Legacy => "LEGACY",
            TokenType::Developer => "DEVELOPER",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LEGACY" => Ok(TokenType::Legacy),
            "DEVELOPER" => Ok(TokenType::Developer),
            _ => Err(ConfigError::InvalidTokenType(s.to_owned())),
        }
    }
}
