use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Value of the `Access-Control-Allow-Credentials` response header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllowCredentials {
    True,
    #[default]
    False,
}

impl AllowCredentials {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::True => "true",
            Self::False => "false",
        }
    }
}

impl From<bool> for AllowCredentials {
    fn from(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}

impl fmt::Display for AllowCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("credentials flag must be \"true\" or \"false\", got {0:?}")]
pub struct ParseCredentialsError(pub String);

impl FromStr for AllowCredentials {
    type Err = ParseCredentialsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "true" => Ok(Self::True),
            "false" => Ok(Self::False),
            other => Err(ParseCredentialsError(other.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;
