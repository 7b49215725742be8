use std::fmt;

use serde::{Deserialize, Serialize};

/// Single-use, time-limited credential sent to the customer's recovery channel.
///
/// The token is carried as-is: it arrives in the query string and is re-attached to the
/// create-password redirect, so an empty or malformed token is still a valid value here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResetToken(String);

impl ResetToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ResetToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for ResetToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResetToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
