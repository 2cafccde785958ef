use serde::{Deserialize, Serialize};
use std::fmt;

/// A fully-qualified, dot separated name such as `com.example.UserRepository`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FqName(String);

impl FqName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The last segment, e.g. `ContributesBinding` for
    /// `com.squareup.anvil.annotations.ContributesBinding`.
    pub fn short_name(&self) -> &str {
        match self.0.rfind('.') {
            Some(index) => &self.0[index + 1..],
            None => &self.0,
        }
    }

    /// Everything before the last segment, empty for names in the root package.
    pub fn package(&self) -> &str {
        match self.0.rfind('.') {
            Some(index) => &self.0[..index],
            None => "",
        }
    }
}

impl fmt::Display for FqName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FqName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for FqName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for FqName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
