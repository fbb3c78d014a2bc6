use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Natural join key between accounts, centers and prospects.
///
/// Not guaranteed unique in source data; every account carrying the same
/// name joins to the same centers.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountName(String);

impl AccountName {
    pub fn new(name: impl Into<String>) -> Self {
        AccountName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for AccountName {
    fn from(name: &str) -> Self {
        AccountName(name.to_string())
    }
}

impl From<String> for AccountName {
    fn from(name: String) -> Self {
        AccountName(name)
    }
}

impl fmt::Display for AccountName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Center-level key (`cn_unique_key`) shared by centers, functions, services and tech rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CenterKey(String);

impl CenterKey {
    pub fn new(key: impl Into<String>) -> Self {
        CenterKey(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CenterKey {
    fn from(key: &str) -> Self {
        CenterKey(key.to_string())
    }
}

impl From<String> for CenterKey {
    fn from(key: String) -> Self {
        CenterKey(key)
    }
}

impl fmt::Display for CenterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content hash of a filter specification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecFingerprint(String);

impl SpecFingerprint {
    /// `"sha256:"` followed by the lowercase hex digest of `content`.
    pub fn from_content(content: &[u8]) -> Self {
        SpecFingerprint(format!("sha256:{}", hex::encode(Sha256::digest(content))))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpecFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
