use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// A semantically numeric field as it arrives from storage: sometimes a
/// number, sometimes a numeric string, sometimes human formatted ("$1.2M").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseValue {
    Number(f64),
    Text(String),
}

impl LooseValue {
    /// Text form used when a numeric-like field is compared as a category.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            LooseValue::Number(n) => Cow::Owned(n.to_string()),
            LooseValue::Text(s) => Cow::Borrowed(s.as_str()),
        }
    }
}

impl From<f64> for LooseValue {
    fn from(n: f64) -> Self {
        LooseValue::Number(n)
    }
}

impl From<i64> for LooseValue {
    fn from(n: i64) -> Self {
        LooseValue::Number(n as f64)
    }
}

impl From<&str> for LooseValue {
    fn from(s: &str) -> Self {
        LooseValue::Text(s.to_string())
    }
}

impl From<String> for LooseValue {
    fn from(s: String) -> Self {
        LooseValue::Text(s)
    }
}
