//! Common data types for DistKit

use serde::{Deserialize, Serialize};

/// One named numeric parameter supplied by a caller.
///
/// Keys are matched case-insensitively against per-family alias lists;
/// ordering matters only in that the first entry matching an alias wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamEntry {
    /// Parameter name as the caller spelled it
    pub key: String,
    /// Parameter value
    pub value: f64,
}

impl ParamEntry {
    /// Create a new parameter entry
    pub fn new(key: impl Into<String>, value: f64) -> Self {
        Self { key: key.into(), value }
    }
}

impl<K: Into<String>> From<(K, f64)> for ParamEntry {
    fn from((key, value): (K, f64)) -> Self {
        Self::new(key, value)
    }
}
