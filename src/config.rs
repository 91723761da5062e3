use serde::{Deserialize, Serialize};

use crate::error::RecordError;

pub const DEFAULT_ORS: &str = "\n";
pub const DEFAULT_OFS: &str = ",";
pub const DEFAULT_OPS: &str = "=";

/// Separators used when rendering a record as `k=v,k=v\n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Output record separator, written once after the last field.
    pub ors: String,
    /// Output field separator, written between fields.
    pub ofs: String,
    /// Output pair separator, written between a key and its value.
    pub ops: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            ors: DEFAULT_ORS.to_string(),
            ofs: DEFAULT_OFS.to_string(),
            ops: DEFAULT_OPS.to_string(),
        }
    }
}

impl RenderOptions {
    pub fn new(ors: &str, ofs: &str, ops: &str) -> Self {
        Self {
            ors: ors.to_string(),
            ofs: ofs.to_string(),
            ops: ops.to_string(),
        }
    }

    /// Parse options from JSON; missing separators fall back to the defaults.
    pub fn from_json_str(json: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(json)?)
    }
}
