//! Configuration for the line break analyzer

use serde::{Deserialize, Serialize};

use crate::error::LineBreakResult;

/// Configuration for [`LineBreakAnalyzer`](crate::LineBreakAnalyzer)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineBreakConfig {
    /// Resolve ambiguous characters the way older East Asian text expects:
    /// AI becomes ID, and AL characters of ambiguous East Asian width
    /// become ID as well.
    pub legacy: bool,
}

impl LineBreakConfig {
    pub fn new(legacy: bool) -> Self {
        Self { legacy }
    }

    /// Load configuration from a JSON document; missing fields take defaults
    pub fn from_json_str(json: &str) -> LineBreakResult<Self> {
        let config = serde_json::from_str(json)?;
        log::debug!("Loaded line break configuration: {:?}", config);
        Ok(config)
    }

    pub fn to_json_string(&self) -> LineBreakResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
