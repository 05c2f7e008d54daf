//! Navigation timing and binding configuration
use serde::{Deserialize, Serialize};

use crate::ids::{SectionId, TriggerId};
use crate::table::{FADE_MS, NavBinding, NavTable, SECTION_SCROLL_MS, TOP_SCROLL_MS};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("trigger {0} is bound more than once")]
    DuplicateTrigger(TriggerId),
}

/// A single `{trigger, target}` override entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingCfg {
    pub trigger: TriggerId,
    pub target: SectionId,
    /// Falls back to the section or top duration when absent.
    #[serde(default)]
    pub duration_ms: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavConfig {
    #[serde(default = "default_section_scroll_ms")]
    pub section_scroll_ms: u32,
    #[serde(default = "default_top_scroll_ms")]
    pub top_scroll_ms: u32,
    #[serde(default = "default_fade_ms")]
    pub fade_ms: u32,
    #[serde(default)]
    pub bindings: Option<Vec<BindingCfg>>,
}

const fn default_section_scroll_ms() -> u32 {
    SECTION_SCROLL_MS
}

const fn default_top_scroll_ms() -> u32 {
    TOP_SCROLL_MS
}

const fn default_fade_ms() -> u32 {
    FADE_MS
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            section_scroll_ms: SECTION_SCROLL_MS,
            top_scroll_ms: TOP_SCROLL_MS,
            fade_ms: FADE_MS,
            bindings: None,
        }
    }
}

impl NavConfig {
    /// Parse a config document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or names an unknown id.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the binding table described by this config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateTrigger`] when an override list binds a
    /// trigger twice.
    pub fn nav_table(&self) -> Result<NavTable, ConfigError> {
        let Some(overrides) = &self.bindings else {
            return Ok(NavTable::standard(self.section_scroll_ms, self.top_scroll_ms));
        };
        let bindings = overrides
            .iter()
            .map(|cfg| {
                let fallback = if cfg.target == SectionId::Main {
                    self.top_scroll_ms
                } else {
                    self.section_scroll_ms
                };
                NavBinding::new(cfg.trigger, cfg.target, cfg.duration_ms.unwrap_or(fallback))
            })
            .collect();
        NavTable::new(bindings)
    }
}
