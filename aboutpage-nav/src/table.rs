//! Trigger to target bindings.
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::ids::{SectionId, TriggerId};

/// Scroll duration for the section buttons.
pub const SECTION_SCROLL_MS: u32 = 1000;
/// Scroll duration for the floating back-to-top button.
pub const TOP_SCROLL_MS: u32 = 1500;
/// Fade duration for the floating button.
pub const FADE_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavBinding {
    pub trigger: TriggerId,
    pub target: SectionId,
    pub duration_ms: u32,
}

impl NavBinding {
    #[must_use]
    pub const fn new(trigger: TriggerId, target: SectionId, duration_ms: u32) -> Self {
        Self {
            trigger,
            target,
            duration_ms,
        }
    }
}

/// Fixed mapping from triggers to scroll targets.
///
/// Each trigger appears at most once. The table cannot be changed after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTable {
    bindings: Vec<NavBinding>,
}

impl NavTable {
    /// Build a table, rejecting a trigger that is bound twice.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateTrigger`] if two bindings share a trigger.
    pub fn new(bindings: Vec<NavBinding>) -> Result<Self, ConfigError> {
        for (idx, binding) in bindings.iter().enumerate() {
            if bindings[..idx]
                .iter()
                .any(|earlier| earlier.trigger == binding.trigger)
            {
                return Err(ConfigError::DuplicateTrigger(binding.trigger));
            }
        }
        Ok(Self { bindings })
    }

    /// The page's own table: five section buttons plus the floating button.
    #[must_use]
    pub fn standard(section_ms: u32, top_ms: u32) -> Self {
        Self {
            bindings: vec![
                NavBinding::new(TriggerId::EulaBtn, SectionId::Eula, section_ms),
                NavBinding::new(TriggerId::PolicyBtn, SectionId::Policy, section_ms),
                NavBinding::new(TriggerId::DevBtn, SectionId::Developer, section_ms),
                NavBinding::new(TriggerId::SocialBtn, SectionId::Social, section_ms),
                NavBinding::new(TriggerId::AckBtn, SectionId::Acknowledgement, section_ms),
                NavBinding::new(TriggerId::FloatingBtn, SectionId::Main, top_ms),
            ],
        }
    }

    #[must_use]
    pub fn get(&self, trigger: TriggerId) -> Option<&NavBinding> {
        self.bindings.iter().find(|b| b.trigger == trigger)
    }

    #[must_use]
    pub fn bindings(&self) -> &[NavBinding] {
        &self.bindings
    }

    /// Copy of the table with `trigger`'s binding removed.
    #[must_use]
    pub fn without(&self, trigger: TriggerId) -> Self {
        Self {
            bindings: self
                .bindings
                .iter()
                .copied()
                .filter(|b| b.trigger != trigger)
                .collect(),
        }
    }
}

impl Default for NavTable {
    fn default() -> Self {
        Self::standard(SECTION_SCROLL_MS, TOP_SCROLL_MS)
    }
}
