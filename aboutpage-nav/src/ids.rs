//! Element identifiers the page markup must expose.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scroll targets on the About page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionId {
    #[serde(rename = "eula")]
    Eula,
    #[serde(rename = "policy")]
    Policy,
    #[serde(rename = "developer")]
    Developer,
    #[serde(rename = "social")]
    Social,
    #[serde(rename = "acknowledgement")]
    Acknowledgement,
    /// Top-of-page anchor used by the floating button.
    #[serde(rename = "main")]
    Main,
}

impl SectionId {
    pub const ALL: [Self; 6] = [
        Self::Eula,
        Self::Policy,
        Self::Developer,
        Self::Social,
        Self::Acknowledgement,
        Self::Main,
    ];

    /// The `id` attribute of the section element.
    #[must_use]
    pub const fn dom_id(self) -> &'static str {
        match self {
            Self::Eula => "eula",
            Self::Policy => "policy",
            Self::Developer => "developer",
            Self::Social => "social",
            Self::Acknowledgement => "acknowledgement",
            Self::Main => "main",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

/// Controls whose activation starts a scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerId {
    #[serde(rename = "eulaBtn")]
    EulaBtn,
    #[serde(rename = "policyBtn")]
    PolicyBtn,
    #[serde(rename = "devBtn")]
    DevBtn,
    #[serde(rename = "socialBtn")]
    SocialBtn,
    #[serde(rename = "ackBtn")]
    AckBtn,
    #[serde(rename = "floatingBtn")]
    FloatingBtn,
}

impl TriggerId {
    pub const ALL: [Self; 6] = [
        Self::EulaBtn,
        Self::PolicyBtn,
        Self::DevBtn,
        Self::SocialBtn,
        Self::AckBtn,
        Self::FloatingBtn,
    ];

    #[must_use]
    pub const fn dom_id(self) -> &'static str {
        match self {
            Self::EulaBtn => "eulaBtn",
            Self::PolicyBtn => "policyBtn",
            Self::DevBtn => "devBtn",
            Self::SocialBtn => "socialBtn",
            Self::AckBtn => "ackBtn",
            Self::FloatingBtn => "floatingBtn",
        }
    }
}

impl fmt::Display for TriggerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_ids_are_unique() {
        let mut ids: Vec<&str> = SectionId::ALL.iter().map(|s| s.dom_id()).collect();
        ids.extend(TriggerId::ALL.iter().map(|t| t.dom_id()));
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn serde_names_match_dom_ids() {
        let json = serde_json::to_string(&TriggerId::DevBtn).unwrap();
        assert_eq!(json, "\"devBtn\"");
        let section: SectionId = serde_json::from_str("\"acknowledgement\"").unwrap();
        assert_eq!(section, SectionId::Acknowledgement);
    }
}
