//! Page text, loaded from embedded JSON.
use aboutpage_nav::{NavConfig, NavSetup, SectionId};
use serde::{Deserialize, Serialize};

const ABOUT_DATA: &str = include_str!("../static/assets/data/about.json");
const NAV_DATA: &str = include_str!("../static/assets/data/nav.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionContent {
    pub id: SectionId,
    pub nav_label: String,
    pub heading: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AboutContent {
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default = "default_floating_label")]
    pub floating_label: String,
    #[serde(default)]
    pub sections: Vec<SectionContent>,
}

fn default_floating_label() -> String {
    String::from("Back to top")
}

impl AboutContent {
    /// # Errors
    /// Returns an error if the JSON does not describe an About page.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(ABOUT_DATA).unwrap_or_else(|err| {
            log::error!("Failed to parse about page content: {err}");
            Self::default()
        })
    }

    #[must_use]
    pub fn section(&self, id: SectionId) -> Option<&SectionContent> {
        self.sections.iter().find(|s| s.id == id)
    }
}

/// Navigation timings shipped with the page, or defaults if they fail to parse.
#[must_use]
pub fn nav_config_from_static() -> NavConfig {
    NavConfig::from_json(NAV_DATA).unwrap_or_else(|err| {
        log::error!("Failed to parse navigation config: {err}");
        NavConfig::default()
    })
}

/// Navigator and floating button for the shipped config.
#[must_use]
pub fn nav_setup() -> NavSetup {
    NavSetup::from_config(&nav_config_from_static()).unwrap_or_else(|err| {
        log::error!("Invalid navigation config, using defaults: {err}");
        NavSetup::default()
    })
}
