use anyhow::Result;
use thirtyfour::prelude::*;

use crate::browser::PageProbe;

mod floating;
mod sections;

/// Settle time added to every animation before asserting on its end state.
pub const SETTLE_MS: u64 = 300;

#[derive(Clone)]
pub struct ScenarioCtx<'a> {
    pub base_url: String,
    pub probe: PageProbe<'a>,
    pub verbose: bool,
}

/// Check run against the in-memory page.
pub trait LogicScenario {
    fn run_logic(&self) -> Result<()>;
}

/// Check run against the served page in a real browser.
#[async_trait::async_trait]
pub trait BrowserScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()>;
}

pub trait PageScenario: LogicScenario + BrowserScenario + Send + Sync {
    fn name(&self) -> &'static str;
}

const CATALOG: [(&str, &str); 6] = [
    ("section-jumps", "Section buttons scroll to their sections"),
    ("back-to-top", "Floating button scrolls back to the top"),
    ("initial-hidden", "Floating button starts hidden"),
    ("floating-toggle", "Floating button follows the viewport threshold"),
    ("idempotent-scroll", "Repeated scrolls keep the button visible"),
    ("missing-target", "Missing section leaves the page in place"),
];

pub fn get_scenario(key: &str) -> Option<Box<dyn PageScenario>> {
    match key.to_lowercase().as_str() {
        "section-jumps" | "sections" => Some(Box::new(sections::SectionJumps)),
        "missing-target" | "missing" => Some(Box::new(sections::MissingTarget)),
        "back-to-top" | "top" => Some(Box::new(floating::BackToTop)),
        "initial-hidden" => Some(Box::new(floating::InitialHidden)),
        "floating-toggle" | "toggle" => Some(Box::new(floating::FloatingToggle)),
        "idempotent-scroll" | "idempotent" => Some(Box::new(floating::IdempotentScroll)),
        _ => None,
    }
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    CATALOG.to_vec()
}

/// Expand `all` into every catalog key, keeping other entries as given.
pub fn expand_scenarios(requested: &[String]) -> Vec<String> {
    let mut out: Vec<String> = requested
        .iter()
        .filter(|s| s.as_str() != "all")
        .cloned()
        .collect();
    if requested.iter().any(|s| s == "all") {
        for (key, _) in CATALOG {
            if !out.iter().any(|s| s == key) {
                out.push(key.to_string());
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_entry_resolves() {
        for (key, description) in list_scenarios() {
            let scenario = get_scenario(key).unwrap_or_else(|| panic!("{key} should resolve"));
            assert_eq!(scenario.name(), description);
        }
        assert!(get_scenario("nope").is_none());
    }

    #[test]
    fn every_logic_scenario_passes_against_the_fake_page() {
        for (key, _) in list_scenarios() {
            let scenario = get_scenario(key).expect("known scenario");
            scenario
                .run_logic()
                .unwrap_or_else(|err| panic!("{key} failed: {err:#}"));
        }
    }

    #[test]
    fn all_expands_without_duplicates() {
        let expanded = expand_scenarios(&["back-to-top".to_string(), "all".to_string()]);
        assert_eq!(expanded.len(), CATALOG.len());
        assert_eq!(expanded[0], "back-to-top");
    }
}
