//! `RoutineTask` About page navigation
//!
//! Platform-agnostic core of the About page's smooth-scroll navigation: the
//! trigger/section binding table, the scroll navigator, and the floating
//! back-to-top controller. Everything runs against the [`Page`] trait, so the
//! browser bindings live in `aboutpage-web` and tests use [`fake::FakePage`].

pub mod config;
pub mod easing;
pub mod fake;
pub mod floating;
pub mod ids;
pub mod navigator;
pub mod page;
pub mod table;

pub use config::{BindingCfg, ConfigError, NavConfig};
pub use easing::{Tween, swing};
pub use floating::{FloatingButton, Visibility};
pub use ids::{SectionId, TriggerId};
pub use navigator::{Activation, ScrollNavigator};
pub use page::{ActivationEvent, Fade, Page, PageError, ScrollOffsets};
pub use table::{FADE_MS, NavBinding, NavTable, SECTION_SCROLL_MS, TOP_SCROLL_MS};

/// Navigator and floating button built from one config.
#[derive(Debug, Clone)]
pub struct NavSetup {
    pub navigator: ScrollNavigator,
    pub floating: FloatingButton,
}

impl NavSetup {
    /// Split the configured table into section bindings and the floating button.
    ///
    /// The floating button keeps its default binding when the table has none
    /// for `floatingBtn`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config's binding overrides are invalid.
    pub fn from_config(config: &NavConfig) -> Result<Self, ConfigError> {
        let table = config.nav_table()?;
        Ok(Self::from_table(&table, config.top_scroll_ms, config.fade_ms))
    }

    fn from_table(table: &NavTable, top_scroll_ms: u32, fade_ms: u32) -> Self {
        let top = table
            .get(TriggerId::FloatingBtn)
            .copied()
            .unwrap_or_else(|| NavBinding::new(TriggerId::FloatingBtn, SectionId::Main, top_scroll_ms));
        Self {
            navigator: ScrollNavigator::new(table.without(TriggerId::FloatingBtn)),
            floating: FloatingButton::new(top, fade_ms),
        }
    }
}

impl Default for NavSetup {
    fn default() -> Self {
        Self::from_table(&NavTable::default(), TOP_SCROLL_MS, FADE_MS)
    }
}
