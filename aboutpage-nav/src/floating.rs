//! Floating back-to-top button.
use crate::ids::{SectionId, TriggerId};
use crate::navigator::{Activation, scroll_to_binding};
use crate::page::{ActivationEvent, Fade, Page};
use crate::table::{FADE_MS, NavBinding, TOP_SCROLL_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

impl Visibility {
    /// Visible once the page is scrolled strictly past one viewport height.
    #[must_use]
    pub fn for_scroll(scroll_pos: f64, viewport_height: f64) -> Self {
        if scroll_pos > viewport_height {
            Self::Visible
        } else {
            Self::Hidden
        }
    }

    const fn fade(self) -> Fade {
        match self {
            Self::Visible => Fade::In,
            Self::Hidden => Fade::Out,
        }
    }
}

/// Owns the show/hide state of `#floatingBtn` and its scroll-to-top action.
#[derive(Debug, Clone)]
pub struct FloatingButton {
    visibility: Visibility,
    binding: NavBinding,
    fade_ms: u32,
}

impl Default for FloatingButton {
    fn default() -> Self {
        Self::new(
            NavBinding::new(TriggerId::FloatingBtn, SectionId::Main, TOP_SCROLL_MS),
            FADE_MS,
        )
    }
}

impl FloatingButton {
    #[must_use]
    pub const fn new(binding: NavBinding, fade_ms: u32) -> Self {
        Self {
            visibility: Visibility::Hidden,
            binding,
            fade_ms,
        }
    }

    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub const fn binding(&self) -> &NavBinding {
        &self.binding
    }

    fn dom_id(&self) -> &'static str {
        self.binding.trigger.dom_id()
    }

    /// Hide the button immediately, without a transition.
    pub fn install<P: Page + ?Sized>(&mut self, page: &P) {
        self.visibility = Visibility::Hidden;
        if let Err(err) = page.fade(self.dom_id(), Fade::Out, 0) {
            log::debug!("initial hide of #{} failed: {err}", self.dom_id());
        }
    }

    /// React to a scroll event. Returns the new state when it changed.
    pub fn on_scroll<P: Page + ?Sized>(&mut self, page: &P) -> Option<Visibility> {
        let scroll_pos = page.scroll_offsets().position();
        let next = Visibility::for_scroll(scroll_pos, page.viewport_height());
        if next == self.visibility {
            return None;
        }
        self.visibility = next;
        if let Err(err) = page.fade(self.dom_id(), next.fade(), self.fade_ms) {
            log::debug!("fade of #{} failed: {err}", self.dom_id());
        }
        Some(next)
    }

    /// Scroll back to the top anchor.
    pub fn activate<P, E>(&self, page: &P, event: &E) -> Activation
    where
        P: Page + ?Sized,
        E: ActivationEvent + ?Sized,
    {
        event.suppress_default();
        scroll_to_binding(page, &self.binding)
    }
}
