//! In-memory [`Page`] for tests and the logic-mode QA harness.
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::easing::Tween;
use crate::ids::{SectionId, TriggerId};
use crate::page::{ActivationEvent, Fade, Page, PageError, ScrollOffsets};

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollRequest {
    pub from: f64,
    pub to: f64,
    pub duration_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FadeRequest {
    pub id: String,
    pub fade: Fade,
    pub duration_ms: u32,
}

#[derive(Debug, Clone, Copy)]
struct RunningScroll {
    tween: Tween,
    elapsed_ms: f64,
}

/// A page whose layout, scroll position and animations are plain data.
///
/// Animations do not run on their own; call [`FakePage::advance`] to move
/// time forward.
#[derive(Debug, Default)]
pub struct FakePage {
    tops: RefCell<HashMap<String, f64>>,
    opacity: RefCell<HashMap<String, f64>>,
    offsets: Cell<ScrollOffsets>,
    viewport_height: Cell<f64>,
    scroll: Cell<Option<RunningScroll>>,
    scroll_log: RefCell<Vec<ScrollRequest>>,
    fade_log: RefCell<Vec<FadeRequest>>,
    scroll_failure: RefCell<Option<PageError>>,
}

impl FakePage {
    /// An 800 px viewport with every section 1000 px apart and all triggers present.
    #[must_use]
    pub fn standard() -> Self {
        let page = Self::default();
        page.set_viewport_height(800.0);
        page.set_element_top(SectionId::Main.dom_id(), 0.0);
        for (idx, section) in [
            SectionId::Eula,
            SectionId::Policy,
            SectionId::Developer,
            SectionId::Social,
            SectionId::Acknowledgement,
        ]
        .into_iter()
        .enumerate()
        {
            let top = 1000.0 * (idx as f64 + 1.0);
            page.set_element_top(section.dom_id(), top);
        }
        for trigger in TriggerId::ALL {
            page.set_element_top(trigger.dom_id(), 120.0);
            page.opacity.borrow_mut().insert(trigger.dom_id().into(), 1.0);
        }
        page
    }

    pub fn set_element_top(&self, id: &str, top: f64) {
        self.tops.borrow_mut().insert(id.to_string(), top);
    }

    pub fn remove_element(&self, id: &str) {
        self.tops.borrow_mut().remove(id);
        self.opacity.borrow_mut().remove(id);
    }

    pub fn set_viewport_height(&self, height: f64) {
        self.viewport_height.set(height);
    }

    pub fn set_offsets(&self, window_y: f64, root_scroll_top: f64) {
        self.offsets.set(ScrollOffsets::new(window_y, root_scroll_top));
    }

    /// Jump straight to `y` with both readings agreeing.
    pub fn scroll_to(&self, y: f64) {
        self.set_offsets(y, y);
    }

    pub fn fail_scrolls_with(&self, err: PageError) {
        *self.scroll_failure.borrow_mut() = Some(err);
    }

    #[must_use]
    pub fn scroll_position(&self) -> f64 {
        self.offsets.get().position()
    }

    #[must_use]
    pub fn scroll_requests(&self) -> Vec<ScrollRequest> {
        self.scroll_log.borrow().clone()
    }

    #[must_use]
    pub fn fade_requests(&self) -> Vec<FadeRequest> {
        self.fade_log.borrow().clone()
    }

    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.scroll.get().is_some()
    }

    /// Whether the element is currently showing (opacity above zero).
    #[must_use]
    pub fn is_shown(&self, id: &str) -> bool {
        self.opacity.borrow().get(id).is_some_and(|o| *o > 0.0)
    }

    /// Move the running scroll animation forward by `ms`.
    pub fn advance(&self, ms: f64) {
        let Some(mut running) = self.scroll.get() else {
            return;
        };
        running.elapsed_ms += ms;
        self.scroll_to(running.tween.value_at(running.elapsed_ms));
        if running.tween.is_done(running.elapsed_ms) {
            self.scroll.set(None);
        } else {
            self.scroll.set(Some(running));
        }
    }
}

impl Page for FakePage {
    fn element_top(&self, id: &str) -> Option<f64> {
        self.tops.borrow().get(id).copied()
    }

    fn scroll_offsets(&self) -> ScrollOffsets {
        self.offsets.get()
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height.get()
    }

    fn animate_scroll(&self, to: f64, duration_ms: u32) -> Result<(), PageError> {
        if let Some(err) = self.scroll_failure.borrow().clone() {
            return Err(err);
        }
        let from = self.scroll_position();
        self.scroll_log.borrow_mut().push(ScrollRequest {
            from,
            to,
            duration_ms,
        });
        self.scroll.set(Some(RunningScroll {
            tween: Tween::new(from, to, duration_ms),
            elapsed_ms: 0.0,
        }));
        Ok(())
    }

    fn fade(&self, id: &str, fade: Fade, duration_ms: u32) -> Result<(), PageError> {
        let mut opacity = self.opacity.borrow_mut();
        let Some(current) = opacity.get_mut(id) else {
            return Err(PageError::MissingElement(id.to_string()));
        };
        // Fades are visual only; the end state is applied immediately.
        *current = fade.target_opacity();
        self.fade_log.borrow_mut().push(FadeRequest {
            id: id.to_string(),
            fade,
            duration_ms,
        });
        Ok(())
    }
}

/// Counts how many times the default action was suppressed.
#[derive(Debug, Default)]
pub struct FakeEvent {
    suppressed: Cell<u32>,
}

impl FakeEvent {
    #[must_use]
    pub fn suppressed(&self) -> u32 {
        self.suppressed.get()
    }
}

impl ActivationEvent for FakeEvent {
    fn suppress_default(&self) {
        self.suppressed.set(self.suppressed.get() + 1);
    }
}
