//! Capability interface over the hosting document.
//!
//! The navigator and the floating button controller only talk to the page
//! through [`Page`], so the browser implementation and the in-memory
//! [`FakePage`](crate::fake::FakePage) are interchangeable.

/// Vertical scroll position as reported by the two browser APIs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffsets {
    /// `window.pageYOffset`
    pub window_y: f64,
    /// `document.documentElement.scrollTop`
    pub root_scroll_top: f64,
}

impl ScrollOffsets {
    #[must_use]
    pub const fn new(window_y: f64, root_scroll_top: f64) -> Self {
        Self {
            window_y,
            root_scroll_top,
        }
    }

    /// Larger of the two readings; browsers disagree on which one is populated.
    #[must_use]
    pub fn position(&self) -> f64 {
        self.window_y.max(self.root_scroll_top)
    }
}

/// Direction of an opacity fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fade {
    In,
    Out,
}

impl Fade {
    #[must_use]
    pub const fn target_opacity(self) -> f64 {
        match self {
            Self::In => 1.0,
            Self::Out => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("browser API unavailable: {0}")]
    Unavailable(&'static str),
    #[error("script error: {0}")]
    Script(String),
}

pub trait Page {
    /// Document-relative top offset of the element with `id`, read fresh.
    fn element_top(&self, id: &str) -> Option<f64>;

    fn scroll_offsets(&self) -> ScrollOffsets;

    fn viewport_height(&self) -> f64;

    /// Animate the document scroll position to `to`, superseding any scroll
    /// animation still in flight.
    ///
    /// # Errors
    ///
    /// Returns an error if the scroll cannot be scheduled.
    fn animate_scroll(&self, to: f64, duration_ms: u32) -> Result<(), PageError>;

    /// Fade the element with `id` in or out. A zero duration applies the end
    /// state immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the element is missing or the fade cannot be scheduled.
    fn fade(&self, id: &str, fade: Fade, duration_ms: u32) -> Result<(), PageError>;
}

/// The user event that activated a trigger.
pub trait ActivationEvent {
    /// Cancel the control's default action (anchor jump, navigation).
    fn suppress_default(&self);
}

impl<P: Page + ?Sized> Page for &P {
    fn element_top(&self, id: &str) -> Option<f64> {
        (**self).element_top(id)
    }

    fn scroll_offsets(&self) -> ScrollOffsets {
        (**self).scroll_offsets()
    }

    fn viewport_height(&self) -> f64 {
        (**self).viewport_height()
    }

    fn animate_scroll(&self, to: f64, duration_ms: u32) -> Result<(), PageError> {
        (**self).animate_scroll(to, duration_ms)
    }

    fn fade(&self, id: &str, fade: Fade, duration_ms: u32) -> Result<(), PageError> {
        (**self).fade(id, fade, duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_takes_the_larger_reading() {
        assert_eq!(ScrollOffsets::new(0.0, 420.0).position(), 420.0);
        assert_eq!(ScrollOffsets::new(300.0, 0.0).position(), 300.0);
        assert_eq!(ScrollOffsets::default().position(), 0.0);
    }

    #[test]
    fn fade_targets() {
        assert_eq!(Fade::In.target_opacity(), 1.0);
        assert_eq!(Fade::Out.target_opacity(), 0.0);
    }
}
