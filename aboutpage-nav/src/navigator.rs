//! Trigger activation to smooth section scroll.
use crate::ids::{SectionId, TriggerId};
use crate::page::{ActivationEvent, Page};
use crate::table::{NavBinding, NavTable};

/// What an activation ended up doing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Activation {
    Scrolled {
        target: SectionId,
        to: f64,
        duration_ms: u32,
    },
    /// The target element is not on the page (or has no usable offset).
    MissingTarget(SectionId),
    /// The page refused to schedule the scroll.
    ScrollFailed(SectionId),
    /// The trigger has no binding in the table.
    Unbound(TriggerId),
}

impl Activation {
    #[must_use]
    pub const fn scrolled(&self) -> bool {
        matches!(self, Self::Scrolled { .. })
    }
}

/// Start the scroll for `binding`. The caller has already suppressed the
/// event's default action.
pub(crate) fn scroll_to_binding<P: Page + ?Sized>(page: &P, binding: &NavBinding) -> Activation {
    let target = binding.target;
    let Some(to) = page
        .element_top(target.dom_id())
        .filter(|top| top.is_finite())
    else {
        log::debug!("{} activated but #{target} is missing", binding.trigger);
        return Activation::MissingTarget(target);
    };

    match page.animate_scroll(to, binding.duration_ms) {
        Ok(()) => Activation::Scrolled {
            target,
            to,
            duration_ms: binding.duration_ms,
        },
        Err(err) => {
            log::debug!("scroll to #{target} failed: {err}");
            Activation::ScrollFailed(target)
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScrollNavigator {
    table: NavTable,
}

impl ScrollNavigator {
    #[must_use]
    pub const fn new(table: NavTable) -> Self {
        Self { table }
    }

    #[must_use]
    pub fn binding(&self, trigger: TriggerId) -> Option<&NavBinding> {
        self.table.get(trigger)
    }

    #[must_use]
    pub fn bindings(&self) -> &[NavBinding] {
        self.table.bindings()
    }

    /// Handle a click or touch on `trigger`.
    ///
    /// The default action is suppressed before anything else, so a missing
    /// section leaves the page where it was instead of jumping.
    pub fn activate<P, E>(&self, page: &P, trigger: TriggerId, event: &E) -> Activation
    where
        P: Page + ?Sized,
        E: ActivationEvent + ?Sized,
    {
        event.suppress_default();
        match self.table.get(trigger) {
            Some(binding) => scroll_to_binding(page, binding),
            None => Activation::Unbound(trigger),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::{FakeEvent, FakePage};
    use crate::page::PageError;
    use crate::table::NavBinding;

    #[test]
    fn activation_scrolls_to_fresh_offset() {
        let page = FakePage::standard();
        let nav = ScrollNavigator::default();
        let event = FakeEvent::default();

        page.set_element_top("policy", 1800.0);
        let outcome = nav.activate(&page, TriggerId::PolicyBtn, &event);
        assert_eq!(
            outcome,
            Activation::Scrolled {
                target: SectionId::Policy,
                to: 1800.0,
                duration_ms: 1000,
            }
        );

        page.set_element_top("policy", 2100.0);
        let outcome = nav.activate(&page, TriggerId::PolicyBtn, &event);
        assert!(matches!(outcome, Activation::Scrolled { to, .. } if (to - 2100.0).abs() < f64::EPSILON));
        assert_eq!(event.suppressed(), 2);
    }

    #[test]
    fn non_finite_offset_counts_as_missing() {
        let page = FakePage::standard();
        page.set_element_top("social", f64::NAN);
        let outcome =
            ScrollNavigator::default().activate(&page, TriggerId::SocialBtn, &FakeEvent::default());
        assert_eq!(outcome, Activation::MissingTarget(SectionId::Social));
        assert!(page.scroll_requests().is_empty());
    }

    #[test]
    fn unbound_trigger_still_suppresses_default() {
        let table =
            NavTable::new(vec![NavBinding::new(TriggerId::EulaBtn, SectionId::Eula, 1000)]).unwrap();
        let nav = ScrollNavigator::new(table);
        let page = FakePage::standard();
        let event = FakeEvent::default();
        assert_eq!(
            nav.activate(&page, TriggerId::AckBtn, &event),
            Activation::Unbound(TriggerId::AckBtn)
        );
        assert_eq!(event.suppressed(), 1);
    }

    #[test]
    fn scroll_failure_is_reported_not_raised() {
        let page = FakePage::standard();
        page.fail_scrolls_with(PageError::Unavailable("scroll"));
        let event = FakeEvent::default();
        let outcome = ScrollNavigator::default().activate(&page, TriggerId::EulaBtn, &event);
        assert_eq!(outcome, Activation::ScrollFailed(SectionId::Eula));
        assert_eq!(event.suppressed(), 1);
    }
}
