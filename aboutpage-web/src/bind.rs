//! Event wiring between the page's triggers and the navigation core.
use aboutpage_nav::{FloatingButton, NavSetup, PageError, ScrollNavigator, TriggerId};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget};

use crate::dom::{DomEvent, WebPage, js_error_message};

/// Events that count as activating a trigger. A tap on a touch screen
/// arrives as `click`; a swipe that starts on a trigger does not.
pub const ACTIVATION_EVENTS: [&str; 1] = ["click"];

#[derive(Debug, thiserror::Error)]
pub enum BindError {
    #[error(transparent)]
    Page(#[from] PageError),
    #[error("failed to attach {event} listener: {message}")]
    Listener { event: &'static str, message: String },
}

struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Live listeners for one page. Dropping it detaches everything.
pub struct NavBindings {
    listeners: Vec<Listener>,
    floating: Rc<RefCell<FloatingButton>>,
    _page: Rc<WebPage>,
}

impl NavBindings {
    /// Number of attached DOM listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn floating_visibility(&self) -> aboutpage_nav::Visibility {
        self.floating.borrow().visibility()
    }
}

fn listen<F>(
    listeners: &mut Vec<Listener>,
    target: EventTarget,
    event: &'static str,
    handler: F,
) -> Result<(), BindError>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .map_err(|err| BindError::Listener {
            event,
            message: js_error_message(&err),
        })?;
    listeners.push(Listener {
        target,
        event,
        callback,
    });
    Ok(())
}

/// Attach the navigator and floating button to the current document.
///
/// Triggers missing from the markup are skipped. The floating button is
/// hidden immediately.
///
/// # Errors
/// Returns an error outside a browser context or when a listener cannot be
/// attached.
pub fn install(setup: NavSetup) -> Result<NavBindings, BindError> {
    let page = Rc::new(WebPage::new()?);
    let navigator = Rc::new(setup.navigator);
    let floating = Rc::new(RefCell::new(setup.floating));
    let mut listeners = Vec::new();

    for binding in navigator.bindings() {
        let trigger = binding.trigger;
        let Some(el) = page.document().get_element_by_id(trigger.dom_id()) else {
            log::debug!("#{trigger} not on page; skipping");
            continue;
        };
        for event in ACTIVATION_EVENTS {
            attach_section_trigger(&mut listeners, &el, event, trigger, &navigator, &page)?;
        }
    }

    floating.borrow_mut().install(page.as_ref());
    let floating_id = floating.borrow().binding().trigger.dom_id();
    if let Some(el) = page.document().get_element_by_id(floating_id) {
        for event in ACTIVATION_EVENTS {
            let floating = Rc::clone(&floating);
            let page = Rc::clone(&page);
            listen(&mut listeners, el.clone().into(), event, move |e: Event| {
                floating.borrow().activate(page.as_ref(), &DomEvent(&e));
            })?;
        }
    } else {
        log::debug!("#{floating_id} not on page; back-to-top disabled");
    }

    if let Some(window) = crate::dom::window() {
        let floating = Rc::clone(&floating);
        let page_for_scroll = Rc::clone(&page);
        listen(&mut listeners, window.into(), "scroll", move |_e: Event| {
            if let Some(next) = floating.borrow_mut().on_scroll(page_for_scroll.as_ref()) {
                log::trace!("floating button -> {next:?}");
            }
        })?;
    }

    log::info!("about page navigation bound ({} listeners)", listeners.len());
    Ok(NavBindings {
        listeners,
        floating,
        _page: page,
    })
}

fn attach_section_trigger(
    listeners: &mut Vec<Listener>,
    el: &web_sys::Element,
    event: &'static str,
    trigger: TriggerId,
    navigator: &Rc<ScrollNavigator>,
    page: &Rc<WebPage>,
) -> Result<(), BindError> {
    let navigator = Rc::clone(navigator);
    let page = Rc::clone(page);
    listen(listeners, el.clone().into(), event, move |e: Event| {
        let outcome = navigator.activate(page.as_ref(), trigger, &DomEvent(&e));
        log::trace!("{trigger}: {outcome:?}");
    })
}
