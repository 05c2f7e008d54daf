use aboutpage_nav::{ActivationEvent, Fade, Page, PageError, ScrollOffsets, Tween};
use js_sys::{Function, Promise};
use std::cell::RefCell;
use std::collections::HashMap;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Event, HtmlElement, Window};

use crate::animate::Animator;

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error outside a browser context, if the timer cannot be
/// scheduled, or if the underlying JavaScript promise rejects.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    win.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        duration_ms,
    )?;
    closure.forget();

    JsFuture::from(promise).await?;
    Ok(())
}

/// Wraps a DOM event so the navigator can cancel its default action.
pub struct DomEvent<'a>(pub &'a Event);

impl ActivationEvent for DomEvent<'_> {
    fn suppress_default(&self) {
        self.0.prevent_default();
    }
}

/// [`Page`] backed by the live browser document.
///
/// Offsets are read from the DOM on every call. Scrolling and fades run on
/// `requestAnimationFrame`, one animation per channel.
pub struct WebPage {
    window: Window,
    document: Document,
    scroll: Animator,
    fades: RefCell<HashMap<String, Animator>>,
}

impl WebPage {
    /// # Errors
    /// Returns an error outside a browser context.
    pub fn new() -> Result<Self, PageError> {
        let window = window().ok_or(PageError::Unavailable("window"))?;
        let document = window
            .document()
            .ok_or(PageError::Unavailable("document"))?;
        Ok(Self {
            window,
            document,
            scroll: Animator::default(),
            fades: RefCell::new(HashMap::new()),
        })
    }

    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    fn html_element(&self, id: &str) -> Result<HtmlElement, PageError> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| PageError::MissingElement(id.to_string()))
    }

    fn fade_animator(&self, id: &str) -> Animator {
        self.fades
            .borrow_mut()
            .entry(id.to_string())
            .or_default()
            .clone()
    }
}

fn current_opacity(el: &HtmlElement) -> f64 {
    let style = el.style();
    if style.get_property_value("display").ok().as_deref() == Some("none") {
        return 0.0;
    }
    style
        .get_property_value("opacity")
        .ok()
        .and_then(|raw| raw.parse::<f64>().ok())
        .unwrap_or(1.0)
}

fn set_opacity(el: &HtmlElement, value: f64) {
    let _ = el.style().set_property("opacity", &format!("{value:.3}"));
}

impl Page for WebPage {
    fn element_top(&self, id: &str) -> Option<f64> {
        let el = self.document.get_element_by_id(id)?;
        let page_y = self.window.page_y_offset().unwrap_or(0.0);
        Some(el.get_bounding_client_rect().top() + page_y)
    }

    fn scroll_offsets(&self) -> ScrollOffsets {
        let window_y = self.window.page_y_offset().unwrap_or(0.0);
        let root_scroll_top = self
            .document
            .document_element()
            .map_or(0.0, |root| f64::from(root.scroll_top()));
        ScrollOffsets::new(window_y, root_scroll_top)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    fn animate_scroll(&self, to: f64, duration_ms: u32) -> Result<(), PageError> {
        let from = self.scroll_offsets().position();
        let window = self.window.clone();
        self.scroll.start(
            &self.window,
            Tween::new(from, to, duration_ms),
            move |y| {
                let x = window.page_x_offset().unwrap_or(0.0);
                window.scroll_to_with_x_and_y(x, y);
            },
            None,
        )
    }

    fn fade(&self, id: &str, fade: Fade, duration_ms: u32) -> Result<(), PageError> {
        let el = self.html_element(id)?;
        let from = current_opacity(&el);
        if fade == Fade::In {
            let _ = el.style().remove_property("display");
            set_opacity(&el, from);
        }
        let on_done: Option<Box<dyn FnOnce()>> = match fade {
            Fade::Out => {
                let el = el.clone();
                Some(Box::new(move || {
                    let _ = el.style().set_property("display", "none");
                }))
            }
            Fade::In => None,
        };
        let target = el.clone();
        self.fade_animator(id).start(
            &self.window,
            Tween::new(from, fade.target_opacity(), duration_ms),
            move |value| set_opacity(&target, value),
            on_done,
        )
    }
}

impl Drop for WebPage {
    fn drop(&mut self) {
        self.scroll.cancel(&self.window);
        for animator in self.fades.borrow().values() {
            animator.cancel(&self.window);
        }
    }
}
