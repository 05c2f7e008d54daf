#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod animate;
pub mod bind;
pub mod components;
pub mod content;
pub mod dom;

use std::cell::RefCell;

thread_local! {
    static PAGE_BINDINGS: RefCell<Option<bind::NavBindings>> = const { RefCell::new(None) };
}

/// Bind navigation to markup already in the document (`#main`, the sections
/// and the trigger buttons), replacing any earlier binding.
///
/// # Errors
/// Returns an error outside a browser context or if a listener cannot be attached.
pub fn bind_page() -> Result<(), bind::BindError> {
    let bindings = bind::install(content::nav_setup())?;
    PAGE_BINDINGS.with(|slot| *slot.borrow_mut() = Some(bindings));
    Ok(())
}

/// Detach listeners installed by [`bind_page`].
pub fn unbind_page() {
    PAGE_BINDINGS.with(|slot| slot.borrow_mut().take());
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = bindExistingPage)]
pub fn bind_existing_page() -> Result<(), JsValue> {
    bind_page().map_err(|err| JsValue::from_str(&err.to_string()))
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).ok();

    let Some(doc) = dom::document() else {
        return;
    };
    // Static hosts ship their own markup; otherwise render ours.
    if doc.get_element_by_id(aboutpage_nav::SectionId::Main.dom_id()).is_some() {
        if let Err(err) = bind_page() {
            log::debug!("scroll navigation unavailable: {err}");
        }
    } else if let Some(body) = doc.body() {
        yew::Renderer::<components::AboutPage>::with_root(body.into()).render();
    }
}
