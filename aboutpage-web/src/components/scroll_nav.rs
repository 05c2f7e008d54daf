use aboutpage_nav::NavSetup;
use yew::hook;
use yew::prelude::*;

/// Bind the scroll navigator once the page has mounted; unbind on unmount.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_scroll_nav(setup: NavSetup) {
    use_effect_with((), move |()| {
        let bindings = match crate::bind::install(setup) {
            Ok(bindings) => Some(bindings),
            Err(err) => {
                log::debug!("scroll navigation unavailable: {err}");
                None
            }
        };
        move || drop(bindings)
    });
}

#[cfg(not(target_arch = "wasm32"))]
#[hook]
pub fn use_scroll_nav(setup: NavSetup) {
    let _ = setup;
}
