#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, EventInit, HtmlElement};

use aboutpage_nav::{Tween, Visibility};
use aboutpage_web::animate::Animator;
use aboutpage_web::bind::{self, NavBindings};
use aboutpage_web::{content, dom};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

const FIXTURE: &str = r##"
<main id="main" style="height:400px">
  <a id="eulaBtn" href="#eula">EULA</a>
  <a id="policyBtn" href="#policy">Privacy</a>
  <a id="devBtn" href="#developer">Developer</a>
  <a id="socialBtn" href="#social">Social</a>
  <a id="ackBtn" href="#acknowledgement">Credits</a>
</main>
<section id="eula" style="height:2000px">eula</section>
<section id="policy" style="height:2000px">policy</section>
<section id="developer" style="height:2000px">developer</section>
<section id="social" style="height:2000px">social</section>
<section id="acknowledgement" style="height:2000px">ack</section>
<a id="floatingBtn" href="#main" style="position:fixed;bottom:0">top</a>
"##;

/// Five section clicks, the floating button click and the window scroll.
const EXPECTED_LISTENERS: usize = 7;

fn set_fixture() {
    aboutpage_web::unbind_page();
    let doc = dom::document().expect("document");
    let body = doc.body().expect("document body");
    body.set_inner_html(FIXTURE);
    jump_to(0.0);
}

fn mount_fixture() -> NavBindings {
    set_fixture();
    let bindings = bind::install(content::nav_setup()).expect("bind page");
    assert_eq!(bindings.listener_count(), EXPECTED_LISTENERS);
    bindings
}

fn element(id: &str) -> HtmlElement {
    dom::document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .unwrap_or_else(|| panic!("#{id} should exist"))
}

/// Dispatch a cancelable event; returns `false` when the default was prevented.
fn dispatch(id: &str, kind: &str) -> bool {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict(kind, &init).expect("event");
    element(id).dispatch_event(&event).expect("dispatch")
}

fn click(id: &str) -> bool {
    dispatch(id, "click")
}

async fn sleep(ms: i32) {
    dom::sleep_ms(ms).await.expect("timer");
}

fn jump_to(y: f64) {
    dom::window().expect("window").scroll_to_with_x_and_y(0.0, y);
}

fn scroll_y() -> f64 {
    dom::window()
        .and_then(|w| w.page_y_offset().ok())
        .unwrap_or_default()
}

fn viewport() -> f64 {
    dom::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(800.0)
}

fn document_top(id: &str) -> f64 {
    element(id).get_bounding_client_rect().top() + scroll_y()
}

fn floating_display() -> String {
    element("floatingBtn")
        .style()
        .get_property_value("display")
        .unwrap_or_default()
}

#[wasm_bindgen_test]
async fn section_button_scrolls_to_its_section() {
    let _bindings = mount_fixture();
    let expected = document_top("developer");
    assert!(!click("devBtn"), "default anchor jump must be suppressed");
    sleep(1300).await;
    assert!((scroll_y() - expected).abs() < 2.0, "expected {expected}, got {}", scroll_y());
}

#[wasm_bindgen_test]
async fn unbinding_the_page_detaches_triggers() {
    set_fixture();
    aboutpage_web::bind_page().expect("bind page");
    assert!(!click("policyBtn"));
    sleep(1300).await;
    assert!(scroll_y() > 1.0);

    aboutpage_web::unbind_page();
    jump_to(0.0);
    assert!(click("policyBtn"), "no listener should cancel the click");
    sleep(300).await;
    assert!(scroll_y() < 1.0);
}

#[wasm_bindgen_test]
async fn floating_button_hides_until_scrolled_past_viewport() {
    let bindings = mount_fixture();
    assert_eq!(floating_display(), "none");
    assert_eq!(bindings.floating_visibility(), Visibility::Hidden);

    jump_to(viewport() + 200.0);
    sleep(600).await;
    assert_ne!(floating_display(), "none");
    assert_eq!(bindings.floating_visibility(), Visibility::Visible);

    assert!(!click("floatingBtn"));
    sleep(1800).await;
    assert!(scroll_y() < 2.0);
    sleep(600).await;
    assert_eq!(floating_display(), "none");
    assert_eq!(bindings.floating_visibility(), Visibility::Hidden);
}

#[wasm_bindgen_test]
async fn missing_section_leaves_page_in_place() {
    let _bindings = mount_fixture();
    element("developer").remove();
    assert!(!click("devBtn"));
    sleep(300).await;
    assert!(scroll_y() < 1.0);
}

#[wasm_bindgen_test]
async fn swipe_starting_on_a_trigger_does_not_scroll() {
    let _bindings = mount_fixture();
    for kind in ["touchstart", "touchmove", "touchend"] {
        dispatch("socialBtn", kind);
    }
    sleep(1300).await;
    assert!(scroll_y() < 1.0, "swipe scrolled to {}", scroll_y());
}

#[wasm_bindgen_test]
async fn second_click_supersedes_running_scroll() {
    let _bindings = mount_fixture();
    let expected = document_top("eula");
    assert!(!click("ackBtn"));
    sleep(300).await;
    assert!(scroll_y() > 1.0, "first scroll should be under way");
    assert!(!click("eulaBtn"));
    sleep(1300).await;
    assert!((scroll_y() - expected).abs() < 2.0, "expected {expected}, got {}", scroll_y());
}

#[wasm_bindgen_test]
async fn interrupted_fade_out_leaves_button_shown() {
    let bindings = mount_fixture();
    let past = viewport() + 200.0;

    jump_to(past);
    sleep(50).await;
    jump_to(10.0);
    sleep(50).await;
    jump_to(past);
    sleep(600).await;

    assert_ne!(floating_display(), "none");
    assert_eq!(bindings.floating_visibility(), Visibility::Visible);
}

#[wasm_bindgen_test]
fn zero_duration_animation_applies_synchronously() {
    let window = dom::window().expect("window");
    let animator = Animator::default();
    let value = Rc::new(Cell::new(0.0));
    let done = Rc::new(Cell::new(false));

    let sink = Rc::clone(&value);
    let flag = Rc::clone(&done);
    animator
        .start(
            &window,
            Tween::new(0.0, 5.0, 0),
            move |v| sink.set(v),
            Some(Box::new(move || flag.set(true))),
        )
        .expect("start");

    assert_eq!(value.get(), 5.0);
    assert!(done.get());
    assert!(!animator.is_running());
}

#[wasm_bindgen_test]
async fn superseded_animation_never_completes() {
    let window = dom::window().expect("window");
    let animator = Animator::default();
    let first_done = Rc::new(Cell::new(false));
    let second_done = Rc::new(Cell::new(false));
    let value = Rc::new(Cell::new(0.0));

    let flag = Rc::clone(&first_done);
    let sink = Rc::clone(&value);
    animator
        .start(
            &window,
            Tween::new(0.0, 100.0, 200),
            move |v| sink.set(v),
            Some(Box::new(move || flag.set(true))),
        )
        .expect("start first");
    assert!(animator.is_running());

    let flag = Rc::clone(&second_done);
    let sink = Rc::clone(&value);
    animator
        .start(
            &window,
            Tween::new(0.0, 1.0, 50),
            move |v| sink.set(v),
            Some(Box::new(move || flag.set(true))),
        )
        .expect("start second");

    sleep(400).await;
    assert!(!first_done.get());
    assert!(second_done.get());
    assert_eq!(value.get(), 1.0);
    assert!(!animator.is_running());
}
