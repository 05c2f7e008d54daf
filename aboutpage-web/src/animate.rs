//! `requestAnimationFrame` driver for [`Tween`]s.
use aboutpage_nav::{PageError, Tween};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::dom::js_error_message;

type FrameCallback = Closure<dyn FnMut(f64)>;
type CallbackCell = Rc<RefCell<Option<FrameCallback>>>;

#[derive(Default)]
struct Running {
    frame_id: Option<i32>,
    callback: Option<CallbackCell>,
}

/// One animation channel. Starting an animation cancels the previous one.
#[derive(Clone, Default)]
pub struct Animator {
    running: Rc<RefCell<Running>>,
}

impl Animator {
    /// Stop the running animation, leaving the value where it is.
    pub fn cancel(&self, window: &Window) {
        let mut running = self.running.borrow_mut();
        if let Some(id) = running.frame_id.take() {
            let _ = window.cancel_animation_frame(id);
        }
        // Breaks the callback's reference to itself.
        if let Some(cell) = running.callback.take() {
            cell.borrow_mut().take();
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.borrow().frame_id.is_some()
    }

    /// Run `tween`, feeding each sampled value to `apply`.
    ///
    /// A zero-duration tween is applied synchronously. `on_done` runs once
    /// after the final value is applied, and not at all if the animation is
    /// superseded.
    ///
    /// # Errors
    /// Returns an error if the first frame cannot be requested.
    pub fn start<F>(
        &self,
        window: &Window,
        tween: Tween,
        mut apply: F,
        on_done: Option<Box<dyn FnOnce()>>,
    ) -> Result<(), PageError>
    where
        F: FnMut(f64) + 'static,
    {
        self.cancel(window);

        if tween.duration_ms == 0 {
            apply(tween.to);
            if let Some(done) = on_done {
                done();
            }
            return Ok(());
        }

        let cell: CallbackCell = Rc::new(RefCell::new(None));
        let tick_cell = Rc::clone(&cell);
        let running = Rc::clone(&self.running);
        let tick_window = window.clone();
        let mut started_at: Option<f64> = None;
        let mut on_done = on_done;

        let tick = Closure::wrap(Box::new(move |now: f64| {
            let start = *started_at.get_or_insert(now);
            let elapsed = now - start;
            apply(tween.value_at(elapsed));
            if tween.is_done(elapsed) {
                running.borrow_mut().frame_id = None;
                if let Some(done) = on_done.take() {
                    done();
                }
                return;
            }
            let next = tick_cell.borrow().as_ref().and_then(|cb| {
                tick_window
                    .request_animation_frame(cb.as_ref().unchecked_ref())
                    .ok()
            });
            running.borrow_mut().frame_id = next;
        }) as Box<dyn FnMut(f64)>);

        let id = window
            .request_animation_frame(tick.as_ref().unchecked_ref())
            .map_err(|err| PageError::Script(js_error_message(&err)))?;
        *cell.borrow_mut() = Some(tick);

        let mut running = self.running.borrow_mut();
        running.frame_id = Some(id);
        running.callback = Some(cell);
        Ok(())
    }
}
