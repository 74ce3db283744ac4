//! Animation Frame Loop
//!
//! Self-rescheduling `requestAnimationFrame` callback. At most one frame is
//! pending at a time, and [`AnimationLoop::cancel`] withdraws it with
//! `cancelAnimationFrame`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Convert a `DOMHighResTimeStamp` (milliseconds) to a duration from page load
pub fn frame_timestamp(timestamp_ms: f64) -> Duration {
    Duration::try_from_secs_f64(timestamp_ms / 1000.0).unwrap_or_default()
}

/// Owner of the pending frame request
#[derive(Default)]
pub struct AnimationLoop {
    request_id: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl AnimationLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request frames until `on_frame` returns false or [`cancel`](Self::cancel) is called.
    ///
    /// Replaces any loop already running. Must not be called from inside a
    /// frame callback.
    pub fn run(&self, mut on_frame: impl FnMut(f64) -> bool + 'static) {
        self.cancel();

        let request_id = Rc::clone(&self.request_id);
        let callback = Rc::clone(&self.callback);

        let frame = Closure::wrap(Box::new(move |timestamp: f64| {
            request_id.set(None);
            if on_frame(timestamp) {
                if let Some(next) = callback.borrow().as_ref() {
                    request_id.set(request_frame(next));
                }
            }
        }) as Box<dyn FnMut(f64)>);

        self.request_id.set(request_frame(&frame));
        *self.callback.borrow_mut() = Some(frame);
    }

    /// Withdraw the pending frame, if any
    pub fn cancel(&self) {
        let Some(id) = self.request_id.take() else {
            return;
        };

        if let Some(window) = web_sys::window() {
            if let Err(e) = window.cancel_animation_frame(id) {
                web_sys::console::error_1(&e);
            }
        }
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.cancel();
        // The closure holds an Rc to its own slot; break the cycle
        self.callback.borrow_mut().take();
    }
}

fn request_frame(callback: &FrameCallback) -> Option<i32> {
    let window = web_sys::window()?;
    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            web_sys::console::error_1(&e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_timestamp() {
        assert_eq!(frame_timestamp(0.0), Duration::ZERO);
        assert_eq!(frame_timestamp(1500.0), Duration::from_millis(1500));
        assert_eq!(frame_timestamp(250.0), Duration::from_millis(250));
    }

    #[test]
    fn test_frame_timestamp_rejects_garbage() {
        assert_eq!(frame_timestamp(-5.0), Duration::ZERO);
        assert_eq!(frame_timestamp(f64::NAN), Duration::ZERO);
        assert_eq!(frame_timestamp(f64::INFINITY), Duration::ZERO);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_futures::JsFuture;
    use wasm_bindgen_test::*;

    /// Resolve after `count` animation frames have been painted
    async fn frames_elapsed(count: usize) {
        for _ in 0..count {
            let promise = js_sys::Promise::new(&mut |resolve, _reject| {
                let window = web_sys::window().unwrap();
                window.request_animation_frame(&resolve).unwrap();
            });
            JsFuture::from(promise).await.unwrap();
        }
    }

    fn counting_loop(keep_going: impl Fn(u32) -> bool + 'static) -> (AnimationLoop, Rc<Cell<u32>>) {
        let frames = AnimationLoop::new();
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        frames.run(move |_| {
            seen.set(seen.get() + 1);
            keep_going(seen.get())
        });
        (frames, calls)
    }

    #[wasm_bindgen_test]
    async fn test_cancel_stops_callbacks() {
        let (frames, calls) = counting_loop(|_| true);
        frames_elapsed(2).await;
        assert!(calls.get() >= 1);

        frames.cancel();
        assert!(frames.request_id.get().is_none());
        let at_cancel = calls.get();

        frames_elapsed(2).await;
        assert_eq!(calls.get(), at_cancel);
    }

    #[wasm_bindgen_test]
    async fn test_returning_false_stops_rescheduling() {
        let (frames, calls) = counting_loop(|_| false);
        frames_elapsed(3).await;

        assert_eq!(calls.get(), 1);
        assert!(frames.request_id.get().is_none());
    }

    #[wasm_bindgen_test]
    async fn test_run_replaces_previous_loop() {
        let (frames, first) = counting_loop(|_| true);
        let second = Rc::new(Cell::new(0));
        let seen = Rc::clone(&second);
        frames.run(move |_| {
            seen.set(seen.get() + 1);
            true
        });

        frames_elapsed(2).await;
        assert_eq!(first.get(), 0);
        assert!(second.get() >= 1);
        frames.cancel();
    }
}
