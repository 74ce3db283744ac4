//! Stopwatch Component
//!
//! Big `HH:MM:SS` readout with Start/Pause and Reset controls. The
//! [`ElapsedTimer`] is owned by this component and dies with it; frames come
//! from the browser's animation loop while running.

use leptos::*;
use noxchrono::timer::{ElapsedTimer, TickToken, TimerSnapshot, RESET_LABEL};
use std::cell::RefCell;
use std::rc::Rc;

use super::card::tinted;
use crate::state::{frame_timestamp, AnimationLoop};

const BUTTON_CLASS: &str =
    "px-5 py-2 rounded-lg border hover:opacity-90 active:scale-[0.98] transition";

/// Stopwatch component
#[component]
pub fn Timer() -> impl IntoView {
    let timer = Rc::new(RefCell::new(ElapsedTimer::new()));
    let frames = Rc::new(AnimationLoop::new());
    let (snapshot, set_snapshot) = create_signal(TimerSnapshot::default());

    // Only touch the DOM when a displayed digit changes
    let readout = create_memo(move |_| snapshot.get().readout());
    let label = create_memo(move |_| snapshot.get().control_label());

    let run_frames = {
        let timer = Rc::clone(&timer);
        let frames = Rc::clone(&frames);
        move |token: TickToken| {
            let timer = Rc::clone(&timer);
            frames.run(move |timestamp| {
                let (outcome, next) = {
                    let mut timer = timer.borrow_mut();
                    let outcome = timer.tick(token, frame_timestamp(timestamp));
                    (outcome, timer.snapshot())
                };
                set_snapshot.set(next);
                outcome.keep_scheduling()
            });
        }
    };

    let on_toggle = {
        let timer = Rc::clone(&timer);
        let frames = Rc::clone(&frames);
        move |_| {
            let started = timer.borrow_mut().toggle();
            match started {
                Some(token) => run_frames(token),
                None => frames.cancel(),
            }
            set_snapshot.set(timer.borrow().snapshot());
        }
    };

    let on_reset = {
        let timer = Rc::clone(&timer);
        let frames = Rc::clone(&frames);
        move |_| {
            timer.borrow_mut().reset();
            frames.cancel();
            set_snapshot.set(timer.borrow().snapshot());
        }
    };

    // Tearing down the view must not leave a frame pending
    on_cleanup(move || frames.cancel());

    view! {
        <div class="flex flex-col items-center justify-center gap-4">
            <div class="text-[10vw] leading-none font-black tracking-tight text-lavender \
                        select-none will-change-transform transform-gpu">
                {move || readout.get()}
            </div>
            <div class="flex gap-3">
                <button on:click=on_toggle class=BUTTON_CLASS style=tinted("teal", 20)>
                    {move || label.get()}
                </button>
                <button on:click=on_reset class=BUTTON_CLASS style=tinted("red", 20)>
                    {RESET_LABEL}
                </button>
            </div>
        </div>
    }
}
