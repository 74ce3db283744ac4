//! Elapsed-Time Accumulator
//!
//! The stopwatch behind the dashboard's center card. A host loop (the
//! browser's animation frames, or the tokio [`driver`]) calls [`ElapsedTimer::tick`]
//! with a monotonic timestamp once per frame; while running, the delta since
//! the previous frame is added to the accumulated time.
//!
//! ## Cancellation
//!
//! Every running period gets a [`TickToken`]. `pause()` and `reset()` retire
//! the token, so a frame callback that was already scheduled when the user
//! paused comes back [`TickOutcome::Stale`] and changes nothing.
//!
//! ```rust
//! use noxchrono::timer::{ElapsedTimer, TickOutcome};
//! use std::time::Duration;
//!
//! let mut timer = ElapsedTimer::new();
//! let token = timer.start().unwrap();
//!
//! assert_eq!(timer.tick(token, Duration::from_millis(0)), TickOutcome::Baseline);
//! timer.tick(token, Duration::from_millis(1500));
//! assert_eq!(timer.readout(), "00:00:01");
//!
//! timer.pause();
//! assert_eq!(timer.tick(token, Duration::from_millis(9000)), TickOutcome::Stale);
//! assert_eq!(timer.accumulated_ms(), 1500);
//! ```

mod format;

#[cfg(feature = "native")]
pub mod driver;

pub use format::{format_hms, format_minutes, Hms};

use std::time::Duration;

/// Label of the toggle control while paused
pub const START_LABEL: &str = "Start";
/// Label of the toggle control while running
pub const PAUSE_LABEL: &str = "Pause";
/// Label of the reset control
pub const RESET_LABEL: &str = "Reset";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum RunState {
    #[default]
    Paused,
    Running,
}

/// Identifies one running period. Ticks carrying an older token are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickToken(u64);

/// What a single tick did to the accumulator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// First frame of a run; recorded as the baseline, no time added
    Baseline,
    /// Time added since the previous frame
    Advanced(Duration),
    /// The run this tick belonged to is over; nothing changed
    Stale,
}

impl TickOutcome {
    /// Whether the host should request another frame
    pub fn keep_scheduling(&self) -> bool {
        !matches!(self, TickOutcome::Stale)
    }
}

/// Point-in-time view of a timer, cheap to copy into reactive state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimerSnapshot {
    pub accumulated_ms: u64,
    pub running: bool,
}

impl TimerSnapshot {
    /// `HH:MM:SS` readout
    pub fn readout(&self) -> String {
        format_hms(self.accumulated_ms)
    }

    /// Label for the toggle control: "Start" when paused, "Pause" when running
    pub fn control_label(&self) -> &'static str {
        if self.running {
            PAUSE_LABEL
        } else {
            START_LABEL
        }
    }
}

/// Stopwatch that accumulates frame-to-frame deltas while running
#[derive(Debug, Clone, Default)]
pub struct ElapsedTimer {
    accumulated: Duration,
    state: RunState,
    /// Timestamp of the previous frame in the current run
    last_tick: Option<Duration>,
    generation: u64,
}

impl ElapsedTimer {
    /// Create a paused timer at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulated time in whole milliseconds
    pub fn accumulated_ms(&self) -> u64 {
        u64::try_from(self.accumulated.as_millis()).unwrap_or(u64::MAX)
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Token of the current run, if running
    pub fn token(&self) -> Option<TickToken> {
        self.is_running().then_some(TickToken(self.generation))
    }

    /// Start a new running period.
    ///
    /// Returns the token for the new run, or `None` if the timer was already
    /// running (in which case nothing changes).
    pub fn start(&mut self) -> Option<TickToken> {
        if self.is_running() {
            return None;
        }

        self.generation = self.generation.wrapping_add(1);
        self.state = RunState::Running;
        self.last_tick = None;

        tracing::debug!(
            generation = self.generation,
            accumulated_ms = self.accumulated_ms(),
            "timer started"
        );
        Some(TickToken(self.generation))
    }

    /// Stop the current running period, keeping the accumulated time.
    ///
    /// Returns `false` if the timer was already paused.
    pub fn pause(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }

        self.retire_run();
        tracing::debug!(accumulated_ms = self.accumulated_ms(), "timer paused");
        true
    }

    /// Pause if running, start otherwise. Returns the new run's token when started.
    pub fn toggle(&mut self) -> Option<TickToken> {
        if self.is_running() {
            self.pause();
            None
        } else {
            self.start()
        }
    }

    /// Zero the accumulated time and stop, from any state
    pub fn reset(&mut self) {
        self.retire_run();
        self.accumulated = Duration::ZERO;
        tracing::debug!("timer reset");
    }

    /// Deliver one frame timestamp.
    ///
    /// `at` is measured from any fixed monotonic origin chosen by the host.
    /// A timestamp earlier than the previous one adds nothing and becomes the
    /// new baseline, so accumulated time never decreases.
    pub fn tick(&mut self, token: TickToken, at: Duration) -> TickOutcome {
        if !self.is_running() || token.0 != self.generation {
            return TickOutcome::Stale;
        }

        let outcome = match self.last_tick {
            None => TickOutcome::Baseline,
            Some(previous) => {
                let delta = at.saturating_sub(previous);
                self.accumulated = self.accumulated.saturating_add(delta);
                TickOutcome::Advanced(delta)
            }
        };

        self.last_tick = Some(at);
        outcome
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            accumulated_ms: self.accumulated_ms(),
            running: self.is_running(),
        }
    }

    /// `HH:MM:SS` readout of the accumulated time
    pub fn readout(&self) -> String {
        Hms::from_duration(self.accumulated).to_string()
    }

    /// Label for the toggle control
    pub fn control_label(&self) -> &'static str {
        self.snapshot().control_label()
    }

    fn retire_run(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.state = RunState::Paused;
        self.last_tick = None;
    }
}
