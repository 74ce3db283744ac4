//! Frame Driver
//!
//! Runs an [`ElapsedTimer`] on a tokio task for hosts without a display
//! refresh loop (the terminal stopwatch). The task is the timer's only owner:
//! commands come in over an mpsc channel, snapshots go out over a watch
//! channel, and frames come from a [`FrameSource`].
//!
//! ## Loop
//!
//! ```text
//! loop {
//!     command ready?        -> apply it (always polled first)
//!     running && frame?     -> timer.tick(token, frame)
//!     publish snapshot if it changed
//! }
//! ```
//!
//! The frame branch is disabled while paused, so a frame that was queued when
//! the pause arrived is never counted.

use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, Interval, MissedTickBehavior};

use super::{ElapsedTimer, TimerSnapshot};

/// Source of frame timestamps
#[async_trait]
pub trait FrameSource: Send {
    /// Wait for the next frame and return its timestamp (from a fixed origin)
    async fn next_frame(&mut self) -> Duration;

    /// A new run is starting; frames should resume from now
    fn restart(&mut self) {}
}

/// Frames at a fixed period, timestamped with the tokio clock
pub struct IntervalFrames {
    origin: Instant,
    interval: Interval,
}

impl IntervalFrames {
    /// Must be called from within a tokio runtime
    pub fn new(period: Duration) -> Self {
        let mut interval = tokio::time::interval(period.max(Duration::from_millis(1)));
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        Self {
            origin: Instant::now(),
            interval,
        }
    }
}

#[async_trait]
impl FrameSource for IntervalFrames {
    async fn next_frame(&mut self) -> Duration {
        self.interval.tick().await;
        Instant::now().duration_since(self.origin)
    }

    fn restart(&mut self) {
        self.interval.reset();
    }
}

/// Commands accepted by the driver task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    Start,
    Pause,
    Toggle,
    Reset,
    /// Stop the task; the final timer is returned from its join handle
    Shutdown,
}

/// Driver errors
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("timer driver has stopped")]
    Stopped,
}

/// Cloneable handle to a running driver task
#[derive(Clone)]
pub struct TimerHandle {
    commands: mpsc::UnboundedSender<TimerCommand>,
    snapshots: watch::Receiver<TimerSnapshot>,
}

impl TimerHandle {
    pub fn send(&self, command: TimerCommand) -> Result<(), DriverError> {
        self.commands.send(command).map_err(|_| DriverError::Stopped)
    }

    pub fn start(&self) -> Result<(), DriverError> {
        self.send(TimerCommand::Start)
    }

    pub fn pause(&self) -> Result<(), DriverError> {
        self.send(TimerCommand::Pause)
    }

    pub fn toggle(&self) -> Result<(), DriverError> {
        self.send(TimerCommand::Toggle)
    }

    pub fn reset(&self) -> Result<(), DriverError> {
        self.send(TimerCommand::Reset)
    }

    pub fn shutdown(&self) -> Result<(), DriverError> {
        self.send(TimerCommand::Shutdown)
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> TimerSnapshot {
        *self.snapshots.borrow()
    }

    /// Receiver notified whenever the snapshot changes
    pub fn subscribe(&self) -> watch::Receiver<TimerSnapshot> {
        self.snapshots.clone()
    }

    /// Wait until a published snapshot satisfies `predicate`
    pub async fn wait_for(
        &self,
        predicate: impl FnMut(&TimerSnapshot) -> bool,
    ) -> Result<TimerSnapshot, DriverError> {
        let mut receiver = self.snapshots.clone();
        let snapshot = receiver
            .wait_for(predicate)
            .await
            .map_err(|_| DriverError::Stopped)?;
        Ok(*snapshot)
    }
}

/// Spawn a driver task owning a fresh timer.
///
/// The task ends on [`TimerCommand::Shutdown`] or once every handle is
/// dropped; its join handle yields the final (paused) timer.
pub fn spawn<F>(frames: F) -> (TimerHandle, JoinHandle<ElapsedTimer>)
where
    F: FrameSource + 'static,
{
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (snapshot_tx, snapshot_rx) = watch::channel(TimerSnapshot::default());

    let task = tokio::spawn(run(frames, command_rx, snapshot_tx));

    let handle = TimerHandle {
        commands: command_tx,
        snapshots: snapshot_rx,
    };

    (handle, task)
}

enum Event {
    Command(Option<TimerCommand>),
    Frame(Duration),
}

async fn run<F: FrameSource>(
    mut frames: F,
    mut commands: mpsc::UnboundedReceiver<TimerCommand>,
    snapshots: watch::Sender<TimerSnapshot>,
) -> ElapsedTimer {
    let mut timer = ElapsedTimer::new();
    tracing::debug!("timer driver started");

    loop {
        let token = timer.token();

        let event = tokio::select! {
            biased;
            command = commands.recv() => Event::Command(command),
            at = frames.next_frame(), if token.is_some() => Event::Frame(at),
        };

        match event {
            Event::Command(None) | Event::Command(Some(TimerCommand::Shutdown)) => break,
            Event::Command(Some(command)) => {
                if apply(&mut timer, command) {
                    frames.restart();
                }
            }
            Event::Frame(at) => {
                if let Some(token) = token {
                    let outcome = timer.tick(token, at);
                    tracing::trace!(?outcome, ?at, "frame");
                }
            }
        }

        publish(&snapshots, &timer);
    }

    timer.pause();
    publish(&snapshots, &timer);
    tracing::debug!(accumulated_ms = timer.accumulated_ms(), "timer driver stopped");

    timer
}

/// Apply a command; returns true when a new run started
fn apply(timer: &mut ElapsedTimer, command: TimerCommand) -> bool {
    match command {
        TimerCommand::Start => timer.start().is_some(),
        TimerCommand::Pause => {
            timer.pause();
            false
        }
        TimerCommand::Toggle => timer.toggle().is_some(),
        TimerCommand::Reset => {
            timer.reset();
            false
        }
        TimerCommand::Shutdown => false,
    }
}

fn publish(snapshots: &watch::Sender<TimerSnapshot>, timer: &ElapsedTimer) {
    let next = timer.snapshot();
    snapshots.send_if_modified(|current| {
        if *current == next {
            false
        } else {
            *current = next;
            true
        }
    });
}
