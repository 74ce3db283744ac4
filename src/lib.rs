//! # NoxChrono
//!
//! A focus dashboard built around a frame-driven stopwatch.
//!
//! ## Modules
//!
//! - [`timer`]: Elapsed-time accumulator, `HH:MM:SS` formatting and (native)
//!   the tokio frame driver
//! - [`dashboard`]: The constant panels shown around the timer
//! - [`theme`]: Dark/light mode flag
//! - [`config`], [`logging`], [`error`]: Native-only ambient layers
//!
//! The browser dashboard (`noxchrono-ui`) depends on this crate with
//! `default-features = false`, which leaves only the platform-free modules.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use noxchrono::timer::driver::{self, IntervalFrames};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (timer, task) = driver::spawn(IntervalFrames::new(Duration::from_millis(16)));
//!
//!     timer.start()?;
//!     tokio::time::sleep(Duration::from_secs(2)).await;
//!     timer.pause()?;
//!
//!     println!("{}", timer.wait_for(|s| !s.running).await?.readout());
//!
//!     timer.shutdown()?;
//!     task.await?;
//!     Ok(())
//! }
//! ```

pub mod dashboard;
pub mod theme;
pub mod timer;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod error;
#[cfg(feature = "native")]
pub mod logging;

// Re-export top-level types for convenience
pub use dashboard::{ActivityTotal, Dashboard, FriendsPanel, LeaderboardEntry, WeekBar};
pub use theme::ThemeMode;
pub use timer::{format_hms, ElapsedTimer, Hms, TickOutcome, TickToken, TimerSnapshot};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, DisplayConfig, LoggingConfig, TimerConfig};
#[cfg(feature = "native")]
pub use error::{Error, Result};
#[cfg(feature = "native")]
pub use timer::driver::{DriverError, FrameSource, IntervalFrames, TimerCommand, TimerHandle};
