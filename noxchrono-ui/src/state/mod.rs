//! State Management
//!
//! Theme context and the animation-frame loop behind the stopwatch.

pub mod frame;
pub mod theme;

pub use frame::{frame_timestamp, AnimationLoop};
pub use theme::{provide_theme, ThemeState};
