//! UI Components
//!
//! Leptos components for the dashboard.

pub mod card;
pub mod panels;
pub mod timer;

pub use card::Card;
pub use panels::{Friends, Leaderboard, Preferences, QuickActions, ThisWeek, Today};
pub use timer::Timer;
