//! Dashboard Panels
//!
//! The constant content around the timer: today's totals, quick actions,
//! the weekly chart, the leaderboard, friends and preference links. None of
//! it is loaded from anywhere; the same values render on every visit.

use serde::Serialize;

use crate::timer::format_minutes;

/// Panel titles, in layout order
pub const TODAY_TITLE: &str = "Today at a glance";
pub const QUICK_ACTIONS_TITLE: &str = "Quick actions";
pub const WEEK_TITLE: &str = "This week";
pub const LEADERBOARD_TITLE: &str = "Leaderboard";
pub const FRIENDS_TITLE: &str = "Friends";
pub const PREFERENCES_TITLE: &str = "Preferences";

/// Subtitle under every quick action
pub const QUICK_ACTION_HINT: &str = "Fast shortcut";
/// Caption under the weekly chart
pub const WEEK_CAPTION: &str = "Minutes per day";
/// Placeholder of the add-friend input
pub const ADD_FRIEND_PLACEHOLDER: &str = "Add friend by email";
/// Project link in the preferences panel
pub const REPOSITORY_URL: &str = "https://github.com/yourname/noxchrono";

/// Shortest bar drawn in the weekly chart, in percent
pub const MIN_BAR_PERCENT: u32 = 8;

const TODAY: [(&str, u32); 3] = [("Study", 80), ("Workout", 45), ("Reading", 30)];
const QUICK_ACTIONS: [&str; 4] = ["Add Activity", "Log Pomodoro", "Start Focus", "Add Note"];
const WEEKLY_MINUTES: [u32; 7] = [60, 40, 75, 90, 30, 50, 80];
const LEADERBOARD: [(&str, u32); 3] = [("Aarav", 320), ("Meera", 295), ("Yash", 260)];
const FRIENDS: [&str; 3] = ["Priya", "Kunal", "Riya"];
const SUGGESTIONS: [&str; 2] = ["Arjun", "Neha"];

/// Time spent on one activity today
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityTotal {
    pub activity: String,
    pub minutes: u32,
}

impl ActivityTotal {
    /// Display form, e.g. `1h 20m`
    pub fn duration_label(&self) -> String {
        format_minutes(self.minutes)
    }
}

/// One column of the weekly chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeekBar {
    /// Day index, 0 = first day shown
    pub day: usize,
    pub minutes: u32,
}

impl WeekBar {
    /// Bar height in percent, floored so empty days stay visible
    pub fn height_percent(&self) -> u32 {
        self.minutes.max(MIN_BAR_PERCENT)
    }
}

/// A leaderboard row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    /// 1-based position
    pub rank: usize,
    pub name: String,
    pub minutes: u32,
}

impl LeaderboardEntry {
    /// `1. Aarav`
    pub fn ranked_name(&self) -> String {
        format!("{}. {}", self.rank, self.name)
    }

    /// `320 min`
    pub fn minutes_label(&self) -> String {
        format!("{} min", self.minutes)
    }
}

/// Friends panel contents
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FriendsPanel {
    pub friends: Vec<String>,
    pub suggestions: Vec<String>,
}

impl FriendsPanel {
    /// `Suggestions: Arjun, Neha`
    pub fn suggestions_line(&self) -> String {
        format!("Suggestions: {}", self.suggestions.join(", "))
    }
}

/// Everything the dashboard shows besides the timer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub today: Vec<ActivityTotal>,
    pub quick_actions: Vec<String>,
    pub week: Vec<WeekBar>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub friends: FriendsPanel,
    pub repository_url: String,
}

impl Dashboard {
    /// The built-in dashboard content
    pub fn builtin() -> Self {
        Self {
            today: TODAY
                .iter()
                .map(|(activity, minutes)| ActivityTotal {
                    activity: activity.to_string(),
                    minutes: *minutes,
                })
                .collect(),
            quick_actions: QUICK_ACTIONS.iter().map(|s| s.to_string()).collect(),
            week: WEEKLY_MINUTES
                .iter()
                .enumerate()
                .map(|(day, minutes)| WeekBar {
                    day,
                    minutes: *minutes,
                })
                .collect(),
            leaderboard: LEADERBOARD
                .iter()
                .enumerate()
                .map(|(i, (name, minutes))| LeaderboardEntry {
                    rank: i + 1,
                    name: name.to_string(),
                    minutes: *minutes,
                })
                .collect(),
            friends: FriendsPanel {
                friends: FRIENDS.iter().map(|s| s.to_string()).collect(),
                suggestions: SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
            },
            repository_url: REPOSITORY_URL.to_string(),
        }
    }

    /// Total minutes across the week
    pub fn week_total(&self) -> u32 {
        self.week.iter().map(|bar| bar.minutes).sum()
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_labels() {
        let dashboard = Dashboard::builtin();
        let labels: Vec<_> = dashboard
            .today
            .iter()
            .map(|t| (t.activity.as_str(), t.duration_label()))
            .collect();

        assert_eq!(
            labels,
            vec![
                ("Study", "1h 20m".to_string()),
                ("Workout", "45m".to_string()),
                ("Reading", "30m".to_string()),
            ]
        );
    }

    #[test]
    fn test_week_bars() {
        let dashboard = Dashboard::builtin();
        assert_eq!(dashboard.week.len(), 7);
        assert_eq!(dashboard.week_total(), 425);

        let heights: Vec<_> = dashboard.week.iter().map(|b| b.height_percent()).collect();
        assert_eq!(heights, vec![60, 40, 75, 90, 30, 50, 80]);
    }

    #[test]
    fn test_bar_height_floor() {
        assert_eq!(WeekBar { day: 0, minutes: 0 }.height_percent(), 8);
        assert_eq!(WeekBar { day: 0, minutes: 7 }.height_percent(), 8);
        assert_eq!(WeekBar { day: 0, minutes: 9 }.height_percent(), 9);
    }

    #[test]
    fn test_leaderboard_ranks() {
        let dashboard = Dashboard::builtin();
        let rows: Vec<_> = dashboard
            .leaderboard
            .iter()
            .map(|e| (e.ranked_name(), e.minutes_label()))
            .collect();

        assert_eq!(rows[0], ("1. Aarav".to_string(), "320 min".to_string()));
        assert_eq!(rows[1], ("2. Meera".to_string(), "295 min".to_string()));
        assert_eq!(rows[2], ("3. Yash".to_string(), "260 min".to_string()));
    }

    #[test]
    fn test_friends_panel() {
        let dashboard = Dashboard::builtin();
        assert_eq!(dashboard.friends.friends, vec!["Priya", "Kunal", "Riya"]);
        assert_eq!(dashboard.friends.suggestions_line(), "Suggestions: Arjun, Neha");
    }

    #[test]
    fn test_quick_actions() {
        let dashboard = Dashboard::builtin();
        assert_eq!(
            dashboard.quick_actions,
            vec!["Add Activity", "Log Pomodoro", "Start Focus", "Add Note"]
        );
    }
}
