//! Dashboard Panels
//!
//! The static cards around the stopwatch. Apart from "Toggle Theme", every
//! button here is a placeholder with no handler.

use leptos::*;
use noxchrono::dashboard::{self, ActivityTotal, FriendsPanel, LeaderboardEntry, WeekBar};

use super::card::{tinted, Card};
use crate::state::ThemeState;

const CONTROL_CLASS: &str = "px-3 py-2 rounded-md border transition";

/// Today's totals per activity
#[component]
pub fn Today(totals: Vec<ActivityTotal>) -> impl IntoView {
    view! {
        <Card title=dashboard::TODAY_TITLE>
            <ul class="space-y-2 text-sm">
                {totals.into_iter().map(|total| view! {
                    <li class="flex justify-between">
                        <span>{total.activity.clone()}</span>
                        <span class="text-subtext1">{total.duration_label()}</span>
                    </li>
                }).collect_view()}
            </ul>
        </Card>
    }
}

/// Shortcut buttons
#[component]
pub fn QuickActions(actions: Vec<String>) -> impl IntoView {
    view! {
        <Card title=dashboard::QUICK_ACTIONS_TITLE>
            <div class="grid grid-cols-2 gap-3">
                {actions.into_iter().map(|label| view! {
                    <button class="rounded-lg px-3 py-3 text-left bg-surface1/60 border border-overlay0/40
                                   hover:bg-surface1 hover:translate-y-[-1px] active:translate-y-0 transition">
                        <div class="text-sm font-semibold">{label}</div>
                        <div class="text-subtext1 text-xs">{dashboard::QUICK_ACTION_HINT}</div>
                    </button>
                }).collect_view()}
            </div>
        </Card>
    }
}

/// Minutes per day bar chart
#[component]
pub fn ThisWeek(bars: Vec<WeekBar>) -> impl IntoView {
    view! {
        <Card title=dashboard::WEEK_TITLE>
            <div class="flex items-end gap-2 h-24">
                {bars.into_iter().map(|bar| view! {
                    <div
                        class="w-6 rounded-md border hover:opacity-90 transition"
                        title=format!("{} min", bar.minutes)
                        style=bar_style(&bar)
                    />
                }).collect_view()}
            </div>
            <p class="mt-2 text-xs text-subtext1">{dashboard::WEEK_CAPTION}</p>
        </Card>
    }
}

fn bar_style(bar: &WeekBar) -> String {
    format!(
        "height: {}%; \
         background-color: color-mix(in oklab, var(--color-blue) 30%, transparent); \
         border-color: color-mix(in oklab, var(--color-blue) 50%, transparent)",
        bar.height_percent()
    )
}

/// Ranked weekly minutes
#[component]
pub fn Leaderboard(entries: Vec<LeaderboardEntry>) -> impl IntoView {
    view! {
        <Card title=dashboard::LEADERBOARD_TITLE>
            <ol class="text-sm space-y-2">
                {entries.into_iter().map(|entry| view! {
                    <li class="flex justify-between">
                        <span class="font-semibold">{entry.ranked_name()}</span>
                        <span class="text-subtext1">{entry.minutes_label()}</span>
                    </li>
                }).collect_view()}
            </ol>
        </Card>
    }
}

/// Friends list with an add-by-email field
#[component]
pub fn Friends(panel: FriendsPanel) -> impl IntoView {
    let suggestions = panel.suggestions_line();

    view! {
        <Card title=dashboard::FRIENDS_TITLE>
            <div class="flex gap-2 mb-3">
                <input
                    type="email"
                    placeholder=dashboard::ADD_FRIEND_PLACEHOLDER
                    class="flex-1 px-3 py-2 rounded-md bg-surface1/60 border border-overlay0/40
                           focus:outline-none focus:ring-2 focus:ring-[color:var(--color-teal)]/50"
                />
                <button class=CONTROL_CLASS style=tinted("teal", 20)>"Add"</button>
            </div>
            <div class="space-y-2">
                {panel.friends.into_iter().map(|name| view! {
                    <div class="flex items-center justify-between rounded-md bg-surface1/50 border border-overlay0/40 px-3 py-2">
                        <span>{name}</span>
                        <div class="flex gap-2">
                            <button class="hover:underline" style="color: var(--color-blue)">"Invite"</button>
                            <button class="hover:underline" style="color: var(--color-red)">"Remove"</button>
                        </div>
                    </div>
                }).collect_view()}
            </div>
            <p class="mt-3 text-xs text-subtext1">{suggestions}</p>
        </Card>
    }
}

/// Theme toggle and outbound links
#[component]
pub fn Preferences(#[prop(into)] repository_url: String) -> impl IntoView {
    let theme = use_context::<ThemeState>().expect("ThemeState not found");

    view! {
        <Card title=dashboard::PREFERENCES_TITLE>
            <div class="flex flex-wrap items-center gap-3">
                <button
                    on:click=move |_| theme.toggle()
                    class=CONTROL_CLASS
                    style=tinted("mauve", 20)
                    title=move || format!("Currently {}", theme.mode.get())
                >
                    "Toggle Theme"
                </button>
                <button class=CONTROL_CLASS style=tinted("yellow", 20)>"Account"</button>
                <a
                    href=repository_url
                    target="_blank"
                    rel="noreferrer"
                    class=CONTROL_CLASS
                    style=tinted("lavender", 20)
                >
                    "GitHub"
                </a>
            </div>
        </Card>
    }
}
