//! App Root Component
//!
//! The dashboard grid and the theme provider.

use leptos::*;
use noxchrono::Dashboard;

use crate::components::{
    Card, Friends, Leaderboard, Preferences, QuickActions, ThisWeek, Timer, Today,
};
use crate::state::provide_theme;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_theme();

    let board = Dashboard::builtin();

    view! {
        <div class="min-h-dvh bg-base text-text grid grid-cols-1 md:grid-cols-12
                    grid-rows-[auto_auto_auto_auto] md:grid-rows-6 gap-4 p-4 md:p-6">
            // Left column
            <div class="md:col-span-3 md:row-span-2">
                <Today totals=board.today />
            </div>
            <div class="md:col-span-3 md:row-span-2">
                <QuickActions actions=board.quick_actions />
            </div>
            <div class="md:col-span-3 md:row-span-2">
                <ThisWeek bars=board.week />
            </div>

            // Center: big timer
            <div class="md:col-span-6 md:row-span-4 flex items-center justify-center">
                <Card class="w-full h-full flex items-center justify-center">
                    <Timer />
                </Card>
            </div>

            // Right column
            <div class="md:col-span-3 md:row-span-2">
                <Leaderboard entries=board.leaderboard />
            </div>
            <div class="md:col-span-3 md:row-span-2">
                <Friends panel=board.friends />
            </div>
            <div class="md:col-span-3 md:row-span-2">
                <Preferences repository_url=board.repository_url />
            </div>
        </div>
    }
}
