use leptos::prelude::*;

use super::{ActivityList, SignupForm, StatusBanner};
use crate::config::BoardConfig;
use crate::features::activities::hooks::use_board;
use crate::features::activities::services::render_board;

#[component]
pub fn ActivityBoard(config: BoardConfig) -> impl IntoView {
    let board = use_board(config);

    // One view per fetch, shared by the list and the dropdown
    let board_view = Memo::new(move |_| board.catalog.with(render_board));

    view! {
        <header class="board-header">
            <h1>"Mergington High School"</h1>
            <h2>"Extracurricular Activities"</h2>
        </header>
        <div class="board">
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList board_view=board_view />
            </section>
            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm board_view=board_view />
                <StatusBanner />
            </section>
        </div>
    }
}
