use leptos::prelude::*;

use crate::config::BoardConfig;
use crate::features::activities::ActivityBoard;

#[component]
pub fn App() -> impl IntoView {
    let config = BoardConfig::from_document();

    view! {
        <main class="app">
            <ActivityBoard config=config />
        </main>
    }
}
