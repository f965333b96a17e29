use leptos::prelude::*;

use crate::features::activities::hooks::expect_board;

#[component]
pub fn StatusBanner() -> impl IntoView {
    let board = expect_board();

    view! {
        <div id="message" class=move || board.status.with(|status| status.css_class())>
            {move || board.status.with(|status| status.text().to_string())}
        </div>
    }
}
