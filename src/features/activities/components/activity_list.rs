use leptos::ev::MouseEvent;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::ActivityCard;
use crate::core::models::Participation;
use crate::features::activities::hooks::expect_board;
use crate::features::activities::services::{
    remove_participant_action, BoardView, ListView, REMOVE_BUTTON_CLASS,
};

#[component]
pub fn ActivityList(#[prop(into)] board_view: Signal<BoardView>) -> impl IntoView {
    let board = expect_board();

    let on_click = move |ev: MouseEvent| {
        if let Some(participation) = removal_target(&ev) {
            remove_participant_action(board, participation);
        }
    };

    view! {
        <div id="activities-list" on:click=on_click>
            {move || match board_view.get().list {
                ListView::Message(text) => view! { <p>{text}</p> }.into_any(),
                ListView::Cards(cards) => cards
                    .into_iter()
                    .map(|card| view! { <ActivityCard card=card /> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}

// Only removal buttons with both data attributes set count as a removal
fn removal_target(ev: &MouseEvent) -> Option<Participation> {
    let target = ev.target()?.dyn_into::<HtmlElement>().ok()?;
    if !target.class_list().contains(REMOVE_BUTTON_CLASS) {
        return None;
    }
    let dataset = target.dataset();
    Participation::from_marker(dataset.get("activity"), dataset.get("email"))
}
