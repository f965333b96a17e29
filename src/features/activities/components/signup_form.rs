use leptos::ev;
use leptos::prelude::*;

use crate::features::activities::hooks::expect_board;
use crate::features::activities::services::{submit_signup, BoardView};

#[component]
pub fn SignupForm(#[prop(into)] board_view: Signal<BoardView>) -> impl IntoView {
    let board = expect_board();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        submit_signup(board);
    };

    view! {
        <form id="signup-form" on:submit=on_submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required
                    placeholder="your-email@mergington.edu"
                    prop:value=move || board.form.with(|form| form.email.clone())
                    on:input=move |ev| {
                        let email = event_target_value(&ev);
                        board.form.update(|form| form.email = email);
                    }
                />
            </div>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    required
                    on:change=move |ev| {
                        let activity = event_target_value(&ev);
                        board.form.update(|form| form.activity = activity);
                    }
                >
                    // Options are rebuilt on every fetch; `selected` re-marks the
                    // form's activity if it is still listed. A vanished activity
                    // leaves the placeholder showing and `required` blocks submit.
                    {move || {
                        board_view
                            .get()
                            .options
                            .into_iter()
                            .map(|option| {
                                let value = option.value.clone();
                                view! {
                                    <option
                                        value=option.value
                                        prop:selected=move || board.form.with(|form| form.activity == value)
                                    >
                                        {option.label}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
            <button type="submit">"Sign Up"</button>
        </form>
    }
}
