use leptos::prelude::*;

use crate::features::activities::services::{
    ActivityCardView, ParticipantsView, NO_PARTICIPANTS_TEXT, REMOVE_BUTTON_CLASS,
};

#[component]
pub fn ActivityCard(card: ActivityCardView) -> impl IntoView {
    let availability = card.availability();

    // Removal buttons carry their target in data attributes; ActivityList
    // picks clicks up through a single delegated handler.
    let participants = match card.participants {
        ParticipantsView::Empty => view! {
            <li class="empty-participants">{NO_PARTICIPANTS_TEXT}</li>
        }
        .into_any(),
        ParticipantsView::Rows(rows) => rows
            .into_iter()
            .map(|row| {
                view! {
                    <li class="participant-item">
                        <span class="participant-email">{row.email}</span>
                        <button
                            type="button"
                            class=REMOVE_BUTTON_CLASS
                            aria-label=row.aria_label
                            data-activity=row.removal.activity
                            data-email=row.removal.email
                        >"🗑"</button>
                    </li>
                }
            })
            .collect_view()
            .into_any(),
    };

    view! {
        <div class="activity-card">
            <h4>{card.name}</h4>
            <p>{card.description}</p>
            <p><strong>"Schedule:"</strong>" "{card.schedule}</p>
            <p><strong>"Availability:"</strong>" "{availability}</p>
            <div class="participants-section">
                <p class="participants-title">"Participants"</p>
                <ul class="participants-list">{participants}</ul>
            </div>
        </div>
    }
}
