//! Turns catalog state into plain view data that components draw.
//!
//! The activity list and the activity dropdown both come out of one
//! `render_board` call, so they always describe the same fetch.

use crate::core::models::{ActivityCatalog, CatalogState, Participation};

pub const PLACEHOLDER_OPTION: &str = "-- Select an activity --";
pub const LOADING_TEXT: &str = "Loading activities...";
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";
pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet";
pub const REMOVE_BUTTON_CLASS: &str = "delete-participant-btn";

#[derive(Debug, Clone, PartialEq)]
pub struct BoardView {
    pub list: ListView,
    pub options: Vec<SelectOption>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Message(&'static str),
    Cards(Vec<ActivityCardView>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityCardView {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: ParticipantsView,
}

impl ActivityCardView {
    pub fn availability(&self) -> String {
        format!("{} spots left", self.spots_left)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParticipantsView {
    Empty,
    Rows(Vec<ParticipantRow>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantRow {
    pub email: String,
    /// What the removal control is tagged with.
    pub removal: Participation,
    pub aria_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn placeholder() -> Self {
        Self { value: String::new(), label: PLACEHOLDER_OPTION.to_string() }
    }
}

pub fn render_board(state: &CatalogState) -> BoardView {
    match state {
        CatalogState::Loading => BoardView {
            list: ListView::Message(LOADING_TEXT),
            options: vec![SelectOption::placeholder()],
        },
        CatalogState::Failed => BoardView {
            list: ListView::Message(LOAD_FAILED_TEXT),
            options: vec![SelectOption::placeholder()],
        },
        CatalogState::Ready(catalog) => render_catalog(catalog),
    }
}

pub fn render_catalog(catalog: &ActivityCatalog) -> BoardView {
    let mut options = Vec::with_capacity(catalog.len() + 1);
    options.push(SelectOption::placeholder());

    let cards = catalog
        .iter()
        .map(|(name, activity)| {
            options.push(SelectOption { value: name.to_string(), label: name.to_string() });

            let participants = if activity.participants.is_empty() {
                ParticipantsView::Empty
            } else {
                ParticipantsView::Rows(
                    activity
                        .participants
                        .iter()
                        .map(|email| ParticipantRow {
                            email: email.clone(),
                            removal: Participation::new(name, email.clone()),
                            aria_label: format!("Remove {} from {}", email, name),
                        })
                        .collect(),
                )
            };

            ActivityCardView {
                name: name.to_string(),
                description: activity.description.clone(),
                schedule: activity.schedule.clone(),
                spots_left: activity.spots_left(),
                participants,
            }
        })
        .collect();

    BoardView { list: ListView::Cards(cards), options }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::activity::Activity;

    fn catalog() -> ActivityCatalog {
        vec![
            (
                "Chess Club".to_string(),
                Activity {
                    description: "Learn strategies and compete in chess tournaments".to_string(),
                    schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
                    max_participants: 12,
                    participants: vec!["michael@mergington.edu".to_string(), "daniel@mergington.edu".to_string()],
                },
            ),
            (
                "Gym Class".to_string(),
                Activity {
                    description: "Physical education and sports activities".to_string(),
                    schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM".to_string(),
                    max_participants: 30,
                    participants: vec![],
                },
            ),
        ]
        .into_iter()
        .collect()
    }

    fn cards(view: &BoardView) -> &[ActivityCardView] {
        match &view.list {
            ListView::Cards(cards) => cards,
            ListView::Message(text) => panic!("expected cards, got message {:?}", text),
        }
    }

    #[test]
    fn spots_left_matches_capacity_minus_participants() {
        let view = render_catalog(&catalog());
        let cards = cards(&view);
        assert_eq!(cards[0].spots_left, 10);
        assert_eq!(cards[0].availability(), "10 spots left");
        assert_eq!(cards[1].spots_left, 30);
    }

    #[test]
    fn empty_activity_renders_placeholder_row() {
        let view = render_catalog(&catalog());
        assert_eq!(cards(&view)[1].participants, ParticipantsView::Empty);
    }

    #[test]
    fn each_participant_gets_a_tagged_removal_control() {
        let view = render_catalog(&catalog());
        let ParticipantsView::Rows(rows) = &cards(&view)[0].participants else {
            panic!("expected participant rows");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].email, "michael@mergington.edu");
        assert_eq!(rows[0].removal, Participation::new("Chess Club", "michael@mergington.edu"));
        assert_eq!(rows[1].removal, Participation::new("Chess Club", "daniel@mergington.edu"));
        assert_eq!(rows[1].aria_label, "Remove daniel@mergington.edu from Chess Club");
    }

    #[test]
    fn dropdown_follows_the_list() {
        let view = render_catalog(&catalog());
        let labels: Vec<&str> = view.options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec![PLACEHOLDER_OPTION, "Chess Club", "Gym Class"]);
        assert_eq!(view.options[0].value, "");
        assert_eq!(view.options[1].value, "Chess Club");
    }

    #[test]
    fn failed_fetch_shows_message_and_bare_dropdown() {
        let view = render_board(&CatalogState::Failed);
        assert_eq!(view.list, ListView::Message(LOAD_FAILED_TEXT));
        assert_eq!(view.options, vec![SelectOption::placeholder()]);
    }

    #[test]
    fn loading_state_shows_loading_text() {
        assert_eq!(render_board(&CatalogState::Loading).list, ListView::Message(LOADING_TEXT));
    }

    #[test]
    fn empty_catalog_renders_no_cards() {
        let view = render_board(&CatalogState::Ready(ActivityCatalog::default()));
        assert!(cards(&view).is_empty());
        assert_eq!(view.options.len(), 1);
    }
}
