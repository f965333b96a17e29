use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::error::ApiError;
use crate::core::models::{ActivityCatalog, CatalogState, FormState, Generation, Participation, StatusMessage};
use crate::core::services::{load_catalog, remove_participant, sign_up};
use crate::features::activities::hooks::BoardState;

/// The two user actions that talk to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    SignUp,
    Remove,
}

impl BoardAction {
    fn label(&self) -> &'static str {
        match self {
            BoardAction::SignUp => "signing up",
            BoardAction::Remove => "removing participant",
        }
    }

    // Success reply without a message
    fn done_text(&self) -> &'static str {
        match self {
            BoardAction::SignUp => "Signed up successfully",
            BoardAction::Remove => "Participant removed",
        }
    }

    // Error reply without a detail
    fn rejected_text(&self) -> &'static str {
        match self {
            BoardAction::SignUp => "An error occurred",
            BoardAction::Remove => "Failed to remove participant",
        }
    }

    // No usable reply at all
    fn unreachable_text(&self) -> &'static str {
        match self {
            BoardAction::SignUp => "Failed to sign up. Please try again.",
            BoardAction::Remove => "Failed to remove participant. Please try again.",
        }
    }
}

/// Status line for the outcome of `action`.
pub fn outcome_status(action: BoardAction, result: &Result<Option<String>, ApiError>) -> StatusMessage {
    match result {
        Ok(Some(message)) => StatusMessage::success(message.clone()),
        Ok(None) => StatusMessage::success(action.done_text()),
        Err(err @ ApiError::Status { .. }) => {
            StatusMessage::error(err.detail().unwrap_or(action.rejected_text()))
        }
        Err(ApiError::Network(_)) | Err(ApiError::Decode(_)) => {
            StatusMessage::error(action.unreachable_text())
        }
    }
}

/// What a finished action does to the board: the status line to show and
/// whether the roster must be fetched again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub status: StatusMessage,
    pub refresh: bool,
}

/// Applies the result of `action` to the form. Only a successful signup
/// clears the form; any success triggers a refresh.
pub fn apply_outcome(
    action: BoardAction,
    form: &mut FormState,
    result: &Result<Option<String>, ApiError>,
) -> ActionOutcome {
    let succeeded = result.is_ok();
    if succeeded && action == BoardAction::SignUp {
        form.reset();
    }
    ActionOutcome {
        status: outcome_status(action, result),
        refresh: succeeded,
    }
}

/// The state a completed fetch may publish. `None` when a newer refresh
/// started after `token` was taken.
pub fn settle_refresh(
    refreshes: &Generation,
    token: u64,
    fetched: Result<ActivityCatalog, ApiError>,
) -> Option<CatalogState> {
    if !refreshes.is_current(token) {
        return None;
    }
    Some(match fetched {
        Ok(catalog) => CatalogState::Ready(catalog),
        Err(_) => CatalogState::Failed,
    })
}

// Fetch the roster and redraw. Only the most recently started refresh may
// publish; anything older that completes later is dropped.
pub async fn refresh_catalog(board: BoardState) {
    let mut token = 0;
    board.refreshes.update_value(|g| token = g.next());
    let config = board.config.get_value();

    let fetched = load_catalog(&config).await;
    if let Err(e) = &fetched {
        web_sys::console::error_1(&format!("Error fetching activities: {}", e).into());
    }

    match board.refreshes.with_value(|g| settle_refresh(g, token, fetched)) {
        Some(next_state) => board.catalog.set(next_state),
        None => {
            web_sys::console::log_1(&format!("Discarding stale activities response #{}", token).into());
        }
    }
}

// Reveal a status message and arm its hide timer
pub fn show_status(board: BoardState, message: StatusMessage) {
    let mut token = 0;
    board.status.update(|status| token = status.show(message));
    let timeout_ms = board.config.with_value(|c| c.message_timeout_ms);

    spawn_local(async move {
        TimeoutFuture::new(timeout_ms).await;
        board.status.update(|status| {
            status.expire(token);
        });
    });
}

async fn finish_action(board: BoardState, action: BoardAction, result: Result<Option<String>, ApiError>) {
    if let Err(e) = &result {
        web_sys::console::error_1(&format!("Error {}: {}", action.label(), e).into());
    }

    // Board disposed mid-request: nothing left to reset or refresh
    let Some(outcome) = board.form.try_update(|form| apply_outcome(action, form, &result)) else {
        return;
    };

    show_status(board, outcome.status);
    if outcome.refresh {
        refresh_catalog(board).await;
    }
}

// Handle the signup form submission
pub fn submit_signup(board: BoardState) {
    let participation = board.form.with_untracked(|form| form.participation());
    let config = board.config.get_value();

    spawn_local(async move {
        let result = sign_up(&config, &participation).await;
        finish_action(board, BoardAction::SignUp, result).await;
    });
}

// Handle a click on a participant's removal control
pub fn remove_participant_action(board: BoardState, participation: Participation) {
    let config = board.config.get_value();

    spawn_local(async move {
        let result = remove_participant(&config, &participation).await;
        finish_action(board, BoardAction::Remove, result).await;
    });
}
