use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::BoardConfig;
use crate::core::models::{CatalogState, FormState, Generation, StatusState};
use crate::features::activities::services::refresh_catalog;

/// All mutable UI state of the board. Copyable handle; handlers receive it
/// explicitly instead of looking elements up in the page.
#[derive(Clone, Copy)]
pub struct BoardState {
    pub config: StoredValue<BoardConfig>,
    pub catalog: RwSignal<CatalogState>,
    pub refreshes: StoredValue<Generation>,
    pub form: RwSignal<FormState>,
    pub status: RwSignal<StatusState>,
}

impl BoardState {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            catalog: RwSignal::new(CatalogState::Loading),
            refreshes: StoredValue::new(Generation::default()),
            form: RwSignal::new(FormState::default()),
            status: RwSignal::new(StatusState::default()),
        }
    }
}

pub fn use_board(config: BoardConfig) -> BoardState {
    let board = BoardState::new(config);
    provide_context(board);

    // Load the roster on mount
    spawn_local(refresh_catalog(board));

    board
}

pub fn expect_board() -> BoardState {
    use_context::<BoardState>().expect("BoardState context")
}
