pub mod activity;
pub mod generation;
pub mod participation;
pub mod status;

pub use activity::{ActivityCatalog, CatalogState};
pub use generation::Generation;
pub use participation::{FormState, Participation};
pub use status::{StatusMessage, StatusState};
