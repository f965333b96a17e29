pub mod activity_operations;
pub mod render;

pub use activity_operations::*;
pub use render::*;
