pub mod activities_api;
pub mod endpoints;
pub mod http;

pub use activities_api::*;
