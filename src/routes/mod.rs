pub mod api;
pub mod app;
pub mod cors;

pub use api::*;
pub use app::*;
pub use cors::*;
