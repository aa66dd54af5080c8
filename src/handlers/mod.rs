pub mod root;
pub mod health;
pub mod item;

pub use root::*;
pub use health::*;
pub use item::*;
