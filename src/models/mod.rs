pub mod greeting;
pub mod health;
pub mod item;
pub mod error;

pub use greeting::*;
pub use health::*;
pub use item::*;
pub use error::*;
