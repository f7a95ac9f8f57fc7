//! Cart decision logic: what the next snapshot is, or why there is none.

mod actions;
pub mod dtos;
pub mod error;
pub mod logic;

pub use actions::*;
pub use dtos::*;
pub use error::*;
