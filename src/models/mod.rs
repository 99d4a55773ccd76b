pub mod direction;

pub use direction::*;
