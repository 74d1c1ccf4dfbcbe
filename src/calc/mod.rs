//! Calc Module
//!
//! Arithmetic primitives and the operation table the API dispatches on.

mod arithmetic;
mod operation;


// Re-export public types
pub use arithmetic::{add, divide, multiply, round2, subtract};
pub use operation::{cache_key, Operation};

// == Public Constants ==
/// Separator between the parts of a cache key
pub const KEY_DELIMITER: char = ':';
