//! Pure validator functions
//!
//! Every function here is total: malformed input produces an invalid
//! [`ValidationResult`](crate::ValidationResult), never a panic or `Err`.

pub mod contact;
pub mod date;
pub mod string;

pub use contact::*;
pub use date::*;
pub use string::*;
