//! Ready-made parsers for common textual tokens
//!
//! Each one works for any cursor whose symbols implement
//! [`Symbol`](crate::symbol::Symbol), so the same parser runs over `&str`
//! input and over byte slices.

pub mod double;
pub mod lexeme;
pub mod whitespace;

pub use double::double;
pub use lexeme::{lexeme, string_ignoring_trailing_whitespace};
pub use whitespace::whitespace;
