//! # Parsnip - Parser Combinator Library
//!
//! Parsnip provides composable, type-safe parsers that can be combined to build
//! complex parsing logic from simple building blocks. A parser is a value: it is
//! built once and run over any number of inputs.
//!
//! - **Zero panics**: All parsing errors are handled through `Result` types
//! - **Free backtracking**: Cursors are immutable `Copy` views, so retrying an
//!   alternative just reuses the cursor it started from
//! - **Composability**: Small parsers combine into larger ones using combinators
//! - **Any symbol type**: The same parsers run over `&str` text and `&[u8]` bytes
//!
//! ```
//! use parsnip::prelude::*;
//! use parsnip::{double, run, string_ignoring_trailing_whitespace};
//!
//! let list = double().separated_by(string_ignoring_trailing_whitespace(","));
//! let (numbers, rest) = run(&list, "1, 2.5,3 ;").unwrap();
//! assert_eq!(numbers, vec![1.0, 2.5, 3.0]);
//! assert_eq!(rest, " ;");
//! ```

pub mod and;
pub mod apply;
pub mod between;
pub mod boxed;
pub mod character;
pub mod cursor;
pub mod cursors;
pub mod end;
pub mod failure;
pub mod fallback;
pub mod filter;
pub mod flat_map;
pub mod lazy;
pub mod literal;
pub mod many;
pub mod map;
pub mod monoid;
pub mod or;
pub mod parser;
pub mod pure;
pub mod repeated;
pub mod run;
pub mod separated_list;
pub mod some;
pub mod symbol;
pub mod text;

pub use and::and;
pub use apply::{apply, lift2, lift3};
pub use between::between;
pub use boxed::BoxedParser;
pub use character::{character_that, none_of, one_of};
pub use cursor::Cursor;
pub use cursors::{SliceCursor, StrCursor};
pub use end::end_of_input;
pub use failure::{Failure, SNIPPET_LEN};
pub use lazy::lazy;
pub use literal::string;
pub use monoid::{Monoid, concat, empty};
pub use or::or;
pub use parser::{Parser, from_fn};
pub use pure::{fail, pure};
pub use run::{run, run_slice};
pub use separated_list::separated_list;
pub use symbol::{Literal, Symbol};
pub use text::{double, lexeme, string_ignoring_trailing_whitespace, whitespace};

/// Everything needed for method-style parser construction
pub mod prelude {
    pub use crate::and::AndExt;
    pub use crate::apply::ApplyExt;
    pub use crate::between::BetweenExt;
    pub use crate::boxed::BoxedExt;
    pub use crate::cursor::Cursor;
    pub use crate::fallback::FallbackExt;
    pub use crate::filter::FilterExt;
    pub use crate::flat_map::FlatMapExt;
    pub use crate::many::ZeroOrMoreExt;
    pub use crate::map::MapExt;
    pub use crate::monoid::CombineExt;
    pub use crate::or::OrExt;
    pub use crate::parser::Parser;
    pub use crate::repeated::RepeatedExt;
    pub use crate::separated_list::SeparatedListExt;
    pub use crate::some::OneOrMoreExt;
}
