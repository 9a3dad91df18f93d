pub mod slice;
pub mod utf8;

pub use slice::SliceCursor;
pub use utf8::StrCursor;
