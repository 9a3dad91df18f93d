use crate::cursor::Cursor;
use crate::cursors::{SliceCursor, StrCursor};
use crate::failure::Failure;
use crate::parser::Parser;
use crate::symbol::Symbol;

/// Run a parser over text, returning its value and the unconsumed text
///
/// Example:
/// ```
/// use parsnip::prelude::*;
/// use parsnip::{run, string};
///
/// let (value, rest) = run(&string("Xy"), "Xyzzz").unwrap();
/// assert_eq!(value, "Xy");
/// assert_eq!(rest, "zzz");
/// ```
pub fn run<'src, P>(parser: &P, input: &'src str) -> Result<(P::Output, &'src str), Failure>
where
    P: Parser<Cursor = StrCursor<'src>> + ?Sized,
{
    let (value, cursor) = parser.parse(StrCursor::new(input))?;
    Ok((value, cursor.as_str()))
}

/// Run a parser over a slice of symbols, returning its value and the unconsumed slice
pub fn run_slice<'src, T, P>(
    parser: &P,
    input: &'src [T],
) -> Result<(P::Output, &'src [T]), Failure>
where
    T: Symbol,
    P: Parser<Cursor = SliceCursor<'src, T>> + ?Sized,
{
    let (value, cursor) = parser.parse(SliceCursor::new(input))?;
    Ok((value, cursor.remaining()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::string;

    #[test]
    fn test_run_text() {
        let (value, rest) = run(&string("ab"), "abc").unwrap();
        assert_eq!(value, "ab");
        assert_eq!(rest, "c");
    }

    #[test]
    fn test_run_bytes() {
        let (value, rest) = run_slice(&string(b"ab"), b"abc").unwrap();
        assert_eq!(value, b"ab");
        assert_eq!(rest, b"c");
    }

    #[test]
    fn test_run_failure() {
        let failure = run(&string("ab"), "xyz").unwrap_err();
        assert_eq!(failure.message(), "expected prefix `ab` but found `xyz`");
    }
}
