use crate::character::one_of;
use crate::cursor::Cursor;
use crate::failure::Failure;
use crate::parser::Parser;
use crate::some::OneOrMoreExt;
use crate::symbol::Symbol;

/// Parser for unsigned decimal numbers such as `42`, `3.25` or `.5`
///
/// Takes the longest run of digits and dots, then interprets it. A run that
/// is not a number (`"1.2.3"`, `".."`) fails without consuming anything, so
/// the input stays available to an alternative.
pub fn double<C>() -> impl Parser<Cursor = C, Output = f64>
where
    C: Cursor,
{
    Double {
        digits: one_of(<C::Symbol as Symbol>::DECIMAL).one_or_more(),
    }
}

struct Double<P> {
    digits: P,
}

impl<P, S> Parser for Double<P>
where
    S: Symbol,
    P: Parser<Output = Vec<S>>,
{
    type Cursor = P::Cursor;
    type Output = f64;

    fn parse(&self, cursor: Self::Cursor) -> Result<(f64, Self::Cursor), Failure> {
        let (digits, next) = self.digits.parse(cursor)?;
        let text = S::render(&digits);

        match text.parse::<f64>() {
            Ok(value) => Ok((value, next)),
            Err(_) => Err(Failure::new(format!("`{text}` is not a valid number"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::cursors::{SliceCursor, StrCursor};
    use crate::fallback::FallbackExt;
    use crate::literal::string;

    #[test]
    fn test_double_integer() {
        let (value, cursor) = double().parse(StrCursor::new("42 apples")).unwrap();
        assert_eq!(value, 42.0);
        assert_eq!(cursor.as_str(), " apples");
    }

    #[test]
    fn test_double_fraction() {
        let (value, _) = double().parse(StrCursor::new("3.25")).unwrap();
        assert_eq!(value, 3.25);

        let (value, _) = double().parse(StrCursor::new(".5")).unwrap();
        assert_eq!(value, 0.5);
    }

    #[test]
    fn test_double_no_digits() {
        let result = double().parse(StrCursor::new("abc"));
        assert_eq!(result.unwrap_err().message(), "predicate failed, found `abc`");
    }

    #[test]
    fn test_double_invalid_number() {
        let result = double().parse(StrCursor::new("1.2.3x"));
        assert_eq!(result.unwrap_err().message(), "`1.2.3` is not a valid number");
    }

    #[test]
    fn test_double_failure_consumes_nothing() {
        let parser = double().fallback(-1.0).discard_left(string("..00"));

        let (value, cursor) = parser.parse(StrCursor::new("..00qq")).unwrap();
        assert_eq!(value, "..00");
        assert_eq!(cursor.as_str(), "qq");
    }

    #[test]
    fn test_double_over_bytes() {
        let data = *b"1.5;";
        let (value, cursor) = double().parse(SliceCursor::new(&data[..])).unwrap();
        assert_eq!(value, 1.5);
        assert_eq!(cursor.as_slice(), b";");
    }
}
