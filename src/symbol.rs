use std::fmt;

/// Trait for the single units of input that parsers recognise
/// This enables generic literal matching and snippet rendering
pub trait Symbol: Copy + PartialEq + fmt::Debug + 'static {
    /// Symbols recognised by [`whitespace`](crate::text::whitespace)
    const BLANKS: &'static [Self];

    /// Decimal digits plus the fractional separator, collected by [`double`](crate::text::double)
    const DECIMAL: &'static [Self];

    /// Convert a single symbol to a character for rendering
    fn to_char(self) -> char;

    /// Convert a run of symbols to a displayable string for error reporting
    fn render(symbols: &[Self]) -> String {
        symbols.iter().map(|symbol| symbol.to_char()).collect()
    }
}

impl Symbol for char {
    const BLANKS: &'static [Self] = &[' ', '\t', '\n', '\r'];
    const DECIMAL: &'static [Self] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.'];

    fn to_char(self) -> char {
        self
    }
}

impl Symbol for u8 {
    const BLANKS: &'static [Self] = b" \t\n\r";
    const DECIMAL: &'static [Self] = b"0123456789.";

    fn to_char(self) -> char {
        self as char
    }

    fn render(symbols: &[Self]) -> String {
        String::from_utf8_lossy(symbols).into_owned()
    }
}

/// A sequence of symbols given by the caller, such as the literal of
/// [`string`](crate::literal::string) or the set of [`one_of`](crate::character::one_of)
pub trait Literal {
    type Symbol: Symbol;

    fn to_symbols(&self) -> Vec<Self::Symbol>;
}

impl Literal for &str {
    type Symbol = char;

    fn to_symbols(&self) -> Vec<char> {
        self.chars().collect()
    }
}

impl Literal for String {
    type Symbol = char;

    fn to_symbols(&self) -> Vec<char> {
        self.chars().collect()
    }
}

impl<S: Symbol> Literal for &[S] {
    type Symbol = S;

    fn to_symbols(&self) -> Vec<S> {
        self.to_vec()
    }
}

impl<S: Symbol, const N: usize> Literal for &[S; N] {
    type Symbol = S;

    fn to_symbols(&self) -> Vec<S> {
        self.to_vec()
    }
}

impl<S: Symbol> Literal for Vec<S> {
    type Symbol = S;

    fn to_symbols(&self) -> Vec<S> {
        self.clone()
    }
}
