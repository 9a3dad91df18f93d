//! Literal input/output scenarios run through the public entry points

use parsnip::prelude::*;
use parsnip::{double, none_of, one_of, run, run_slice, string};
use rstest::rstest;

#[rstest]
#[case("Xyzzz", "zzz")]
#[case("Xy", "")]
#[case("XyXy", "Xy")]
fn test_string_prefix_matches(#[case] input: &str, #[case] rest: &str) {
    let (value, remainder) = run(&string("Xy"), input).unwrap();
    assert_eq!(value, "Xy");
    assert_eq!(remainder, rest);
}

#[rstest]
#[case("abababa", "expected prefix `Xy` but found `abababa`")]
#[case("X", "expected prefix `Xy` but found `X`")]
#[case("", "expected prefix `Xy` but found ``")]
fn test_string_prefix_mismatch(#[case] input: &str, #[case] message: &str) {
    let failure = run(&string("Xy"), input).unwrap_err();
    assert_eq!(failure.message(), message);
}

#[test]
fn test_none_of() {
    let parser = none_of("Xy");

    assert_eq!(run(&parser, "abc").unwrap(), ('a', "bc"));
    assert!(run(&parser, "Xy").is_err());
}

#[test]
fn test_one_of_zero_or_more() {
    let parser = one_of("abc").zero_or_more();

    let (values, rest) = run(&parser, "babababcaxbacx").unwrap();
    assert_eq!(values, vec!['b', 'a', 'b', 'a', 'b', 'a', 'b', 'c', 'a']);
    assert_eq!(rest, "xbacx");
}

#[test]
fn test_repeated_blobs() {
    let parser = string("blob").repeated(4);

    let (blobs, rest) = run(&parser, "blobblobblobblob foo").unwrap();
    assert_eq!(blobs.len(), 4);
    assert_eq!(rest, " foo");

    let failure = run(&parser, "blobblobblob foo").unwrap_err();
    assert!(
        failure
            .message()
            .contains("did not consume `4` items, consumed `3`")
    );
}

#[test]
fn test_numeric_non_consumption() {
    let parser = double().fallback(-1.0).discard_left(string("..00"));

    assert_eq!(run(&parser, "..00qq").unwrap(), ("..00", "qq"));
}

#[rstest]
#[case("0", 0.0)]
#[case("12.5", 12.5)]
#[case("007", 7.0)]
#[case("1.", 1.0)]
fn test_double_values(#[case] input: &str, #[case] expected: f64) {
    let (value, rest) = run(&double(), input).unwrap();
    assert_eq!(value, expected);
    assert!(rest.is_empty());
}

#[test]
fn test_long_snippet_is_truncated() {
    let input = "abcdefghijklmnopqrstuvwxyz";

    let failure = run(&string("0"), input).unwrap_err();
    assert_eq!(
        failure.message(),
        "expected prefix `0` but found `abcdefghijklmnopqrst`"
    );
}

#[test]
fn test_byte_input() {
    let parser = string(b"GET").discard_right(string(b" "));
    let request = b"GET /index.html";

    let (method, rest) = run_slice(&parser, &request[..]).unwrap();
    assert_eq!(method, b"GET");
    assert_eq!(rest, b"/index.html");
}

#[test]
fn test_parser_reuse() {
    let parser = one_of("ab").one_or_more();

    for _ in 0..3 {
        assert_eq!(run(&parser, "abz").unwrap(), (vec!['a', 'b'], "z"));
    }
}
