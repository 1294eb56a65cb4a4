use rangecalc::{
    error::{Error, ParseError, RuntimeError},
    evaluate,
    interpreter::value::bounded::{MAX_VALUE, MIN_VALUE},
};

fn assert_evaluates(src: &str, expected: i64) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value.value(), expected, "Expression: {src}"),
        Err(e) => panic!("Expression '{src}' failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match evaluate(src) {
        Ok(value) => panic!("Expression '{src}' succeeded with {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn literal_round_trip_over_full_domain() {
    for n in MIN_VALUE..=MAX_VALUE {
        assert_evaluates(&n.to_string(), n);
    }
}

#[test]
fn evaluation_is_pure() {
    let src = "(5 + 3) * 2 - 10 / 5";
    let first = evaluate(src).unwrap();
    for _ in 0..10 {
        assert_eq!(evaluate(src).unwrap(), first);
    }
}

#[test]
fn basic_arithmetic() {
    assert_evaluates("1 + 2", 3);
    assert_evaluates("8 - 5", 3);
    assert_evaluates("7 * 9", 63);
    assert_evaluates("10 / 2", 5);
    assert_evaluates("10 % 3", 1);
    assert_evaluates("(5 + 3) * 2", 16);
}

#[test]
fn operator_precedence() {
    assert_evaluates("2 + 3 * 4", 14);
    assert_evaluates("2 * 3 + 4", 10);
    assert_evaluates("2 + 10 / 5", 4);
    assert_evaluates("10 - 9 % 5", 6);
    assert_evaluates("(2 + 3) * 4", 20);
}

#[test]
fn left_associativity() {
    assert_evaluates("10 - 2 - 3", 5);
    assert_evaluates("20 / 2 / 2", 5);
    assert_evaluates("100 % 7 % 4", 2);
    assert_evaluates("1 - 2 + 3", 2);
}

#[test]
fn implicit_multiplication() {
    assert_evaluates("2(3+4)", 14);
    assert_evaluates("(2)3", 6);
    assert_evaluates("(2)(3)", 6);
    assert_evaluates("(1+2)(3+4)", 21);
    assert_evaluates("2(3)(4)", 24);
}

#[test]
fn no_implicit_multiplication_around_operators() {
    assert_evaluates("2-(3)", -1);
    assert_evaluates("(4)/(2)", 2);
    assert_evaluates("(4)%(3)", 1);
    assert_evaluates("2+-3", -1);
}

#[test]
fn unary_signs() {
    assert_evaluates("-5", -5);
    assert_evaluates("+5", 5);
    assert_evaluates("--5", 5);
    assert_evaluates("-+-5", 5);
    assert_evaluates("-(2+3)", -5);
    assert_evaluates("2 * -3", -6);
}

#[test]
fn division_and_modulo_truncate_toward_zero() {
    assert_evaluates("7 / 2", 3);
    assert_evaluates("-7 / 2", -3);
    assert_evaluates("7 / -2", -3);
    assert_evaluates("-7 % 2", -1);
    assert_evaluates("7 % -2", 1);
}

#[test]
fn whitespace_is_ignored() {
    assert_evaluates("  1+2  ", 3);
    assert_evaluates("\t( 1\n+ 2 ) * 3", 9);
}

#[test]
fn range_boundaries() {
    assert_evaluates("10000", 10_000);
    assert_evaluates("-10000", -10_000);
    assert_evaluates("9999 + 1", 10_000);
    assert_evaluates("-(-10000)", 10_000);
}

#[test]
fn out_of_range_is_error() {
    assert!(matches!(assert_failure("10000 + 1"),
                     Error::Runtime(RuntimeError::OutOfRange { value: 10_001 })));
    assert!(matches!(assert_failure("-10000 - 1"),
                     Error::Runtime(RuntimeError::OutOfRange { value: -10_001 })));
    assert!(matches!(assert_failure("10001"),
                     Error::Runtime(RuntimeError::OutOfRange { value: 10_001 })));
    assert!(matches!(assert_failure("200 * 200"),
                     Error::Runtime(RuntimeError::OutOfRange { value: 40_000 })));
}

#[test]
fn out_of_range_intermediate_aborts() {
    // 10000 + 1 already fails; the subtraction never runs.
    assert!(matches!(assert_failure("10000 + 1 - 1"),
                     Error::Runtime(RuntimeError::OutOfRange { .. })));
}

#[test]
fn division_by_zero_is_error() {
    assert!(matches!(assert_failure("10 / 0"),
                     Error::Runtime(RuntimeError::DivisionByZero)));
    assert!(matches!(assert_failure("10 % 0"),
                     Error::Runtime(RuntimeError::DivisionByZero)));
    assert!(matches!(assert_failure("10 / (2 - 2)"),
                     Error::Runtime(RuntimeError::DivisionByZero)));
}

#[test]
fn invalid_character_is_error() {
    assert!(matches!(assert_failure("1 @ 2"),
                     Error::Parse(ParseError::InvalidCharacter { ch: '@', pos: 2 })));
    assert!(matches!(assert_failure("1 + a"),
                     Error::Parse(ParseError::InvalidCharacter { ch: 'a', pos: 4 })));
}

#[test]
fn unbalanced_parentheses_is_error() {
    assert!(matches!(assert_failure("(1 + 2"),
                     Error::Parse(ParseError::ExpectedClosingParen { .. })));
    assert!(matches!(assert_failure("((1)"),
                     Error::Parse(ParseError::ExpectedClosingParen { .. })));
}

#[test]
fn trailing_tokens_is_error() {
    assert!(matches!(assert_failure("1 2"),
                     Error::Parse(ParseError::TrailingTokens { .. })));
    assert!(matches!(assert_failure("1 + 2)"),
                     Error::Parse(ParseError::TrailingTokens { .. })));
}

#[test]
fn unexpected_token_is_error() {
    assert!(matches!(assert_failure("* 3"),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(assert_failure("1 + * 2"),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(assert_failure("()"),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
}

#[test]
fn unexpected_end_of_input_is_error() {
    assert!(matches!(assert_failure("1 +"),
                     Error::Parse(ParseError::UnexpectedEndOfInput)));
    assert!(matches!(assert_failure(""),
                     Error::Parse(ParseError::UnexpectedEndOfInput)));
    assert!(matches!(assert_failure("   "),
                     Error::Parse(ParseError::UnexpectedEndOfInput)));
}

#[test]
fn oversized_literal_is_error() {
    assert!(matches!(assert_failure("99999999999999999999"),
                     Error::Parse(ParseError::LiteralTooLarge { pos: 0 })));
}

#[test]
fn errors_render_with_context() {
    let e = assert_failure("1 @ 2");
    assert_eq!(e.to_string(), "Error at position 2: Invalid character: '@'.");

    let e = assert_failure("10 / 0");
    assert_eq!(e.to_string(), "Error: Division by zero.");

    let e = assert_failure("10000 + 1");
    assert_eq!(e.to_string(), "Error: Value 10001 is out of range [-10000, 10000].");
}

#[test]
fn results_render_canonically() {
    assert_eq!(evaluate("2 + 3").unwrap().to_string(), "5");
    assert_eq!(evaluate("3 - 10").unwrap().to_string(), "-7");
    assert_eq!(evaluate("0007").unwrap().to_string(), "7");
}
