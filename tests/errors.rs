use calcrs::{
    ast::BinaryOperator,
    config::Options,
    error::{CalcError, ParseError, RuntimeError},
    evaluate, evaluate_with,
};

fn parse_error(src: &str) -> ParseError {
    match evaluate(src) {
        Err(CalcError::Parse(e)) => e,
        other => panic!("Expected a parse error for `{src}`, got {other:?}"),
    }
}

fn runtime_error(src: &str) -> RuntimeError {
    match evaluate(src) {
        Err(CalcError::Runtime(e)) => e,
        other => panic!("Expected a runtime error for `{src}`, got {other:?}"),
    }
}

#[test]
fn empty_input_is_checked_before_tokenizing() {
    assert_eq!(parse_error(""), ParseError::EmptyExpression);
    assert_eq!(parse_error(" \t "), ParseError::EmptyExpression);
}

#[test]
fn invalid_characters_report_character_and_position() {
    assert_eq!(parse_error("1 + x"),
               ParseError::InvalidCharacter { character: 'x',
                                              position:  4, });
    assert_eq!(parse_error("2 × 3"),
               ParseError::InvalidCharacter { character: '×',
                                              position:  2, });
    // Positions count characters, not bytes.
    assert_eq!(parse_error("(é)"),
               ParseError::InvalidCharacter { character: 'é',
                                              position:  1, });
    assert_eq!(parse_error("ü + ?"),
               ParseError::InvalidCharacter { character: 'ü',
                                              position:  0, });
}

#[test]
fn malformed_literal_points_at_the_extra_dot() {
    assert_eq!(parse_error("10 + 1.2.3"),
               ParseError::InvalidCharacter { character: '.',
                                              position:  8, });
    assert_eq!(parse_error("3..4"),
               ParseError::InvalidCharacter { character: '.',
                                              position:  2, });
}

#[test]
fn oversized_literals_are_named() {
    assert_eq!(parse_error("1 + 99999999999999999999"),
               ParseError::LiteralTooLarge { literal:  "99999999999999999999".to_string(),
                                             position: 4, });
}

#[test]
fn syntax_errors_identify_what_is_missing() {
    assert_eq!(parse_error("(1+2"), ParseError::ExpectedClosingParen { position: 0 });
    assert_eq!(parse_error("3 * ("), ParseError::ExpectedClosingParen { position: 4 });
    assert_eq!(parse_error("()"), ParseError::EmptyGroup { position: 0 });
    assert!(matches!(parse_error("2+"), ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(parse_error("(1 2)"),
                     ParseError::UnexpectedToken { expected: "')'",
                                                   position: 3,
                                                   .. }));
    assert_eq!(parse_error("2 2"),
               ParseError::UnexpectedTrailingTokens { token:    "2".to_string(),
                                                      position: 2, });
    assert_eq!(parse_error("1 + 2)"),
               ParseError::UnexpectedTrailingTokens { token:    ")".to_string(),
                                                      position: 5, });
}

#[test]
fn division_by_zero_names_the_operator() {
    assert_eq!(runtime_error("5/0"),
               RuntimeError::DivisionByZero { op:       BinaryOperator::Div,
                                              position: 1, });
    assert_eq!(runtime_error("5 // 0"),
               RuntimeError::DivisionByZero { op:       BinaryOperator::FloorDiv,
                                              position: 2, });
    assert_eq!(runtime_error("5 % 0.0"),
               RuntimeError::DivisionByZero { op:       BinaryOperator::Mod,
                                              position: 2, });
}

#[test]
fn left_operand_is_evaluated_first() {
    // Both sides fail; the error from the left side wins.
    assert_eq!(runtime_error("(1/0) + (2%0)"),
               RuntimeError::DivisionByZero { op:       BinaryOperator::Div,
                                              position: 2, });
}

#[test]
fn nesting_error_reports_the_limit() {
    let options = Options { max_depth: 3 };
    assert_eq!(evaluate_with("((((1))))", &options),
               Err(CalcError::Parse(ParseError::NestingTooDeep { limit: 3 })));
}

#[test]
fn messages_are_human_readable() {
    let message = |src: &str| evaluate(src).unwrap_err().to_string();

    assert_eq!(message(""), "Empty expression. Please enter a calculation.");
    assert_eq!(message("2 $ 3"), "Invalid character '$' at position 2.");
    assert_eq!(message("(1+2"),
               "Syntax error: missing closing parenthesis ')' for '(' at position 0.");
    assert_eq!(message("7 // 0"), "Division by zero in '//' at position 2.");
    assert!(message("2 ^ 99").starts_with("Unsupported value at position 2: integer overflow"));
}

#[test]
fn errors_expose_their_source() {
    use std::error::Error;

    let err = evaluate("1 / 0").unwrap_err();
    let source = err.source().expect("wrapped error");
    assert_eq!(source.to_string(), err.to_string());
}
