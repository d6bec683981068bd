use std::fs::{self};

use calcrs::{
    config::Options,
    error::{CalcError, ErrorKind},
    evaluate, evaluate_with,
    interpreter::value::core::Value,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (expression, expected) in extract_calc_examples(&content) {
            count += 1;
            match evaluate(&expression) {
                Ok(value) => assert_eq!(value.to_string(),
                                        expected,
                                        "example `{expression}` in {path:?}"),
                Err(e) => panic!("Example `{expression}` in {path:?} failed:\nError: {e}"),
            }
        }
    }

    assert!(count > 0, "No calc examples found in book/src");
}

/// Collects `expression => expected` lines from fenced `calc` blocks.
fn extract_calc_examples(content: &str) -> Vec<(String, String)> {
    let mut examples = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```calc") {
            inside = true;
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            continue;
        }
        if inside && let Some((expression, expected)) = line.rsplit_once("=>") {
            examples.push((expression.to_string(), expected.trim().to_string()));
        }
    }

    examples
}

fn assert_value(src: &str, expected: Value) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "evaluating `{src}`"),
        Err(e) => panic!("Expression `{src}` failed: {e}"),
    }
}

fn assert_kind(src: &str, kind: ErrorKind) {
    match evaluate(src) {
        Ok(value) => panic!("Expression `{src}` evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "evaluating `{src}` gave: {e}"),
    }
}

#[test]
fn precedence_and_associativity() {
    assert_value("2+3*4", Value::Integer(14));
    assert_value("(1+2)*3", Value::Integer(9));
    assert_value("2^3^2", Value::Integer(512));
    assert_value("(2^3)^2", Value::Integer(64));
    assert_value("10 - 2 - 3", Value::Integer(5));
    assert_value("2 * 3 % 4", Value::Integer(2));
    assert_value("17 // 5 * 5 + 17 % 5", Value::Integer(17));
    assert_value("2 ** 3 ** 2", Value::Integer(512));
}

#[test]
fn signs_bind_looser_than_power() {
    assert_value("-2^2", Value::Integer(-4));
    assert_value("(-2)^2", Value::Integer(4));
    assert_value("-2^-2", Value::Real(-0.25));
    assert_value("+-+3", Value::Integer(-3));
    assert_value("2 - -2", Value::Integer(4));
}

#[test]
fn division_family() {
    assert_value("10/2", Value::Integer(5));
    assert_value("0/5", Value::Integer(0));
    assert_value("-7 // 2", Value::Integer(-4));
    assert_value("-7 % 2", Value::Integer(1));
    assert_value("7 % -2", Value::Integer(-1));
    assert_value("-7.5 // 2", Value::Integer(-4));
    assert_value("5.5 % -2", Value::Real(-0.5));

    match evaluate("10/3") {
        Ok(Value::Real(r)) => assert!((r - 10.0 / 3.0).abs() < 1e-12),
        other => panic!("10/3 gave {other:?}"),
    }
}

#[test]
fn real_results_stay_real_until_the_end() {
    // 1/3 is not rounded before being multiplied back.
    assert_value("1 / 3 * 3", Value::Integer(1));
    assert_value("0.5 + 0.25", Value::Real(0.75));
    assert_value("4 ^ 0.5 * 1.5", Value::Integer(3));
    assert_value("-0.0", Value::Integer(0));
}

#[test]
fn integer_arithmetic_is_exact() {
    assert_value("9007199254740993 + 0", Value::Integer(9_007_199_254_740_993));
    assert_value("2 ^ 62", Value::Integer(4_611_686_018_427_387_904));
    assert_value("-9223372036854775807 - 1", Value::Integer(i64::MIN));
}

#[test]
fn whitespace_is_insignificant() {
    assert_value(" \t1\t+\t2 ", Value::Integer(3));
    assert_value("(\n1 + 2\n)", Value::Integer(3));
    assert_value("1+2", Value::Integer(3));
}

#[test]
fn evaluation_is_repeatable() {
    let sources = ["2^3^2", "10/3", "-7 // 2", "1 +", "5 % 0"];
    for src in sources {
        let first = evaluate(src);
        for _ in 0..5 {
            assert_eq!(evaluate(src), first);
        }
    }
}

#[test]
fn results_display_like_the_calculator_prints_them() {
    assert_eq!(evaluate("10 / 4").unwrap().to_string(), "2.5");
    assert_eq!(evaluate("10 / 5").unwrap().to_string(), "2");
    assert_eq!(evaluate("-3 * 4").unwrap().to_string(), "-12");
    assert_eq!(evaluate("9223372036854775807 * 1.0").unwrap().to_string(),
               "9223372036854775808");
    assert_eq!(evaluate("1 / 10000000").unwrap().to_string(), "1e-07");
    assert_eq!(evaluate("0.1 + 0.2").unwrap().to_string(), "0.30000000000000004");
}

#[test]
fn empty_input() {
    assert_kind("", ErrorKind::EmptyExpression);
    assert_kind("   ", ErrorKind::EmptyExpression);
    assert_kind("\t\n", ErrorKind::EmptyExpression);
}

#[test]
fn syntax_errors() {
    assert_kind("2+", ErrorKind::Syntax);
    assert_kind("(1+2", ErrorKind::Syntax);
    assert_kind("()", ErrorKind::Syntax);
    assert_kind("2 2", ErrorKind::Syntax);
    assert_kind("2 + 2 3", ErrorKind::Syntax);
    assert_kind("(", ErrorKind::Syntax);
    assert_kind(")", ErrorKind::Syntax);
    assert_kind("1 + 2)", ErrorKind::Syntax);
    assert_kind("* 3", ErrorKind::Syntax);
    assert_kind("3 * / 4", ErrorKind::Syntax);
    assert_kind("2 ^", ErrorKind::Syntax);
    assert_kind("(1 2)", ErrorKind::Syntax);
    assert_kind("2 *** 3", ErrorKind::Syntax);
}

#[test]
fn lexical_errors() {
    assert_kind("2 + a", ErrorKind::Lexical);
    assert_kind("1.2.3", ErrorKind::Lexical);
    assert_kind("2 & 3", ErrorKind::Lexical);
    assert_kind("__import__('os')", ErrorKind::Lexical);
    assert_kind("1e", ErrorKind::Lexical);
    assert_kind(".", ErrorKind::Lexical);
    assert_kind("2 × 3", ErrorKind::Lexical);
}

#[test]
fn division_by_zero() {
    assert_kind("5/0", ErrorKind::DivisionByZero);
    assert_kind("5//0", ErrorKind::DivisionByZero);
    assert_kind("5%0", ErrorKind::DivisionByZero);
    assert_kind("5/0.0", ErrorKind::DivisionByZero);
    assert_kind("5 % (1 - 1)", ErrorKind::DivisionByZero);
    assert_kind("0 ^ -1", ErrorKind::DivisionByZero);
}

#[test]
fn values_outside_native_range() {
    assert_kind("9223372036854775808", ErrorKind::UnsupportedValue);
    assert_kind("1e400", ErrorKind::UnsupportedValue);
    assert_kind("9223372036854775807 + 1", ErrorKind::UnsupportedValue);
    assert_kind("2 ^ 64", ErrorKind::UnsupportedValue);
    assert_kind("10.0 ^ 400", ErrorKind::UnsupportedValue);
    assert_kind("(-8) ^ 0.5", ErrorKind::UnsupportedValue);
    assert_kind("(-9223372036854775807 - 1) // -1", ErrorKind::UnsupportedValue);
}

#[test]
fn nesting_limit() {
    let options = Options { max_depth: 8 };

    assert!(evaluate_with("((((1))))", &options).is_ok());

    let deep_parens = format!("{}1{}", "(".repeat(9), ")".repeat(9));
    let err = evaluate_with(&deep_parens, &options).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NestingTooDeep);

    let signs = format!("{}1", "-".repeat(20));
    let err = evaluate_with(&signs, &options).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NestingTooDeep);
}

#[test]
fn pathological_nesting_fails_cleanly() {
    let deep = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
    let err = evaluate(&deep).unwrap_err();
    assert!(matches!(err, CalcError::Parse(_)));
    assert_eq!(err.kind(), ErrorKind::NestingTooDeep);

    let signs = format!("{}1", "-".repeat(100_000));
    assert_eq!(evaluate(&signs).unwrap_err().kind(), ErrorKind::NestingTooDeep);

    let powers = vec!["1"; 100_000].join("^");
    assert_eq!(evaluate(&powers).unwrap_err().kind(), ErrorKind::NestingTooDeep);
}

#[test]
fn flat_chains_are_not_nesting() {
    let sum = vec!["1"; 10_000].join("+");
    assert_value(&sum, Value::Integer(10_000));

    let product = vec!["1"; 100_000].join(" * ");
    assert_value(&product, Value::Integer(1));

    let alternating = (0..10_000).map(|i| if i % 2 == 0 { "+3" } else { "-1" })
                                 .collect::<String>();
    assert_value(&alternating, Value::Integer(10_000));

    let options = Options { max_depth: 2 };
    let long_chain = vec!["2"; 500].join(" * 1 + ");
    assert_eq!(evaluate_with(&long_chain, &options), Ok(Value::Integer(1000)));
}

#[test]
fn chains_keep_left_to_right_order() {
    assert_value("100 - 10 - 1", Value::Integer(89));
    assert_value("2 * 6 / 4 // 2", Value::Integer(1));
    assert_value("7 % 4 * 3", Value::Integer(9));
    assert_value("1 - 2 + 3 - 4 + 5", Value::Integer(3));
    // An overflow halfway through a chain is not rescued by later links.
    assert_kind("9223372036854775807 + 1 - 1", ErrorKind::UnsupportedValue);
}

#[test]
fn default_limit_admits_reasonable_nesting() {
    let nested = format!("{}1{}", "(".repeat(200), ")".repeat(200));
    assert_value(&nested, Value::Integer(1));

    let nested_sums = format!("{}1{}", "(1 + ".repeat(200), ")".repeat(200));
    assert_value(&nested_sums, Value::Integer(201));
}
