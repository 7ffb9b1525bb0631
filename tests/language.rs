use std::fs::{self};

use intexpr::{config::Config, evaluate, get_result, interpreter::value::Value, parse};
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

        for (config, line) in extract_example_lines(&content) {
            count += 1;
            let (source, expected) =
                line.split_once(" => ")
                    .unwrap_or_else(|| panic!("Example in {path:?} lacks ' => ': {line}"));
            match get_result(source, config) {
                Ok(value) => assert_eq!(value.to_string(),
                                        expected.trim(),
                                        "Example {source:?} in {path:?} gave the wrong value"),
                Err(e) => panic!("Example {source:?} in {path:?} failed:\nError: {e}"),
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

/// Collects the lines of every ```intexpr block, paired with the config the
/// block asks for (```intexpr,lenient selects the lenient one).
fn extract_example_lines(content: &str) -> Vec<(Config, String)> {
    let mut lines = Vec::new();
    let mut inside = None;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if let Some(info) = trimmed.strip_prefix("```intexpr") {
            inside = Some(if info.trim() == ",lenient" { Config::lenient() } else { Config::strict() });
            continue;
        }
        if inside.is_some() && trimmed.starts_with("```") {
            inside = None;
            continue;
        }
        if let Some(config) = inside
           && !trimmed.is_empty()
        {
            lines.push((config, line.to_string()));
        }
    }

    lines
}

fn assert_value(src: &str, expected: i64) {
    match get_result(src, Config::default()) {
        Ok(value) => assert_eq!(value, Value::Number(expected), "for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if let Ok(value) = get_result(src, Config::default()) {
        panic!("Expression {src:?} evaluated to {value} but was expected to fail")
    }
}

#[test]
fn basic_arithmetic_over_operand_grid() {
    for a in (0..=120).step_by(7) {
        for b in (1..=45).step_by(4) {
            assert_value(&format!("{a} + {b}"), a + b);
            assert_value(&format!("{a} - {b}"), a - b);
            assert_value(&format!("{a} * {b}"), a * b);
            assert_value(&format!("{a} / {b}"), a / b);
        }
    }
}

#[test]
fn precedence() {
    assert_value("2 + 3 * 4", 14);
    assert_value("(2 + 3) * 4", 20);
    assert_value("2 * 3 + 4", 10);
    assert_value("2 * (3 + 4)", 14);
    assert_value("20 - 12 / 4", 17);
    assert_value("1 + 2 * 3 - 4 / 2", 5);
}

#[test]
fn left_associativity() {
    assert_value("10 - 2 - 3", 5);
    assert_value("100 / 10 / 5", 2);
    assert_value("2 * 9 / 4", 4);
    assert_value("8 / 2 * 4", 16);
}

#[test]
fn unary_chains() {
    assert_value("--5", 5);
    assert_value("-+5", -5);
    assert_value("+-+-5", 5);
    assert_value("-(2 + 3)", -5);
    assert_value("3 - -2", 5);
    assert_value("-2 * -3", 6);
}

#[test]
fn whitespace_is_insignificant() {
    assert_value("1+2", 3);
    assert_value("1 + 2", 3);
    assert_value(" 1 +  2 ", 3);
    assert_value("\t1\n+\r\n2\n", 3);
    assert_value("( 1 + 2 ) * ( 3 )", 9);
}

#[test]
fn division_truncates_toward_zero() {
    assert_value("7 / 2", 3);
    assert_value("1 / 2", 0);
    assert_value("-7 / 2", -3);
    assert_value("7 / -2", -3);
}

#[test]
fn nested_parentheses() {
    assert_value("((((7))))", 7);
    assert_value("((1 + 2) * (3 + 4)) - (5)", 16);
}

#[test]
fn integer_limits() {
    assert_value("9223372036854775807", i64::MAX);
    assert_value("-9223372036854775807 - 1", i64::MIN);
}

#[test]
fn malformed_input_fails() {
    assert_failure("");
    assert_failure("(1 + 2");
    assert_failure("1 + 2)");
    assert_failure("1 +");
    assert_failure("* 2");
    assert_failure("()");
    assert_failure("1 2");
    assert_failure("2 ^ 3");
    assert_failure("1.5");
    assert_failure("1 / 0");
    assert_failure("99999999999999999999");
}

#[test]
fn lenient_mode_accepts_malformed_input() {
    let lenient = |src: &str| get_result(src, Config::lenient()).unwrap();

    assert_eq!(lenient("1 + a"), Value::Number(1));
    assert_eq!(lenient("1 + $ 5"), Value::Number(1));
    assert_eq!(lenient("2 * 3 % 4"), Value::Number(6));
    assert_eq!(lenient("1 2"), Value::Number(1));
    assert_eq!(lenient("1 + 2)"), Value::Number(3));
    assert_eq!(lenient("1 +"), Value::Number(1));
    assert_eq!(lenient("   "), Value::Number(0));
    assert_eq!(lenient("*"), Value::Number(0));
}

#[test]
fn lenient_still_requires_balanced_parentheses() {
    assert!(get_result("(1 + 2", Config::lenient()).is_err());
    assert!(get_result("", Config::lenient()).is_err());
}

#[test]
fn repeated_runs_are_independent() {
    let source = "-(8 - 3) * 4 / 3 + 1";

    let first = parse(source).unwrap();
    let second = parse(source).unwrap();
    assert_eq!(first, second);

    let a = evaluate(&first).unwrap();
    let b = evaluate(&first).unwrap();
    let c = evaluate(&second).unwrap();
    assert_eq!(a, Value::Number(-5));
    assert_eq!(a, b);
    assert_eq!(b, c);
}
