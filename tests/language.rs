use std::fs::{self};

use pedmas::{ast::Expr, error::EvalError, evaluate, parse, util::num::format_result};
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

        for line in extract_example_lines(&content) {
            count += 1;
            let (expression, expected) =
                line.rsplit_once(" = ")
                    .unwrap_or_else(|| panic!("Example {line:?} in {path:?} has no ' = '"));
            let expected: f64 =
                expected.trim()
                        .parse()
                        .unwrap_or_else(|e| panic!("Bad expected value in {line:?}: {e}"));

            match evaluate(expression) {
                Ok(actual) => assert!(approx_eq(actual, expected),
                                      "Example {expression:?} in {path:?} gave {actual}, \
                                       expected {expected}"),
                Err(e) => panic!("Example {expression:?} in {path:?} failed: {e}"),
            }
        }
    }

    assert!(count > 0, "No pedmas examples found in book/src");
}

fn extract_example_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```pedmas") {
            inside = true;
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            continue;
        }
        if inside && !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines
}

fn approx_eq(actual: f64, expected: f64) -> bool {
    actual == expected
    || (actual.is_nan() && expected.is_nan())
    || (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0)
}

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(actual) => assert!(approx_eq(actual, expected),
                              "{src:?} evaluated to {actual}, expected {expected}"),
        Err(e) => panic!("{src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> EvalError {
    match evaluate(src) {
        Ok(value) => panic!("{src:?} evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3.0);
    assert_value("7 * 9", 63.0);
    assert_value("8 - 5", 3.0);
    assert_value("10 / 4", 2.5);
    assert_value("2 ^ 10", 1024.0);
    assert_value("42", 42.0);
}

#[test]
fn precedence() {
    assert_value("2+3*4", 14.0);
    assert_value("(2+3)*4", 20.0);
    assert_value("2*3+4*5", 26.0);
    assert_value("2+3^2*2", 20.0);
    assert_value("1+2*3^2-4/2", 17.0);
}

#[test]
fn left_to_right_within_a_tier() {
    assert_value("1-2-3", -4.0);
    assert_value("100/10/5", 2.0);
    assert_value("8/2*4", 16.0);
    assert_value("10-2+3", 11.0);
}

#[test]
fn exponent_chains_are_left_associative() {
    assert_value("2^3^2", 64.0);
    assert_value("2^2^2^2", 256.0);
    assert_value("(2^3)^2", 64.0);
    assert_value("2^(3^2)", 512.0);
}

#[test]
fn implicit_multiplication() {
    assert_value("2(3)", 6.0);
    assert_value("(2)(3)", 6.0);
    assert_value("(3+4)(5)", 35.0);
    assert_value("6 (20)", 120.0);
    assert_value("2(3)(4)", 24.0);
}

#[test]
fn redundant_parentheses() {
    assert_eq!(evaluate("(((3+4)))"), evaluate("3+4"));
    assert_value("((((5))))", 5.0);
    assert_value("(1)+(2)", 3.0);
    assert_value("((2)*((3)))", 6.0);
}

#[test]
fn leading_sign() {
    assert_value("-5+2", -3.0);
    assert_value("+5-2", 3.0);
    assert_value("-5", -5.0);
    assert_value("-5*2", -10.0);
    assert_value("-2^2", -4.0);
    assert_value("-(2+3)*2", -10.0);
    assert_value("-3*2+10", 4.0);
}

#[test]
fn decimal_literals() {
    assert_value("3.5*2", 7.0);
    assert_value("0.25+0.5", 0.75);
    assert_value("1.5^2", 2.25);
}

#[test]
fn whitespace_is_ignored() {
    assert_value(" 1 +\t2 *\n3 ", 7.0);
    assert_value("1\r\n+\x0B2\x0C", 3.0);
}

#[test]
fn division_by_zero_follows_floating_point() {
    assert_eq!(evaluate("1/0"), Ok(f64::INFINITY));
    assert_eq!(evaluate("-1/0"), Ok(f64::NEG_INFINITY));
    assert!(evaluate("0/0").is_ok_and(f64::is_nan));
}

#[test]
fn evaluation_is_deterministic() {
    for src in ["2+3*4", "(1.5+2)^2/3", "-7*(2-9)", "3+*2"] {
        assert_eq!(evaluate(src), evaluate(src));
    }
}

#[test]
fn invalid_expressions() {
    assert_eq!(assert_failure("3+*2"), EvalError::InvalidExpression { position: 2 });
    assert_eq!(assert_failure("(2*)"), EvalError::InvalidExpression { position: 3 });
    assert_eq!(assert_failure("*3"), EvalError::InvalidExpression { position: 0 });
    assert_eq!(assert_failure(".5"), EvalError::InvalidExpression { position: 0 });
    assert_eq!(assert_failure("2*-3"), EvalError::InvalidExpression { position: 2 });
    assert_eq!(assert_failure("(-3)"), EvalError::InvalidExpression { position: 1 });
    assert_eq!(assert_failure("1.2.3"), EvalError::InvalidExpression { position: 0 });
    assert_eq!(assert_failure("1+2.3.4"), EvalError::InvalidExpression { position: 2 });
    assert_eq!(assert_failure("3."), EvalError::InvalidExpression { position: 1 });
    assert_eq!(assert_failure(""), EvalError::InvalidExpression { position: 0 });
    assert_eq!(assert_failure("   "), EvalError::InvalidExpression { position: 0 });
}

#[test]
fn stray_text_beside_a_group() {
    assert_eq!(assert_failure("(1+2)3"), EvalError::InvalidExpression { position: 5 });
    assert_eq!(assert_failure("2+(1)3"), EvalError::InvalidExpression { position: 5 });
    assert_eq!(assert_failure("3.(1)"), EvalError::InvalidExpression { position: 2 });
}

#[test]
fn incomplete_expressions() {
    assert_eq!(assert_failure("3+"), EvalError::IncompleteExpression { position: 1 });
    assert_eq!(assert_failure("3 * "), EvalError::IncompleteExpression { position: 1 });
    assert_eq!(assert_failure("2^"), EvalError::IncompleteExpression { position: 1 });
    assert_eq!(assert_failure("-"), EvalError::IncompleteExpression { position: 0 });
}

#[test]
fn unmatched_parentheses() {
    assert_eq!(assert_failure("(1+2))"), EvalError::UnmatchedParenthesis { position: 5 });
    assert_eq!(assert_failure("(1+2"), EvalError::UnmatchedParenthesis { position: 4 });
    assert_eq!(assert_failure("2*(3"), EvalError::UnmatchedParenthesis { position: 4 });
    assert_eq!(assert_failure("1)+(2"), EvalError::UnmatchedParenthesis { position: 1 });
}

#[test]
fn empty_parentheses() {
    assert_eq!(assert_failure("()"), EvalError::EmptyParenthesis { position: 1 });
    assert_eq!(assert_failure("(())"), EvalError::EmptyParenthesis { position: 2 });
    assert_eq!(assert_failure("1+()"), EvalError::EmptyParenthesis { position: 3 });
}

#[test]
fn invalid_characters() {
    assert_eq!(assert_failure("3+#2"),
               EvalError::InvalidCharacter { character: '#',
                                             position:  2, });
    assert_eq!(assert_failure("2x"),
               EvalError::InvalidCharacter { character: 'x',
                                             position:  1, });
    assert_eq!(assert_failure("1+(2%3)"),
               EvalError::InvalidCharacter { character: '%',
                                             position:  4, });
}

#[test]
fn nested_errors_report_positions_in_the_whole_expression() {
    assert_eq!(assert_failure("1 + (2 * 3.4.5)"),
               EvalError::InvalidExpression { position: 5 });
    assert_eq!(assert_failure("2(3+#)"),
               EvalError::InvalidCharacter { character: '#',
                                             position:  5, });
}

#[test]
fn error_messages() {
    assert_eq!(assert_failure("3+").to_string(),
               "Error at position 1: Incomplete expression.");
    assert_eq!(assert_failure("3+#2").to_string(),
               "Error at position 2: Invalid character '#' found in expression.");
}

#[test]
fn parsed_trees() {
    assert_eq!(parse("1-2-3").map(|t| t.to_string()), Ok("((1 - 2) - 3)".to_string()));
    assert_eq!(parse("2(3+4)").map(|t| t.to_string()), Ok("(2 * (3 + 4))".to_string()));
    assert_eq!(parse("-2^2").map(|t| t.to_string()), Ok("(0 - (2 ^ 2))".to_string()));
}

#[test]
fn one_chain_per_level() {
    assert!(parse("1-2-3").is_ok_and(|t| matches!(t, Expr::Chain { ref rest, .. } if rest.len() == 2)));
    assert_eq!(parse("1+2*3+4").map(|t| t.node_count()), Ok(6));
}

#[test]
fn long_flat_chains_evaluate() {
    let sum = format!("1{}", "+1".repeat(100_000));
    assert_eq!(evaluate(&sum), Ok(100_001.0));
    assert_eq!(parse(&sum).map(|t| t.node_count()), Ok(100_002));

    let product = format!("2{}", "*1".repeat(100_000));
    assert_eq!(evaluate(&product), Ok(2.0));

    let powers = format!("1{}", "^1".repeat(100_000));
    assert_eq!(evaluate(&powers), Ok(1.0));

    let mixed = format!("0{}", "+2*3".repeat(50_000));
    assert_eq!(evaluate(&mixed), Ok(300_000.0));
}

#[test]
fn deeply_nested_groups_evaluate() {
    let depth = 2_000;
    let wrapped = format!("{}1+2{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(evaluate(&wrapped), Ok(3.0));

    let nested = format!("{}1{}", "1+(".repeat(200), ")".repeat(200));
    assert_eq!(evaluate(&nested), Ok(201.0));
}

#[test]
fn result_formatting() {
    assert_eq!(evaluate("2+3*4").map(format_result), Ok("14".to_string()));
    assert_eq!(evaluate("7/2").map(format_result), Ok("3.5".to_string()));
    assert_eq!(evaluate("1/0").map(format_result), Ok("inf".to_string()));
}
