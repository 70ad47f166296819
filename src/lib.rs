//! # pedmas
//!
//! pedmas evaluates arithmetic typed as free text. It understands the five
//! binary operators `+ - * / ^`, parentheses, decimal literals, a leading
//! sign and implicit multiplication such as `2(3)`, and applies the usual
//! order of operations.
//!
//! Evaluation is a pipeline: the input is normalized, then each level of the
//! expression is classified by its weakest top-level operator, split into
//! operands at that operator and folded left to right into a tree. Operands
//! that are themselves expressions go through the same steps.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::{
    ast::Expr,
    interpreter::{
        evaluator::EvalResult,
        normalizer::normalize,
        parser::{ParseResult, parse_expression},
    },
};

/// Defines the expression tree.
///
/// This module declares the `Expr` enum, a `Number` leaf or a `Chain` of
/// operations folded left to right, and the `BinaryOperator`s it applies.
/// The tree is built by the parser and walked by the evaluator.
pub mod ast;
/// Provides the error type shared by every stage.
///
/// # Responsibilities
/// - Defines one variant per failure mode: invalid or incomplete
///   expressions, unmatched or empty parentheses, invalid characters.
/// - Attaches the position of the failure in the normalized expression.
pub mod error;
/// Orchestrates the stages of evaluation.
///
/// This module ties together normalization, tier classification,
/// tokenization, tree construction and evaluation.
///
/// # Responsibilities
/// - Exposes every stage for callers that need intermediate results.
/// - Manages the flow of data and errors between stages.
pub mod interpreter;
/// General utilities for numeric conversion and result presentation.
pub mod util;

/// Parses an expression into a tree without evaluating it.
///
/// The input is normalized first; error positions refer to the normalized
/// text (see [`normalize`]).
///
/// # Errors
/// Returns the first syntax error found.
///
/// # Examples
/// ```
/// use pedmas::parse;
///
/// let tree = parse("2 (3 + 1)").unwrap();
/// assert_eq!(tree.to_string(), "(2 * (3 + 1))");
/// ```
pub fn parse(expression: &str) -> ParseResult<Expr> {
    let normalized = normalize(expression);
    debug!("normalized {expression:?} to {normalized:?}");

    parse_expression(&normalized)
}

/// Evaluates an arithmetic expression.
///
/// This is the entry point of the crate. The call is pure: it borrows the
/// input, keeps no state and can run on any number of threads at once.
///
/// # Errors
/// Returns an [`EvalError`](error::EvalError) describing the first problem found, with its
/// position in the normalized expression.
///
/// # Examples
/// ```
/// use pedmas::{error::EvalError, evaluate};
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate("(2)(3)").unwrap(), 6.0);
/// assert_eq!(evaluate("2^3^2").unwrap(), 64.0);
///
/// assert!(matches!(evaluate("3+"), Err(EvalError::IncompleteExpression { .. })));
/// assert!(matches!(evaluate("()"), Err(EvalError::EmptyParenthesis { .. })));
/// ```
pub fn evaluate(expression: &str) -> EvalResult<f64> {
    let tree = parse(expression)?;
    let value = tree.evaluate();
    debug!("evaluated {expression:?} over {} node(s): {value}", tree.node_count());

    Ok(value)
}
