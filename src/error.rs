/// Evaluation errors.
///
/// Defines the single error type returned by every stage of the pipeline:
/// malformed operator adjacency, trailing operators, unbalanced or empty
/// parentheses, unparseable numerals and unsupported characters. Each variant
/// records where in the normalized expression the problem was found.
pub mod eval_error;

pub use eval_error::EvalError;
