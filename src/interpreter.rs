/// Signed decimal literals and the character symbols of an expression.
///
/// Built on `logos`: the tokenizer scans [`lexer::Symbol`]s, and leaves of the
/// expression tree are read with [`lexer::parse_literal`].
pub mod lexer;
/// Cleans raw input before any other stage sees it.
///
/// # Responsibilities
/// - Removes blanks.
/// - Makes implicit multiplication (`2(3)`, `(1)(2)`) explicit.
pub mod normalizer;
/// Finds the weakest operator tier at the top level of an expression.
///
/// # Responsibilities
/// - Computes the parenthesis-stripped view of a string.
/// - Strips redundant outer parentheses, one layer at a time.
/// - Chooses between additive, multiplicative, exponential or no tier.
pub mod classifier;
/// Splits an expression at the operators of one tier.
///
/// The tokenizer is where all syntax validation happens: operator adjacency,
/// trailing operators, parenthesis balance and unsupported characters.
pub mod tokenizer;
/// Builds expression trees from token sequences.
///
/// # Responsibilities
/// - Drives classification and tokenization for every nested operand.
/// - Folds token sequences left to right into `Chain` nodes.
/// - Parses leaves as decimal literals.
/// - Keeps error positions relative to the full normalized expression.
pub mod parser;
/// Computes numeric results.
///
/// Arithmetic is plain `f64`; division by zero gives infinities or NaN.
pub mod evaluator;
