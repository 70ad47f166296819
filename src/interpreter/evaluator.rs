use crate::{
    ast::{BinaryOperator, Expr},
    error::EvalError,
    interpreter::{parser::parse_tokens, tokenizer::TokenSequence},
};

/// Result type used by the evaluator.
///
/// Evaluation either produces a finite or non-finite `f64`, or the first
/// [`EvalError`] found while building the tree.
pub type EvalResult<T> = Result<T, EvalError>;

impl BinaryOperator {
    /// Combines a running result with the next operand.
    ///
    /// All arithmetic is double precision. Division by zero follows IEEE 754
    /// and yields an infinity or NaN rather than an error, and `^` raises the
    /// left side to the power of the right side.
    ///
    /// # Example
    /// ```
    /// use pedmas::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Pow.apply(2.0, 10.0), 1024.0);
    /// assert!(BinaryOperator::Div.apply(1.0, 0.0).is_infinite());
    /// assert!(BinaryOperator::Div.apply(0.0, 0.0).is_nan());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Pow => left.powf(right),
        }
    }
}

impl Expr {
    /// Evaluates the tree.
    ///
    /// Cannot fail: syntax problems are rejected while the tree is built and
    /// arithmetic faults produce infinities or NaN. A chain is folded in a
    /// loop, so only nested sub-expressions recurse.
    ///
    /// # Example
    /// ```
    /// use pedmas::ast::{BinaryOperator, Expr};
    ///
    /// let tree = Expr::binary(BinaryOperator::Mul, Expr::Number(3.5), Expr::Number(2.0));
    /// assert_eq!(tree.evaluate(), 7.0);
    /// ```
    #[must_use]
    pub fn evaluate(&self) -> f64 {
        match self {
            Self::Number(value) => *value,
            Self::Chain { first, rest } => {
                rest.iter().fold(first.evaluate(), |result, (op, operand)| {
                                 op.apply(result, operand.evaluate())
                             })
            },
        }
    }
}

/// Evaluates a token sequence.
///
/// The sequence is folded left to right: the first operand seeds the result
/// and every following operator combines it with the next operand. Operands
/// that are sub-expressions are classified, tokenized and evaluated in turn,
/// which makes exponent chains left-associative (`2^3^2` is `64`).
///
/// # Errors
/// Returns the first error met while parsing the operands, in left-to-right
/// order.
///
/// # Example
/// ```
/// use pedmas::interpreter::{
///     classifier::PrecedenceTier, evaluator::evaluate_tokens, tokenizer::tokenize,
/// };
///
/// let tokens = tokenize("10-2*3-1", PrecedenceTier::Additive).unwrap();
/// assert_eq!(evaluate_tokens(&tokens).unwrap(), 3.0);
/// ```
pub fn evaluate_tokens(tokens: &TokenSequence) -> EvalResult<f64> {
    parse_tokens(tokens).map(|tree| tree.evaluate())
}
