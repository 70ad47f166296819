use thiserror::Error;

/// Represents all errors that can occur while parsing or evaluating an
/// expression.
///
/// Every variant carries the byte `position` of the offending character in
/// the normalized expression (whitespace removed, implicit multiplications
/// inserted).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Malformed operator adjacency, a bad leading character, an operator
    /// right before `)`, or a numeral that cannot be parsed.
    #[error("Error at position {position}: Invalid expression.")]
    InvalidExpression {
        /// Byte offset in the normalized expression.
        position: usize,
    },
    /// A binary operator is the last character of the expression.
    #[error("Error at position {position}: Incomplete expression.")]
    IncompleteExpression {
        /// Byte offset in the normalized expression.
        position: usize,
    },
    /// A `)` without an open partner, or a `(` that is never closed.
    #[error("Error at position {position}: Unmatched parenthesis.")]
    UnmatchedParenthesis {
        /// Byte offset in the normalized expression.
        position: usize,
    },
    /// A `()` pair with nothing between.
    #[error("Error at position {position}: Empty parenthesis.")]
    EmptyParenthesis {
        /// Byte offset in the normalized expression.
        position: usize,
    },
    /// A character outside `0-9 + - * / ^ . ( )`.
    #[error("Error at position {position}: Invalid character '{character}' found in expression.")]
    InvalidCharacter {
        /// The unsupported character.
        character: char,
        /// Byte offset in the normalized expression.
        position:  usize,
    },
}

impl EvalError {
    /// Returns the byte offset of the error in the normalized expression.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::InvalidExpression { position }
            | Self::IncompleteExpression { position }
            | Self::UnmatchedParenthesis { position }
            | Self::EmptyParenthesis { position }
            | Self::InvalidCharacter { position, .. } => *position,
        }
    }

    /// Moves the error position by `offset` bytes.
    ///
    /// Sub-expressions are tokenized as slices of the full expression, so
    /// their errors are reported relative to the slice until the caller
    /// shifts them back.
    #[must_use]
    pub(crate) const fn offset_by(self, offset: usize) -> Self {
        match self {
            Self::InvalidExpression { position } => {
                Self::InvalidExpression { position: position + offset }
            },
            Self::IncompleteExpression { position } => {
                Self::IncompleteExpression { position: position + offset }
            },
            Self::UnmatchedParenthesis { position } => {
                Self::UnmatchedParenthesis { position: position + offset }
            },
            Self::EmptyParenthesis { position } => {
                Self::EmptyParenthesis { position: position + offset }
            },
            Self::InvalidCharacter { character, position } => {
                Self::InvalidCharacter { character,
                                         position: position + offset }
            },
        }
    }
}
