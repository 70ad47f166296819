use std::fmt;

/// One of the five binary operators an expression can contain.
///
/// Operators are grouped into precedence tiers by
/// [`PrecedenceTier`](crate::interpreter::classifier::PrecedenceTier):
/// `+ -` are additive, `* /` multiplicative and `^` exponential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

impl BinaryOperator {
    /// Maps an operator character to its operator.
    ///
    /// # Example
    /// ```
    /// use pedmas::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_char('^'), Some(BinaryOperator::Pow));
    /// assert_eq!(BinaryOperator::from_char('%'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Pow),
            _ => None,
        }
    }

    /// Returns the character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An expression tree.
///
/// Each level of the expression is one `Chain`: a first operand followed by
/// the operator and operand pairs of its token sequence, folded left to
/// right. `1-2-3` is a single chain that reads as `((1 - 2) - 3)`, and
/// `2^3^2` reads as `((2 ^ 3) ^ 2)`. The depth of the tree follows the
/// nesting of sub-expressions, never the number of operators.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A decimal literal.
    Number(f64),
    /// A left-to-right fold of binary operations.
    Chain {
        /// Seeds the running result.
        first: Box<Self>,
        /// Each operator combines the running result with its operand.
        rest:  Vec<(BinaryOperator, Self)>,
    },
}

impl Expr {
    /// Builds a chain from its first operand and the pairs that follow.
    #[must_use]
    pub fn chain(first: Self, rest: Vec<(BinaryOperator, Self)>) -> Self {
        Self::Chain { first: Box::new(first),
                      rest }
    }

    /// Builds a single binary operation.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::chain(left, vec![(op, right)])
    }

    /// Counts the literals and chains of the tree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::Number(_) => 1,
            Self::Chain { first, rest } => {
                let operands: usize = rest.iter().map(|(_, operand)| operand.node_count()).sum();
                1 + first.node_count() + operands
            },
        }
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Chain { first, rest } => {
                for _ in rest {
                    write!(f, "(")?;
                }
                write!(f, "{first}")?;
                for (op, operand) in rest {
                    write!(f, " {op} {operand})")?;
                }
                Ok(())
            },
        }
    }
}
