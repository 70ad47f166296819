use logos::Logos;

use crate::ast::BinaryOperator;

/// Characters that may not directly follow one another: the five operators
/// and the decimal point.
pub const OPERATOR_CHARS: [char; 6] = ['+', '-', '*', '/', '^', '.'];

/// Represents a lexical symbol of a normalized expression.
///
/// Everything the calculator understands is a single character except digit
/// runs. Any other character is a lexer error, which the tokenizer reports as
/// an invalid character unless it is nested inside parentheses.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// A run of decimal digits, such as `42`.
    #[regex(r"[0-9]+")]
    Digits,
    /// `.`
    #[token(".")]
    Point,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl Symbol {
    /// Returns the binary operator this symbol stands for, if any.
    #[must_use]
    pub const fn operator(self) -> Option<BinaryOperator> {
        match self {
            Self::Plus => Some(BinaryOperator::Add),
            Self::Minus => Some(BinaryOperator::Sub),
            Self::Star => Some(BinaryOperator::Mul),
            Self::Slash => Some(BinaryOperator::Div),
            Self::Caret => Some(BinaryOperator::Pow),
            Self::Digits | Self::Point | Self::LParen | Self::RParen => None,
        }
    }

    /// Whether the symbol is one of `+ - * / ^ .`.
    #[must_use]
    pub const fn is_operator_like(self) -> bool {
        matches!(self,
                 Self::Point | Self::Plus | Self::Minus | Self::Star | Self::Slash | Self::Caret)
    }

    /// Whether the symbol is a sign that may open an expression.
    #[must_use]
    pub const fn is_sign(self) -> bool {
        matches!(self, Self::Plus | Self::Minus)
    }
}

/// A signed decimal literal, the only leaf an expression tree has.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum Literal {
    /// Literal tokens such as `7`, `-5` or `3.25`.
    #[regex(r"[+-]?[0-9]+(\.[0-9]+)?", parse_float)]
    Number(f64),
}

fn parse_float(lex: &logos::Lexer<Literal>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses `text` as one signed decimal literal.
///
/// The whole text must be a literal: an optional sign, digits, and an
/// optional fraction with at least one digit after the point.
///
/// # Example
/// ```
/// use pedmas::interpreter::lexer::parse_literal;
///
/// assert_eq!(parse_literal("-3.5"), Some(-3.5));
/// assert_eq!(parse_literal("1.2.3"), None);
/// assert_eq!(parse_literal(""), None);
/// ```
#[must_use]
pub fn parse_literal(text: &str) -> Option<f64> {
    let mut lexer = Literal::lexer(text);
    let Some(Ok(Literal::Number(value))) = lexer.next() else {
        return None;
    };
    (lexer.span().end == text.len()).then_some(value)
}
