use std::fmt;

use log::trace;
use logos::Logos;

use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::{
        classifier::PrecedenceTier,
        lexer::{OPERATOR_CHARS, Symbol},
        parser::ParseResult,
    },
};

/// An operand token.
///
/// The text is either a signed decimal literal or a whole sub-expression
/// (`3*4`, `(1+2)`) that is classified and tokenized again on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operand {
    /// The operand text.
    pub text:   String,
    /// Byte offset of the operand in the tokenized string.
    pub offset: usize,
}

impl Operand {
    const fn starting_at(offset: usize) -> Self {
        Self { text: String::new(),
               offset }
    }

    /// Whether the operand is a sub-expression rather than a bare literal.
    ///
    /// A leading sign does not count; any later operator or any parenthesis
    /// does.
    #[must_use]
    pub fn is_compound(&self) -> bool {
        let unsigned = self.text.strip_prefix(['+', '-']).unwrap_or(&self.text);
        unsigned.contains(['+', '-', '*', '/', '^', '(', ')'])
    }
}

/// A single unit produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A literal or a nested sub-expression.
    Operand(Operand),
    /// One of the operators the current tier splits on.
    Operator(BinaryOperator),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operand(operand) => write!(f, "{}", operand.text),
            Self::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// The output of [`tokenize`].
///
/// Never empty, and always alternates operand, operator, operand, ...,
/// operand: the length is odd and operators sit at odd indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSequence(Vec<Token>);

impl TokenSequence {
    /// Returns the tokens in order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    /// Returns the number of tokens, operators included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the first operand.
    #[must_use]
    pub fn first(&self) -> &Operand {
        match self.0.first() {
            Some(Token::Operand(operand)) => operand,
            _ => unreachable!("token sequences start with an operand"),
        }
    }

    /// Iterates over the operator and operand pairs following the first
    /// operand.
    pub fn pairs(&self) -> impl Iterator<Item = (BinaryOperator, &Operand)> {
        self.0[1..].chunks_exact(2).filter_map(|pair| match pair {
                                             [Token::Operator(op), Token::Operand(operand)] => {
                                                 Some((*op, operand))
                                             },
                                             _ => None,
                                         })
    }
}

impl fmt::Display for TokenSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

/// Checks the adjacency rules for `symbol` before it is consumed.
///
/// - An expression must open with a digit, `(`, or a `+`/`-` sign.
/// - Two of `+ - * / ^ .` may not follow one another, and none may follow
///   `(`.
/// - A decimal point needs a digit before it.
/// - An operator may not end the expression.
fn validate(symbol: Symbol,
            prev: Option<char>,
            is_last: bool,
            position: usize)
            -> ParseResult<()> {
    let invalid = EvalError::InvalidExpression { position };

    if prev.is_none() && !matches!(symbol, Symbol::Digits | Symbol::LParen) && !symbol.is_sign() {
        return Err(invalid);
    }

    if symbol.is_operator_like() {
        if prev.is_some_and(|p| OPERATOR_CHARS.contains(&p) || p == '(') {
            return Err(invalid);
        }
        if symbol == Symbol::Point && !prev.is_some_and(|p| p.is_ascii_digit()) {
            return Err(invalid);
        }
        if is_last {
            return Err(if symbol == Symbol::Point {
                           invalid
                       } else {
                           EvalError::IncompleteExpression { position }
                       });
        }
    }

    Ok(())
}

/// Checks a `)` against the current depth and the character before it.
const fn close_parenthesis(prev: Option<char>, depth: usize, position: usize) -> ParseResult<()> {
    if depth == 0 {
        return Err(EvalError::UnmatchedParenthesis { position });
    }
    match prev {
        Some('(') => Err(EvalError::EmptyParenthesis { position }),
        Some('+' | '-' | '*' | '/' | '^' | '.') => Err(EvalError::InvalidExpression { position }),
        _ => Ok(()),
    }
}

/// Splits a normalized expression at the operators of `tier`.
///
/// The scan is a single left-to-right pass. Operators of `tier` found
/// outside parentheses end the current operand; everything else (digits,
/// decimal points, tighter operators, parenthesized groups) accumulates into
/// it. All syntax validation happens here, so a successful result only needs
/// its operands parsed.
///
/// Error positions are byte offsets in `s`.
///
/// # Errors
/// - [`EvalError::InvalidExpression`] for a bad first character, adjacent
///   operators, a misplaced decimal point or an operator right before `)`.
/// - [`EvalError::IncompleteExpression`] when an operator ends the string.
/// - [`EvalError::UnmatchedParenthesis`] for a stray `)` or an unclosed `(`.
/// - [`EvalError::EmptyParenthesis`] for `()`.
/// - [`EvalError::InvalidCharacter`] for unsupported characters outside
///   parentheses.
///
/// # Example
/// ```
/// use pedmas::interpreter::{classifier::PrecedenceTier, tokenizer::tokenize};
///
/// let tokens = tokenize("-2*3+(4-1)^2", PrecedenceTier::Additive).unwrap();
/// assert_eq!(tokens.to_string(), "-2*3 + (4-1)^2");
/// assert_eq!(tokens.len(), 3);
/// ```
pub fn tokenize(s: &str, tier: PrecedenceTier) -> ParseResult<TokenSequence> {
    let mut tokens = Vec::new();
    let mut operand = Operand::starting_at(0);
    let mut depth = 0usize;
    let mut prev: Option<char> = None;
    let mut lexer = Symbol::lexer(s);

    while let Some(lexeme) = lexer.next() {
        let slice = lexer.slice();
        let span = lexer.span();

        let Ok(symbol) = lexeme else {
            if prev.is_none() {
                return Err(EvalError::InvalidExpression { position: span.start });
            }
            if depth == 0 {
                let character = slice.chars().next().unwrap_or_default();
                return Err(EvalError::InvalidCharacter { character,
                                                         position: span.start });
            }
            // Nested text is checked when the group is tokenized on its own.
            operand.text.push_str(slice);
            prev = slice.chars().last();
            continue;
        };

        validate(symbol, prev, span.end == s.len(), span.start)?;

        match symbol {
            Symbol::LParen => depth += 1,
            Symbol::RParen => {
                close_parenthesis(prev, depth, span.start)?;
                depth -= 1;
            },
            _ => {},
        }

        if depth == 0
           && prev.is_some()
           && tier.splits_on(symbol)
           && let Some(op) = symbol.operator()
        {
            let next = Operand::starting_at(span.end);
            tokens.push(Token::Operand(std::mem::replace(&mut operand, next)));
            tokens.push(Token::Operator(op));
        } else if depth > 0 || tier.accumulates(symbol) || (prev.is_none() && symbol.is_sign()) {
            operand.text.push_str(slice);
        } else {
            let character = slice.chars().next().unwrap_or_default();
            return Err(EvalError::InvalidCharacter { character,
                                                     position: span.start });
        }

        prev = slice.chars().last();
    }

    if depth != 0 {
        return Err(EvalError::UnmatchedParenthesis { position: s.len() });
    }

    tokens.push(Token::Operand(operand));
    let sequence = TokenSequence(tokens);
    trace!("tokenized {s:?} at {tier:?} tier: [{sequence}]");

    Ok(sequence)
}
