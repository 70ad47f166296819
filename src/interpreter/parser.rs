use log::trace;

use crate::{
    ast::{BinaryOperator, Expr},
    error::EvalError,
    interpreter::{
        classifier::{PrecedenceTier, classify},
        lexer::parse_literal,
        tokenizer::{Operand, TokenSequence, tokenize},
    },
};

pub type ParseResult<T> = Result<T, EvalError>;

/// Parses a normalized expression into a tree.
///
/// Each level classifies its text, tokenizes it at the weakest top-level
/// tier and folds the tokens left to right into a `Chain`. Operands
/// that are sub-expressions go through the same steps. The first error of the
/// depth-first, left-to-right walk is returned; its position is a byte offset
/// in `s`.
///
/// # Example
/// ```
/// use pedmas::interpreter::parser::parse_expression;
///
/// let tree = parse_expression("2+3*4").unwrap();
/// assert_eq!(tree.to_string(), "(2 + (3 * 4))");
///
/// let tree = parse_expression("2^3^2").unwrap();
/// assert_eq!(tree.to_string(), "((2 ^ 3) ^ 2)");
/// ```
pub fn parse_expression(s: &str) -> ParseResult<Expr> {
    parse_at(s, 0)
}

/// Folds an already tokenized sequence into a tree.
///
/// Error positions are relative to the string the sequence was produced
/// from.
pub fn parse_tokens(tokens: &TokenSequence) -> ParseResult<Expr> {
    parse_tokens_at(tokens, 0)
}

/// Classifies and tokenizes one level of a normalized expression.
///
/// Redundant outer parentheses are stripped before tokenizing, but the
/// stripped layers are still scanned, so `()` and `(2*)` are reported as
/// written rather than as their empty or truncated contents. Returns the
/// tokens together with the byte offset of the tokenized text in `s`; error
/// positions are byte offsets in `s`.
///
/// # Example
/// ```
/// use pedmas::{error::EvalError, interpreter::parser::tokenize_level};
///
/// let (tokens, stripped) = tokenize_level("((1+2*3))").unwrap();
/// assert_eq!(tokens.to_string(), "1 + 2*3");
/// assert_eq!(stripped, 2);
///
/// assert_eq!(tokenize_level("()").unwrap_err(), EvalError::EmptyParenthesis { position: 1 });
/// ```
pub fn tokenize_level(s: &str) -> ParseResult<(TokenSequence, usize)> {
    let classified = classify(s);

    if classified.stripped > 0 {
        tokenize(s, PrecedenceTier::None)?;
    }

    let stripped = classified.stripped;
    let tokens = tokenize(classified.reduced, classified.tier).map_err(|e| e.offset_by(stripped))?;
    Ok((tokens, stripped))
}

fn parse_at(s: &str, offset: usize) -> ParseResult<Expr> {
    let (tokens, stripped) = tokenize_level(s).map_err(|e| e.offset_by(offset))?;
    parse_tokens_at(&tokens, offset + stripped)
}

fn parse_tokens_at(tokens: &TokenSequence, base: usize) -> ParseResult<Expr> {
    if tokens.len() == 1 {
        return parse_sole_operand(tokens.first(), base);
    }

    let first = parse_operand(tokens.first(), base)?;
    let rest = tokens.pairs()
                     .map(|(op, operand)| Ok((op, parse_operand(operand, base)?)))
                     .collect::<ParseResult<Vec<_>>>()?;

    Ok(Expr::chain(first, rest))
}

fn parse_operand(operand: &Operand, base: usize) -> ParseResult<Expr> {
    let offset = base + operand.offset;
    if operand.is_compound() {
        parse_at(&operand.text, offset)
    } else {
        parse_leaf(&operand.text, offset)
    }
}

/// Parses the only operand of a sequence.
///
/// A signed sub-expression such as `-5*2` or `-(1+2)` is applied to zero.
/// Anything else must be a literal, after dropping one leading `(`.
fn parse_sole_operand(operand: &Operand, base: usize) -> ParseResult<Expr> {
    let offset = base + operand.offset;
    let text = operand.text.as_str();

    if operand.is_compound()
       && let Some(sign) = text.chars().next().and_then(BinaryOperator::from_char)
       && matches!(sign, BinaryOperator::Add | BinaryOperator::Sub)
    {
        trace!("applying leading {sign} to {:?}", &text[1..]);
        let rest = parse_at(&text[1..], offset + 1)?;
        return Ok(Expr::binary(sign, Expr::Number(0.0), rest));
    }

    let literal = text.strip_prefix('(').unwrap_or(text);
    parse_literal(literal).map(Expr::Number).ok_or_else(|| {
        // Point at the stray text next to the group, as in `(1+2)3`.
        let position = offset + group_boundary(text).unwrap_or(0);
        EvalError::InvalidExpression { position }
    })
}

/// Finds where a parenthesized group first touches the text beside it.
fn group_boundary(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut prev = None;

    for (i, c) in text.char_indices() {
        if depth == 0 && i > 0 && (c == '(' || prev == Some(')')) {
            return Some(i);
        }
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ => {},
        }
        prev = Some(c);
    }

    None
}

fn parse_leaf(text: &str, offset: usize) -> ParseResult<Expr> {
    parse_literal(text).map(Expr::Number)
                       .ok_or(EvalError::InvalidExpression { position: offset })
}
