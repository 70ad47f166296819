use log::trace;

use crate::interpreter::lexer::Symbol;

/// The weakest class of binary operator found at the top level of an
/// expression.
///
/// The tier decides where the tokenizer splits: an additive expression is
/// split at `+` and `-`, and everything between (products, powers,
/// parenthesized groups) becomes one operand to be evaluated recursively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrecedenceTier {
    /// `+` and `-`.
    Additive,
    /// `*` and `/`.
    Multiplicative,
    /// `^`.
    Exponential,
    /// No top-level operator: a bare number, or something invalid.
    None,
}

impl PrecedenceTier {
    /// Picks the tier from a parenthesis-stripped view.
    fn of_view(view: &str) -> Option<Self> {
        if view.contains(['+', '-']) {
            Some(Self::Additive)
        } else if view.contains(['*', '/']) {
            Some(Self::Multiplicative)
        } else if view.contains('^') {
            Some(Self::Exponential)
        } else {
            None
        }
    }

    /// Whether the tokenizer starts a new operand at `symbol`.
    #[must_use]
    pub const fn splits_on(self, symbol: Symbol) -> bool {
        match self {
            Self::Additive => matches!(symbol, Symbol::Plus | Symbol::Minus),
            Self::Multiplicative => matches!(symbol, Symbol::Star | Symbol::Slash),
            Self::Exponential => matches!(symbol, Symbol::Caret),
            Self::None => false,
        }
    }

    /// Whether `symbol` stays inside the current operand: digits, the
    /// decimal point, parentheses and every operator binding tighter than
    /// this tier.
    #[must_use]
    pub const fn accumulates(self, symbol: Symbol) -> bool {
        match symbol {
            Symbol::Digits | Symbol::Point | Symbol::LParen | Symbol::RParen => true,
            Symbol::Star | Symbol::Slash => matches!(self, Self::Additive),
            Symbol::Caret => matches!(self, Self::Additive | Self::Multiplicative),
            Symbol::Plus | Symbol::Minus => false,
        }
    }
}

/// Result of [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification<'a> {
    /// The weakest top-level tier of `reduced`.
    pub tier:     PrecedenceTier,
    /// The input with its redundant outer parentheses removed.
    pub reduced:  &'a str,
    /// How many outer pairs were removed; `reduced` starts at this byte
    /// offset of the input.
    pub stripped: usize,
}

/// Returns the top-level characters of `s`.
///
/// Every balanced `(...)` span is deleted along with anything nested in it.
/// An unclosed `(` swallows the rest of the string and a `)` without an open
/// partner is kept.
///
/// # Example
/// ```
/// use pedmas::interpreter::classifier::top_level_view;
///
/// assert_eq!(top_level_view("2*(3+4)^(1-(2))"), "2*^");
/// assert_eq!(top_level_view("1+(2"), "1+");
/// assert_eq!(top_level_view("1)+2"), "1)+2");
/// ```
#[must_use]
pub fn top_level_view(s: &str) -> String {
    let mut depth = 0usize;
    let mut view = String::new();

    for c in s.chars() {
        match c {
            '(' => depth += 1,
            ')' if depth > 0 => depth -= 1,
            _ if depth == 0 => view.push(c),
            _ => {},
        }
    }

    view
}

/// Removes one enclosing pair of parentheses.
///
/// Succeeds only when `s` starts with `(` and the matching `)` is the last
/// character, so `(1)+(2)` is left alone.
#[must_use]
pub fn strip_outer(s: &str) -> Option<&str> {
    if !s.starts_with('(') {
        return None;
    }

    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return (i + 1 == s.len()).then(|| &s[1..i]);
                }
            },
            _ => {},
        }
    }

    None
}

/// Determines the precedence tier of a normalized expression.
///
/// Redundant outer parentheses are stripped one layer at a time until an
/// operator tier shows up or no enclosing pair is left. Never fails; invalid
/// input is reported later by the tokenizer or the literal parser.
///
/// # Example
/// ```
/// use pedmas::interpreter::classifier::{PrecedenceTier, classify};
///
/// let classified = classify("((2*3))");
/// assert_eq!(classified.tier, PrecedenceTier::Multiplicative);
/// assert_eq!(classified.reduced, "2*3");
/// assert_eq!(classified.stripped, 2);
///
/// assert_eq!(classify("(1+2)*3").tier, PrecedenceTier::Multiplicative);
/// assert_eq!(classify("-4").tier, PrecedenceTier::Additive);
/// assert_eq!(classify("4.5").tier, PrecedenceTier::None);
/// ```
#[must_use]
pub fn classify(s: &str) -> Classification<'_> {
    let mut reduced = s;
    let mut stripped = 0;

    let tier = loop {
        if let Some(tier) = PrecedenceTier::of_view(&top_level_view(reduced)) {
            break tier;
        }
        match strip_outer(reduced) {
            Some(inner) => {
                reduced = inner;
                stripped += 1;
            },
            None => break PrecedenceTier::None,
        }
    };

    trace!("classified {s:?} as {tier:?} (reduced {reduced:?}, {stripped} layer(s) stripped)");

    Classification { tier,
                     reduced,
                     stripped }
}
