/// Whether `c` is one of the blanks removed from every expression: space,
/// tab, newline, carriage return, form feed or vertical tab.
#[must_use]
pub const fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C' | '\x0B')
}

/// Normalizes raw user input.
///
/// All blanks are removed, then a `*` is inserted before every `(` that
/// directly follows a digit or a `)`, so implicit multiplication becomes
/// explicit. Never fails; invalid characters are left for the tokenizer to
/// report.
///
/// # Example
/// ```
/// use pedmas::interpreter::normalizer::normalize;
///
/// assert_eq!(normalize("6 (20)"), "6*(20)");
/// assert_eq!(normalize("(3 + 4)(5)"), "(3+4)*(5)");
/// assert_eq!(normalize("2 * (1)"), "2*(1)");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    let mut normalized = String::with_capacity(raw.len());

    for c in raw.chars().filter(|&c| !is_blank(c)) {
        if c == '(' && normalized.ends_with(|p: char| p.is_ascii_digit() || p == ')') {
            normalized.push('*');
        }
        normalized.push(c);
    }

    normalized
}
