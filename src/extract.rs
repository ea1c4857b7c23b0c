use crate::extract::lexer::{TokenKind, tokenize};

/// Tokenization of a single line of Rust source.
///
/// The lexer knows just enough of Rust's lexical grammar to tell names and
/// punctuation apart from literals and comments.
pub mod lexer;

/// The name whose first call on a line marks the expression to extract.
pub const ANCHOR: &str = "dprint";

/// Extracts the argument text of the first `dprint` call on a line.
///
/// The line is tokenized and scanned for the first name token spelled
/// `dprint`. From there, only punctuation is considered: the first `(` opens
/// the argument list, nested parentheses are balanced, and the `)` that closes
/// the first one ends it. This covers `dprint(x)`, `dprint!(x)` and
/// `dprint::dprint(x)` alike.
///
/// Known limitations, kept on purpose:
/// - Only the first call on the line is considered.
/// - A call continued on the next line runs to the end of this one.
/// - Any name spelled `dprint` anchors, whatever it is bound to.
/// - A line with no `dprint` name on it, such as a call through an alias, is
///   returned whole.
///
/// # Parameters
/// - `line`: The source line of the call site, if known.
///
/// # Returns
/// The text between the outermost parentheses of the call, the whole line
/// when there is no `dprint` on it, or an empty string when there is no line.
///
/// # Example
/// ```
/// use dprint::extract::extract_expression;
///
/// assert_eq!(extract_expression(Some("dprint((x - 6) * y)")), "(x - 6) * y");
/// assert_eq!(extract_expression(Some("let y = dprint!(f(x, \")\"));")),
///            "f(x, \")\")");
/// assert_eq!(extract_expression(Some("dprint(dprint(x))")), "dprint(x)");
/// assert_eq!(extract_expression(Some("let y = dp(x);")), "let y = dp(x);");
/// assert_eq!(extract_expression(None), "");
/// ```
#[must_use]
pub fn extract_expression(line: Option<&str>) -> String {
    let Some(line) = line else {
        return String::new();
    };

    let mut start = None;
    let mut end = None;
    let mut level = 0_i32;

    for token in tokenize(line) {
        if start.is_none() {
            if token.kind == TokenKind::Name && token.text == ANCHOR {
                start = Some(token.span.start);
            }
            continue;
        }

        if token.kind != TokenKind::Operator {
            continue;
        }

        match token.text {
            "(" => {
                if level == 0 {
                    start = Some(token.span.end);
                }
                level += 1;
            },
            ")" => {
                level -= 1;
                if level == 0 {
                    end = Some(token.span.start);
                    break;
                }
            },
            _ => {},
        }
    }

    // No anchor at all, e.g. under an alias: the whole line stands in.
    line.get(start.unwrap_or(0)..end.unwrap_or(line.len()))
        .unwrap_or_default()
        .to_string()
}
