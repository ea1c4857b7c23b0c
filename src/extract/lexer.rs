use std::ops::Range;

use logos::Logos;

/// Represents a lexical unit of a single line of Rust source.
///
/// Only what the expression extractor needs is distinguished: names,
/// parentheses and other punctuation. Literals and comments are still
/// recognised as whole units, so that a parenthesis inside a string, a char
/// or a comment is never mistaken for punctuation.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum RawToken {
    /// Identifiers and keywords, such as `x`, `dprint` or `let`, and raw
    /// identifiers such as `r#type`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    #[regex(r"r#[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// `'a`
    #[regex(r"'[a-zA-Z_][a-zA-Z0-9_]*")]
    Lifetime,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Every other piece of punctuation, longest first.
    #[regex(r"::|->|=>|==|!=|<=|>=|&&|\|\||\.\.\.|\.\.=|\.\.|<<=|>>=|<<|>>|\+=|-=|\*=|/=|%=|\^=|&=|\|=")]
    #[regex(r"[+\-*/%^!&|=<>@.,;:#$?~\[\]{}]")]
    Punct,
    /// `"text"`, `b"bytes"` and `c"text"`.
    #[regex(r#"[bc]?"([^"\\]|\\.)*""#, allow_greedy = true)]
    Str,
    /// `r"text"`, `r#"text"#`, `br##"bytes"##` and so on.
    #[regex(r#"[bc]?r#*""#, raw_string)]
    RawStr,
    /// `'c'`, `'\n'`, `'\u{1F600}'` and `b'c'`.
    #[regex(r"b?'([^'\\\n]|\\[^\nxu]|\\x[0-9a-fA-F]{2}|\\u\{[0-9a-fA-F_]{1,6}\})'")]
    Char,
    /// Integer and float literals, with any base prefix or type suffix.
    #[regex(r"[0-9][0-9a-zA-Z_]*(\.[0-9][0-9_]*([eE][+-]?[0-9_]+)?[a-zA-Z0-9_]*)?")]
    Number,
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", allow_greedy = true)]
    LineComment,
    /// `/* Comments. */`
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/", allow_greedy = true)]
    BlockComment,
    /// Whitespace.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// The category of a token, as far as expression extraction is concerned.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    /// Identifiers and keywords.
    Name,
    /// Parentheses and all other punctuation.
    Operator,
    /// Literals, lifetimes, comments and anything unrecognised.
    Other,
}

/// A token borrowed from the line it was read from.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token<'src> {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// The exact source text of the token.
    pub text: &'src str,
    /// Byte offsets of the token within the line.
    pub span: Range<usize>,
}

impl From<RawToken> for TokenKind {
    fn from(raw: RawToken) -> Self {
        match raw {
            RawToken::Identifier => Self::Name,
            RawToken::LParen | RawToken::RParen | RawToken::Punct => Self::Operator,
            RawToken::Lifetime
            | RawToken::Str
            | RawToken::RawStr
            | RawToken::Char
            | RawToken::Number
            | RawToken::LineComment
            | RawToken::BlockComment
            | RawToken::Ignored => Self::Other,
        }
    }
}

/// Splits one line of Rust source into tokens.
///
/// Lexing never fails: characters that start no known token, and literals
/// left unterminated at the end of the line, come out as [`TokenKind::Other`]
/// and lexing resumes right after them.
///
/// # Example
/// ```
/// use dprint::extract::lexer::{TokenKind, tokenize};
///
/// let kinds: Vec<_> = tokenize(r#"f(")")"#).map(|t| (t.kind, t.text)).collect();
///
/// assert_eq!(kinds,
///            [(TokenKind::Name, "f"),
///             (TokenKind::Operator, "("),
///             (TokenKind::Other, "\")\""),
///             (TokenKind::Operator, ")")]);
/// ```
pub fn tokenize(line: &str) -> impl Iterator<Item = Token<'_>> {
    RawToken::lexer(line).spanned()
                         .map(move |(raw, span)| {
                             let kind = raw.map_or(TokenKind::Other, TokenKind::from);
                             Token { kind,
                                     text: line.get(span.clone()).unwrap_or_default(),
                                     span }
                         })
}

/// Consumes the body of a raw string whose opening `r#*"` was just matched.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer positioned after the opening quote.
///
/// # Returns
/// - `true` if the closing quote, followed by as many `#` as the opening, was
///   found; the lexer is moved past it.
/// - `false` if the string is not closed on this line.
fn raw_string(lex: &mut logos::Lexer<RawToken>) -> bool {
    let hashes = lex.slice().bytes().filter(|&b| b == b'#').count();
    let closing = format!("\"{}", "#".repeat(hashes));

    match lex.remainder().find(&closing) {
        Some(at) => {
            lex.bump(at + closing.len());
            true
        },
        None => false,
    }
}
