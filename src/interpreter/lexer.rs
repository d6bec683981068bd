use logos::Logos;

use crate::error::ParseError;

/// A token paired with the character offset where it starts.
pub type Spanned = (Token, usize);

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens of the expression grammar.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `.5`, `2.`, or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", parse_real)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_real)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_real)]
    Real(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// A run of digits holding more than one decimal point, such as `1.2.3`.
    #[regex(r"[0-9]*\.[0-9]*\.[0-9.]*")]
    MalformedNumber,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `/`
    #[token("/")]
    Slash,
    /// `//`
    #[token("//")]
    DoubleSlash,
    /// `%`
    #[token("%")]
    Percent,
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

/// Failure raised by a token callback.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexError {
    /// No token matches at this point of the input.
    #[default]
    InvalidCharacter,
    /// A numeric literal does not fit the native numeric types.
    LiteralTooLarge,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(r) => write!(f, "{r}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::MalformedNumber => write!(f, "malformed number"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::DoubleStar => write!(f, "**"),
            Self::Slash => write!(f, "/"),
            Self::DoubleSlash => write!(f, "//"),
            Self::Percent => write!(f, "%"),
            Self::Caret => write!(f, "^"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Parses a floating-point literal from the current token slice.
///
/// Literals that overflow to infinity are rejected.
fn parse_real(lex: &logos::Lexer<Token>) -> Result<f64, LexError> {
    match lex.slice().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(LexError::LiteralTooLarge),
    }
}
/// Parses an integer literal from the current token slice.
///
/// The regex only admits digits, so the only possible failure is overflow.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexError> {
    lex.slice().parse().map_err(|_| LexError::LiteralTooLarge)
}

/// Splits an expression into tokens tagged with their character offsets.
///
/// Whitespace between tokens is skipped. Every other character must belong to
/// exactly one token.
///
/// # Errors
/// - `InvalidCharacter` for a character outside the alphabet, or for the
///   second `.` of a malformed literal.
/// - `LiteralTooLarge` for a literal outside the native numeric range.
///
/// # Example
/// ```
/// use calcrs::{
///     error::ParseError,
///     interpreter::lexer::{Token, tokenize},
/// };
///
/// let tokens = tokenize("2 ** .5").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Integer(2), 0), (Token::DoubleStar, 2), (Token::Real(0.5), 5)]);
///
/// assert_eq!(tokenize("1 + x"),
///            Err(ParseError::InvalidCharacter { character: 'x',
///                                               position:  4, }));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    // Byte offsets from logos are turned into character offsets incrementally.
    let mut byte_cursor = 0;
    let mut char_cursor = 0;

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        char_cursor += source[byte_cursor..span.start].chars().count();
        byte_cursor = span.start;
        let position = char_cursor;

        match token {
            Ok(Token::MalformedNumber) => {
                let slice = lexer.slice();
                let offset = slice.match_indices('.').nth(1).map_or(0, |(i, _)| i);
                return Err(ParseError::InvalidCharacter { character: '.',
                                                          position:  position + offset, });
            },
            Ok(tok) => tokens.push((tok, position)),
            Err(LexError::LiteralTooLarge) => {
                return Err(ParseError::LiteralTooLarge { literal: lexer.slice().to_string(),
                                                         position });
            },
            Err(LexError::InvalidCharacter) => {
                let character = source[span.start..].chars()
                                                    .next()
                                                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(ParseError::InvalidCharacter { character, position });
            },
        }
    }

    Ok(tokens)
}
