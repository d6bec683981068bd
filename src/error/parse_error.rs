#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Positions are zero-based character offsets into the source text.
pub enum ParseError {
    /// The input was empty or contained only whitespace.
    EmptyExpression,
    /// A character that is not part of the expression alphabet, or the
    /// offending character inside a malformed numeric literal.
    InvalidCharacter {
        /// The rejected character.
        character: char,
        /// The source position of the character.
        position:  usize,
    },
    /// A numeric literal could not be represented as a native number.
    LiteralTooLarge {
        /// The literal as written.
        literal:  String,
        /// The source position where the literal starts.
        position: usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// What the parser was looking for.
        expected: &'static str,
        /// The source position of the token.
        position: usize,
    },
    /// Reached the end of input while an operand was still required.
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: &'static str,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source position of the unmatched `(`.
        position: usize,
    },
    /// A pair of parentheses contained nothing.
    EmptyGroup {
        /// The source position of the `(`.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// The source position of the extra token.
        position: usize,
    },
    /// The expression nests deeper than the configured limit.
    NestingTooDeep {
        /// The configured maximum depth.
        limit: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Empty expression. Please enter a calculation."),

            Self::InvalidCharacter { character, position } => {
                write!(f, "Invalid character '{character}' at position {position}.")
            },

            Self::LiteralTooLarge { literal, position } => write!(f,
                                                                  "Literal '{literal}' at position {position} is too large to represent."),

            Self::UnexpectedToken { token,
                                    expected,
                                    position, } => write!(f,
                                                          "Syntax error at position {position}: expected {expected}, found '{token}'."),

            Self::UnexpectedEndOfInput { expected } => {
                write!(f, "Syntax error: expected {expected}, but the expression ended.")
            },

            Self::ExpectedClosingParen { position } => write!(f,
                                                              "Syntax error: missing closing parenthesis ')' for '(' at position {position}."),

            Self::EmptyGroup { position } => {
                write!(f, "Syntax error: empty parentheses at position {position}.")
            },

            Self::UnexpectedTrailingTokens { token, position } => write!(f,
                                                                         "Syntax error at position {position}: unexpected '{token}' after a complete expression."),

            Self::NestingTooDeep { limit } => {
                write!(f, "Expression is nested too deeply (limit is {limit}).")
            },
        }
    }
}

impl std::error::Error for ParseError {}
