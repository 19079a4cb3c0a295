use std::fmt::Display;

pub type Error = String;

#[derive(Debug)]
pub enum ErrorMsg {
    // Lex errors
    UnexpectedChar,
    UnterminatedString,
    // Parse errors
    ExpectedExpression,
    NoPrefixHandler,
    NoInfixHandler,
    InvalidIdent,
    InvalidInteger,
    MissingEqual,
    MissingOpeningParen,
    MissingClosingParen,
    MissingOpeningBrace,
    MissingClosingBrace,
    // EOF
    EndOfStream,
}

impl Display for ErrorMsg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::UnexpectedChar => "unexpected character",
            Self::UnterminatedString => "unterminated string",
            Self::ExpectedExpression => "expected expression at",
            Self::NoPrefixHandler => "no prefix handler for",
            Self::NoInfixHandler => "no infix handler for",
            Self::InvalidIdent => "expected identifier, found",
            Self::InvalidInteger => "invalid integer literal",
            Self::MissingEqual => "expected '=' after identifier, found",
            Self::MissingOpeningParen => "missing opening parenthesis at",
            Self::MissingClosingParen => "missing closing parenthesis at",
            Self::MissingOpeningBrace => "missing opening brace at",
            Self::MissingClosingBrace => "missing closing brace at",
            Self::EndOfStream => "end of stream",
        })
    }
}
