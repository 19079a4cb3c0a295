use crate::{
    error::{Error, ErrorMsg},
    token::{TextRange, Token, TokenKind},
};
use std::{iter::Peekable, str::Chars};

#[derive(Debug)]
pub struct Lexer<'a> {
    source: &'a str,
    stream: Peekable<Chars<'a>>,
    line: usize,
    start: usize,
    current: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            stream: source.chars().peekable(),
            line: 0,
            start: 0,
            current: 0,
        }
    }

    pub fn lex_all(mut self) -> Result<Vec<Token>, Vec<Error>> {
        let mut tokens: Vec<Token> = Vec::default();
        let mut errors: Vec<Error> = Vec::default();
        loop {
            match self.lex() {
                Ok(t) => {
                    if t.kind == TokenKind::EOF {
                        break;
                    } else {
                        tokens.push(t);
                    }
                }
                Err(e) => errors.push(e),
            }
        }
        if errors.is_empty() {
            Ok(tokens)
        } else {
            Err(errors)
        }
    }

    /// Lexes the whole source and drops the tokens the parser never
    /// looks at. Line breaks are kept since they terminate statements.
    pub fn lex_all_sanitised(self) -> Result<Vec<Token>, Vec<Error>> {
        self.lex_all().map(|tokens| {
            tokens
                .into_iter()
                .filter(|t| !matches!(t.kind, TokenKind::WHITESPACE | TokenKind::COMMENT))
                .collect()
        })
    }

    pub fn lex(&mut self) -> Result<Token, Error> {
        self.start = self.current;
        let Some(c) = self.advance() else {
            return Ok(Token::new(
                TokenKind::EOF,
                self.text_range(),
                self.line,
                "end of file".to_string(),
            ));
        };
        match c {
            '!' => Ok(self.lookahead_for_token('=', TokenKind::BANG_EQUAL, TokenKind::BANG)),
            '=' => Ok(self.lookahead_for_token('=', TokenKind::EQUAL_EQUAL, TokenKind::EQUAL)),
            '"' => self.lex_string(),
            '/' => Ok(self.lex_slash_or_comment()),
            _ => {
                if let Some(t) = TokenKind::from_char(c) {
                    let token = self.make_token(t);
                    // Bump the line only after the token is made, so
                    // that a line break reports the line it ends
                    if t == TokenKind::LINEBREAK {
                        self.line += 1;
                    }
                    Ok(token)
                } else if c.is_ascii_alphabetic() || c == '_' {
                    Ok(self.lex_ident())
                } else if c.is_ascii_digit() {
                    Ok(self.lex_number())
                } else {
                    Err(self.error(ErrorMsg::UnexpectedChar))
                }
            }
        }
    }

    fn lex_ident(&mut self) -> Token {
        self.advance_while(|c| c.is_alphanumeric() || c == '_');
        if let Some(t) = TokenKind::from_keyword(self.lexeme_from_range()) {
            self.make_token(t)
        } else {
            self.make_token(TokenKind::IDENT)
        }
    }

    fn lex_number(&mut self) -> Token {
        self.advance_while(|c| c.is_ascii_digit());
        self.make_token(TokenKind::NUMBER)
    }

    fn lex_string(&mut self) -> Result<Token, Error> {
        // Consume the opening apostrophe(")
        self.start += 1;
        while let Some(c) = self.advance_if(|c| c != '"') {
            if c == '\n' {
                self.line += 1;
                return Err(self.error(ErrorMsg::UnterminatedString));
            }
        }
        let token = self.make_token(TokenKind::STRING);
        // Consume the closing apostrophe(")
        if self.advance().is_none() {
            return Err(self.error(ErrorMsg::UnterminatedString));
        }
        Ok(token)
    }

    fn lex_slash_or_comment(&mut self) -> Token {
        if self.advance_if(|c| c == '/').is_some() {
            self.advance_while(|c| c != '\n');
            self.make_token(TokenKind::COMMENT)
        } else {
            self.make_token(TokenKind::SLASH)
        }
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(
            kind,
            self.text_range(),
            self.line,
            self.lexeme_from_range().to_string(),
        )
    }

    fn lexeme_from_range(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    fn text_range(&self) -> TextRange {
        TextRange {
            start: self.start,
            end: self.current,
        }
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.stream.next()?;
        self.current += c.len_utf8();
        Some(c)
    }

    fn advance_if<F>(&mut self, cond: F) -> Option<char>
    where
        F: FnOnce(char) -> bool,
    {
        if self.stream.peek().filter(|&&c| cond(c)).is_some() {
            self.advance()
        } else {
            None
        }
    }

    fn advance_while<F>(&mut self, cond: F) -> Option<usize>
    where
        F: Fn(char) -> bool,
    {
        let mut count: usize = 0;
        while self.stream.peek().filter(|&&c| cond(c)).is_some() {
            count += 1;
            self.advance();
        }
        count.ne(&0).then_some(count)
    }

    fn lookahead_for_token(
        &mut self,
        match_char: char,
        if_match: TokenKind,
        no_match: TokenKind,
    ) -> Token {
        if self.advance_if(|c| c == match_char).is_some() {
            self.make_token(if_match)
        } else {
            self.make_token(no_match)
        }
    }

    fn error(&self, msg: ErrorMsg) -> Error {
        format!(
            "Lex error at line {}: {} {}",
            self.line + 1,
            msg,
            self.lexeme_from_range()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        Lexer::new(input)
            .lex_all_sanitised()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn operators() {
        assert_eq!(
            kinds("! != = == + - * / < >"),
            vec![
                TokenKind::BANG,
                TokenKind::BANG_EQUAL,
                TokenKind::EQUAL,
                TokenKind::EQUAL_EQUAL,
                TokenKind::PLUS,
                TokenKind::MINUS,
                TokenKind::STAR,
                TokenKind::SLASH,
                TokenKind::LESS,
                TokenKind::GREATER,
            ]
        );
    }

    #[test]
    fn keywords_and_idents() {
        assert_eq!(
            kinds("var x_1 = fn(a) { return a }"),
            vec![
                TokenKind::VAR,
                TokenKind::IDENT,
                TokenKind::EQUAL,
                TokenKind::FN,
                TokenKind::LPAREN,
                TokenKind::IDENT,
                TokenKind::RPAREN,
                TokenKind::LBRACE,
                TokenKind::RETURN,
                TokenKind::IDENT,
                TokenKind::RBRACE,
            ]
        );
    }

    #[test]
    fn linebreaks_and_comments() {
        let tokens = Lexer::new("1 // one\n2").lex_all_sanitised().unwrap();
        let kinds = tokens.iter().map(|t| t.kind).collect::<Vec<_>>();
        assert_eq!(
            kinds,
            vec![TokenKind::NUMBER, TokenKind::LINEBREAK, TokenKind::NUMBER]
        );
        assert_eq!(tokens[0].line, 0);
        assert_eq!(tokens[2].line, 1);
        assert_eq!(tokens[2].lexeme, "2");
    }

    #[test]
    fn string() {
        let tokens = Lexer::new("\"hello world\"").lex_all().unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::STRING);
        assert_eq!(tokens[0].lexeme, "hello world");
    }

    #[test]
    fn unterminated_string() {
        let errors = Lexer::new("\"hello").lex_all().unwrap_err();
        assert_eq!(
            errors,
            vec![format!(
                "Lex error at line 1: {} hello",
                ErrorMsg::UnterminatedString
            )]
        );
    }

    #[test]
    fn unexpected_char() {
        let errors = Lexer::new("1 @ 2 # 3").lex_all().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors[0],
            format!("Lex error at line 1: {} @", ErrorMsg::UnexpectedChar)
        );
    }

    #[test]
    fn multibyte_ranges() {
        let tokens = Lexer::new("\"héllo\" x").lex_all_sanitised().unwrap();
        assert_eq!(tokens[0].lexeme, "héllo");
        assert_eq!(tokens[1].lexeme, "x");
        assert_eq!(tokens[1].range, TextRange { start: 9, end: 10 });
    }
}
