use std::{collections::HashMap, iter::Peekable, slice::Iter};

use crate::{
    ast::{BinOp, Block, Expr, Ident, Program, Stmt, UnaryOp},
    error::{Error, ErrorMsg},
    token::{Token, TokenKind},
};

/// Parses an expression starting at the token that was just consumed.
pub type PrefixFn<'a> = fn(&mut Parser<'a>, &'a Token) -> Result<Expr, Error>;
/// Parses the rest of an expression whose operator token was just consumed,
/// given the expression to its left.
pub type InfixFn<'a> = fn(&mut Parser<'a>, &'a Token, Expr) -> Result<Expr, Error>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    Equals,
    Compare,
    Sum,
    Product,
    Prefix,
    Call,
}

#[derive(Debug)]
pub struct Parser<'a> {
    stream: Peekable<Iter<'a, Token>>,
    prefix_fns: HashMap<TokenKind, PrefixFn<'a>>,
    infix_fns: HashMap<TokenKind, InfixFn<'a>>,
    precedences: HashMap<TokenKind, Precedence>,
    // Line breaks are insignificant while this is non-zero
    paren_depth: usize,
    // Braces consumed but not yet closed
    brace_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(stream: &'a [Token]) -> Self {
        let mut parser = Self {
            stream: stream.iter().peekable(),
            prefix_fns: HashMap::default(),
            infix_fns: HashMap::default(),
            precedences: HashMap::default(),
            paren_depth: 0,
            brace_depth: 0,
        };

        parser.register_prefix(TokenKind::IDENT, Self::parse_ident);
        parser.register_prefix(TokenKind::NUMBER, Self::parse_integer);
        parser.register_prefix(TokenKind::STRING, Self::parse_string);
        parser.register_prefix(TokenKind::TRUE, Self::parse_boolean);
        parser.register_prefix(TokenKind::FALSE, Self::parse_boolean);
        parser.register_prefix(TokenKind::LPAREN, Self::parse_group);
        parser.register_prefix(TokenKind::BANG, Self::parse_prefix);
        parser.register_prefix(TokenKind::MINUS, Self::parse_prefix);
        parser.register_prefix(TokenKind::IF, Self::parse_if);
        parser.register_prefix(TokenKind::FN, Self::parse_function_literal);
        parser.register_prefix(TokenKind::FOR, Self::parse_for);

        parser.register_infix(TokenKind::EQUAL_EQUAL, Precedence::Equals, Self::parse_infix);
        parser.register_infix(TokenKind::BANG_EQUAL, Precedence::Equals, Self::parse_infix);
        parser.register_infix(TokenKind::LESS, Precedence::Compare, Self::parse_infix);
        parser.register_infix(TokenKind::GREATER, Precedence::Compare, Self::parse_infix);
        parser.register_infix(TokenKind::PLUS, Precedence::Sum, Self::parse_infix);
        parser.register_infix(TokenKind::MINUS, Precedence::Sum, Self::parse_infix);
        parser.register_infix(TokenKind::STAR, Precedence::Product, Self::parse_infix);
        parser.register_infix(TokenKind::SLASH, Precedence::Product, Self::parse_infix);
        parser.register_infix(TokenKind::LPAREN, Precedence::Call, Self::parse_call);

        parser
    }

    pub fn register_prefix(&mut self, kind: TokenKind, prefix: PrefixFn<'a>) {
        self.prefix_fns.insert(kind, prefix);
    }

    pub fn register_infix(&mut self, kind: TokenKind, precedence: Precedence, infix: InfixFn<'a>) {
        self.precedences.insert(kind, precedence);
        self.infix_fns.insert(kind, infix);
    }

    /// Tokens without an entry bind with the lowest precedence, which
    /// ends any infix continuation.
    pub fn precedence(&self, kind: TokenKind) -> Precedence {
        self.precedences
            .get(&kind)
            .copied()
            .unwrap_or(Precedence::Lowest)
    }

    pub fn parse_all(mut self) -> Result<Program, Vec<Error>> {
        let mut statements: Vec<Stmt> = Vec::default();
        let mut errors: Vec<Error> = Vec::default();
        while self.stream.peek().is_some() {
            match self.parse_statement() {
                Ok(Some(stmt)) => statements.push(stmt),
                Ok(None) => (),
                Err(e) => {
                    errors.push(e);
                    self.sync();
                }
            }
        }

        errors.is_empty().then(|| Program { statements }).ok_or(errors)
    }

    /// Returns `None` for tokens that only separate statements.
    pub fn parse_statement(&mut self) -> Result<Option<Stmt>, Error> {
        let Some(t) = self.peek() else {
            return Err(format!("Parse error: {}", ErrorMsg::EndOfStream));
        };
        let stmt = match t.kind {
            TokenKind::LINEBREAK | TokenKind::SEMICOLON => {
                self.advance();
                return Ok(None);
            }
            TokenKind::VAR => self.parse_var_stmt(),
            TokenKind::RETURN => self.parse_return_stmt(),
            TokenKind::FN if self.nth_is(1, TokenKind::IDENT) => self.parse_function_stmt(),
            _ => self.parse_expr_stmt(),
        }?;
        self.advance_if(|t| t.kind == TokenKind::SEMICOLON);

        Ok(Some(stmt))
    }

    fn parse_var_stmt(&mut self) -> Result<Stmt, Error> {
        // Consume the `var` keyword
        self.advance();
        let ident = self.advance_or_err(TokenKind::IDENT, ErrorMsg::InvalidIdent)?;
        self.advance_or_err(TokenKind::EQUAL, ErrorMsg::MissingEqual)?;
        let value = self.parse_expression(Precedence::Lowest)?;

        Ok(Stmt::Var {
            ident: Ident::new(ident.lexeme.clone()),
            value,
        })
    }

    fn parse_return_stmt(&mut self) -> Result<Stmt, Error> {
        // Consume the `return` keyword
        self.advance();
        Ok(Stmt::Return(self.parse_expression(Precedence::Lowest)?))
    }

    fn parse_function_stmt(&mut self) -> Result<Stmt, Error> {
        // Consume the `fn` keyword
        self.advance();
        let ident = self.advance_or_err(TokenKind::IDENT, ErrorMsg::InvalidIdent)?;
        let params = self.parse_params()?;
        let body = self.parse_block()?;

        Ok(Stmt::Function {
            ident: Ident::new(ident.lexeme.clone()),
            params,
            body,
        })
    }

    fn parse_expr_stmt(&mut self) -> Result<Stmt, Error> {
        Ok(Stmt::Expr(self.parse_expression(Precedence::Lowest)?))
    }

    fn parse_block(&mut self) -> Result<Block, Error> {
        self.skip_linebreaks_before(TokenKind::LBRACE);
        self.advance_or_err(TokenKind::LBRACE, ErrorMsg::MissingOpeningBrace)?;
        // Line breaks separate statements again inside a block,
        // even when the block itself sits inside parentheses
        let depth = std::mem::take(&mut self.paren_depth);
        let statements = self.parse_block_body();
        self.paren_depth = depth;

        Ok(Block {
            statements: statements?,
        })
    }

    fn parse_block_body(&mut self) -> Result<Vec<Stmt>, Error> {
        let mut statements = Vec::default();
        loop {
            match self.peek() {
                Some(t) if t.kind == TokenKind::RBRACE => {
                    // Consume the closing brace
                    self.advance();
                    return Ok(statements);
                }
                Some(_) => {
                    if let Some(stmt) = self.parse_statement()? {
                        statements.push(stmt);
                    }
                }
                None => return Err(Self::eof_error(ErrorMsg::MissingClosingBrace)),
            }
        }
    }

    fn parse_params(&mut self) -> Result<Vec<Ident>, Error> {
        self.advance_or_err(TokenKind::LPAREN, ErrorMsg::MissingOpeningParen)?;
        self.nested(|p| {
            let mut params = vec![];
            if p.advance_if(|t| t.kind == TokenKind::RPAREN).is_some() {
                return Ok(params);
            }
            loop {
                let param = p.advance_or_err(TokenKind::IDENT, ErrorMsg::InvalidIdent)?;
                params.push(Ident::new(param.lexeme.clone()));
                if p.advance_if(|t| t.kind == TokenKind::COMMA).is_none() {
                    break;
                }
            }
            p.advance_or_err(TokenKind::RPAREN, ErrorMsg::MissingClosingParen)?;
            Ok(params)
        })
    }

    pub fn parse_expression(&mut self, precedence: Precedence) -> Result<Expr, Error> {
        let Some(token) = self.advance() else {
            return Err(Self::eof_error(ErrorMsg::ExpectedExpression));
        };
        let Some(prefix) = self.prefix_fns.get(&token.kind).copied() else {
            return Err(Self::error(token, ErrorMsg::NoPrefixHandler));
        };
        let mut expr = prefix(self, token)?;

        while let Some(next) = self.peek() {
            if next.kind == TokenKind::SEMICOLON || precedence >= self.precedence(next.kind) {
                break;
            }
            let Some(infix) = self.infix_fns.get(&next.kind).copied() else {
                break;
            };
            // Consume the operator
            self.advance();
            expr = infix(self, next, expr)?;
        }

        Ok(expr)
    }

    fn parse_ident(&mut self, token: &'a Token) -> Result<Expr, Error> {
        Ok(Expr::Ident(Ident::new(token.lexeme.clone())))
    }

    fn parse_integer(&mut self, token: &'a Token) -> Result<Expr, Error> {
        token
            .lexeme
            .parse()
            .map(Expr::Integer)
            .map_err(|_| Self::error(token, ErrorMsg::InvalidInteger))
    }

    fn parse_string(&mut self, token: &'a Token) -> Result<Expr, Error> {
        Ok(Expr::Str(token.lexeme.clone()))
    }

    fn parse_boolean(&mut self, token: &'a Token) -> Result<Expr, Error> {
        Ok(Expr::Boolean(token.kind == TokenKind::TRUE))
    }

    fn parse_group(&mut self, _: &'a Token) -> Result<Expr, Error> {
        self.nested(|p| {
            let expr = p.parse_expression(Precedence::Lowest)?;
            p.advance_or_err(TokenKind::RPAREN, ErrorMsg::MissingClosingParen)?;
            Ok(expr)
        })
    }

    fn parse_prefix(&mut self, token: &'a Token) -> Result<Expr, Error> {
        let op = UnaryOp::from_token(token.kind)
            .ok_or_else(|| Self::error(token, ErrorMsg::NoPrefixHandler))?;
        let rhs = self.parse_expression(Precedence::Prefix)?;

        Ok(Expr::Prefix {
            op,
            rhs: Box::new(rhs),
        })
    }

    fn parse_if(&mut self, _: &'a Token) -> Result<Expr, Error> {
        let condition = self.parse_expression(Precedence::Lowest)?;
        let consequence = self.parse_block()?;
        let alternative = if self.skip_linebreaks_before(TokenKind::ELSE) {
            // Consume the `else` keyword
            self.advance();
            match self.advance_if(|t| t.kind == TokenKind::IF) {
                // `else if` becomes an alternative holding the nested conditional
                Some(t) => Some(Block {
                    statements: vec![Stmt::Expr(self.parse_if(t)?)],
                }),
                None => Some(self.parse_block()?),
            }
        } else {
            None
        };

        Ok(Expr::If {
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }

    fn parse_function_literal(&mut self, _: &'a Token) -> Result<Expr, Error> {
        let params = self.parse_params()?;
        let body = self.parse_block()?;

        Ok(Expr::Function { params, body })
    }

    fn parse_for(&mut self, _: &'a Token) -> Result<Expr, Error> {
        let condition = self.parse_expression(Precedence::Lowest)?;
        let body = self.parse_block()?;

        Ok(Expr::For {
            condition: Box::new(condition),
            body,
        })
    }

    fn parse_infix(&mut self, token: &'a Token, lhs: Expr) -> Result<Expr, Error> {
        let op = BinOp::from_token(token.kind)
            .ok_or_else(|| Self::error(token, ErrorMsg::NoInfixHandler))?;
        // Binding the right side at the operator's own precedence
        // makes same-precedence operators associate to the left
        let rhs = self.parse_expression(self.precedence(token.kind))?;

        Ok(Expr::Infix {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        })
    }

    fn parse_call(&mut self, _: &'a Token, func: Expr) -> Result<Expr, Error> {
        let args = self.nested(|p| {
            let mut args = vec![];
            if p.advance_if(|t| t.kind == TokenKind::RPAREN).is_some() {
                return Ok(args);
            }
            loop {
                args.push(p.parse_expression(Precedence::Lowest)?);
                if p.advance_if(|t| t.kind == TokenKind::COMMA).is_none() {
                    break;
                }
            }
            p.advance_or_err(TokenKind::RPAREN, ErrorMsg::MissingClosingParen)?;
            Ok(args)
        })?;

        Ok(Expr::Call {
            func: Box::new(func),
            args,
        })
    }

    fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        self.paren_depth += 1;
        let result = parse(self);
        self.paren_depth -= 1;
        result
    }

    fn peek(&mut self) -> Option<&'a Token> {
        if self.paren_depth > 0 {
            while self
                .stream
                .next_if(|t| t.kind == TokenKind::LINEBREAK)
                .is_some()
            {}
        }
        self.stream.peek().copied()
    }

    fn nth_is(&self, n: usize, kind: TokenKind) -> bool {
        self.stream.clone().nth(n).is_some_and(|t| t.kind == kind)
    }

    /// Consumes any line breaks, but only if the first token after
    /// them is of the given kind.
    fn skip_linebreaks_before(&mut self, kind: TokenKind) -> bool {
        let found = self
            .stream
            .clone()
            .find(|t| t.kind != TokenKind::LINEBREAK)
            .is_some_and(|t| t.kind == kind);
        if found {
            while self
                .stream
                .next_if(|t| t.kind == TokenKind::LINEBREAK)
                .is_some()
            {}
        }
        found
    }

    fn advance(&mut self) -> Option<&'a Token> {
        self.peek();
        let token = self.stream.next()?;
        match token.kind {
            TokenKind::LBRACE => self.brace_depth += 1,
            TokenKind::RBRACE => self.brace_depth = self.brace_depth.saturating_sub(1),
            _ => (),
        }
        Some(token)
    }

    fn advance_if<F>(&mut self, cond: F) -> Option<&'a Token>
    where
        F: FnOnce(&Token) -> bool,
    {
        if self.peek().filter(|&t| cond(t)).is_some() {
            self.advance()
        } else {
            None
        }
    }

    fn advance_or_err(&mut self, kind: TokenKind, msg: ErrorMsg) -> Result<&'a Token, Error> {
        match self.peek() {
            Some(t) if t.kind == kind => {
                self.advance();
                Ok(t)
            }
            Some(t) => Err(Self::error(t, msg)),
            None => Err(Self::eof_error(msg)),
        }
    }

    /// Skips the rest of a failed statement: past the braces it left open,
    /// then up to and including the next separator, or up to the keyword
    /// that starts the next statement.
    fn sync(&mut self) {
        while self.brace_depth > 0 && self.advance().is_some() {}
        self.brace_depth = 0;
        while let Some(t) = self.stream.next_if(|t| {
            !matches!(
                t.kind,
                TokenKind::VAR | TokenKind::FN | TokenKind::RETURN | TokenKind::FOR | TokenKind::IF
            )
        }) {
            if matches!(t.kind, TokenKind::SEMICOLON | TokenKind::LINEBREAK) {
                return;
            }
        }
    }

    fn error(token: &Token, msg: ErrorMsg) -> Error {
        format!("Parse error at line {}: {} {}", token.line + 1, msg, token)
    }

    fn eof_error(msg: ErrorMsg) -> Error {
        format!("Parse error: {} {}", msg, ErrorMsg::EndOfStream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lex::Lexer;

    fn parse(input: &str) -> Result<Program, Vec<Error>> {
        let tokens = Lexer::new(input).lex_all_sanitised().unwrap();
        Parser::new(&tokens).parse_all()
    }

    fn parse_test(input: &str, expected: Program) {
        assert_eq!(parse(input).unwrap(), expected);
    }

    fn parse_err_test(input: &str, expected: &str) {
        let errors = parse(input).unwrap_err();
        assert_eq!(errors.first().unwrap(), expected);
    }

    fn render_test(input: &str, expected: &str) {
        let program = parse(input).unwrap();
        assert_eq!(program.statements.len(), 1, "{input}");
        let Stmt::Expr(expr) = &program.statements[0] else {
            panic!("expected an expression statement for {input}");
        };
        assert_eq!(expr.to_string(), expected, "{input}");
    }

    fn ident(name: &str) -> Expr {
        Expr::Ident(Ident::new(name))
    }

    #[test]
    fn var_stmt() {
        parse_test(
            "var x = 42",
            Program {
                statements: vec![Stmt::Var {
                    ident: Ident::new("x"),
                    value: Expr::Integer(42),
                }],
            },
        );
    }

    #[test]
    fn return_stmt() {
        parse_test(
            "return x;",
            Program {
                statements: vec![Stmt::Return(ident("x"))],
            },
        );
    }

    #[test]
    fn function_stmt() {
        parse_test(
            "fn add(a, b) {\n  return a + b\n}",
            Program {
                statements: vec![Stmt::Function {
                    ident: Ident::new("add"),
                    params: vec![Ident::new("a"), Ident::new("b")],
                    body: Block {
                        statements: vec![Stmt::Return(Expr::Infix {
                            lhs: Box::new(ident("a")),
                            op: BinOp::Plus,
                            rhs: Box::new(ident("b")),
                        })],
                    },
                }],
            },
        );
    }

    #[test]
    fn anonymous_function() {
        parse_test(
            "fn() { 1 }",
            Program {
                statements: vec![Stmt::Expr(Expr::Function {
                    params: vec![],
                    body: Block {
                        statements: vec![Stmt::Expr(Expr::Integer(1))],
                    },
                })],
            },
        );
    }

    #[test]
    fn literals() {
        parse_test(
            "\"hi\"; true; false; 7",
            Program {
                statements: vec![
                    Stmt::Expr(Expr::Str("hi".to_owned())),
                    Stmt::Expr(Expr::Boolean(true)),
                    Stmt::Expr(Expr::Boolean(false)),
                    Stmt::Expr(Expr::Integer(7)),
                ],
            },
        );
    }

    #[test]
    fn precedence() {
        let cases = [
            ("1 + 2 * 3", "(1 + (2 * 3))"),
            ("(1 + 2) * 3", "((1 + 2) * 3)"),
            ("8 - 4 - 2", "((8 - 4) - 2)"),
            ("8 / 4 * 2", "((8 / 4) * 2)"),
            ("-a * b", "((-a) * b)"),
            ("!-a", "(!(-a))"),
            ("a + b / c > d == true", "(((a + (b / c)) > d) == true)"),
            ("1 < 2 != false", "((1 < 2) != false)"),
            ("-f(x)", "(-f(x))"),
            ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
            ("add(a, b)(c)", "add(a, b)(c)"),
        ];
        for (input, expected) in cases {
            render_test(input, expected);
        }
    }

    #[test]
    fn function_call() {
        let program = parse("new_function(x, y + 1)").unwrap();
        assert_eq!(
            program.statements,
            vec![Stmt::Expr(Expr::Call {
                func: Box::new(ident("new_function")),
                args: vec![
                    ident("x"),
                    Expr::Infix {
                        lhs: Box::new(ident("y")),
                        op: BinOp::Plus,
                        rhs: Box::new(Expr::Integer(1)),
                    },
                ],
            })]
        );
        render_test("new_function(x * (4 + 33), y + 1)", "new_function((x * (4 + 33)), (y + 1))");
    }

    #[test]
    fn if_expr() {
        render_test("if x < y { x } else { y }", "if (x < y) { x; } else { y; }");
        render_test("if (x) { 1 }", "if x { 1; }");
        render_test(
            "if a { 1 } else if b { 2 } else { 3 }",
            "if a { 1; } else { if b { 2; } else { 3; }; }",
        );
        render_test("if a {\n 1\n}\nelse {\n 2\n}", "if a { 1; } else { 2; }");
    }

    #[test]
    fn linebreak_before_brace() {
        render_test("if a\n{ 1 }\nelse\n{ 2 }", "if a { 1; } else { 2; }");
        render_test("for a\n{ 1 }", "for a { 1; }");
        let program = parse("fn f()\n{\n  1\n}").unwrap();
        assert_eq!(program.statements.len(), 1);
    }

    #[test]
    fn for_expr() {
        render_test(
            "for i < 3 {\n  var i = i + 1\n}",
            "for (i < 3) { var i = (i + 1); }",
        );
    }

    #[test]
    fn statement_separators() {
        let program = parse("var a = 1\n\nvar b = 2; a + b;\n").unwrap();
        assert_eq!(program.statements.len(), 3);
        let program = parse("1\n-1").unwrap();
        assert_eq!(program.statements.len(), 2);
    }

    #[test]
    fn linebreaks_inside_parens() {
        render_test("add(1,\n  2)", "add(1, 2)");
        render_test("(1 +\n 2)", "(1 + 2)");
        render_test(
            "apply(fn(x) {\n  var y = x\n  y\n}, 2)",
            "apply(fn(x) { var y = x; y; }, 2)",
        );
    }

    #[test]
    fn custom_prefix_handler() {
        let tokens = Lexer::new("\"shout\"").lex_all_sanitised().unwrap();
        let mut parser = Parser::new(&tokens);
        parser.register_prefix(TokenKind::STRING, |_, t| {
            Ok(Expr::Str(t.lexeme.to_uppercase()))
        });
        let program = parser.parse_all().unwrap();
        assert_eq!(
            program.statements,
            vec![Stmt::Expr(Expr::Str("SHOUT".to_owned()))]
        );
    }

    #[test]
    fn missing_closing_paren() {
        parse_err_test(
            "(1 + 2 * 3;",
            format!("Parse error at line 1: {} ;", ErrorMsg::MissingClosingParen).as_str(),
        );
        parse_err_test(
            "add(1, 2",
            format!(
                "Parse error: {} end of stream",
                ErrorMsg::MissingClosingParen
            )
            .as_str(),
        );
    }

    #[test]
    fn missing_closing_brace() {
        parse_err_test(
            "fn f() { a",
            format!(
                "Parse error: {} end of stream",
                ErrorMsg::MissingClosingBrace
            )
            .as_str(),
        );
    }

    #[test]
    fn no_prefix_handler() {
        parse_err_test(
            "1 + *",
            format!("Parse error at line 1: {} *", ErrorMsg::NoPrefixHandler).as_str(),
        );
        parse_err_test(
            "1 +",
            format!(
                "Parse error: {} end of stream",
                ErrorMsg::ExpectedExpression
            )
            .as_str(),
        );
    }

    #[test]
    fn return_needs_operand() {
        parse_err_test(
            "fn f() {\n  return\n}",
            format!(
                "Parse error at line 2: {} line break",
                ErrorMsg::NoPrefixHandler
            )
            .as_str(),
        );
    }

    #[test]
    fn invalid_integer() {
        parse_err_test(
            "99999999999999999999",
            format!(
                "Parse error at line 1: {} 99999999999999999999",
                ErrorMsg::InvalidInteger
            )
            .as_str(),
        );
    }

    #[test]
    fn error_inside_block_skips_to_its_closing_brace() {
        let errors = parse("fn f() {\n  var = 1\n  var y = 2\n}\nvar z = 3").unwrap_err();
        assert_eq!(
            errors,
            vec![format!("Parse error at line 2: {} =", ErrorMsg::InvalidIdent)]
        );

        let errors = parse("fn f() {\n  if x {\n    1 +\n  }\n  2\n}\nvar = 3").unwrap_err();
        assert_eq!(
            errors,
            vec![
                format!("Parse error at line 3: {} line break", ErrorMsg::NoPrefixHandler),
                format!("Parse error at line 7: {} =", ErrorMsg::InvalidIdent),
            ]
        );

        let errors = parse("var f = fn() { 1 + }\nvar = 2").unwrap_err();
        assert_eq!(
            errors,
            vec![
                format!("Parse error at line 1: {} }}", ErrorMsg::NoPrefixHandler),
                format!("Parse error at line 2: {} =", ErrorMsg::InvalidIdent),
            ]
        );
    }

    #[test]
    fn collects_multiple_errors() {
        let errors = parse("var = 1\nvar y = )\nvar z = 3").unwrap_err();
        assert_eq!(
            errors,
            vec![
                format!("Parse error at line 1: {} =", ErrorMsg::InvalidIdent),
                format!("Parse error at line 2: {} )", ErrorMsg::NoPrefixHandler),
            ]
        );
    }
}
