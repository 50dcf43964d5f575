//! Rekursiver Abstieg über die Token-Liste.
//!
//! Grammatik (Präzedenz aufsteigend):
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('-' | '+') unary | power
//! power   := primary ('^' unary)?
//! primary := number | 'x' | ident '(' args ')' | '(' expr ')'
//! args    := expr (',' expr)*
//! ```

use super::lexer::{Spanned, Token};
use super::{BinaryFunction, Expr, FormulaError, Function};

/// Maximale Schachtelungstiefe (Klammern, Funktionen, Vorzeichen, Potenzen).
pub(super) const MAX_DEPTH: usize = 64;

pub(super) struct Parser<'a> {
    tokens: &'a [Spanned],
    pos: usize,
    source_len: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub(super) fn new(tokens: &'a [Spanned], source_len: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            source_len,
            depth: 0,
        }
    }

    /// Parst den gesamten Token-Strom; Resttokens sind ein Fehler.
    pub(super) fn parse(mut self) -> Result<Expr, FormulaError> {
        if self.tokens.is_empty() {
            return Err(FormulaError::Empty);
        }
        let expr = self.expr()?;
        match self.tokens.get(self.pos) {
            None => Ok(expr),
            Some(Spanned {
                token: Token::RParen,
                offset,
            }) => Err(FormulaError::UnbalancedParen { offset: *offset }),
            Some(spanned) => Err(FormulaError::UnexpectedToken {
                found: describe(&spanned.token),
                offset: spanned.offset,
            }),
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|s| &s.token)
    }

    fn offset(&self) -> usize {
        self.tokens
            .get(self.pos)
            .map_or(self.source_len, |s| s.offset)
    }

    fn advance(&mut self) -> Option<&'a Spanned> {
        let spanned = self.tokens.get(self.pos);
        if spanned.is_some() {
            self.pos += 1;
        }
        spanned
    }

    fn expr(&mut self) -> Result<Expr, FormulaError> {
        let mut lhs = self.term()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => Expr::Add,
                Some(Token::Minus) => Expr::Sub,
                _ => return Ok(lhs),
            };
            self.advance();
            let rhs = self.term()?;
            lhs = op(Box::new(lhs), Box::new(rhs));
        }
    }

    fn term(&mut self) -> Result<Expr, FormulaError> {
        let mut lhs = self.unary()?;
        loop {
            let op = match self.peek() {
                Some(Token::Star) => Expr::Mul,
                Some(Token::Slash) => Expr::Div,
                _ => return Ok(lhs),
            };
            self.advance();
            let rhs = self.unary()?;
            lhs = op(Box::new(lhs), Box::new(rhs));
        }
    }

    fn unary(&mut self) -> Result<Expr, FormulaError> {
        if self.depth >= MAX_DEPTH {
            return Err(FormulaError::TooDeep {
                offset: self.offset(),
            });
        }
        self.depth += 1;
        let result = self.signed();
        self.depth -= 1;
        result
    }

    fn signed(&mut self) -> Result<Expr, FormulaError> {
        match self.peek() {
            Some(Token::Minus) => {
                self.advance();
                Ok(Expr::Neg(Box::new(self.unary()?)))
            }
            Some(Token::Plus) => {
                self.advance();
                self.unary()
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<Expr, FormulaError> {
        let base = self.primary()?;
        if matches!(self.peek(), Some(Token::Caret)) {
            self.advance();
            // Rechtsassoziativ: 2^3^2 = 2^(3^2)
            let exponent = self.unary()?;
            return Ok(Expr::Pow(Box::new(base), Box::new(exponent)));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<Expr, FormulaError> {
        let offset = self.offset();
        let Some(spanned) = self.advance() else {
            return Err(FormulaError::UnexpectedEnd);
        };

        match &spanned.token {
            Token::Number(value) => Ok(Expr::Number(*value)),
            Token::Ident(name) if name == "x" => Ok(Expr::Var),
            Token::Ident(name) => self.call(name, offset),
            Token::LParen => {
                let inner = self.expr()?;
                self.expect_rparen(offset)?;
                Ok(inner)
            }
            other => Err(FormulaError::UnexpectedToken {
                found: describe(other),
                offset,
            }),
        }
    }

    /// Funktionsaufruf; die Stelligkeit hängt vom Namen ab.
    fn call(&mut self, name: &str, offset: usize) -> Result<Expr, FormulaError> {
        let unary = Function::from_name(name);
        let binary = BinaryFunction::from_name(name);
        if unary.is_none() && binary.is_none() {
            return Err(FormulaError::UnknownIdentifier {
                name: name.to_string(),
                offset,
            });
        }

        self.expect_lparen()?;
        let mut args = vec![self.expr()?];
        while matches!(self.peek(), Some(Token::Comma)) {
            self.advance();
            args.push(self.expr()?);
        }
        self.expect_rparen(offset)?;

        let expected = if binary.is_some() { 2 } else { 1 };
        let found = args.len();
        let mut args = args.into_iter().map(Box::new);
        match (unary, binary, args.next(), args.next(), args.next()) {
            (Some(f), _, Some(a), None, _) => Ok(Expr::Call(f, a)),
            (_, Some(f), Some(a), Some(b), None) => Ok(Expr::Call2(f, a, b)),
            _ => Err(FormulaError::ArgumentCount {
                name: name.to_string(),
                expected,
                found,
                offset,
            }),
        }
    }

    fn expect_lparen(&mut self) -> Result<(), FormulaError> {
        let offset = self.offset();
        match self.advance() {
            Some(Spanned {
                token: Token::LParen,
                ..
            }) => Ok(()),
            Some(spanned) => Err(FormulaError::UnexpectedToken {
                found: describe(&spanned.token),
                offset,
            }),
            None => Err(FormulaError::UnexpectedEnd),
        }
    }

    fn expect_rparen(&mut self, open_offset: usize) -> Result<(), FormulaError> {
        match self.peek() {
            Some(Token::RParen) => {
                self.advance();
                Ok(())
            }
            None => Err(FormulaError::UnbalancedParen {
                offset: open_offset,
            }),
            Some(token) => Err(FormulaError::UnexpectedToken {
                found: describe(token),
                offset: self.offset(),
            }),
        }
    }
}

fn describe(token: &Token) -> String {
    match token {
        Token::Number(value) => value.to_string(),
        Token::Ident(name) => name.clone(),
        Token::Plus => "+".into(),
        Token::Minus => "-".into(),
        Token::Star => "*".into(),
        Token::Slash => "/".into(),
        Token::Caret => "^".into(),
        Token::LParen => "(".into(),
        Token::RParen => ")".into(),
        Token::Comma => ",".into(),
    }
}
