//! Shared line lexer for the dialect parsers.
//!
//! All five dialects are line-oriented at the granularity this crate
//! cares about, so each parser lexes one trimmed line at a time and
//! walks the tokens through a [`Cursor`]. Lines that fail to lex are
//! reported as skipped by the caller rather than aborting the parse.

use logos::Logos;

/// Token types shared by every dialect grammar.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r]+")]
pub enum Token {
    /// Identifier or keyword.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),

    /// Floating-point literal.
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Float(f64),

    /// Integer literal.
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<u64>().ok())]
    Int(u64),

    /// Single-quoted string (Python register names).
    #[regex(r"'[^']*'", |lex| {
        let s = lex.slice();
        Some(s[1..s.len() - 1].to_string())
    })]
    SingleQuoted(String),

    /// Double-quoted string (QASM include paths).
    #[regex(r#""[^"]*""#, |lex| {
        let s = lex.slice();
        Some(s[1..s.len() - 1].to_string())
    })]
    DoubleQuoted(String),

    #[token("->")]
    Arrow,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    Semi,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token("=")]
    Eq,
    #[token("-")]
    Minus,
    #[token("/")]
    Slash,
    #[token("*")]
    Star,
}

/// A token cursor over a single lexed line.
///
/// All `eat_*` helpers only advance on a match, so grammar branches can
/// probe alternatives without backtracking bookkeeping.
pub struct Cursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl Cursor {
    /// Lex one line. Returns `None` if the line contains characters no
    /// dialect uses, which the parsers treat as a skipped line.
    pub fn lex(line: &str) -> Option<Self> {
        let mut tokens = Vec::new();
        for result in Token::lexer(line) {
            tokens.push(result.ok()?);
        }
        Some(Self { tokens, pos: 0 })
    }

    /// Look at the next token without consuming it.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Consume the next token if it equals `token`.
    pub fn eat(&mut self, token: &Token) -> bool {
        if self.peek() == Some(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume the next token if it is the identifier `name`.
    pub fn eat_ident(&mut self, name: &str) -> bool {
        match self.peek() {
            Some(Token::Ident(s)) if s == name => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    /// Consume and return the next identifier.
    pub fn ident(&mut self) -> Option<String> {
        match self.peek() {
            Some(Token::Ident(s)) => {
                let s = s.clone();
                self.pos += 1;
                Some(s)
            }
            _ => None,
        }
    }

    /// Consume and return the next integer literal.
    pub fn int(&mut self) -> Option<usize> {
        match self.peek() {
            Some(Token::Int(v)) => {
                let v = *v as usize;
                self.pos += 1;
                Some(v)
            }
            _ => None,
        }
    }

    /// Consume and return the next numeric literal (int or float).
    pub fn number(&mut self) -> Option<f64> {
        match self.peek() {
            Some(Token::Float(v)) => {
                let v = *v;
                self.pos += 1;
                Some(v)
            }
            Some(Token::Int(v)) => {
                let v = *v as f64;
                self.pos += 1;
                Some(v)
            }
            _ => None,
        }
    }

    /// Consume a rotation angle expression.
    ///
    /// Accepts plain numerics plus the symbolic forms dialects emit:
    /// `pi`, `pi/2`, `-pi/4`, `PI() / 2.0`, `1.5707963267948966`.
    pub fn angle(&mut self) -> Option<f64> {
        let negated = self.eat(&Token::Minus);
        let base = if self.eat_ident("pi") || self.eat_ident("PI") {
            // Q# writes the constant as a call, `PI()`.
            if self.eat(&Token::LParen) && !self.eat(&Token::RParen) {
                return None;
            }
            std::f64::consts::PI
        } else {
            self.number()?
        };
        let value = if self.eat(&Token::Slash) {
            base / self.number()?
        } else {
            base
        };
        Some(if negated { -value } else { value })
    }

    /// Consume an indexed register reference, `register[i]`.
    pub fn index_ref(&mut self, register: &str) -> Option<usize> {
        if !self.eat_ident(register) || !self.eat(&Token::LBracket) {
            return None;
        }
        let index = self.int()?;
        if !self.eat(&Token::RBracket) {
            return None;
        }
        Some(index)
    }
}
