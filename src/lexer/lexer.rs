use std::rc::Rc;

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_TOKEN,
};

use super::{
    keywords::KeywordTable,
    tokens::{Token, TokenKind},
};

lazy_static! {
    static ref NUMBER_PATTERN: Regex = Regex::new(r"^[0-9]+(\.[0-9]+)?").unwrap();
    static ref IDENTIFIER_TAIL_PATTERN: Regex = Regex::new(r"^[A-Za-z0-9_]*").unwrap();
}

pub struct Lexer {
    keywords: KeywordTable,
    tokens: Vec<Token>,
    source: String,
    start: usize,
    current: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Result<Lexer, Error> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Ok(Lexer {
            keywords: KeywordTable::with_reserved_words()?,
            tokens: vec![],
            source,
            start: 0,
            current: 0,
            file: file_name,
        })
    }

    pub fn advance(&mut self) -> u8 {
        let byte = self.peek();
        self.current += 1;
        byte
    }

    /// Consumes the next byte only if it is `expected`.
    pub fn consume(&mut self, expected: u8) -> bool {
        if self.at_eof() || self.source.as_bytes()[self.current] != expected {
            return false;
        }

        self.current += 1;
        true
    }

    pub fn peek(&self) -> u8 {
        self.source
            .as_bytes()
            .get(self.current)
            .copied()
            .unwrap_or(b'\0')
    }

    pub fn peek_next(&self) -> u8 {
        self.source
            .as_bytes()
            .get(self.current + 1)
            .copied()
            .unwrap_or(b'\0')
    }

    pub fn at_eof(&self) -> bool {
        self.current >= self.source.len()
    }

    pub fn lexeme(&self) -> &str {
        &self.source[self.start..self.current]
    }

    fn position(&self, offset: usize) -> Position {
        Position(offset as u32, Rc::clone(&self.file))
    }

    fn span(&self) -> Span {
        Span {
            start: self.position(self.start),
            end: self.position(self.current),
        }
    }

    fn push(&mut self, kind: TokenKind) -> Result<TokenKind, Error> {
        if self.tokens.try_reserve(1).is_err() {
            return Err(self.allocation_failure("growing the token buffer"));
        }

        let mut value = String::new();
        if value.try_reserve_exact(self.current - self.start).is_err() {
            return Err(self.allocation_failure("copying a lexeme"));
        }
        value.push_str(self.lexeme());

        let token = MK_TOKEN!(kind, value, self.span());
        trace!("{}..{} {}", self.start, self.current, token.describe());
        self.tokens.push(token);

        Ok(kind)
    }

    /// Consumes a second character when it matches, choosing between the
    /// compound and the single-character kind.
    fn either(&mut self, expected: u8, compound: TokenKind, single: TokenKind) -> TokenKind {
        if self.consume(expected) {
            compound
        } else {
            single
        }
    }

    fn scan_token(&mut self) -> Result<TokenKind, Error> {
        self.start = self.current;

        if self.at_eof() {
            return self.push(TokenKind::EOF);
        }

        let kind = match self.advance() {
            b'(' => TokenKind::OpenParen,
            b')' => TokenKind::CloseParen,
            b'{' => TokenKind::OpenCurly,
            b'}' => TokenKind::CloseCurly,
            b'[' => TokenKind::OpenBracket,
            b']' => TokenKind::CloseBracket,
            b';' => TokenKind::Semicolon,
            b',' => TokenKind::Comma,
            b'.' => TokenKind::Dot,
            b'^' => TokenKind::Caret,
            b'~' => TokenKind::Tilde,

            b'-' => {
                if self.consume(b'-') {
                    TokenKind::MinusMinus
                } else {
                    self.either(b'=', TokenKind::MinusEquals, TokenKind::Dash)
                }
            }
            b'+' => {
                if self.consume(b'+') {
                    TokenKind::PlusPlus
                } else {
                    self.either(b'=', TokenKind::PlusEquals, TokenKind::Plus)
                }
            }
            b'<' => {
                if self.consume(b'<') {
                    TokenKind::ShiftLeft
                } else {
                    self.either(b'=', TokenKind::LessEquals, TokenKind::Less)
                }
            }
            b'>' => {
                if self.consume(b'>') {
                    TokenKind::ShiftRight
                } else {
                    self.either(b'=', TokenKind::GreaterEquals, TokenKind::Greater)
                }
            }
            b'*' => self.either(b'=', TokenKind::StarEquals, TokenKind::Star),
            b'%' => self.either(b'=', TokenKind::PercentEquals, TokenKind::Percent),
            b'/' => self.either(b'=', TokenKind::SlashEquals, TokenKind::Slash),
            b'=' => self.either(b'=', TokenKind::Equals, TokenKind::Assignment),
            b'!' => self.either(b'=', TokenKind::NotEquals, TokenKind::Not),
            b'&' => self.either(b'&', TokenKind::And, TokenKind::BitAnd),
            b'|' => self.either(b'|', TokenKind::Or, TokenKind::BitOr),

            b' ' => {
                while self.peek() == b' ' {
                    self.advance();
                }
                TokenKind::Whitespace
            }
            b'\r' => TokenKind::CarriageReturn,
            b'\t' => TokenKind::Tab,
            b'\n' => TokenKind::Newline,

            // An embedded NUL ends the input just like the end of the buffer.
            b'\0' => TokenKind::EOF,

            b'"' => self.string()?,
            b'#' => self.preprocessor(),
            c if c.is_ascii_digit() => self.number(),
            c if c.is_ascii_alphabetic() => self.identifier(),

            _ => return Err(self.unexpected_character()),
        };

        self.push(kind)
    }

    /// Scans up to and including the closing quote. Backslashes get no
    /// special treatment, so `\"` closes the literal.
    fn string(&mut self) -> Result<TokenKind, Error> {
        while self.peek() != b'"' {
            if self.at_eof() || self.peek() == b'\n' {
                return Err(Error::new(
                    ErrorImpl::UnterminatedString,
                    self.position(self.start),
                ));
            }
            self.advance();
        }

        self.advance();
        Ok(TokenKind::String)
    }

    /// Everything up to the next space belongs to the directive, arguments
    /// and line breaks included.
    fn preprocessor(&mut self) -> TokenKind {
        while !self.at_eof() && self.peek() != b' ' {
            self.advance();
        }

        TokenKind::Preprocessor
    }

    fn number(&mut self) -> TokenKind {
        if let Some(matched) = NUMBER_PATTERN.find(&self.source[self.start..]) {
            self.current = self.start + matched.end();
        }

        TokenKind::Number
    }

    fn identifier(&mut self) -> TokenKind {
        if let Some(matched) = IDENTIFIER_TAIL_PATTERN.find(&self.source[self.current..]) {
            self.current += matched.end();
        }

        self.keywords
            .lookup(self.lexeme())
            .unwrap_or(TokenKind::Identifier)
    }

    fn unexpected_character(&self) -> Error {
        let character = self.source[self.start..].chars().next().unwrap_or('\0');
        Error::new(
            ErrorImpl::UnexpectedCharacter { character },
            self.position(self.start),
        )
    }

    fn allocation_failure(&self, context: &'static str) -> Error {
        Error::new(
            ErrorImpl::AllocationFailure { context },
            self.position(self.current),
        )
    }
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file)?;
    debug!("tokenizing {} ({} bytes)", lex.file, lex.source.len());

    loop {
        match lex.scan_token() {
            Ok(TokenKind::EOF) => break,
            Ok(_) => {}
            Err(error) => {
                debug!("tokenizing {} failed: {}", lex.file, error);
                return Err(error);
            }
        }
    }

    debug!("tokenized {} into {} tokens", lex.file, lex.tokens.len());
    Ok(lex.tokens)
}
