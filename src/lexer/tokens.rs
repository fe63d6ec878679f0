use std::fmt::Display;

use crate::Span;

/// Reserved spellings and the token kinds they are reclassified as.
///
/// Matching is exact and case-sensitive, so `NULL` is a keyword while
/// `null` is an ordinary identifier.
pub const RESERVED_WORDS: [(&str, TokenKind); 20] = [
    ("const", TokenKind::Const),
    ("int", TokenKind::Int),
    ("double", TokenKind::Double),
    ("float", TokenKind::Float),
    ("char", TokenKind::Char),
    ("unsigned", TokenKind::Unsigned),
    ("long", TokenKind::Long),
    ("enum", TokenKind::Enum),
    ("struct", TokenKind::Struct),
    ("union", TokenKind::Union),
    ("typedef", TokenKind::Typedef),
    ("return", TokenKind::Return),
    ("do", TokenKind::Do),
    ("while", TokenKind::While),
    ("for", TokenKind::For),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("NULL", TokenKind::Null),
];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Identifier,
    Preprocessor,

    Whitespace,
    Tab,
    CarriageReturn,
    Newline,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Semicolon,
    Comma,
    Dot,
    Caret, // ^
    Tilde,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    ShiftLeft,
    Greater,
    GreaterEquals,
    ShiftRight,

    Or,
    And,
    BitOr,
    BitAnd,

    PlusPlus,
    MinusMinus,
    PlusEquals,
    MinusEquals,
    SlashEquals,
    StarEquals,
    PercentEquals,

    Plus,
    Dash,
    Slash,
    Star,
    Percent,

    // Reserved
    Const,
    Int,
    Double,
    Float,
    Char,
    Unsigned,
    Long,
    Enum,
    Struct,
    Union,
    Typedef,
    Return,
    Do,
    While,
    For,
    If,
    Else,
    True,
    False,
    Null,
}

impl TokenKind {
    pub fn is_keyword(&self) -> bool {
        RESERVED_WORDS.iter().any(|(_, kind)| kind == self)
    }

    pub fn is_layout(&self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::Tab | TokenKind::CarriageReturn | TokenKind::Newline
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {:?}}}", self.kind, self.value)
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    /// One-line summary: the kind, plus the lexeme for tokens whose text
    /// carries information beyond the kind itself.
    pub fn describe(&self) -> String {
        if self.is_one_of_many(&[
            TokenKind::String,
            TokenKind::Identifier,
            TokenKind::Number,
            TokenKind::Preprocessor,
        ]) {
            format!("{} ({})", self.kind, self.value)
        } else {
            format!("{} ()", self.kind)
        }
    }

    pub fn debug(&self) {
        println!("{}", self.describe());
    }
}
