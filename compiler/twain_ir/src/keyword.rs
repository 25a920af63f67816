//! Keyword vocabulary and per-symbol reservation tags.
//!
//! Every keyword of both grammars is a [`Keyword`]. Most are reserved in
//! either grammar; five of them belong to exactly one grammar:
//!
//! | keyword    | reserved in |
//! |------------|-------------|
//! | `function` | classic     |
//! | `end`      | classic     |
//! | `fn`       | alternate   |
//! | `operator` | alternate   |
//! | `nameof`   | alternate   |
//!
//! A symbol's current role is its [`Reservation`]. The lexer reads it on
//! every identifier scan instead of testing membership in a per-mode list.

use crate::{SyntaxMode, TokenKind};

/// A word that some grammar reserves.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Keyword {
    And,
    Break,
    Do,
    Else,
    Elseif,
    End,
    False,
    For,
    Function,
    Goto,
    If,
    In,
    Local,
    Nil,
    Not,
    Or,
    Repeat,
    Return,
    Then,
    True,
    Until,
    While,
    Fn,
    Operator,
    Nameof,
}

impl Keyword {
    /// Every keyword, in pre-interning order.
    pub const ALL: [Keyword; 25] = [
        Keyword::And,
        Keyword::Break,
        Keyword::Do,
        Keyword::Else,
        Keyword::Elseif,
        Keyword::End,
        Keyword::False,
        Keyword::For,
        Keyword::Function,
        Keyword::Goto,
        Keyword::If,
        Keyword::In,
        Keyword::Local,
        Keyword::Nil,
        Keyword::Not,
        Keyword::Or,
        Keyword::Repeat,
        Keyword::Return,
        Keyword::Then,
        Keyword::True,
        Keyword::Until,
        Keyword::While,
        Keyword::Fn,
        Keyword::Operator,
        Keyword::Nameof,
    ];

    /// The keywords whose reservation depends on the active mode.
    pub const MODE_SENSITIVE: [Keyword; 5] = [
        Keyword::Function,
        Keyword::End,
        Keyword::Fn,
        Keyword::Operator,
        Keyword::Nameof,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::And => "and",
            Keyword::Break => "break",
            Keyword::Do => "do",
            Keyword::Else => "else",
            Keyword::Elseif => "elseif",
            Keyword::End => "end",
            Keyword::False => "false",
            Keyword::For => "for",
            Keyword::Function => "function",
            Keyword::Goto => "goto",
            Keyword::If => "if",
            Keyword::In => "in",
            Keyword::Local => "local",
            Keyword::Nil => "nil",
            Keyword::Not => "not",
            Keyword::Or => "or",
            Keyword::Repeat => "repeat",
            Keyword::Return => "return",
            Keyword::Then => "then",
            Keyword::True => "true",
            Keyword::Until => "until",
            Keyword::While => "while",
            Keyword::Fn => "fn",
            Keyword::Operator => "operator",
            Keyword::Nameof => "nameof",
        }
    }

    /// The grammar this keyword belongs to, or `None` if both grammars reserve it.
    pub const fn mode(self) -> Option<SyntaxMode> {
        match self {
            Keyword::Function | Keyword::End => Some(SyntaxMode::Classic),
            Keyword::Fn | Keyword::Operator | Keyword::Nameof => Some(SyntaxMode::Alternate),
            _ => None,
        }
    }

    /// Whether `mode` reserves this keyword.
    #[inline]
    pub const fn is_reserved_in(self, mode: SyntaxMode) -> bool {
        match self.mode() {
            None => true,
            Some(m) => m.as_raw() == mode.as_raw(),
        }
    }

    /// The reservation tag this keyword's symbol carries while `mode` is active.
    #[inline]
    pub const fn reservation_in(self, mode: SyntaxMode) -> Reservation {
        if self.is_reserved_in(mode) {
            Reservation::Keyword(self)
        } else {
            Reservation::Unreserved
        }
    }

    /// Token the parser receives when this keyword is reserved.
    ///
    /// `fn` is delivered as the function token.
    pub const fn token_kind(self) -> TokenKind {
        match self {
            Keyword::And => TokenKind::And,
            Keyword::Break => TokenKind::Break,
            Keyword::Do => TokenKind::Do,
            Keyword::Else => TokenKind::Else,
            Keyword::Elseif => TokenKind::Elseif,
            Keyword::End => TokenKind::End,
            Keyword::False => TokenKind::False,
            Keyword::For => TokenKind::For,
            Keyword::Function | Keyword::Fn => TokenKind::Function,
            Keyword::Goto => TokenKind::Goto,
            Keyword::If => TokenKind::If,
            Keyword::In => TokenKind::In,
            Keyword::Local => TokenKind::Local,
            Keyword::Nil => TokenKind::Nil,
            Keyword::Not => TokenKind::Not,
            Keyword::Or => TokenKind::Or,
            Keyword::Repeat => TokenKind::Repeat,
            Keyword::Return => TokenKind::Return,
            Keyword::Then => TokenKind::Then,
            Keyword::True => TokenKind::True,
            Keyword::Until => TokenKind::Until,
            Keyword::While => TokenKind::While,
            Keyword::Operator => TokenKind::Operator,
            Keyword::Nameof => TokenKind::Nameof,
        }
    }
}

/// Reservation tag carried by every interned symbol.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Reservation {
    /// Lexes as a plain identifier.
    #[default]
    Unreserved,
    /// Lexes as this keyword.
    Keyword(Keyword),
}

impl Reservation {
    #[inline]
    pub const fn is_reserved(self) -> bool {
        matches!(self, Reservation::Keyword(_))
    }

    #[inline]
    pub const fn keyword(self) -> Option<Keyword> {
        match self {
            Reservation::Keyword(kw) => Some(kw),
            Reservation::Unreserved => None,
        }
    }
}
