//! Token kinds produced by identifier classification.
//!
//! Only the identifier-shaped part of the token stream lives here: keywords
//! and plain names. Literals and punctuation belong to the scanner.

use std::fmt;

use crate::Name;

/// Token kind for an identifier-shaped character run.
///
/// There is no `Fn` variant: in the alternate grammar `fn` reuses the
/// function-definition production, so it is delivered as [`TokenKind::Function`].
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// Plain identifier (interned)
    Ident(Name),

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

    // Alternate grammar
    Operator,
    Nameof,
}

impl TokenKind {
    #[inline]
    pub const fn is_keyword(&self) -> bool {
        !matches!(self, TokenKind::Ident(_))
    }

    /// The interned name of a plain identifier.
    #[inline]
    pub const fn ident(&self) -> Option<Name> {
        match self {
            TokenKind::Ident(name) => Some(*name),
            _ => None,
        }
    }

    /// Name used in diagnostics.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Ident(_) => "identifier",
            TokenKind::And => "and",
            TokenKind::Break => "break",
            TokenKind::Do => "do",
            TokenKind::Else => "else",
            TokenKind::Elseif => "elseif",
            TokenKind::End => "end",
            TokenKind::False => "false",
            TokenKind::For => "for",
            TokenKind::Function => "function",
            TokenKind::Goto => "goto",
            TokenKind::If => "if",
            TokenKind::In => "in",
            TokenKind::Local => "local",
            TokenKind::Nil => "nil",
            TokenKind::Not => "not",
            TokenKind::Or => "or",
            TokenKind::Repeat => "repeat",
            TokenKind::Return => "return",
            TokenKind::Then => "then",
            TokenKind::True => "true",
            TokenKind::Until => "until",
            TokenKind::While => "while",
            TokenKind::Operator => "operator",
            TokenKind::Nameof => "nameof",
        }
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ident(name) => write!(f, "Ident({name:?})"),
            other => write!(f, "{}", other.display_name()),
        }
    }
}
