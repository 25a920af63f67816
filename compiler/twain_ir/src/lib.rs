//! Twain IR - shared lexer vocabulary
//!
//! This crate contains the plain data types the lexer session and the parser
//! agree on:
//! - `Name` for interned symbols
//! - `Keyword` and the per-symbol `Reservation` tag
//! - `TokenKind` for classified identifiers
//! - `SyntaxMode` for the active surface grammar
//!
//! Nothing here owns state. The session that mutates reservation tags lives
//! in `twain_lexer`.

mod keyword;
mod mode;
mod name;
mod token;

pub use keyword::{Keyword, Reservation};
pub use mode::{ModeError, SyntaxMode};
pub use name::Name;
pub use token::TokenKind;
