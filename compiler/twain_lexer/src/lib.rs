//! Twain lexer session core.
//!
//! One [`Session`] serves two surface grammars of the same language. The
//! grammars differ only in which identifiers are keywords: classic reserves
//! `function` and `end`, alternate reserves `fn`, `operator` and `nameof`.
//! Switching grammars retags those five symbols in place; nothing is
//! re-interned and no other keyword changes.
//!
//! ```
//! use twain_ir::{SyntaxMode, TokenKind};
//! use twain_lexer::Session;
//!
//! let session = Session::new();
//! assert!(session.is_reserved("end"));
//!
//! session.set_mode(SyntaxMode::Alternate);
//! assert!(!session.is_reserved("end"));
//! assert_eq!(session.classify("fn"), TokenKind::Function);
//! ```
//!
//! The character scanner and the parser are outside this crate; they feed
//! identifier text into a [`Classifier`] and consume the resulting tokens.

mod classify;
mod session;
mod symbols;

pub use classify::Classifier;
pub use session::{Session, SessionConfig, SharedSession};
pub use symbols::{InternError, SymbolTable};
