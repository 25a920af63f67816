//! Identifier classification.
//!
//! The scanner hands over identifier-shaped runs; the classifier interns
//! them and reads the symbol's reservation tag. A reserved symbol becomes
//! its keyword token, anything else an `Ident`.

use parking_lot::RwLockReadGuard;
use twain_ir::{Keyword, Name, SyntaxMode, TokenKind};

use crate::symbols::{InternError, SymbolTable};

/// Classifies identifiers under one pinned syntax mode.
///
/// Holds the session's mode register for reading, so every token it
/// produces reflects the same mode.
pub struct Classifier<'s> {
    symbols: &'s SymbolTable,
    mode: RwLockReadGuard<'s, SyntaxMode>,
}

impl<'s> Classifier<'s> {
    pub(crate) fn new(symbols: &'s SymbolTable, mode: RwLockReadGuard<'s, SyntaxMode>) -> Self {
        Classifier { symbols, mode }
    }

    /// The mode this classifier observes.
    pub fn mode(&self) -> SyntaxMode {
        *self.mode
    }

    /// Classify an already-interned symbol.
    #[inline]
    pub fn classify_name(&self, name: Name) -> TokenKind {
        self.symbols
            .reservation(name)
            .keyword()
            .map_or(TokenKind::Ident(name), Keyword::token_kind)
    }

    pub fn try_classify(&self, text: &str) -> Result<TokenKind, InternError> {
        Ok(self.classify_name(self.symbols.try_intern(text)?))
    }

    /// Intern `text` and classify it.
    pub fn classify(&self, text: &str) -> TokenKind {
        self.classify_name(self.symbols.intern(text))
    }
}
