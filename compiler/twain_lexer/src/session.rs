//! Lexing session: symbol table plus the syntax-mode register.
//!
//! The register lives behind a `RwLock`. [`Session::set_mode`] takes the
//! write side for the whole retag, and every [`Classifier`] holds the read
//! side, so a classifier never sees the register and the five mode-sensitive
//! tags disagree. Lock order is always register, then symbol shard.
//!
//! Every read side is taken recursively, so a thread that already holds a
//! `Classifier` can classify and query again even while another thread is
//! parked in `set_mode`. A thread that holds a `Classifier` must not call
//! `set_mode` on the same session: the write lock would wait on its own read
//! guard. Switch modes between parses.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, trace, warn};
use twain_ir::{Keyword, ModeError, Name, Reservation, SyntaxMode, TokenKind};

use crate::classify::Classifier;
use crate::symbols::SymbolTable;

/// Session construction options.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Mode the register holds before the first `set_mode`.
    pub initial_mode: SyntaxMode,
}

impl SessionConfig {
    #[must_use]
    pub fn with_initial_mode(mut self, mode: SyntaxMode) -> Self {
        self.initial_mode = mode;
        self
    }
}

/// One lexing session.
///
/// Owns the symbol table shared by lexer and parser, and the register that
/// selects which grammar's keywords are reserved.
pub struct Session {
    symbols: SymbolTable,
    mode: RwLock<SyntaxMode>,
    /// Pre-interned symbols whose tag depends on the mode.
    mode_symbols: [(Keyword, Name); 5],
}

impl Session {
    /// Create a session in classic mode.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    pub fn with_mode(mode: SyntaxMode) -> Self {
        Self::with_config(SessionConfig::default().with_initial_mode(mode))
    }

    pub fn with_config(config: SessionConfig) -> Self {
        let symbols = SymbolTable::new();
        for kw in Keyword::ALL {
            let name = symbols.intern(kw.as_str());
            if kw.mode().is_none() {
                symbols.set_reservation(name, Reservation::Keyword(kw));
            }
        }
        let mode_symbols = Keyword::MODE_SENSITIVE.map(|kw| (kw, symbols.intern(kw.as_str())));

        let session = Session {
            symbols,
            mode: RwLock::new(config.initial_mode),
            mode_symbols,
        };
        // Not shared yet, so no register lock is needed.
        session.retag(config.initial_mode);
        debug!(mode = %config.initial_mode, "session created");
        session
    }

    /// Write the five mode-sensitive tags for `mode`.
    fn retag(&self, mode: SyntaxMode) {
        for &(kw, name) in &self.mode_symbols {
            self.symbols.set_reservation(name, kw.reservation_in(mode));
        }
    }

    /// Current syntax mode.
    pub fn get_mode(&self) -> SyntaxMode {
        // Recursive read: callable while this thread holds a classifier.
        *self.mode.read_recursive()
    }

    /// Current syntax mode as the host-facing raw value.
    pub fn mode_value(&self) -> u32 {
        self.get_mode().as_raw()
    }

    /// Switch the session to `target`.
    ///
    /// No-op when `target` is already active. Otherwise retags `function`,
    /// `end`, `fn`, `operator` and `nameof` and updates the register, all
    /// under the register's write lock.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn set_mode(&self, target: SyntaxMode) {
        let mut register = self.mode.write();
        if *register == target {
            trace!("syntax mode unchanged");
            return;
        }
        self.retag(target);
        *register = target;
        debug!(from = %target.other(), to = %target, "syntax mode switched");
    }

    /// Switch modes from a raw host value (`0` classic, `1` alternate).
    ///
    /// Out-of-range values are rejected before any state is touched.
    pub fn set_mode_value(&self, value: u32) -> Result<(), ModeError> {
        let target = SyntaxMode::try_from(value).inspect_err(|err| {
            warn!(value, %err, "rejected syntax mode");
        })?;
        self.set_mode(target);
        Ok(())
    }

    /// The session's symbol table.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Current reservation of `text`. Text that was never interned is unreserved.
    pub fn reservation(&self, text: &str) -> Reservation {
        let _register = self.mode.read_recursive();
        self.symbols
            .get(text)
            .map_or(Reservation::Unreserved, |name| self.symbols.reservation(name))
    }

    pub fn is_reserved(&self, text: &str) -> bool {
        self.reservation(text).is_reserved()
    }

    /// Pin the current mode for a run of classifications.
    ///
    /// Mode switches block until the returned classifier is dropped. Taking
    /// a second classifier on the same thread does not wait on a queued switch.
    pub fn classifier(&self) -> Classifier<'_> {
        Classifier::new(&self.symbols, self.mode.read_recursive())
    }

    /// Classify a single identifier under the current mode.
    pub fn classify(&self, text: &str) -> TokenKind {
        self.classifier().classify(text)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Session shared across threads.
///
/// Lexer threads and the thread that switches modes each hold a clone.
#[derive(Clone)]
pub struct SharedSession(Arc<Session>);

impl SharedSession {
    pub fn new(session: Session) -> Self {
        SharedSession(Arc::new(session))
    }
}

impl Default for SharedSession {
    fn default() -> Self {
        Self::new(Session::new())
    }
}

impl From<Session> for SharedSession {
    fn from(session: Session) -> Self {
        Self::new(session)
    }
}

impl std::ops::Deref for SharedSession {
    type Target = Session;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
