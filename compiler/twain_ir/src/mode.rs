//! Surface grammar selection.
//!
//! A session lexes exactly one of two grammars at a time. The raw values
//! `0` and `1` are what an embedding host passes across its API boundary;
//! anything else is rejected with [`ModeError::InvalidModeValue`].

use std::fmt;

use thiserror::Error;

/// The active surface grammar of a session.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum SyntaxMode {
    /// `function ... end` grammar.
    #[default]
    Classic,
    /// `fn`, `operator` and `nameof` grammar.
    Alternate,
}

impl SyntaxMode {
    pub const ALL: [SyntaxMode; 2] = [SyntaxMode::Classic, SyntaxMode::Alternate];

    /// Raw host-facing value: `0` for classic, `1` for alternate.
    #[inline]
    pub const fn as_raw(self) -> u32 {
        match self {
            SyntaxMode::Classic => 0,
            SyntaxMode::Alternate => 1,
        }
    }

    #[inline]
    pub const fn other(self) -> SyntaxMode {
        match self {
            SyntaxMode::Classic => SyntaxMode::Alternate,
            SyntaxMode::Alternate => SyntaxMode::Classic,
        }
    }
}

impl fmt::Display for SyntaxMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SyntaxMode::Classic => "classic",
            SyntaxMode::Alternate => "alternate",
        })
    }
}

impl TryFrom<u32> for SyntaxMode {
    type Error = ModeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SyntaxMode::Classic),
            1 => Ok(SyntaxMode::Alternate),
            _ => Err(ModeError::InvalidModeValue { value }),
        }
    }
}

impl From<SyntaxMode> for u32 {
    fn from(mode: SyntaxMode) -> Self {
        mode.as_raw()
    }
}

/// Error when a host supplies a mode outside the two-value enumeration.
///
/// This is a contract violation on the caller's side, not a runtime
/// condition: hosts that never intend to pass such values may treat it as fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ModeError {
    #[error("invalid syntax mode {value}: expected 0 (classic) or 1 (alternate)")]
    InvalidModeValue { value: u32 },
}
