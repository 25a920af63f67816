//! Property-based tests for syntax-mode switching.
//!
//! Random sequences of raw mode values (valid and invalid) are applied to a
//! fresh session, checking after every step that:
//! 1. Exactly one grammar's vocabulary is reserved, matching the register
//! 2. Repeating the last switch changes nothing
//! 3. Ending on a mode yields the same tags as a fresh session in that mode

#![allow(
    clippy::doc_markdown,
    clippy::ignored_unit_patterns,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use twain_ir::{Keyword, ModeError, Reservation, SyntaxMode};
use twain_lexer::Session;

fn tags(session: &Session) -> Vec<Reservation> {
    Keyword::MODE_SENSITIVE
        .iter()
        .map(|kw| session.reservation(kw.as_str()))
        .collect()
}

/// Only one vocabulary is reserved, and it belongs to the active mode.
fn assert_exclusive(session: &Session) {
    let classic = session.is_reserved("function");
    assert_eq!(classic, session.is_reserved("end"));
    for word in ["fn", "operator", "nameof"] {
        assert_eq!(session.is_reserved(word), !classic, "{word}");
    }
    assert_eq!(classic, session.get_mode() == SyntaxMode::Classic);
}

/// Raw host values, biased towards the legal ones.
fn raw_mode() -> impl Strategy<Value = u32> {
    prop_oneof![
        4 => 0u32..2,
        1 => 2u32..=u32::MAX,
    ]
}

fn mode() -> impl Strategy<Value = SyntaxMode> {
    prop_oneof![Just(SyntaxMode::Classic), Just(SyntaxMode::Alternate)]
}

proptest! {
    #[test]
    fn vocabularies_stay_exclusive(values in prop::collection::vec(raw_mode(), 0..32)) {
        let session = Session::new();
        assert_exclusive(&session);

        for value in values {
            let before_mode = session.get_mode();
            let before_tags = tags(&session);

            match session.set_mode_value(value) {
                Ok(()) => prop_assert_eq!(session.mode_value(), value),
                Err(err) => {
                    prop_assert_eq!(err, ModeError::InvalidModeValue { value });
                    prop_assert_eq!(session.get_mode(), before_mode);
                    prop_assert_eq!(tags(&session), before_tags);
                }
            }
            assert_exclusive(&session);
        }
    }

    #[test]
    fn repeating_a_switch_is_a_no_op(start in mode(), target in mode()) {
        let session = Session::with_mode(start);
        session.set_mode(target);
        let once = tags(&session);
        session.set_mode(target);
        prop_assert_eq!(tags(&session), once);
        prop_assert_eq!(session.get_mode(), target);
    }

    #[test]
    fn final_mode_determines_tags(modes in prop::collection::vec(mode(), 1..16)) {
        let session = Session::new();
        for &m in &modes {
            session.set_mode(m);
        }
        let last = modes[modes.len() - 1];
        let fresh = Session::with_mode(last);
        prop_assert_eq!(tags(&session), tags(&fresh));
    }
}
