//! Shared helpers for the integration test suite.
//!
//! Re-exports the crate's own typing-simulation helpers so individual test
//! files don't each reimplement them, plus a couple of small engine-state
//! assertions used by the integration tests.

#![allow(dead_code)]

pub use gonhanh_core::utils::{telex, telex_auto_restore, telex_traditional, type_word, vni, vni_traditional};

use gonhanh_core::engine::{Action, Engine};

/// Send one key and assert the resulting action matches `expected`.
pub fn assert_action(e: &mut Engine, key: u16, caps: bool, ctrl: bool, expected: Action) {
    let r = e.on_key(key, caps, ctrl);
    assert_eq!(r.action, expected as u8);
}

/// Send one key and assert it was passed through untouched (action = None).
pub fn assert_passthrough(e: &mut Engine, key: u16) {
    assert_action(e, key, false, false, Action::None);
}
