//! Integration test suite for the quiet key core.
//!
//! The tests in `tests/` exercise the public API of `quiet-core` and
//! `quiet-wallet` together: derivation, projection, addresses, recovery
//! and wallet state.

pub mod helpers;
