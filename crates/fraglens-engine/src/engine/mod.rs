//! Mutable match-tracking state.
//!
//! Two containers cover everything the judgment pipeline mutates:
//!
//! - [`RoundState`] - Round-scoped caches (death-order counter, processed-
//!   event dedup set, recent-eliminations buffer). Swapped wholesale on round
//!   change so a reset is atomic and testable.
//! - [`PerformanceLedger`] - Cross-round per-combatant totals and derived
//!   rankings. Never touched by round transitions.
//!
//! Everything here is single-threaded and synchronous; one engine instance
//! per match gives batch analysis trivial parallelism with no shared state.

pub use self::{ledger::*, round_state::*};

mod ledger;
mod round_state;
