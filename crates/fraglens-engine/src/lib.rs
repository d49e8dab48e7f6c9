//! Match domain model and stateful tracking for Fraglens.
//!
//! This crate holds the vocabulary of a team-vs-team combat match and the two
//! stateful containers the judgment pipeline mutates:
//!
//! - [`core`] - Value objects: positions, elimination events, combatant
//!   snapshots, area-denial effects, mistake tags, and death judgments
//! - [`engine`] - Mutable state: the round-scoped cache ([`RoundState`]) and
//!   the cross-round performance ledger ([`PerformanceLedger`])
//!
//! # Match Flow
//!
//! A match progresses as a chronological stream of elimination events:
//!
//! 1. The replay decoder delivers one [`EliminationEvent`] plus a full
//!    [`CombatantSnapshot`] list and any active [`AreaEffect`]s
//! 2. Round-scoped caches are rolled over on round change via
//!    [`RoundState::on_round`]
//! 3. The evaluation layer (the `fraglens-evaluator` crate) turns the event
//!    into a [`DeathJudgment`]
//! 4. The judgment is recorded into the victim's entry in the
//!    [`PerformanceLedger`], which ranks all combatants live
//!
//! Judgments are created once and immutable thereafter; round transitions
//! clear round-scoped caches but never touch already-recorded ledger entries.
//!
//! # Degraded Input
//!
//! Nothing in this crate fails on malformed input. Missing positions fall
//! back to [`Position::ORIGIN`], unknown team names fall back to a caller-
//! configured team, and an empty snapshot simply yields no teammates. This
//! keeps a corrupt stretch of a replay from aborting analysis of the rest of
//! the match.

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;
