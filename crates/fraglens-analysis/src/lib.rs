//! Match-level orchestration and reporting for Fraglens.
//!
//! This crate wires the pure evaluation stages of `fraglens-evaluator` to the
//! stateful containers of `fraglens-engine` and exposes the surface the
//! front-ends consume:
//!
//! - [`analyzer::MatchAnalyzer`] - One instance per match. Feed it
//!   elimination events in tick order and it produces one immutable
//!   [`DeathJudgment`](fraglens_engine::DeathJudgment) per elimination while
//!   keeping the live performance ledger current.
//! - [`round_summary::RoundSummary`] - Aggregated judgment statistics for
//!   one round.
//! - [`report::MatchReport`] - The serializable end-of-match snapshot
//!   (final rankings plus per-round summaries) handed to renderers,
//!   reporting, and coaching generators.
//!
//! # Usage
//!
//! ```
//! use fraglens_analysis::analyzer::MatchAnalyzer;
//!
//! let mut analyzer = MatchAnalyzer::new();
//!
//! // Per decoded elimination:
//! // analyzer.record_kill(&event.attacker, attacker_team);
//! // let judgment = analyzer.judge(&event, &snapshot, &effects, &recent, tick, round);
//!
//! // On demand:
//! let rankings = analyzer.rankings();
//! assert!(rankings.is_empty());
//! ```
//!
//! # Seeking
//!
//! A viewer that scrubs backward calls
//! [`reset_round`](analyzer::MatchAnalyzer::reset_round) and replays the
//! current round from its start. Round-scoped caches are rebuilt by the
//! replay; the cross-round ledger and judgment history are never rewound.

pub mod analyzer;
pub mod report;
pub mod round_summary;
