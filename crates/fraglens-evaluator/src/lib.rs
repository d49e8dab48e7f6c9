//! Death evaluation for Fraglens: turning one elimination into facts, tags,
//! and blame.
//!
//! This crate implements the pure middle of the judgment pipeline. It holds
//! no match state; every function is deterministic in its inputs, which keeps
//! each stage unit-testable in isolation:
//!
//! 1. **Threat geometry** ([`threat_geometry`]) - Distance and sector facts
//!    from the victim position and the participant snapshot: isolation
//!    distance to the nearest living teammate, distinct angular threat
//!    sectors among living hostiles, and exposure to active area denial.
//! 2. **Trade resolution** ([`trade`]) - Whether the death was tradeable
//!    (close support existed) and whether it actually was traded (the killer
//!    fell to the victim's team inside the trade window).
//! 3. **Classification** ([`classifier`]) - A fixed, ordered rule sequence
//!    composes the facts into mistake tags and a severity. Rule order is part
//!    of the contract: it decides how simultaneous violations stack.
//! 4. **Blame scoring** ([`blame`]) - A pure function of severity and
//!    contextual modifiers produces the 0-100 blame apportionment.
//!
//! # Architecture
//!
//! ```text
//! snapshot + effects        recent eliminations
//!         ↓                          ↓
//!   ThreatPicture              TradeFacts
//!         └──────────┬──────────────┘
//!                DeathFacts
//!                    ↓
//!              classify() → Verdict (tags, reasons, severity)
//!                    ↓
//!              blame_score() → 0..=100
//! ```
//!
//! The stateful orchestration (round lifecycle, ledger updates) lives in
//! `fraglens-analysis`; the domain types live in `fraglens-engine`.

pub mod blame;
pub mod classifier;
pub mod threat_geometry;
pub mod trade;
