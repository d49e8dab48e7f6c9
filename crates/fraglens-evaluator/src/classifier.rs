//! The ordered mistake-rule set.
//!
//! Rules are evaluated as an explicit fixed sequence, not a map: when several
//! rules fire on one death, both the final severity and the audit trail must
//! be reproducible run to run. Severity is the running maximum of the raised
//! tags' tiers, with a single exception: a traded death lowers the running
//! severity by one, floored at 1.
//!
//! Raise order is *not* the primary-tag order; the primary tag is picked
//! afterwards via [`MistakeTag::PRIMARY_PRIORITY`].

use fraglens_engine::MistakeTag;
use serde::{Deserialize, Serialize};

use crate::{
    threat_geometry::{ISOLATED_DISTANCE, SOLO_PUSH_DISTANCE, ThreatPicture},
    trade::TradeFacts,
};

/// Everything the rule set needs to know about one death.
///
/// A flat composition of the geometric facts, the trade facts, and the
/// round context. Pure data; building it is the orchestrator's job.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeathFacts {
    /// Position of this death in the round's death order (1 = first blood).
    pub death_order: u32,
    /// Distance to the nearest living teammate (sentinel when none).
    pub isolation_distance: f32,
    /// Distinct angular sectors occupied by living hostiles.
    pub threat_sectors: usize,
    /// Living hostiles plus the attacker.
    pub hostile_count: u32,
    /// Living teammates, excluding the victim.
    pub teammate_count: u32,
    /// A blinding effect was active against the victim.
    pub blinded: bool,
    /// The victim stood in an active burning area.
    pub in_fire: bool,
    /// A teammate was within close-support range.
    pub tradeable: bool,
    /// The killer fell inside the trade window.
    pub traded: bool,
}

impl DeathFacts {
    /// Combines the evaluation stages' outputs into one fact set.
    #[must_use]
    pub const fn compose(picture: ThreatPicture, trade: TradeFacts, death_order: u32) -> Self {
        Self {
            death_order,
            isolation_distance: picture.isolation_distance,
            threat_sectors: picture.threat_sectors,
            hostile_count: picture.hostile_count,
            teammate_count: picture.teammate_count,
            blinded: picture.blinded,
            in_fire: picture.in_fire,
            tradeable: trade.tradeable,
            traded: trade.traded,
        }
    }
}

/// Outcome of one pass over the rule sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    mistakes: Vec<MistakeTag>,
    reasons: Vec<String>,
    severity: u8,
}

impl Verdict {
    const fn new() -> Self {
        Self {
            mistakes: vec![],
            reasons: vec![],
            severity: 1,
        }
    }

    /// Triggered tags in raise order. Never empty after classification.
    #[must_use]
    pub fn mistakes(&self) -> &[MistakeTag] {
        &self.mistakes
    }

    /// One audit line per triggered rule, parallel to
    /// [`mistakes`](Self::mistakes).
    #[must_use]
    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    /// Final severity, 1-5.
    #[must_use]
    pub const fn severity(&self) -> u8 {
        self.severity
    }

    /// The primary tag of this verdict.
    #[must_use]
    pub fn primary(&self) -> MistakeTag {
        MistakeTag::primary_of(&self.mistakes)
    }

    #[must_use]
    fn has(&self, tag: MistakeTag) -> bool {
        self.mistakes.contains(&tag)
    }

    /// Raises `tag`, lifting the running severity to at least the tag's tier.
    fn raise(&mut self, tag: MistakeTag, reason: String) {
        self.mistakes.push(tag);
        self.reasons.push(reason);
        self.severity = self.severity.max(tag.base_severity());
    }

    /// Raises [`MistakeTag::Traded`] and applies the one severity reduction
    /// the rule set allows, floored at 1.
    fn raise_traded(&mut self) {
        self.mistakes.push(MistakeTag::Traded);
        self.reasons.push("TRADED: the killer fell right after".into());
        self.severity = self.severity.saturating_sub(1).max(1);
    }
}

type Rule = fn(&DeathFacts, &mut Verdict);

/// The rule sequence, in raise order. Order is load-bearing: the traded
/// reduction must see the severity accumulated by the geometry rules, and
/// first contact only applies when nothing before it fired.
const RULES: [Rule; 8] = [
    isolation,
    crossfire,
    solo_push,
    blind,
    fire,
    trade,
    outnumbered,
    first_contact,
];

/// Runs the full rule sequence over one death's facts.
///
/// The returned verdict always carries at least one tag: when no rule fires,
/// the death was a fair duel.
#[must_use]
pub fn classify(facts: &DeathFacts) -> Verdict {
    let mut verdict = Verdict::new();
    for rule in RULES {
        rule(facts, &mut verdict);
    }
    if verdict.mistakes.is_empty() {
        verdict.raise(MistakeTag::FairDuel, "AIM DUEL: lost an even fight".into());
    }
    verdict
}

fn isolation(facts: &DeathFacts, verdict: &mut Verdict) {
    if facts.isolation_distance > ISOLATED_DISTANCE {
        verdict.raise(
            MistakeTag::Isolated,
            format!(
                "ISOLATED: {:.0}u from the nearest teammate",
                facts.isolation_distance
            ),
        );
    }
}

fn crossfire(facts: &DeathFacts, verdict: &mut Verdict) {
    if facts.hostile_count >= 2 && facts.threat_sectors >= 2 {
        verdict.raise(
            MistakeTag::Crossfire,
            format!("CROSSFIRE: exposed to {} angles", facts.threat_sectors),
        );
    }
}

fn solo_push(facts: &DeathFacts, verdict: &mut Verdict) {
    if facts.isolation_distance > SOLO_PUSH_DISTANCE && facts.teammate_count >= 2 {
        verdict.raise(
            MistakeTag::SoloPush,
            format!("SOLO PUSH: {:.0}u ahead of the team", facts.isolation_distance),
        );
    }
}

fn blind(facts: &DeathFacts, verdict: &mut Verdict) {
    if facts.blinded {
        verdict.raise(MistakeTag::Flashed, "FLASHED: killed while blind".into());
    }
}

fn fire(facts: &DeathFacts, verdict: &mut Verdict) {
    if facts.in_fire {
        verdict.raise(MistakeTag::InFire, "IN FIRE: died inside a burning area".into());
    }
}

fn trade(facts: &DeathFacts, verdict: &mut Verdict) {
    if facts.traded {
        verdict.raise_traded();
    } else if facts.tradeable && facts.teammate_count > 0 && !verdict.has(MistakeTag::Isolated) {
        verdict.raise(
            MistakeTag::NoTrade,
            format!(
                "NO TRADE: support {:.0}u away never answered",
                facts.isolation_distance
            ),
        );
    }
}

fn outnumbered(facts: &DeathFacts, verdict: &mut Verdict) {
    if facts.hostile_count > facts.teammate_count + 2 {
        if facts.teammate_count == 0 {
            verdict.raise(
                MistakeTag::ClutchAttempt,
                format!("CLUTCH: died 1v{}", facts.hostile_count),
            );
        } else {
            verdict.raise(
                MistakeTag::Outnumbered,
                format!(
                    "OUTNUMBERED: {}v{}",
                    facts.hostile_count,
                    facts.teammate_count + 1
                ),
            );
        }
    }
}

fn first_contact(facts: &DeathFacts, verdict: &mut Verdict) {
    if facts.death_order == 1 && verdict.mistakes.is_empty() {
        verdict.raise(
            MistakeTag::FirstContact,
            "ENTRY: first blood of the round".into(),
        );
    }
}
