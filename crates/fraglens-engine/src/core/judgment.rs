use serde::{Deserialize, Serialize};

use crate::core::{
    combatant::{CombatantId, Team},
    position::Position,
};

/// Severity tier a mistake tag belongs to.
///
/// Tiers give every tag a base severity; the classifier keeps the running
/// maximum of all raised tags (with the one explicit exception that a traded
/// death lowers severity by one).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, derive_more::Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SeverityTier {
    /// Skill diff, nothing to coach.
    #[display("NEUTRAL")]
    Neutral,
    /// Poor execution.
    #[display("MINOR")]
    Minor,
    /// Tactical mistake.
    #[display("MODERATE")]
    Moderate,
    /// Major tactical error.
    #[display("SEVERE")]
    Severe,
    /// Complete tactical failure.
    #[display("CRITICAL")]
    Critical,
}

impl SeverityTier {
    /// Numeric severity of the tier, 1 (neutral) through 5 (critical).
    #[must_use]
    pub const fn severity(self) -> u8 {
        match self {
            Self::Neutral => 1,
            Self::Minor => 2,
            Self::Moderate => 3,
            Self::Severe => 4,
            Self::Critical => 5,
        }
    }
}

/// A doctrine violation (or mitigating circumstance) tagged on a death.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MistakeTag {
    /// Died with no living teammate within support range of the whole team.
    #[display("ISOLATED")]
    Isolated,
    /// Exposed to living hostiles across multiple angular sectors.
    #[display("CROSSFIRE")]
    Crossfire,
    /// Pushed far ahead of a team that could have helped.
    #[display("SOLO PUSH")]
    SoloPush,
    /// A teammate was close enough to trade and did not.
    #[display("NO TRADE")]
    NoTrade,
    /// Over-extended peek.
    #[display("WIDE PEEK")]
    WidePeek,
    /// Died to or inside utility.
    #[display("UTIL DEATH")]
    UtilityDeath,
    /// Killed while blinded.
    #[display("FLASHED")]
    Flashed,
    /// Died standing in a burning area.
    #[display("IN FIRE")]
    InFire,
    /// Took a fight while the enemy had a clear numbers advantage.
    #[display("OUTNUMBERED")]
    Outnumbered,
    /// Re-peeked the same angle and died for it.
    #[display("REPEEK")]
    Repeek,
    /// First death of the round; entry deaths are acceptable.
    #[display("ENTRY")]
    FirstContact,
    /// Wrong timing.
    #[display("BAD TIMING")]
    BadTiming,
    /// Died attempting a clutch with no teammates left.
    #[display("CLUTCH")]
    ClutchAttempt,
    /// Lost a fair aim battle.
    #[display("AIM DUEL")]
    FairDuel,
    /// The death was traded by a teammate.
    #[display("TRADED")]
    Traded,
}

impl MistakeTag {
    /// Primary-tag priority, strictest first.
    ///
    /// This order is deliberately distinct from the order rules are raised in
    /// and must stay fixed: when several rules fire on one death, the primary
    /// tag (and therefore every downstream report) is reproducible only if
    /// this sequence never changes.
    pub const PRIMARY_PRIORITY: [Self; 15] = [
        Self::Isolated,
        Self::Crossfire,
        Self::SoloPush,
        Self::NoTrade,
        Self::WidePeek,
        Self::UtilityDeath,
        Self::Flashed,
        Self::InFire,
        Self::Outnumbered,
        Self::Repeek,
        Self::FirstContact,
        Self::BadTiming,
        Self::ClutchAttempt,
        Self::Traded,
        Self::FairDuel,
    ];

    /// Severity tier this tag belongs to.
    #[must_use]
    pub const fn tier(self) -> SeverityTier {
        match self {
            Self::Isolated | Self::Crossfire | Self::SoloPush => SeverityTier::Critical,
            Self::NoTrade | Self::WidePeek | Self::UtilityDeath => SeverityTier::Severe,
            Self::Flashed | Self::InFire | Self::Outnumbered | Self::Repeek => {
                SeverityTier::Moderate
            }
            Self::FirstContact | Self::BadTiming => SeverityTier::Minor,
            Self::ClutchAttempt | Self::FairDuel | Self::Traded => SeverityTier::Neutral,
        }
    }

    /// Base severity of this tag's tier.
    #[must_use]
    pub const fn base_severity(self) -> u8 {
        self.tier().severity()
    }

    /// Picks the primary tag out of a triggered set.
    ///
    /// Returns the first entry of [`PRIMARY_PRIORITY`](Self::PRIMARY_PRIORITY)
    /// present in `tags`, or [`FairDuel`](Self::FairDuel) for an empty set
    /// (the classifier never produces one).
    #[must_use]
    pub fn primary_of(tags: &[Self]) -> Self {
        Self::PRIMARY_PRIORITY
            .into_iter()
            .find(|tag| tags.contains(tag))
            .unwrap_or(Self::FairDuel)
    }
}

/// The structured tactical judgment of one elimination.
///
/// Created once per elimination and immutable thereafter. Appended to the
/// victim's ledger entry and retained in the cross-round judgment history;
/// downstream consumers (renderer, reporting, coaching) treat it as a
/// read-only value object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeathJudgment {
    pub victim: CombatantId,
    pub victim_team: Team,
    pub attacker: CombatantId,
    pub round: u32,
    pub tick: u32,
    pub victim_position: Position,
    /// All triggered tags, in rule-raise order. Never empty.
    pub mistakes: Vec<MistakeTag>,
    /// First-priority match among `mistakes`; the only tag that feeds blame.
    pub primary: MistakeTag,
    /// Running-maximum severity across raised rules, 1-5.
    pub severity: u8,
    /// Blame apportioned to the victim, clamped to 0-100.
    pub blame: f32,
    /// A teammate was within close-support range at the moment of death.
    pub tradeable: bool,
    /// The killer was eliminated by the victim's team inside the trade window.
    pub traded: bool,
    /// Distance to the nearest living teammate (sentinel when none).
    pub isolation_distance: f32,
    /// Living hostiles plus the attacker.
    pub hostile_count: u32,
    /// Living teammates, excluding the victim.
    pub teammate_count: u32,
    /// One human-readable line per triggered rule, for audit output.
    pub reasons: Vec<String>,
}
