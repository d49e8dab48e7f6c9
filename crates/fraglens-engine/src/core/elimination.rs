use serde::{Deserialize, Serialize};

use crate::core::{
    combatant::{CombatantId, Team},
    position::Position,
};

/// One attacker-eliminates-victim event from the match timeline.
///
/// Teams are optional because kill-feed records in some replay formats omit
/// them; the analysis layer substitutes its configured fallback team. The
/// victim position is optional for the same reason and falls back first to
/// the victim's snapshot, then to [`Position::ORIGIN`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EliminationEvent {
    pub tick: u32,
    pub round: u32,
    pub victim: CombatantId,
    pub victim_team: Option<Team>,
    pub attacker: CombatantId,
    pub attacker_team: Option<Team>,
    pub weapon: String,
    pub headshot: bool,
    pub victim_position: Option<Position>,
    pub attacker_position: Option<Position>,
}

impl EliminationEvent {
    /// Key identifying this elimination within its round.
    ///
    /// A combatant dies at most once per round, so `(tick, victim)` uniquely
    /// identifies the event even when the decoder re-delivers it.
    #[must_use]
    pub fn dedup_key(&self) -> (u32, CombatantId) {
        (self.tick, self.victim.clone())
    }
}
