//! Trade resolution: did anyone answer the death?
//!
//! A death is *tradeable* when a living teammate stood inside close-support
//! range at the moment of death. It is *traded* when the killer was
//! eliminated strictly after the death and no later than the trade window
//! (the window end is inclusive; the death tick itself is not a trade).

use fraglens_engine::{CombatantId, EliminationEvent};
use serde::{Deserialize, Serialize};

/// Ticks after a death within which eliminating the killer counts as a trade
/// (3 s at 64 t/s).
pub const TRADE_WINDOW_TICKS: u32 = 192;

/// Teammate distance below which a death counts as tradeable.
pub const CLOSE_SUPPORT_DISTANCE: f32 = 400.0;

/// Trade facts for one death.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeFacts {
    /// A teammate was within [`CLOSE_SUPPORT_DISTANCE`] at the moment of
    /// death.
    pub tradeable: bool,
    /// The killer fell inside the trade window.
    pub traded: bool,
}

impl TradeFacts {
    /// Resolves trade facts for a death at `death_tick` by `attacker`.
    ///
    /// `eliminations` is the round's elimination buffer; entries at or before
    /// `death_tick` never qualify, so passing the full round history is fine.
    #[must_use]
    pub fn resolve(
        attacker: &CombatantId,
        death_tick: u32,
        eliminations: &[EliminationEvent],
        isolation_distance: f32,
    ) -> Self {
        let traded = eliminations.iter().any(|e| {
            e.victim == *attacker
                && death_tick < e.tick
                && e.tick <= death_tick + TRADE_WINDOW_TICKS
        });
        Self {
            tradeable: isolation_distance < CLOSE_SUPPORT_DISTANCE,
            traded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fraglens_engine::Team;

    fn kill(tick: u32, victim: &str) -> EliminationEvent {
        EliminationEvent {
            tick,
            round: 1,
            victim: victim.into(),
            victim_team: Some(Team::T),
            attacker: "avenger".into(),
            attacker_team: Some(Team::Ct),
            weapon: "m4a1".into(),
            headshot: false,
            victim_position: None,
            attacker_position: None,
        }
    }

    #[test]
    fn test_traded_one_tick_after_death() {
        let killer: CombatantId = "killer".into();
        let facts = TradeFacts::resolve(&killer, 1000, &[kill(1001, "killer")], 300.0);
        assert!(facts.traded);
    }

    #[test]
    fn test_traded_at_window_end_inclusive() {
        let killer: CombatantId = "killer".into();
        let facts = TradeFacts::resolve(
            &killer,
            1000,
            &[kill(1000 + TRADE_WINDOW_TICKS, "killer")],
            300.0,
        );
        assert!(facts.traded);
    }

    #[test]
    fn test_not_traded_past_window() {
        let killer: CombatantId = "killer".into();
        let facts = TradeFacts::resolve(
            &killer,
            1000,
            &[kill(1000 + TRADE_WINDOW_TICKS + 1, "killer")],
            300.0,
        );
        assert!(!facts.traded);
    }

    #[test]
    fn test_same_tick_is_not_a_trade() {
        let killer: CombatantId = "killer".into();
        let facts = TradeFacts::resolve(&killer, 1000, &[kill(1000, "killer")], 300.0);
        assert!(!facts.traded);
    }

    #[test]
    fn test_other_victims_do_not_count() {
        let killer: CombatantId = "killer".into();
        let facts = TradeFacts::resolve(&killer, 1000, &[kill(1050, "bystander")], 300.0);
        assert!(!facts.traded);
    }

    #[test]
    fn test_tradeable_is_strict_distance() {
        let killer: CombatantId = "killer".into();
        assert!(TradeFacts::resolve(&killer, 0, &[], 399.9).tradeable);
        assert!(!TradeFacts::resolve(&killer, 0, &[], 400.0).tradeable);
    }
}
