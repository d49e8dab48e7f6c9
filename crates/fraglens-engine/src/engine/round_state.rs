use std::collections::HashSet;

use crate::core::{CombatantId, EliminationEvent};

/// Round-scoped analysis caches.
///
/// Owns the three pieces of state that must not leak across rounds: the
/// death-ordering counter (for first-contact detection), the processed-event
/// dedup set, and the recent-eliminations buffer consulted by trade
/// resolution. The whole value is replaced on round change or on an explicit
/// reset, which keeps the rollover atomic.
///
/// An interactively-scrubbed viewer that seeks backward resets this state and
/// replays the current round from its start; the cross-round ledger lives
/// elsewhere and is untouched by either path.
#[derive(Debug, Clone, Default)]
pub struct RoundState {
    round: u32,
    death_order: u32,
    processed: HashSet<(u32, CombatantId)>,
    recent_eliminations: Vec<EliminationEvent>,
}

impl RoundState {
    /// Fresh caches for `round`.
    #[must_use]
    pub fn for_round(round: u32) -> Self {
        Self {
            round,
            ..Self::default()
        }
    }

    /// The round the caches are currently scoped to.
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// Number of deaths recorded so far in this round.
    #[must_use]
    pub const fn death_order(&self) -> u32 {
        self.death_order
    }

    /// Rolls the caches over if `round` differs from the tracked round.
    ///
    /// Idempotent for repeated calls with the same round number. Returns
    /// `true` when a rollover happened.
    pub fn on_round(&mut self, round: u32) -> bool {
        if round == self.round {
            return false;
        }
        *self = Self::for_round(round);
        true
    }

    /// Clears all caches while staying scoped to the current round.
    pub fn reset(&mut self) {
        *self = Self::for_round(self.round);
    }

    /// Marks an event as processed.
    ///
    /// Returns `true` on first sight, `false` when the decoder re-delivered
    /// an elimination this round already judged.
    pub fn mark_processed(&mut self, event: &EliminationEvent) -> bool {
        self.processed.insert(event.dedup_key())
    }

    /// Increments the death-ordering counter and returns the new position
    /// (1 for the first death of the round).
    pub const fn next_death_order(&mut self) -> u32 {
        self.death_order += 1;
        self.death_order
    }

    /// Adds an elimination to the round's trade-resolution buffer, skipping
    /// events already buffered.
    pub fn buffer_elimination(&mut self, event: EliminationEvent) {
        if !self
            .recent_eliminations
            .iter()
            .any(|buffered| buffered.dedup_key() == event.dedup_key())
        {
            self.recent_eliminations.push(event);
        }
    }

    /// Eliminations buffered this round, in delivery order.
    #[must_use]
    pub fn recent_eliminations(&self) -> &[EliminationEvent] {
        &self.recent_eliminations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(tick: u32, victim: &str) -> EliminationEvent {
        EliminationEvent {
            tick,
            round: 1,
            victim: victim.into(),
            victim_team: None,
            attacker: "attacker".into(),
            attacker_team: None,
            weapon: "ak47".into(),
            headshot: false,
            victim_position: None,
            attacker_position: None,
        }
    }

    #[test]
    fn test_on_round_rolls_over_once() {
        let mut state = RoundState::for_round(1);
        state.next_death_order();
        state.mark_processed(&event(100, "a"));
        state.buffer_elimination(event(100, "a"));

        assert!(state.on_round(2));
        assert_eq!(state.round(), 2);
        assert_eq!(state.death_order(), 0);
        assert!(state.recent_eliminations().is_empty());
        // Dedup set was cleared too: the same event reads as unseen
        assert!(state.mark_processed(&event(100, "a")));
    }

    #[test]
    fn test_on_round_is_idempotent() {
        let mut state = RoundState::for_round(3);
        state.next_death_order();
        assert!(!state.on_round(3));
        assert_eq!(state.death_order(), 1);
    }

    #[test]
    fn test_reset_keeps_round_number() {
        let mut state = RoundState::for_round(7);
        state.next_death_order();
        state.reset();
        assert_eq!(state.round(), 7);
        assert_eq!(state.death_order(), 0);
    }

    #[test]
    fn test_mark_processed_detects_redelivery() {
        let mut state = RoundState::for_round(1);
        assert!(state.mark_processed(&event(500, "victim")));
        assert!(!state.mark_processed(&event(500, "victim")));
        // A different tick is a different elimination
        assert!(state.mark_processed(&event(501, "victim")));
    }

    #[test]
    fn test_buffer_elimination_dedups() {
        let mut state = RoundState::for_round(1);
        state.buffer_elimination(event(100, "a"));
        state.buffer_elimination(event(100, "a"));
        state.buffer_elimination(event(200, "b"));
        assert_eq!(state.recent_eliminations().len(), 2);
    }
}
