//! The per-match judgment engine.

use fraglens_engine::{
    AreaEffect, CombatantId, CombatantRecord, CombatantSnapshot, DeathJudgment, EliminationEvent,
    PerformanceLedger, Position, RoundState, Team,
};
use fraglens_evaluator::{
    blame::blame_score,
    classifier::{DeathFacts, classify},
    threat_geometry::ThreatPicture,
    trade::TradeFacts,
};

use crate::{report::MatchReport, round_summary::RoundSummary};

/// Construction-time settings for a [`MatchAnalyzer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Team substituted when an event carries no usable team and the victim
    /// is absent from the snapshot.
    pub fallback_team: Team,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            fallback_team: Team::Ct,
        }
    }
}

/// Stateful judgment engine for one match.
///
/// Owns the round-scoped caches and the cross-round performance ledger, and
/// drives the pure evaluation pipeline for every elimination delivered by the
/// replay decoder. One instance per match; independent matches analyzed in
/// parallel each get their own instance and share nothing.
///
/// Events must arrive in non-decreasing tick order within a round. Re-
/// delivered events are recognized by `(tick, victim)` and answered with the
/// already-recorded judgment, so a decoder hiccup never skews the ledger or
/// the returned verdict.
#[derive(Debug, Clone, Default)]
pub struct MatchAnalyzer {
    config: AnalyzerConfig,
    round_state: RoundState,
    ledger: PerformanceLedger,
    history: Vec<DeathJudgment>,
}

impl MatchAnalyzer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Judges one elimination.
    ///
    /// `snapshot` holds every participant at (or just before) the elimination
    /// tick; `effects` the area denial active around it; `recent_eliminations`
    /// the decoder's lookahead of kills following this death, which feeds
    /// trade resolution.
    ///
    /// Never fails: missing positions degrade to the snapshot entry and then
    /// to the map origin, missing teams to the configured fallback, and an
    /// empty snapshot to the no-teammate sentinel. On first delivery the
    /// judgment is recorded into the ledger, the judgment history, and the
    /// round's trade buffer; a re-delivered event gets the recorded judgment
    /// back unchanged.
    pub fn judge(
        &mut self,
        event: &EliminationEvent,
        snapshot: &[CombatantSnapshot],
        effects: &[AreaEffect],
        recent_eliminations: &[EliminationEvent],
        tick: u32,
        round: u32,
    ) -> DeathJudgment {
        self.round_state.on_round(round);
        for elimination in recent_eliminations {
            self.round_state.buffer_elimination(elimination.clone());
        }

        if !self.round_state.mark_processed(event) {
            // The death-order counter has moved on since the first delivery;
            // recomputing could disagree with what the ledger holds.
            if let Some(recorded) = self.recorded_judgment(&event.victim, round, tick) {
                return recorded.clone();
            }
        }
        let death_order = self.round_state.next_death_order();

        let victim_team = event
            .victim_team
            .or_else(|| Self::snapshot_team(&event.victim, snapshot))
            .unwrap_or(self.config.fallback_team);
        let victim_position = event
            .victim_position
            .or_else(|| Self::snapshot_position(&event.victim, snapshot))
            .unwrap_or(Position::ORIGIN);

        let picture = ThreatPicture::assess(
            &event.victim,
            victim_team,
            victim_position,
            snapshot,
            effects,
            tick,
        );
        let trade = TradeFacts::resolve(
            &event.attacker,
            tick,
            self.round_state.recent_eliminations(),
            picture.isolation_distance,
        );
        let facts = DeathFacts::compose(picture, trade, death_order);
        let verdict = classify(&facts);

        let judgment = DeathJudgment {
            victim: event.victim.clone(),
            victim_team,
            attacker: event.attacker.clone(),
            round,
            tick,
            victim_position,
            mistakes: verdict.mistakes().to_vec(),
            primary: verdict.primary(),
            severity: verdict.severity(),
            blame: blame_score(verdict.severity(), &facts),
            tradeable: trade.tradeable,
            traded: trade.traded,
            isolation_distance: picture.isolation_distance,
            hostile_count: picture.hostile_count,
            teammate_count: picture.teammate_count,
            reasons: verdict.reasons().to_vec(),
        };

        self.round_state.buffer_elimination(event.clone());
        if self.ledger.record_judgment(judgment.clone()) {
            self.history.push(judgment.clone());
        }

        judgment
    }

    /// Credits a kill to `attacker` in the ledger.
    pub fn record_kill(&mut self, attacker: &CombatantId, team: Team) {
        self.ledger.record_kill(attacker, team);
    }

    /// Clears the round-scoped caches for the current round.
    ///
    /// The backward-seek entry point: after this, replay the current round's
    /// events from its start. The ledger and judgment history keep every
    /// already-recorded entry untouched (re-judged eliminations are
    /// recognized and not double-counted).
    pub fn reset_round(&mut self) {
        self.round_state.reset();
    }

    /// All ledger entries sorted by descending performance score; equal
    /// scores keep first-appearance order.
    #[must_use]
    pub fn rankings(&self) -> Vec<&CombatantRecord> {
        self.ledger.rankings()
    }

    /// The cross-round performance ledger.
    #[must_use]
    pub fn ledger(&self) -> &PerformanceLedger {
        &self.ledger
    }

    /// Every recorded judgment across all rounds, in delivery order.
    #[must_use]
    pub fn history(&self) -> &[DeathJudgment] {
        &self.history
    }

    /// The round the analyzer is currently scoped to.
    #[must_use]
    pub fn current_round(&self) -> u32 {
        self.round_state.round()
    }

    /// Aggregated judgment statistics for the current round.
    #[must_use]
    pub fn round_summary(&self) -> RoundSummary {
        RoundSummary::for_round(self.round_state.round(), &self.history)
    }

    /// Compiles the current scoreboard and round summaries.
    #[must_use]
    pub fn report(&self) -> MatchReport {
        MatchReport::compile(&self.ledger, &self.history)
    }

    fn recorded_judgment(&self, victim: &CombatantId, round: u32, tick: u32) -> Option<&DeathJudgment> {
        self.ledger
            .get(victim)?
            .judgments()
            .iter()
            .find(|j| j.round == round && j.tick == tick)
    }

    fn snapshot_team(id: &CombatantId, snapshot: &[CombatantSnapshot]) -> Option<Team> {
        snapshot.iter().find(|c| c.id == *id).map(|c| c.team)
    }

    fn snapshot_position(id: &CombatantId, snapshot: &[CombatantSnapshot]) -> Option<Position> {
        snapshot.iter().find(|c| c.id == *id).map(|c| c.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fraglens_engine::MistakeTag;

    fn snap(id: &str, team: Team, x: f32, y: f32, alive: bool) -> CombatantSnapshot {
        CombatantSnapshot::new(id, team, Position::new(x, y), alive)
    }

    fn elimination(tick: u32, round: u32, victim: &str, attacker: &str) -> EliminationEvent {
        EliminationEvent {
            tick,
            round,
            victim: victim.into(),
            victim_team: Some(Team::Ct),
            attacker: attacker.into(),
            attacker_team: Some(Team::T),
            weapon: "ak47".into(),
            headshot: false,
            victim_position: Some(Position::ORIGIN),
            attacker_position: None,
        }
    }

    /// Snapshot with one close teammate and one distant enemy: a fair duel.
    fn duel_snapshot() -> Vec<CombatantSnapshot> {
        vec![
            snap("victim", Team::Ct, 0.0, 0.0, false),
            snap("mate", Team::Ct, 200.0, 0.0, true),
            snap("killer", Team::T, 600.0, 0.0, true),
        ]
    }

    #[test]
    fn test_judgment_invariants() {
        let mut analyzer = MatchAnalyzer::new();
        let judgment = analyzer.judge(
            &elimination(1000, 1, "victim", "killer"),
            &duel_snapshot(),
            &[],
            &[],
            1000,
            1,
        );
        assert!(!judgment.mistakes.is_empty());
        assert!((1..=5).contains(&judgment.severity));
        assert!((0.0..=100.0).contains(&judgment.blame));
        assert_eq!(judgment.mistakes.len(), judgment.reasons.len());
    }

    #[test]
    fn test_isolated_last_alive() {
        let mut analyzer = MatchAnalyzer::new();
        let snapshot = vec![
            snap("victim", Team::Ct, 0.0, 0.0, false),
            snap("killer", Team::T, 500.0, 0.0, true),
        ];
        let judgment = analyzer.judge(
            &elimination(1000, 1, "victim", "killer"),
            &snapshot,
            &[],
            &[],
            1000,
            1,
        );
        assert_eq!(judgment.primary, MistakeTag::Isolated);
        assert_eq!(judgment.severity, 5);
        assert_eq!(judgment.teammate_count, 0);
    }

    #[test]
    fn test_traded_death_via_lookahead() {
        let mut analyzer = MatchAnalyzer::new();
        let trade_kill = elimination(1050, 1, "killer", "mate");
        let judgment = analyzer.judge(
            &elimination(1000, 1, "victim", "killer"),
            &duel_snapshot(),
            &[],
            std::slice::from_ref(&trade_kill),
            1000,
            1,
        );
        assert!(judgment.tradeable);
        assert!(judgment.traded);
        assert!(judgment.mistakes.contains(&MistakeTag::Traded));
    }

    #[test]
    fn test_untraded_close_support_raises_no_trade() {
        let mut analyzer = MatchAnalyzer::new();
        // Second death of the round so FIRST_CONTACT stays out of the way
        analyzer.judge(
            &elimination(500, 1, "other", "killer"),
            &duel_snapshot(),
            &[],
            &[],
            500,
            1,
        );
        let judgment = analyzer.judge(
            &elimination(1000, 1, "victim", "killer"),
            &duel_snapshot(),
            &[],
            &[],
            1000,
            1,
        );
        assert!(judgment.tradeable);
        assert!(!judgment.traded);
        assert!(judgment.mistakes.contains(&MistakeTag::NoTrade));
        assert_eq!(judgment.severity, 4);
    }

    #[test]
    fn test_first_death_of_round_is_entry() {
        let mut analyzer = MatchAnalyzer::new();
        let judgment = analyzer.judge(
            &elimination(1000, 1, "victim", "killer"),
            &duel_snapshot(),
            &[],
            &[],
            1000,
            1,
        );
        // Close support makes it tradeable, so NO_TRADE outranks ENTRY here;
        // strip the teammate to get the pure entry case.
        assert!(!judgment.mistakes.contains(&MistakeTag::FirstContact));

        let mut analyzer = MatchAnalyzer::new();
        let snapshot = vec![
            snap("victim", Team::Ct, 0.0, 0.0, false),
            snap("mate", Team::Ct, 600.0, 0.0, true),
            snap("killer", Team::T, 700.0, 0.0, true),
        ];
        let judgment = analyzer.judge(
            &elimination(1000, 1, "victim", "killer"),
            &snapshot,
            &[],
            &[],
            1000,
            1,
        );
        assert_eq!(judgment.primary, MistakeTag::FirstContact);
        assert_eq!(judgment.severity, 2);
    }

    #[test]
    fn test_redelivered_event_does_not_double_count() {
        let mut analyzer = MatchAnalyzer::new();
        let event = elimination(1000, 1, "victim", "killer");
        let first = analyzer.judge(&event, &duel_snapshot(), &[], &[], 1000, 1);
        let second = analyzer.judge(&event, &duel_snapshot(), &[], &[], 1000, 1);

        assert_eq!(first, second);
        assert_eq!(analyzer.history().len(), 1);
        let record = analyzer.ledger().get(&"victim".into()).unwrap();
        assert_eq!(record.deaths, 1);
    }

    #[test]
    fn test_redelivery_after_later_deaths_returns_recorded_judgment() {
        let mut analyzer = MatchAnalyzer::new();
        let snapshot = vec![
            snap("victim", Team::Ct, 0.0, 0.0, false),
            snap("mate", Team::Ct, 600.0, 0.0, true),
            snap("killer", Team::T, 700.0, 0.0, true),
        ];
        let entry = elimination(1000, 1, "victim", "killer");
        let original = analyzer.judge(&entry, &snapshot, &[], &[], 1000, 1);
        assert_eq!(original.primary, MistakeTag::FirstContact);

        // Another death moves the death-order counter past 1
        analyzer.judge(
            &elimination(1200, 1, "mate", "killer"),
            &snapshot,
            &[],
            &[],
            1200,
            1,
        );

        let redelivered = analyzer.judge(&entry, &snapshot, &[], &[], 1000, 1);
        assert_eq!(redelivered, original);
        assert_eq!(analyzer.ledger().get(&"victim".into()).unwrap().deaths, 1);
    }

    #[test]
    fn test_round_transition_clears_caches_but_not_ledger() {
        let mut analyzer = MatchAnalyzer::new();
        analyzer.judge(
            &elimination(1000, 1, "victim", "killer"),
            &duel_snapshot(),
            &[],
            &[],
            1000,
            1,
        );
        analyzer.record_kill(&"killer".into(), Team::T);

        // New round: the next death is first contact again
        let snapshot = vec![
            snap("victim", Team::Ct, 0.0, 0.0, false),
            snap("mate", Team::Ct, 600.0, 0.0, true),
            snap("killer", Team::T, 700.0, 0.0, true),
        ];
        let judgment = analyzer.judge(
            &elimination(9000, 2, "victim", "killer"),
            &snapshot,
            &[],
            &[],
            9000,
            2,
        );
        assert_eq!(judgment.primary, MistakeTag::FirstContact);

        let record = analyzer.ledger().get(&"victim".into()).unwrap();
        assert_eq!(record.deaths, 2);
        let killer = analyzer.ledger().get(&"killer".into()).unwrap();
        assert_eq!(killer.kills, 1);
    }

    #[test]
    fn test_backward_seek_replay_is_stable() {
        let mut analyzer = MatchAnalyzer::new();
        let event = elimination(1000, 1, "victim", "killer");
        let original = analyzer.judge(&event, &duel_snapshot(), &[], &[], 1000, 1);

        analyzer.reset_round();
        let replayed = analyzer.judge(&event, &duel_snapshot(), &[], &[], 1000, 1);

        assert_eq!(original, replayed);
        assert_eq!(analyzer.history().len(), 1);
        assert_eq!(analyzer.ledger().get(&"victim".into()).unwrap().deaths, 1);
    }

    #[test]
    fn test_missing_position_and_team_degrade() {
        let mut analyzer = MatchAnalyzer::new();
        let mut event = elimination(1000, 1, "ghost", "killer");
        event.victim_team = None;
        event.victim_position = None;

        let judgment = analyzer.judge(&event, &[], &[], &[], 1000, 1);
        assert_eq!(judgment.victim_team, Team::Ct);
        assert_eq!(judgment.victim_position, Position::ORIGIN);
        // Empty snapshot: no teammates anywhere, so the sentinel isolates
        assert_eq!(judgment.primary, MistakeTag::Isolated);
    }

    #[test]
    fn test_snapshot_fallbacks_fill_event_gaps() {
        let mut analyzer = MatchAnalyzer::new();
        let mut event = elimination(1000, 1, "victim", "killer");
        event.victim_team = None;
        event.victim_position = None;

        let snapshot = vec![
            snap("victim", Team::T, 100.0, 100.0, false),
            snap("mate", Team::T, 150.0, 100.0, true),
            snap("killer", Team::Ct, 700.0, 100.0, true),
        ];
        let judgment = analyzer.judge(&event, &snapshot, &[], &[], 1000, 1);
        assert_eq!(judgment.victim_team, Team::T);
        assert_eq!(judgment.victim_position, Position::new(100.0, 100.0));
        assert_eq!(judgment.teammate_count, 1);
    }

    #[test]
    fn test_rankings_surface() {
        let mut analyzer = MatchAnalyzer::new();
        analyzer.record_kill(&"killer".into(), Team::T);
        analyzer.judge(
            &elimination(1000, 1, "victim", "killer"),
            &duel_snapshot(),
            &[],
            &[],
            1000,
            1,
        );
        let rankings = analyzer.rankings();
        assert_eq!(rankings.len(), 2);
        assert_eq!(rankings[0].id, "killer".into());
    }
}
