//! Per-round aggregation of recorded judgments.

use fraglens_engine::{DeathJudgment, MistakeTag};
use fraglens_stats::{descriptive::DescriptiveStats, frequency::FrequencyTable};
use serde::{Deserialize, Serialize};

/// Aggregated judgment statistics for one round.
///
/// A derived snapshot, recomputed from the judgment history on request;
/// nothing in the analysis pipeline reads it back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round: u32,
    /// Judged deaths this round.
    pub deaths: u32,
    /// Deaths that were traded back inside the trade window.
    pub traded_deaths: u32,
    /// Mean blame over the round's deaths, 0 for a deathless round.
    pub avg_blame: f32,
    /// Highest single-death blame this round.
    pub max_blame: f32,
    /// Highest single-death severity this round, 0 for a deathless round.
    pub worst_severity: u8,
    /// Primary tags by frequency, descending; ties keep first occurrence.
    pub mistake_counts: Vec<(MistakeTag, u64)>,
}

impl RoundSummary {
    /// Summarizes the judgments of `round` out of a full judgment history.
    ///
    /// Judgments from other rounds are ignored, so the caller can pass the
    /// match-wide history unfiltered.
    #[expect(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn for_round(round: u32, history: &[DeathJudgment]) -> Self {
        let judgments = history
            .iter()
            .filter(|j| j.round == round)
            .collect::<Vec<_>>();

        let blame = DescriptiveStats::new(judgments.iter().map(|j| j.blame));
        let mut tags = FrequencyTable::new();
        for judgment in &judgments {
            tags.add(judgment.primary);
        }

        Self {
            round,
            deaths: judgments.len() as u32,
            traded_deaths: judgments.iter().filter(|j| j.traded).count() as u32,
            avg_blame: blame.as_ref().map_or(0.0, |stats| stats.mean),
            max_blame: blame.as_ref().map_or(0.0, |stats| stats.max),
            worst_severity: judgments.iter().map(|j| j.severity).max().unwrap_or(0),
            mistake_counts: tags
                .most_common(tags.distinct())
                .into_iter()
                .map(|(tag, count)| (*tag, count))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fraglens_engine::{Position, Team};

    fn judgment(round: u32, tick: u32, blame: f32, severity: u8, primary: MistakeTag, traded: bool) -> DeathJudgment {
        DeathJudgment {
            victim: "victim".into(),
            victim_team: Team::Ct,
            attacker: "enemy".into(),
            round,
            tick,
            victim_position: Position::ORIGIN,
            mistakes: vec![primary],
            primary,
            severity,
            blame,
            tradeable: traded,
            traded,
            isolation_distance: 500.0,
            hostile_count: 1,
            teammate_count: 4,
            reasons: vec![],
        }
    }

    #[test]
    fn test_empty_round() {
        let summary = RoundSummary::for_round(1, &[]);
        assert_eq!(summary.deaths, 0);
        assert_eq!(summary.avg_blame, 0.0);
        assert_eq!(summary.worst_severity, 0);
        assert!(summary.mistake_counts.is_empty());
    }

    #[test]
    fn test_aggregates_one_round_only() {
        let history = vec![
            judgment(1, 1000, 100.0, 5, MistakeTag::Isolated, false),
            judgment(1, 1200, 40.0, 2, MistakeTag::FirstContact, false),
            judgment(1, 1400, 10.0, 1, MistakeTag::Traded, true),
            judgment(2, 9000, 80.0, 4, MistakeTag::NoTrade, false),
        ];
        let summary = RoundSummary::for_round(1, &history);
        assert_eq!(summary.deaths, 3);
        assert_eq!(summary.traded_deaths, 1);
        assert_eq!(summary.avg_blame, 50.0);
        assert_eq!(summary.max_blame, 100.0);
        assert_eq!(summary.worst_severity, 5);
    }

    #[test]
    fn test_mistake_counts_ordered_by_frequency() {
        let history = vec![
            judgment(1, 1000, 60.0, 3, MistakeTag::Flashed, false),
            judgment(1, 1200, 100.0, 5, MistakeTag::Isolated, false),
            judgment(1, 1400, 100.0, 5, MistakeTag::Isolated, false),
        ];
        let summary = RoundSummary::for_round(1, &history);
        assert_eq!(
            summary.mistake_counts,
            vec![(MistakeTag::Isolated, 2), (MistakeTag::Flashed, 1)]
        );
    }
}
