//! The serializable end-of-match report.

use fraglens_engine::{
    CombatantId, DeathJudgment, Grade, MistakeTag, PerformanceLedger, Team,
};
use serde::{Deserialize, Serialize};

use crate::round_summary::RoundSummary;

/// One row of the final scoreboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    /// 1-based rank, best first.
    pub rank: u32,
    pub id: CombatantId,
    pub team: Team,
    pub kills: u32,
    pub deaths: u32,
    pub kd_ratio: f32,
    pub avg_blame: f32,
    pub performance_score: f32,
    pub grade: Grade,
    /// Up to three most frequent primary mistakes.
    pub top_mistakes: Vec<(MistakeTag, u32)>,
    /// The highest-severity death, when any death was judged.
    pub worst_death: Option<DeathJudgment>,
}

/// The end-of-match snapshot handed to renderers, reporting, and coaching
/// generators.
///
/// A pure value: compiling it reads the ledger and judgment history without
/// mutating either, so it can be produced mid-match for a live scoreboard
/// just as well as at match end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub rankings: Vec<RankingEntry>,
    /// One summary per round that saw at least one judged death, in round
    /// order.
    pub rounds: Vec<RoundSummary>,
}

impl MatchReport {
    const TOP_MISTAKES: usize = 3;

    /// Compiles the report from the current ledger and judgment history.
    #[expect(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn compile(ledger: &PerformanceLedger, history: &[DeathJudgment]) -> Self {
        let rankings = ledger
            .rankings()
            .into_iter()
            .enumerate()
            .map(|(position, record)| RankingEntry {
                rank: position as u32 + 1,
                id: record.id.clone(),
                team: record.team,
                kills: record.kills,
                deaths: record.deaths,
                kd_ratio: record.kd_ratio(),
                avg_blame: record.avg_blame(),
                performance_score: record.performance_score(),
                grade: record.grade(),
                top_mistakes: record.top_mistakes(Self::TOP_MISTAKES),
                worst_death: record.worst_death().cloned(),
            })
            .collect();

        let mut rounds = history.iter().map(|j| j.round).collect::<Vec<_>>();
        rounds.sort_unstable();
        rounds.dedup();

        Self {
            rankings,
            rounds: rounds
                .into_iter()
                .map(|round| RoundSummary::for_round(round, history))
                .collect(),
        }
    }
}
