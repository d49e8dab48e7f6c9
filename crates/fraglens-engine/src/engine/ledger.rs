use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::{CombatantId, DeathJudgment, MistakeTag, Team};

/// Letter grade derived from a combatant's performance score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, derive_more::Display, Serialize, Deserialize,
)]
pub enum Grade {
    F,
    D,
    C,
    B,
    A,
    S,
}

impl Grade {
    /// Grade for a performance score.
    ///
    /// Thresholds: S >= 80, A >= 65, B >= 50, C >= 35, D >= 20, else F.
    #[must_use]
    pub fn from_performance(score: f32) -> Self {
        if score >= 80.0 {
            Self::S
        } else if score >= 65.0 {
            Self::A
        } else if score >= 50.0 {
            Self::B
        } else if score >= 35.0 {
            Self::C
        } else if score >= 20.0 {
            Self::D
        } else {
            Self::F
        }
    }
}

/// Running performance record for one combatant.
///
/// Accumulates kills, deaths, and the judgments of this combatant's own
/// deaths. Derived metrics (K/D, average blame, performance score, grade) are
/// computed on read so the record itself stays a plain accumulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantRecord {
    pub id: CombatantId,
    pub team: Team,
    pub kills: u32,
    pub deaths: u32,
    total_blame: f32,
    /// How often each tag was the primary tag of one of this combatant's
    /// deaths, in first-occurrence order.
    mistake_counts: Vec<(MistakeTag, u32)>,
    judgments: Vec<DeathJudgment>,
}

impl CombatantRecord {
    fn new(id: CombatantId, team: Team) -> Self {
        Self {
            id,
            team,
            kills: 0,
            deaths: 0,
            total_blame: 0.0,
            mistake_counts: vec![],
            judgments: vec![],
        }
    }

    fn record_judgment(&mut self, judgment: DeathJudgment) {
        self.deaths += 1;
        self.total_blame += judgment.blame;
        let primary = judgment.primary;
        if let Some((_, count)) = self
            .mistake_counts
            .iter_mut()
            .find(|(tag, _)| *tag == primary)
        {
            *count += 1;
        } else {
            self.mistake_counts.push((primary, 1));
        }
        self.judgments.push(judgment);
    }

    /// Judgments of this combatant's deaths, in the order they were recorded.
    #[must_use]
    pub fn judgments(&self) -> &[DeathJudgment] {
        &self.judgments
    }

    /// Kill/death ratio; deaths are floored at 1 so a deathless combatant
    /// keeps a finite ratio.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn kd_ratio(&self) -> f32 {
        self.kills as f32 / self.deaths.max(1) as f32
    }

    /// Mean blame over this combatant's judged deaths, 0 before any death.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn avg_blame(&self) -> f32 {
        if self.judgments.is_empty() {
            0.0
        } else {
            self.total_blame / self.judgments.len() as f32
        }
    }

    /// Overall performance: K/D weighted against accumulated blame.
    ///
    /// `max(0, kd * 40 - avg_blame * 0.4 + 20)`
    #[must_use]
    pub fn performance_score(&self) -> f32 {
        (self.kd_ratio() * 40.0 - self.avg_blame() * 0.4 + 20.0).max(0.0)
    }

    /// Letter grade for the current performance score.
    #[must_use]
    pub fn grade(&self) -> Grade {
        Grade::from_performance(self.performance_score())
    }

    /// The highest-severity judgment of this combatant's deaths (first on
    /// tie), or `None` before any death.
    #[must_use]
    pub fn worst_death(&self) -> Option<&DeathJudgment> {
        self.judgments.iter().fold(None, |best, judgment| match best {
            Some(current) if current.severity >= judgment.severity => Some(current),
            _ => Some(judgment),
        })
    }

    /// Up to `n` most frequent primary mistakes, ties in first-occurrence
    /// order.
    #[must_use]
    pub fn top_mistakes(&self, n: usize) -> Vec<(MistakeTag, u32)> {
        let mut ranked = self.mistake_counts.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

/// Cross-round ledger of every combatant seen in the match.
///
/// Entries are created on first sight (first kill or first judged death) and
/// kept in insertion order, which doubles as the stable tie-break for
/// [`rankings`](Self::rankings). Round transitions never mutate recorded
/// entries.
#[derive(Debug, Clone, Default)]
pub struct PerformanceLedger {
    records: Vec<CombatantRecord>,
    index: HashMap<CombatantId, usize>,
}

impl PerformanceLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entry_mut(&mut self, id: &CombatantId, team: Team) -> &mut CombatantRecord {
        let slot = *self.index.entry(id.clone()).or_insert_with(|| {
            self.records.push(CombatantRecord::new(id.clone(), team));
            self.records.len() - 1
        });
        &mut self.records[slot]
    }

    /// Credits a kill to `attacker`, creating a ledger entry on first sight.
    pub fn record_kill(&mut self, attacker: &CombatantId, team: Team) {
        self.entry_mut(attacker, team).kills += 1;
    }

    /// Appends a judgment to its victim's record.
    ///
    /// Idempotent per elimination: a judgment for a `(round, tick)` the
    /// victim's record already holds is dropped, so a backward-seek replay of
    /// the current round cannot double-count deaths. Returns `true` when the
    /// judgment was recorded.
    pub fn record_judgment(&mut self, judgment: DeathJudgment) -> bool {
        let victim = judgment.victim.clone();
        let team = judgment.victim_team;
        let record = self.entry_mut(&victim, team);
        if record
            .judgments
            .iter()
            .any(|j| j.round == judgment.round && j.tick == judgment.tick)
        {
            return false;
        }
        record.record_judgment(judgment);
        true
    }

    /// Looks up one combatant's record.
    #[must_use]
    pub fn get(&self, id: &CombatantId) -> Option<&CombatantRecord> {
        self.index.get(id).map(|&slot| &self.records[slot])
    }

    /// All records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[CombatantRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records sorted by descending performance score.
    ///
    /// The sort is stable, so equal scores keep first-appearance order.
    #[must_use]
    pub fn rankings(&self) -> Vec<&CombatantRecord> {
        let mut ranked = self.records.iter().collect::<Vec<_>>();
        ranked.sort_by(|a, b| b.performance_score().total_cmp(&a.performance_score()));
        ranked
    }
}
