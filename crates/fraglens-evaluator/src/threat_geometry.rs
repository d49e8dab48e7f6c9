//! Distance, sector, and area-denial facts around a victim position.
//!
//! All functions here are pure: they take positions and return facts, so the
//! classifier can be tested without any geometry and vice versa. Distance
//! thresholds are strict comparisons (`>` / `<`); only tick windows are
//! inclusive at their boundaries.

use std::f32::consts::{FRAC_PI_4, PI};

use fraglens_engine::{AreaEffect, CombatantId, CombatantSnapshot, Position, Team};
use serde::{Deserialize, Serialize};

/// Isolation distance above which a victim counts as isolated.
pub const ISOLATED_DISTANCE: f32 = 900.0;

/// Isolation distance above which a death counts as a solo push
/// (given enough living teammates who could have come along).
pub const SOLO_PUSH_DISTANCE: f32 = 1200.0;

/// Sentinel isolation distance when no living teammate exists.
///
/// Finite on purpose: it must exceed every distance threshold (maps are well
/// under 10k units across) while still behaving sanely in ordinary `>`
/// comparisons, which infinity or NaN would not.
pub const NO_TEAMMATE_DISTANCE: f32 = 10_000.0;

/// Number of 45-degree sectors the arc around a victim is partitioned into.
pub const THREAT_SECTORS: usize = 8;

/// Distance from the victim to the nearest living teammate.
///
/// Returns [`NO_TEAMMATE_DISTANCE`] when the iterator is empty.
pub fn nearest_teammate_distance<I>(victim: Position, teammates: I) -> f32
where
    I: IntoIterator<Item = Position>,
{
    teammates
        .into_iter()
        .map(|teammate| victim.distance_to(teammate))
        .fold(NO_TEAMMATE_DISTANCE, f32::min)
}

/// Count of distinct 45-degree sectors occupied by hostiles around the
/// victim.
///
/// Two hostiles collinear with the victim share a sector; a hostile exactly
/// at the victim position has no bearing and is skipped.
pub fn threat_sector_count<I>(victim: Position, hostiles: I) -> usize
where
    I: IntoIterator<Item = Position>,
{
    let mut occupied = [false; THREAT_SECTORS];
    for hostile in hostiles {
        let dx = hostile.x - victim.x;
        let dy = hostile.y - victim.y;
        if dx == 0.0 && dy == 0.0 {
            continue;
        }
        occupied[sector_of(dy.atan2(dx))] = true;
    }
    occupied.iter().filter(|&&hit| hit).count()
}

/// Maps a bearing in `[-PI, PI]` to its sector index.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn sector_of(angle: f32) -> usize {
    // angle + PI is non-negative, so truncation == floor here
    (((angle + PI) / FRAC_PI_4) as usize) % THREAT_SECTORS
}

/// Geometric and area-denial facts about one victim at the moment of death.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThreatPicture {
    /// Distance to the nearest living teammate ([`NO_TEAMMATE_DISTANCE`]
    /// when the victim was the last one standing).
    pub isolation_distance: f32,
    /// Distinct angular sectors occupied by living hostiles.
    pub threat_sectors: usize,
    /// Living teammates, excluding the victim.
    pub teammate_count: u32,
    /// Living hostiles plus the attacker.
    pub hostile_count: u32,
    /// A blinding effect was active against the victim.
    pub blinded: bool,
    /// The victim stood in an active burning area.
    pub in_fire: bool,
}

impl ThreatPicture {
    /// Assesses the threat picture for one victim.
    ///
    /// `snapshot` is the full participant list at (or just before) the
    /// elimination tick; teammates and hostiles are derived from it by team
    /// and alive flag. The victim's own snapshot entry is excluded from its
    /// teammates.
    #[expect(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn assess(
        victim: &CombatantId,
        victim_team: Team,
        victim_position: Position,
        snapshot: &[CombatantSnapshot],
        effects: &[AreaEffect],
        tick: u32,
    ) -> Self {
        let teammates = snapshot
            .iter()
            .filter(|c| c.alive && c.team == victim_team && c.id != *victim)
            .map(|c| c.position)
            .collect::<Vec<_>>();
        let hostiles = snapshot
            .iter()
            .filter(|c| c.alive && c.team != victim_team)
            .map(|c| c.position)
            .collect::<Vec<_>>();

        let isolation_distance = nearest_teammate_distance(victim_position, teammates.iter().copied());
        let threat_sectors = threat_sector_count(victim_position, hostiles.iter().copied());

        Self {
            isolation_distance,
            threat_sectors,
            teammate_count: teammates.len() as u32,
            // The attacker counts as a hostile even when absent from the
            // snapshot (e.g. already dead by snapshot time).
            hostile_count: hostiles.len() as u32 + 1,
            blinded: effects
                .iter()
                .filter(|e| e.kind.is_blind())
                .any(|e| e.reaches(victim_position, tick)),
            in_fire: effects
                .iter()
                .filter(|e| e.kind.is_fire())
                .any(|e| e.reaches(victim_position, tick)),
        }
    }
}
