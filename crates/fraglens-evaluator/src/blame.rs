//! Blame apportionment: a pure function of severity and context.
//!
//! `blame = clamp(severity * 20 + isolation bonus - crowd discount
//! - trade discount - blind discount, 0, 100)`
//!
//! The modifiers acknowledge circumstances: deep isolation adds blame, a
//! crowd of hostiles, a successful trade, or being blinded each take some
//! away. No hidden state; the score depends only on the already-computed
//! facts.

use crate::classifier::DeathFacts;

/// Isolation distance above which the extra isolation penalty applies.
pub const ISOLATION_BONUS_DISTANCE: f32 = 1000.0;

/// Hostile count at which the crowd discount applies.
pub const CROWD_DISCOUNT_THRESHOLD: u32 = 3;

const SEVERITY_WEIGHT: f32 = 20.0;
const ISOLATION_BONUS: f32 = 10.0;
const CROWD_DISCOUNT: f32 = 10.0;
const TRADE_DISCOUNT: f32 = 15.0;
const BLIND_DISCOUNT: f32 = 5.0;

/// Computes the 0-100 blame score for one death.
#[must_use]
pub fn blame_score(severity: u8, facts: &DeathFacts) -> f32 {
    let mut blame = f32::from(severity) * SEVERITY_WEIGHT;
    if facts.isolation_distance > ISOLATION_BONUS_DISTANCE {
        blame += ISOLATION_BONUS;
    }
    if facts.hostile_count >= CROWD_DISCOUNT_THRESHOLD {
        blame -= CROWD_DISCOUNT;
    }
    if facts.traded {
        blame -= TRADE_DISCOUNT;
    }
    if facts.blinded {
        blame -= BLIND_DISCOUNT;
    }
    blame.clamp(0.0, 100.0)
}
