use serde::{Deserialize, Serialize};

use crate::core::position::Position;

/// Ticks a blinding effect stays active after popping (1.5 s at 64 t/s).
pub const BLIND_WINDOW_TICKS: u32 = 96;

/// Radius within which a blinding effect impairs a combatant.
pub const BLIND_RADIUS: f32 = 800.0;

/// Radius within which a burning area damages a combatant.
pub const FIRE_RADIUS: f32 = 180.0;

/// Kind of area-denial effect.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AreaEffectKind {
    /// Blinding burst (flash); active for a fixed window after popping.
    Blind,
    /// Burning area (incendiary/molotov); active for its full burn interval.
    Fire,
}

/// An area-denial effect with its active tick interval and radius.
///
/// Both interval bounds are inclusive: the effect is active at every tick
/// `t` with `start_tick <= t <= end_tick`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaEffect {
    pub kind: AreaEffectKind,
    pub origin: Position,
    pub start_tick: u32,
    pub end_tick: u32,
    pub radius: f32,
}

impl AreaEffect {
    /// A blinding effect popped at `pop_tick`, active for
    /// [`BLIND_WINDOW_TICKS`] afterwards.
    #[must_use]
    pub const fn blind(origin: Position, pop_tick: u32) -> Self {
        Self {
            kind: AreaEffectKind::Blind,
            origin,
            start_tick: pop_tick,
            end_tick: pop_tick + BLIND_WINDOW_TICKS,
            radius: BLIND_RADIUS,
        }
    }

    /// A burning area active over `[start_tick, end_tick]`.
    #[must_use]
    pub const fn fire(origin: Position, start_tick: u32, end_tick: u32) -> Self {
        Self {
            kind: AreaEffectKind::Fire,
            origin,
            start_tick,
            end_tick,
            radius: FIRE_RADIUS,
        }
    }

    /// Whether the effect is active at `tick` (inclusive on both bounds).
    #[must_use]
    pub const fn active_at(&self, tick: u32) -> bool {
        self.start_tick <= tick && tick <= self.end_tick
    }

    /// Whether the effect reaches a combatant at `position` at `tick`.
    ///
    /// Distance is a strict `<` comparison against the effect radius.
    #[must_use]
    pub fn reaches(&self, position: Position, tick: u32) -> bool {
        self.active_at(tick) && self.origin.distance_to(position) < self.radius
    }
}
