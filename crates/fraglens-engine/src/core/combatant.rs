use serde::{Deserialize, Serialize};

use crate::core::position::Position;

/// Stable identifier for one match participant.
///
/// Replay decoders commonly only expose display names, so the id is an opaque
/// string rather than a numeric handle. Id/team assignment is required to be
/// consistent across all events of one match (decoder contract).
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CombatantId(String);

impl CombatantId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CombatantId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CombatantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Side of a combatant in a team-vs-team match.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    #[display("CT")]
    Ct,
    #[display("T")]
    T,
    #[display("SPEC")]
    Spectator,
}

impl Team {
    /// Parses a decoder-supplied team name.
    ///
    /// Returns `None` for unknown names; callers substitute their configured
    /// fallback team so that malformed input never aborts analysis.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "ct" | "counter-terrorist" | "counterterrorist" => Some(Self::Ct),
            "t" | "terrorist" => Some(Self::T),
            "spec" | "spectator" => Some(Self::Spectator),
            _ => None,
        }
    }
}

/// State of one participant at (or just before) an elimination tick.
///
/// The replay decoder delivers one snapshot per participant, dead or alive,
/// alongside every elimination event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantSnapshot {
    pub id: CombatantId,
    pub team: Team,
    pub position: Position,
    pub alive: bool,
}

impl CombatantSnapshot {
    #[must_use]
    pub fn new(id: impl Into<CombatantId>, team: Team, position: Position, alive: bool) -> Self {
        Self {
            id: id.into(),
            team,
            position,
            alive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_from_name_known_aliases() {
        assert_eq!(Team::from_name("CT"), Some(Team::Ct));
        assert_eq!(Team::from_name("counter-terrorist"), Some(Team::Ct));
        assert_eq!(Team::from_name("t"), Some(Team::T));
        assert_eq!(Team::from_name("Terrorist"), Some(Team::T));
        assert_eq!(Team::from_name("spectator"), Some(Team::Spectator));
    }

    #[test]
    fn test_team_from_name_unknown_is_none() {
        assert_eq!(Team::from_name(""), None);
        assert_eq!(Team::from_name("blue"), None);
    }

    #[test]
    fn test_combatant_id_display_and_serde() {
        let id = CombatantId::new("device");
        assert_eq!(id.to_string(), "device");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"device\"");
        let back: CombatantId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
