use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position categories for gridball players.
///
/// The lineup board only cares about these three roles plus the Flex
/// wildcard (see `formation::SlotRequirement`); there are no sub-positions.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Blocker,
    Runner,
    Passer,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Blocker, Role::Runner, Role::Passer];

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Blocker => "Blocker",
            Role::Runner => "Runner",
            Role::Passer => "Passer",
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Role::Blocker => "BLK",
            Role::Runner => "RUN",
            Role::Passer => "PAS",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BLOCKER" | "BLK" => Ok(Role::Blocker),
            "RUNNER" | "RUN" => Ok(Role::Runner),
            "PASSER" | "PAS" => Ok(Role::Passer),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

// Roster feeds arrive from the server with inconsistent casing, so role
// parsing must stay case-insensitive on the wire.
impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Injury status as reported by the roster endpoint.
///
/// Players at `Severe` are excluded from the eligible pool before any slot
/// filtering happens.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InjuryStatus {
    #[default]
    Healthy,
    Minor,
    Moderate,
    Severe,
}

/// The six core numeric attributes, 0-100 scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerAttributes {
    pub speed: u8,
    pub power: u8,
    pub agility: u8,
    pub throwing: u8,
    pub catching: u8,
    pub kicking: u8,
}

impl PlayerAttributes {
    /// Creates attributes with a uniform value.
    pub fn from_uniform(val: u8) -> Self {
        Self {
            speed: val,
            power: val,
            agility: val,
            throwing: val,
            catching: val,
            kicking: val,
        }
    }

    /// Power score: plain mean of the six attributes. Used only as the
    /// auto-fill ranking key, so it stays an f32 to avoid rounding ties.
    pub fn power_score(&self) -> f32 {
        let sum = self.speed as u32
            + self.power as u32
            + self.agility as u32
            + self.throwing as u32
            + self.catching as u32
            + self.kicking as u32;
        sum as f32 / 6.0
    }
}

impl Default for PlayerAttributes {
    fn default() -> Self {
        Self::from_uniform(50)
    }
}

/// Roster player as fetched from the server.
///
/// Immutable from the lineup board's point of view: the board holds clones
/// and never writes back into the roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub attributes: PlayerAttributes,
    #[serde(default)]
    pub stamina: u8,
    #[serde(default)]
    pub injury: InjuryStatus,
}

impl Player {
    pub fn power_score(&self) -> f32 {
        self.attributes.power_score()
    }

    /// Severe injury or zero stamina rules a player out of the eligible
    /// pool entirely, before any per-slot filtering.
    pub fn is_match_ready(&self) -> bool {
        self.injury != InjuryStatus::Severe && self.stamina > 0
    }
}
