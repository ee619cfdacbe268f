//! Wire format for the formation endpoints.
//!
//! Matches the REST contract: `GET/POST /api/teams/{teamId}/formation` with
//! body `{starters, substitutes, flexSubs}`. Empty slots are omitted
//! entirely; there are never null placeholders in the payload. `substitutes`
//! is the positional queues flattened in queue order (blockers, runners,
//! passers), each queue in entry order.

use serde::{Deserialize, Serialize};

use crate::models::Player;

fn default_schema_version() -> u8 {
    crate::SCHEMA_VERSION
}

/// A persisted player reference. Only `id` drives hydration; `name` rides
/// along for display of stale references.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl From<&Player> for PlayerRef {
    fn from(player: &Player) -> Self {
        Self { id: player.id.clone(), name: Some(player.name.clone()) }
    }
}

/// Saved lineup payload.
///
/// `flexSubs` is optional on read for compatibility with older saves; on
/// write it is always emitted explicitly (possibly empty), so readers never
/// need to guess flex assignments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SavedLineup {
    #[serde(default = "default_schema_version")]
    pub schema_version: u8,
    #[serde(default)]
    pub starters: Vec<PlayerRef>,
    #[serde(default)]
    pub substitutes: Vec<PlayerRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex_subs: Option<Vec<PlayerRef>>,
}

impl Default for SavedLineup {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            starters: Vec::new(),
            substitutes: Vec::new(),
            flex_subs: None,
        }
    }
}
