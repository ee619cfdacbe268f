//! # gb_core - Gridball Lineup Assignment Engine
//!
//! This library implements the tap-to-assign lineup board for the gridball
//! management game: 6 starter slots plus four substitution queues, with
//! global uniqueness and per-slot role constraints enforced entirely in
//! client state before the formation is persisted.
//!
//! ## Features
//! - Deterministic auto-fill (no randomness, fixed slot order)
//! - Hydrate-once lifecycle so fetch refreshes never clobber edits
//! - JSON API for host integration

pub mod api;
pub mod error;
pub mod formation;
pub mod models;
pub mod roster;
pub mod session;

// Re-export main API functions
pub use api::{auto_fill_lineup_json, load_lineup_json, save_lineup_json};
pub use error::{LineupError, Result};

// Re-export core types
pub use formation::{
    BenchRole, FlexOverlapPolicy, LineupBoard, LineupConfig, PlayerRef, SavedLineup, SlotRef,
    SlotRequirement, BENCH_SIZE, STARTER_COUNT, STARTER_SLOTS,
};
pub use models::{InjuryStatus, Player, PlayerAttributes, Role};
pub use roster::Roster;
pub use session::TeamSession;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn generate_test_roster() -> serde_json::Value {
        json!([
            {"id": "b1", "name": "Blocker One", "role": "blocker", "stamina": 90,
             "attributes": {"speed": 40, "power": 90, "agility": 50, "throwing": 30, "catching": 50, "kicking": 40}},
            {"id": "b2", "name": "Blocker Two", "role": "blocker", "stamina": 85,
             "attributes": {"speed": 45, "power": 80, "agility": 50, "throwing": 30, "catching": 50, "kicking": 40}},
            {"id": "r1", "name": "Runner One", "role": "runner", "stamina": 95,
             "attributes": {"speed": 90, "power": 50, "agility": 80, "throwing": 30, "catching": 70, "kicking": 40}},
            {"id": "r2", "name": "Runner Two", "role": "runner", "stamina": 95,
             "attributes": {"speed": 85, "power": 50, "agility": 75, "throwing": 30, "catching": 70, "kicking": 40}},
            {"id": "p1", "name": "Passer One", "role": "passer", "stamina": 90,
             "attributes": {"speed": 55, "power": 45, "agility": 60, "throwing": 95, "catching": 60, "kicking": 50}},
            {"id": "p2", "name": "Passer Two", "role": "passer", "stamina": 90,
             "attributes": {"speed": 50, "power": 45, "agility": 60, "throwing": 85, "catching": 60, "kicking": 50}},
            {"id": "x1", "name": "Benched", "role": "runner", "stamina": 70},
        ])
    }

    #[test]
    fn test_auto_fill_via_json_api() {
        let request = json!({
            "schema_version": 1,
            "team_id": "team-json",
            "players": generate_test_roster(),
        })
        .to_string();

        let result = auto_fill_lineup_json(&request);
        assert!(result.is_ok(), "auto-fill should succeed");

        let parsed: serde_json::Value = serde_json::from_str(&result.unwrap()).unwrap();
        assert_eq!(parsed["schema_version"], 1);
        assert_eq!(parsed["complete"], true);
        assert_eq!(parsed["lineup"]["starters"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn test_auto_fill_determinism() {
        let request = json!({
            "schema_version": 1,
            "team_id": "team-json",
            "players": generate_test_roster(),
        })
        .to_string();

        let result1 = auto_fill_lineup_json(&request).unwrap();
        let result2 = auto_fill_lineup_json(&request).unwrap();
        assert_eq!(result1, result2, "same roster should produce same lineup");
    }

    #[test]
    fn test_save_roundtrip_via_json_api() {
        let request = json!({
            "schema_version": 1,
            "team_id": "team-json",
            "players": generate_test_roster(),
        })
        .to_string();

        let response = auto_fill_lineup_json(&request).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();

        // Feed the snapshot back in as the persisted lineup.
        let reload = json!({
            "schema_version": 1,
            "team_id": "team-json",
            "players": generate_test_roster(),
            "saved": parsed["lineup"],
        })
        .to_string();

        let payload = save_lineup_json(&reload).unwrap();
        let saved: SavedLineup = serde_json::from_str(&payload).unwrap();
        assert_eq!(saved.starters.len(), 6);
        assert_eq!(
            saved.starters.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
            parsed["lineup"]["starters"]
                .as_array()
                .unwrap()
                .iter()
                .map(|v| v["id"].as_str().unwrap())
                .collect::<Vec<_>>()
        );
    }
}
