//! Team roster as fetched per session.
//!
//! The roster is hydration input and lookup table for the lineup board; the
//! board never mutates it. Taxi-squad members are stripped at construction,
//! matching the client flow where the excluded-id set is fetched separately.

use std::collections::HashSet;

use crate::models::Player;

#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    /// Build a roster from a fetched player list minus the taxi-squad ids.
    pub fn from_fetch(players: Vec<Player>, taxi_squad: &HashSet<String>) -> Self {
        Self {
            players: players.into_iter().filter(|p| !taxi_squad.contains(&p.id)).collect(),
        }
    }

    pub fn get(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// The eligible pool: everyone not ruled out by severe injury or zero
    /// stamina. Slot-level filtering happens downstream on the board.
    pub fn match_ready_pool(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| p.is_match_ready()).collect()
    }
}
