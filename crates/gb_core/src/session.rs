//! Per-team-view session state.
//!
//! One `TeamSession` is constructed per mounted team view: roster fetched,
//! board hydrated once from the persisted lineup, then mutated by user
//! interaction until the save payload is produced. The session is the only
//! mutation surface over the board; it is a plain owned value, not shared
//! state.

use tracing::{info, warn};

use crate::error::{LineupError, Result};
use crate::formation::{LineupBoard, LineupConfig, SavedLineup, SlotRef};
use crate::models::Player;
use crate::roster::Roster;

#[derive(Debug, Clone)]
pub struct TeamSession {
    team_id: String,
    roster: Roster,
    board: LineupBoard,
}

impl TeamSession {
    pub fn new(team_id: impl Into<String>, roster: Roster, config: LineupConfig) -> Self {
        Self { team_id: team_id.into(), roster, board: LineupBoard::new(config) }
    }

    pub fn team_id(&self) -> &str {
        &self.team_id
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn board(&self) -> &LineupBoard {
        &self.board
    }

    /// Hydrate the board from a persisted lineup. Guarded to run at most
    /// once per session so a re-fetch never overwrites in-progress edits.
    pub fn hydrate(&mut self, saved: &SavedLineup) -> bool {
        let ran = self.board.hydrate(saved, &self.roster);
        if ran {
            info!(
                team_id = %self.team_id,
                starters = self.board.starters_filled(),
                "lineup hydrated from saved formation"
            );
        }
        ran
    }

    /// Players available for the given slot (or unbound players when no
    /// slot is targeted), after the match-readiness filter.
    pub fn eligible_players(&self, slot: Option<SlotRef>) -> Vec<&Player> {
        self.board.eligible_players(self.roster.match_ready_pool(), slot)
    }

    pub fn select_slot(&mut self, slot: Option<SlotRef>) {
        self.board.select_slot(slot);
    }

    pub fn selected_slot(&self) -> Option<SlotRef> {
        self.board.selected_slot()
    }

    /// Assign a roster player to a slot by id. Rejections come back as
    /// typed errors for the caller to surface; the board is untouched.
    pub fn assign(&mut self, player_id: &str, slot: SlotRef) -> Result<()> {
        let player = self
            .roster
            .get(player_id)
            .ok_or_else(|| LineupError::NotOnRoster(player_id.to_string()))?;
        if !player.is_match_ready() {
            return Err(LineupError::NotMatchReady(player_id.to_string()));
        }
        let player = player.clone();
        self.board.assign(player, slot).inspect_err(|err| {
            warn!(team_id = %self.team_id, %slot, %err, "assignment rejected");
        })
    }

    pub fn remove(&mut self, slot: SlotRef) -> Option<Player> {
        self.board.remove(slot)
    }

    /// Auto-fill empty starter slots from the match-ready pool.
    pub fn auto_fill(&mut self) -> usize {
        let pool: Vec<Player> = self.roster.match_ready_pool().into_iter().cloned().collect();
        self.board.auto_fill(&pool)
    }

    /// The POST payload, gated on a complete starting six.
    pub fn save_payload(&self) -> Result<SavedLineup> {
        let payload = self.board.serialize_for_save()?;
        info!(team_id = %self.team_id, "lineup serialized for save");
        Ok(payload)
    }
}
