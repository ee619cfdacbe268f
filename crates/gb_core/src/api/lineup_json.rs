//! JSON API for lineup operations.
//!
//! String-in/string-out boundary for host integration: the caller ships the
//! fetched roster (and optionally the persisted lineup) as one request
//! document and gets the resulting lineup state back. Errors are returned
//! as `CODE: message` strings.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::formation::{LineupConfig, SavedLineup};
use crate::models::Player;
use crate::roster::Roster;
use crate::session::TeamSession;

/// Stable error codes for host-side branching.
pub mod error_codes {
    pub const INVALID_REQUEST: &str = "E_INVALID_REQUEST";
    pub const INVALID_SCHEMA_VERSION: &str = "E_INVALID_SCHEMA_VERSION";
    pub const INCOMPLETE_LINEUP: &str = "E_INCOMPLETE_LINEUP";
    pub const SERIALIZATION: &str = "E_SERIALIZATION";
}

fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

#[derive(Debug, Deserialize)]
pub struct LineupRequest {
    pub schema_version: u8,
    pub team_id: String,
    /// Fetched roster, post server-side filtering.
    pub players: Vec<Player>,
    /// Ids to exclude from the roster (taxi squad membership).
    #[serde(default)]
    pub taxi_squad: Vec<String>,
    /// Persisted lineup to hydrate from, when one exists.
    #[serde(default)]
    pub saved: Option<SavedLineup>,
    #[serde(default)]
    pub config: LineupConfig,
}

#[derive(Debug, Serialize)]
pub struct LineupResponse {
    pub schema_version: u8,
    pub team_id: String,
    pub filled_starters: usize,
    pub complete: bool,
    pub lineup: SavedLineup,
}

fn parse_request(request: &str) -> Result<LineupRequest, String> {
    let req: LineupRequest = serde_json::from_str(request)
        .map_err(|e| err_code(error_codes::INVALID_REQUEST, e))?;
    if req.schema_version != crate::SCHEMA_VERSION {
        return Err(err_code(
            error_codes::INVALID_SCHEMA_VERSION,
            format!("expected {}, got {}", crate::SCHEMA_VERSION, req.schema_version),
        ));
    }
    Ok(req)
}

fn build_session(req: LineupRequest) -> TeamSession {
    let taxi_squad = req.taxi_squad.into_iter().collect();
    let roster = Roster::from_fetch(req.players, &taxi_squad);
    let mut session = TeamSession::new(req.team_id, roster, req.config);
    if let Some(saved) = &req.saved {
        session.hydrate(saved);
    }
    session
}

fn respond(session: &TeamSession) -> Result<String, String> {
    let board = session.board();
    let response = LineupResponse {
        schema_version: crate::SCHEMA_VERSION,
        team_id: session.team_id().to_string(),
        filled_starters: board.starters_filled(),
        complete: board.is_complete(),
        lineup: board.snapshot(),
    };
    serde_json::to_string(&response).map_err(|e| err_code(error_codes::SERIALIZATION, e))
}

/// Build a session from the roster, hydrate from the persisted lineup when
/// present, and return the resulting board state.
pub fn load_lineup_json(request: &str) -> Result<String, String> {
    let req = parse_request(request)?;
    let session = build_session(req);
    info!(team_id = %session.team_id(), "lineup loaded");
    respond(&session)
}

/// Load, then fill every empty starter slot from the eligible pool.
pub fn auto_fill_lineup_json(request: &str) -> Result<String, String> {
    let req = parse_request(request)?;
    let mut session = build_session(req);
    let filled = session.auto_fill();
    info!(team_id = %session.team_id(), filled, "auto-fill complete");
    respond(&session)
}

/// Load, then produce the POST payload. Fails with `E_INCOMPLETE_LINEUP`
/// when fewer than six starters are set.
pub fn save_lineup_json(request: &str) -> Result<String, String> {
    let req = parse_request(request)?;
    let session = build_session(req);
    let payload = session.save_payload().map_err(|e| {
        warn!(team_id = %session.team_id(), %e, "save rejected");
        err_code(error_codes::INCOMPLETE_LINEUP, e)
    })?;
    serde_json::to_string(&payload).map_err(|e| err_code(error_codes::SERIALIZATION, e))
}
