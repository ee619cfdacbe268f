//! Board behavior options.
//!
//! Both options exist to keep compatibility paths with older clients behind
//! explicit names; the defaults enforce strict uniqueness and an explicit
//! flex list.

use serde::{Deserialize, Serialize};

/// Duplicate-check policy for the flex substitution queue.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FlexOverlapPolicy {
    /// A player may occupy at most one slot anywhere on the board.
    #[default]
    Strict,
    /// Legacy behavior: flex queue entries only check starters and other
    /// flex entries, so a player may appear in a positional queue and the
    /// flex queue at the same time.
    AllowBenchOverlap,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LineupConfig {
    pub flex_overlap: FlexOverlapPolicy,
    /// When a saved lineup carries no explicit `flexSubs` field, infer flex
    /// assignments from substitutes that did not fit a positional queue.
    /// Off by default: absence means "no flex subs assigned".
    pub infer_flex_on_missing: bool,
}
