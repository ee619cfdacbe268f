//! The lineup board: roster-to-slot assignment state machine.
//!
//! One board exists per team-view session. It is hydrated at most once from
//! a saved lineup, mutated by tap-to-assign interactions, and serialized
//! wholesale for the save call. The board owns clones of roster players and
//! never writes back into the roster.
//!
//! Invariant: a player id occupies at most one slot across the 6 starter
//! slots and 12 bench entries. The single sanctioned exception is the flex
//! queue under `FlexOverlapPolicy::AllowBenchOverlap`, which tolerates a
//! second binding in a positional queue.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{LineupError, Result};
use crate::models::{Player, Role};
use crate::roster::Roster;

use super::config::{FlexOverlapPolicy, LineupConfig};
use super::slots::{BenchRole, SlotRef, SlotRequirement, BENCH_SIZE, STARTER_COUNT, STARTER_SLOTS};
use super::wire::{PlayerRef, SavedLineup};

/// The four substitution queues.
#[derive(Debug, Clone, Default)]
struct BenchQueues {
    blockers: [Option<Player>; BENCH_SIZE],
    runners: [Option<Player>; BENCH_SIZE],
    passers: [Option<Player>; BENCH_SIZE],
    flex: [Option<Player>; BENCH_SIZE],
}

impl BenchQueues {
    fn queue(&self, role: BenchRole) -> &[Option<Player>; BENCH_SIZE] {
        match role {
            BenchRole::Blockers => &self.blockers,
            BenchRole::Runners => &self.runners,
            BenchRole::Passers => &self.passers,
            BenchRole::Flex => &self.flex,
        }
    }

    fn queue_mut(&mut self, role: BenchRole) -> &mut [Option<Player>; BENCH_SIZE] {
        match role {
            BenchRole::Blockers => &mut self.blockers,
            BenchRole::Runners => &mut self.runners,
            BenchRole::Passers => &mut self.passers,
            BenchRole::Flex => &mut self.flex,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LineupBoard {
    config: LineupConfig,
    starters: [Option<Player>; STARTER_COUNT],
    bench: BenchQueues,
    selected_slot: Option<SlotRef>,
    hydrated: bool,
}

impl Default for LineupBoard {
    fn default() -> Self {
        Self::new(LineupConfig::default())
    }
}

impl LineupBoard {
    pub fn new(config: LineupConfig) -> Self {
        Self {
            config,
            starters: Default::default(),
            bench: BenchQueues::default(),
            selected_slot: None,
            hydrated: false,
        }
    }

    pub fn config(&self) -> LineupConfig {
        self.config
    }

    // ========================
    // Slot selection (drives which picker is open)
    // ========================

    pub fn select_slot(&mut self, slot: Option<SlotRef>) {
        self.selected_slot = slot;
    }

    pub fn selected_slot(&self) -> Option<SlotRef> {
        self.selected_slot
    }

    // ========================
    // Slot access
    // ========================

    pub fn starter(&self, index: usize) -> Option<&Player> {
        self.starters.get(index).and_then(|slot| slot.as_ref())
    }

    pub fn bench_entry(&self, queue: BenchRole, index: usize) -> Option<&Player> {
        self.bench.queue(queue).get(index).and_then(|slot| slot.as_ref())
    }

    pub fn slot(&self, slot: SlotRef) -> Option<&Player> {
        match slot {
            SlotRef::Starter(idx) => self.starter(idx),
            SlotRef::Bench(queue, idx) => self.bench_entry(queue, idx),
        }
    }

    pub fn starters_filled(&self) -> usize {
        self.starters.iter().filter(|slot| slot.is_some()).count()
    }

    /// Save gate: all 6 starter slots filled. Client-side only; the server
    /// does not re-check this.
    pub fn is_complete(&self) -> bool {
        self.starters_filled() == STARTER_COUNT
    }

    pub fn hydrated(&self) -> bool {
        self.hydrated
    }

    // ========================
    // Bindings and eligibility
    // ========================

    /// Every slot currently holding the given player id, in scan order
    /// (starters, then bench queues). More than one entry is only possible
    /// under the relaxed flex policy.
    pub fn bindings_of(&self, player_id: &str) -> Vec<SlotRef> {
        let mut bindings = Vec::new();
        for (idx, slot) in self.starters.iter().enumerate() {
            if slot.as_ref().is_some_and(|p| p.id == player_id) {
                bindings.push(SlotRef::Starter(idx));
            }
        }
        for queue in BenchRole::ALL {
            for (idx, slot) in self.bench.queue(queue).iter().enumerate() {
                if slot.as_ref().is_some_and(|p| p.id == player_id) {
                    bindings.push(SlotRef::Bench(queue, idx));
                }
            }
        }
        bindings
    }

    /// The existing binding that blocks assigning this player to `target`,
    /// if any. The target slot itself never blocks (re-assigning a player to
    /// their own slot is a no-op, not a duplicate). Under the relaxed
    /// policy, positional-queue bindings do not block flex-queue targets.
    fn blocking_binding(&self, player_id: &str, target: SlotRef) -> Option<SlotRef> {
        let relaxed_flex = target.is_flex_bench()
            && self.config.flex_overlap == FlexOverlapPolicy::AllowBenchOverlap;
        self.bindings_of(player_id).into_iter().find(|&binding| {
            binding != target && !(relaxed_flex && binding.is_positional_bench())
        })
    }

    /// List players from the pool eligible for a slot.
    ///
    /// With no slot, returns everyone not bound anywhere on the board. With
    /// a slot, removes players bound to another slot (subject to the flex
    /// relaxation) and applies the slot's role filter. The pool is expected
    /// to be pre-filtered for match readiness.
    pub fn eligible_players<'a, I>(&self, pool: I, slot: Option<SlotRef>) -> Vec<&'a Player>
    where
        I: IntoIterator<Item = &'a Player>,
    {
        pool.into_iter()
            .filter(|player| match slot {
                None => self.bindings_of(&player.id).is_empty(),
                Some(target) => {
                    let role_ok = match target {
                        SlotRef::Starter(idx) => STARTER_SLOTS
                            .get(idx)
                            .is_some_and(|spec| spec.requirement.accepts(player.role)),
                        SlotRef::Bench(queue, _) => queue.accepts(player.role),
                    };
                    role_ok && self.blocking_binding(&player.id, target).is_none()
                }
            })
            .collect()
    }

    // ========================
    // Mutations
    // ========================

    fn check_slot_in_range(&self, slot: SlotRef) -> Result<()> {
        match slot {
            SlotRef::Starter(idx) if idx >= STARTER_COUNT => {
                Err(LineupError::UnknownSlot(format!("starter[{}]", idx)))
            }
            SlotRef::Bench(_, idx) if idx >= BENCH_SIZE => {
                Err(LineupError::BenchIndexOutOfRange { index: idx, capacity: BENCH_SIZE })
            }
            _ => Ok(()),
        }
    }

    /// Assign a player to a slot. Rejection leaves the board unchanged;
    /// assignment into an occupied slot replaces its occupant.
    pub fn assign(&mut self, player: Player, slot: SlotRef) -> Result<()> {
        self.check_slot_in_range(slot)?;

        let required = match slot {
            SlotRef::Starter(idx) => match STARTER_SLOTS[idx].requirement {
                SlotRequirement::Role(role) => Some(role),
                SlotRequirement::Flex => None,
            },
            SlotRef::Bench(BenchRole::Blockers, _) => Some(Role::Blocker),
            SlotRef::Bench(BenchRole::Runners, _) => Some(Role::Runner),
            SlotRef::Bench(BenchRole::Passers, _) => Some(Role::Passer),
            SlotRef::Bench(BenchRole::Flex, _) => None,
        };
        if let Some(required) = required {
            if required != player.role {
                return Err(LineupError::RoleMismatch {
                    slot: slot.to_string(),
                    player_id: player.id,
                    required,
                    actual: player.role,
                });
            }
        }

        if let Some(existing) = self.blocking_binding(&player.id, slot) {
            return Err(LineupError::AlreadyAssigned {
                player_id: player.id,
                slot: existing.to_string(),
            });
        }

        match slot {
            SlotRef::Starter(idx) => self.starters[idx] = Some(player),
            SlotRef::Bench(queue, idx) => self.bench.queue_mut(queue)[idx] = Some(player),
        }
        Ok(())
    }

    /// Clear a slot unconditionally. Removing from an empty or out-of-range
    /// slot is a no-op. Other slots are never affected.
    pub fn remove(&mut self, slot: SlotRef) -> Option<Player> {
        match slot {
            SlotRef::Starter(idx) => self.starters.get_mut(idx)?.take(),
            SlotRef::Bench(queue, idx) => self.bench.queue_mut(queue).get_mut(idx)?.take(),
        }
    }

    /// Fill every empty starter slot with the highest power-score eligible
    /// player, iterating slots in declaration order. Filled slots and the
    /// bench are untouched. Ties go to the earlier pool entry (strict
    /// greater-than comparison). Returns the number of slots filled.
    pub fn auto_fill(&mut self, pool: &[Player]) -> usize {
        let mut filled = 0;
        for idx in 0..STARTER_COUNT {
            if self.starters[idx].is_some() {
                continue;
            }
            let best = self
                .eligible_players(pool.iter(), Some(SlotRef::Starter(idx)))
                .into_iter()
                .fold(None::<&Player>, |best, candidate| match best {
                    Some(current) if candidate.power_score() > current.power_score() => {
                        Some(candidate)
                    }
                    Some(current) => Some(current),
                    None => Some(candidate),
                });
            if let Some(player) = best {
                self.starters[idx] = Some(player.clone());
                filled += 1;
            }
        }
        filled
    }

    // ========================
    // Hydration
    // ========================

    /// Rebuild board state from a saved lineup against the current roster.
    ///
    /// Runs at most once per board; later calls are no-ops so a fetch
    /// refresh can never clobber in-progress edits. Returns whether
    /// hydration actually ran. Persisted ids no longer on the roster are
    /// dropped silently (logged at debug).
    pub fn hydrate(&mut self, saved: &SavedLineup, roster: &Roster) -> bool {
        if self.hydrated {
            return false;
        }
        self.hydrated = true;

        let mut used: HashSet<&str> = HashSet::new();

        // Starters: first empty slot whose requirement matches, list order.
        for player_ref in &saved.starters {
            let Some(player) = roster.get(&player_ref.id) else {
                debug!(player_id = %player_ref.id, "dropping stale starter reference");
                continue;
            };
            if used.contains(player.id.as_str()) {
                continue;
            }
            let target = (0..STARTER_COUNT).find(|&idx| {
                self.starters[idx].is_none()
                    && STARTER_SLOTS[idx].requirement.accepts(player.role)
            });
            if let Some(idx) = target {
                self.starters[idx] = Some(player.clone());
                used.insert(player.id.as_str());
            }
        }

        // Positional queues: bucket by the player's current role, first
        // empty entry. Overflow is remembered as flex-inference input.
        let mut overflow: Vec<&Player> = Vec::new();
        for player_ref in &saved.substitutes {
            let Some(player) = roster.get(&player_ref.id) else {
                debug!(player_id = %player_ref.id, "dropping stale substitute reference");
                continue;
            };
            if used.contains(player.id.as_str()) {
                continue;
            }
            let queue = self.bench.queue_mut(BenchRole::for_role(player.role));
            match queue.iter_mut().find(|entry| entry.is_none()) {
                Some(entry) => {
                    *entry = Some(player.clone());
                    used.insert(player.id.as_str());
                }
                None => {
                    debug!(player_id = %player.id, "positional queue full, substitute spills over");
                    overflow.push(player);
                }
            }
        }

        // Flex queue: explicit list when present; otherwise either the
        // legacy leftover inference (opt-in) or nothing at all.
        let flex_candidates: Vec<&Player> = match &saved.flex_subs {
            Some(refs) => refs.iter().filter_map(|r| roster.get(&r.id)).collect(),
            None if self.config.infer_flex_on_missing => overflow,
            None => Vec::new(),
        };
        for player in flex_candidates {
            let target = self.bench.flex.iter().position(|entry| entry.is_none());
            let Some(idx) = target else { break };
            if self.blocking_binding(&player.id, SlotRef::Bench(BenchRole::Flex, idx)).is_some()
            {
                continue;
            }
            self.bench.flex[idx] = Some(player.clone());
        }

        true
    }

    // ========================
    // Serialization
    // ========================

    /// Current board contents as a wire payload, empty slots omitted.
    /// No completeness gate; use `serialize_for_save` for the save path.
    pub fn snapshot(&self) -> SavedLineup {
        let starters = self.starters.iter().flatten().map(PlayerRef::from).collect();
        let substitutes = BenchRole::POSITIONAL
            .iter()
            .flat_map(|&queue| self.bench.queue(queue).iter().flatten())
            .map(PlayerRef::from)
            .collect();
        let flex_subs = self.bench.flex.iter().flatten().map(PlayerRef::from).collect();
        SavedLineup {
            schema_version: crate::SCHEMA_VERSION,
            starters,
            substitutes,
            // Always explicit, so hydration never has to infer.
            flex_subs: Some(flex_subs),
        }
    }

    /// The save payload, gated on a full starting six.
    pub fn serialize_for_save(&self) -> Result<SavedLineup> {
        let filled = self.starters_filled();
        if filled < STARTER_COUNT {
            return Err(LineupError::IncompleteLineup { filled, required: STARTER_COUNT });
        }
        Ok(self.snapshot())
    }
}
