//! Fixed slot layout for the 6-a-side lineup.
//!
//! Slot cardinality never changes at runtime: 6 starter slots and four bench
//! queues of 3. Auto-fill and hydration iterate starters in the declaration
//! order of `STARTER_SLOTS`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Role;

/// What a slot accepts: a specific role, or anything (flex/wildcard).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotRequirement {
    Role(Role),
    Flex,
}

impl SlotRequirement {
    pub fn accepts(&self, role: Role) -> bool {
        match self {
            SlotRequirement::Role(required) => *required == role,
            SlotRequirement::Flex => true,
        }
    }
}

/// Metadata for one starter slot. The `id` is the stable key used in the
/// wire format and error messages; `label` is for display.
#[derive(Debug, Clone, Copy)]
pub struct StarterSlotSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub requirement: SlotRequirement,
}

pub const STARTER_COUNT: usize = 6;

/// The fixed starting formation: two blockers, two runners, one passer, one
/// flex slot accepting any role.
pub const STARTER_SLOTS: [StarterSlotSpec; STARTER_COUNT] = [
    StarterSlotSpec {
        id: "blocker1",
        label: "Blocker 1",
        requirement: SlotRequirement::Role(Role::Blocker),
    },
    StarterSlotSpec {
        id: "blocker2",
        label: "Blocker 2",
        requirement: SlotRequirement::Role(Role::Blocker),
    },
    StarterSlotSpec {
        id: "runner1",
        label: "Runner 1",
        requirement: SlotRequirement::Role(Role::Runner),
    },
    StarterSlotSpec {
        id: "runner2",
        label: "Runner 2",
        requirement: SlotRequirement::Role(Role::Runner),
    },
    StarterSlotSpec {
        id: "passer1",
        label: "Passer",
        requirement: SlotRequirement::Role(Role::Passer),
    },
    StarterSlotSpec { id: "flex", label: "Flex", requirement: SlotRequirement::Flex },
];

/// Look up a starter slot index by its stable id (e.g. "blocker2").
pub fn starter_slot_by_id(id: &str) -> Option<usize> {
    STARTER_SLOTS.iter().position(|spec| spec.id == id)
}

/// Length of each substitution queue.
pub const BENCH_SIZE: usize = 3;

/// The four substitution queues: one per role plus flex.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BenchRole {
    Blockers,
    Runners,
    Passers,
    Flex,
}

impl BenchRole {
    /// Queue iteration order; also the flatten order for the save payload.
    pub const ALL: [BenchRole; 4] =
        [BenchRole::Blockers, BenchRole::Runners, BenchRole::Passers, BenchRole::Flex];

    /// The positional queues, excluding flex.
    pub const POSITIONAL: [BenchRole; 3] =
        [BenchRole::Blockers, BenchRole::Runners, BenchRole::Passers];

    /// The queue a player of this role belongs to when bucketed by position.
    pub fn for_role(role: Role) -> BenchRole {
        match role {
            Role::Blocker => BenchRole::Blockers,
            Role::Runner => BenchRole::Runners,
            Role::Passer => BenchRole::Passers,
        }
    }

    pub fn accepts(&self, role: Role) -> bool {
        match self {
            BenchRole::Blockers => role == Role::Blocker,
            BenchRole::Runners => role == Role::Runner,
            BenchRole::Passers => role == Role::Passer,
            BenchRole::Flex => true,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BenchRole::Blockers => "blockers",
            BenchRole::Runners => "runners",
            BenchRole::Passers => "passers",
            BenchRole::Flex => "flex",
        }
    }
}

/// Address of one slot on the board: a starter slot by index, or a bench
/// queue entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SlotRef {
    Starter(usize),
    Bench(BenchRole, usize),
}

impl SlotRef {
    pub fn is_flex_bench(&self) -> bool {
        matches!(self, SlotRef::Bench(BenchRole::Flex, _))
    }

    pub fn is_positional_bench(&self) -> bool {
        matches!(self, SlotRef::Bench(queue, _) if *queue != BenchRole::Flex)
    }
}

impl fmt::Display for SlotRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SlotRef::Starter(idx) => match STARTER_SLOTS.get(*idx) {
                Some(spec) => f.write_str(spec.id),
                None => write!(f, "starter[{}]", idx),
            },
            SlotRef::Bench(queue, idx) => write!(f, "bench:{}:{}", queue.label(), idx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_layout_is_two_two_one_flex() {
        let blockers = STARTER_SLOTS
            .iter()
            .filter(|s| s.requirement == SlotRequirement::Role(Role::Blocker))
            .count();
        let runners = STARTER_SLOTS
            .iter()
            .filter(|s| s.requirement == SlotRequirement::Role(Role::Runner))
            .count();
        let passers = STARTER_SLOTS
            .iter()
            .filter(|s| s.requirement == SlotRequirement::Role(Role::Passer))
            .count();
        let flex =
            STARTER_SLOTS.iter().filter(|s| s.requirement == SlotRequirement::Flex).count();
        assert_eq!((blockers, runners, passers, flex), (2, 2, 1, 1));
    }

    #[test]
    fn flex_requirement_accepts_any_role() {
        for role in Role::ALL {
            assert!(SlotRequirement::Flex.accepts(role));
        }
        assert!(!SlotRequirement::Role(Role::Blocker).accepts(Role::Passer));
    }

    #[test]
    fn slot_lookup_by_id() {
        assert_eq!(starter_slot_by_id("blocker1"), Some(0));
        assert_eq!(starter_slot_by_id("flex"), Some(5));
        assert_eq!(starter_slot_by_id("keeper"), None);
    }

    #[test]
    fn slot_ref_display_uses_stable_ids() {
        assert_eq!(SlotRef::Starter(4).to_string(), "passer1");
        assert_eq!(SlotRef::Bench(BenchRole::Flex, 2).to_string(), "bench:flex:2");
    }
}
