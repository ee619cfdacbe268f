// Lineup assignment system: slot layout, board state machine, wire format.

pub mod board;
pub mod config;
pub mod slots;
pub mod wire;

pub use board::LineupBoard;
pub use config::{FlexOverlapPolicy, LineupConfig};
pub use slots::{
    starter_slot_by_id, BenchRole, SlotRef, SlotRequirement, StarterSlotSpec, BENCH_SIZE,
    STARTER_COUNT, STARTER_SLOTS,
};
pub use wire::{PlayerRef, SavedLineup};
