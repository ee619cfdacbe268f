pub mod player;

pub use player::{InjuryStatus, Player, PlayerAttributes, Role};
