pub mod lineup_json;

pub use lineup_json::{
    auto_fill_lineup_json, load_lineup_json, save_lineup_json, LineupRequest, LineupResponse,
};
