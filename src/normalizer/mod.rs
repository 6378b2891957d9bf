mod game_log;

pub use game_log::{derive_side, normalize_game_log, split_outcome};
