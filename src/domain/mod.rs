mod game_log;
mod player;
mod season;
mod table;

pub use game_log::{
    GameLog, GameLogQuery, GameLogRow, Outcome, SeasonKind, Side, OUTCOME_COLUMN, RESULT_COLUMN,
    SIDE_COLUMN,
};
pub use player::{PlayerAttribute, PlayerId, PlayerInfo, PLACEHOLDER_PHOTO};
pub use season::{SeasonStatRow, SeasonStats};
pub use table::Table;
