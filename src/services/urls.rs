//! URL builders for the pages the pipelines fetch.

use crate::domain::{GameLogQuery, PlayerId};

pub const DEFAULT_BASE_URL: &str = "https://www.basketball-reference.com";
pub const DEFAULT_WIDGET_URL: &str = "https://widgets.sports-reference.com";

/// Player profile page: `{base}/players/{initial}/{id}.html`.
pub fn build_player_url(base_url: &str, player_id: &PlayerId) -> String {
    format!(
        "{}/players/{}/{}.html",
        base_url.trim_end_matches('/'),
        player_id.initial(),
        player_id
    )
}

/// Widget endpoint rendering one game-log table. The page path is passed
/// percent-encoded in `url`, the table variant in `div`. The widget always
/// receives the `a` bucket in that path, whatever the player's initial.
pub fn build_game_log_url(widget_url: &str, query: &GameLogQuery) -> String {
    format!(
        "{}/wg.fcgi?css=1&site=bbr&url=%2Fplayers%2Fa%2F{}%2Fgamelog%2F{}%2F&div={}",
        widget_url.trim_end_matches('/'),
        query.player_id,
        query.season,
        query.kind.widget_div()
    )
}
