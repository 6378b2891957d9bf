use crate::figures::FigureKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Optional JSON file with site settings
    #[arg(long)]
    pub config_file: Option<PathBuf>,

    /// Base URL of the stats site
    #[arg(long, env = "COURTSIDE_BASE_URL")]
    pub base_url: Option<String>,

    /// Base URL of the widget endpoint serving game logs
    #[arg(long, env = "COURTSIDE_WIDGET_URL")]
    pub widget_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Regular-season and playoff per-game averages plus profile info
    SeasonStats {
        /// Player id, e.g. mcgeeja01
        player_id: String,
    },
    /// Normalized per-game log for one season
    GameLog {
        player_id: String,
        /// Year the season ends in, e.g. 1997
        season: u16,
        /// Fetch the playoff log instead of the regular season
        #[arg(long)]
        playoffs: bool,
    },
    /// Season stats plus regular-season and playoff logs for one season
    Player { player_id: String, season: u16 },
    /// Scatter data for one figure kind
    Figure {
        player_id: String,
        season: u16,
        #[arg(long, value_enum, default_value_t = FigureKind::MinutesVsPoints)]
        kind: FigureKind,
        #[arg(long)]
        playoffs: bool,
    },
    /// List available figure kinds
    Figures,
}
