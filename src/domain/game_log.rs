use super::{PlayerId, Table};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SIDE_COLUMN: &str = "Side";
pub const OUTCOME_COLUMN: &str = "Outcome";
pub const RESULT_COLUMN: &str = "Result";

/// Where the game was played, as derived from the venue marker cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Side {
    Home,
    Away,
    /// Marker the site uses that we have no mapping for; kept verbatim.
    Other(String),
}

impl Side {
    pub fn as_str(&self) -> &str {
        match self {
            Side::Home => "Home",
            Side::Away => "Away",
            Side::Other(marker) => marker,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Side {
    fn from(value: &str) -> Self {
        match value {
            "Home" => Side::Home,
            "Away" => Side::Away,
            other => Side::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "L")]
    Loss,
}

impl Outcome {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "W" => Some(Outcome::Win),
            "L" => Some(Outcome::Loss),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Win => "W",
            Outcome::Loss => "L",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonKind {
    #[default]
    Regular,
    Playoffs,
}

impl SeasonKind {
    /// Container id the widget endpoint uses for this table variant.
    pub fn widget_div(self) -> &'static str {
        match self {
            SeasonKind::Regular => "div_pgl_basic",
            SeasonKind::Playoffs => "div_pgl_basic_playoffs",
        }
    }

    pub fn from_playoffs_flag(playoffs: bool) -> Self {
        if playoffs {
            SeasonKind::Playoffs
        } else {
            SeasonKind::Regular
        }
    }
}

/// Request-scoped parameters for one game-log fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLogQuery {
    pub player_id: PlayerId,
    /// Year the season ends in, e.g. 1997 for 1996-97.
    pub season: u16,
    pub kind: SeasonKind,
}

impl GameLogQuery {
    pub fn new(player_id: PlayerId, season: u16, kind: SeasonKind) -> Self {
        Self {
            player_id,
            season,
            kind,
        }
    }

    pub fn regular(player_id: PlayerId, season: u16) -> Self {
        Self::new(player_id, season, SeasonKind::Regular)
    }

    pub fn playoffs(player_id: PlayerId, season: u16) -> Self {
        Self::new(player_id, season, SeasonKind::Playoffs)
    }
}

/// Normalized per-game table carrying `Side`, `Outcome` and `Result` columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameLog {
    table: Table,
}

impl GameLog {
    pub(crate) fn from_table(table: Table) -> Self {
        Self { table }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn columns(&self) -> &[String] {
        &self.table.columns
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn games(&self) -> impl Iterator<Item = GameLogRow<'_>> {
        let table = &self.table;
        table.rows.iter().map(move |cells| GameLogRow {
            table,
            cells: cells.as_slice(),
        })
    }
}

/// One game of a normalized log.
#[derive(Debug, Clone, Copy)]
pub struct GameLogRow<'a> {
    table: &'a Table,
    cells: &'a [String],
}

impl<'a> GameLogRow<'a> {
    pub fn get(&self, column: &str) -> Option<&'a str> {
        self.table.cell(self.cells, column)
    }

    pub fn date(&self) -> Option<&'a str> {
        self.get("Date")
    }

    pub fn opponent(&self) -> Option<&'a str> {
        self.get("Opp")
    }

    pub fn side(&self) -> Option<Side> {
        self.get(SIDE_COLUMN).map(Side::from)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.get(OUTCOME_COLUMN).and_then(Outcome::parse)
    }

    /// Margin text exactly as the site prints it, e.g. `+12` or `-3`.
    pub fn result(&self) -> Option<&'a str> {
        self.get(RESULT_COLUMN)
    }

    pub fn margin(&self) -> Option<i32> {
        self.result()
            .and_then(|result| result.trim_start_matches('+').parse().ok())
    }

    pub fn minutes(&self) -> Option<&'a str> {
        self.get("MP")
    }

    pub fn points(&self) -> Option<&'a str> {
        self.get("PTS")
    }
}
