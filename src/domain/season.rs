use super::{PlayerInfo, Table};
use serde::{Deserialize, Serialize};

/// Everything the profile page yields for one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonStats {
    pub player: PlayerInfo,
    pub regular_season: Table,
    pub playoffs: Table,
}

impl SeasonStats {
    pub fn regular_season_rows(&self) -> impl Iterator<Item = SeasonStatRow<'_>> {
        SeasonStatRow::iter(&self.regular_season)
    }

    pub fn playoff_rows(&self) -> impl Iterator<Item = SeasonStatRow<'_>> {
        SeasonStatRow::iter(&self.playoffs)
    }
}

/// One season line of a per-game table.
#[derive(Debug, Clone, Copy)]
pub struct SeasonStatRow<'a> {
    table: &'a Table,
    cells: &'a [String],
}

impl<'a> SeasonStatRow<'a> {
    pub fn iter(table: &'a Table) -> impl Iterator<Item = SeasonStatRow<'a>> {
        table.rows.iter().map(move |cells| SeasonStatRow {
            table,
            cells: cells.as_slice(),
        })
    }

    pub fn get(&self, column: &str) -> Option<&'a str> {
        self.table.cell(self.cells, column)
    }

    pub fn season(&self) -> Option<&'a str> {
        self.get("Season")
    }

    /// Older pages label the team column `Tm`, newer ones `Team`.
    pub fn team(&self) -> Option<&'a str> {
        self.get("Tm").or_else(|| self.get("Team"))
    }

    pub fn games(&self) -> Option<u32> {
        self.get("G").and_then(|g| g.parse().ok())
    }

    pub fn minutes_per_game(&self) -> Option<f64> {
        self.get("MP").and_then(|mp| mp.parse().ok())
    }

    pub fn points_per_game(&self) -> Option<f64> {
        self.get("PTS").and_then(|pts| pts.parse().ok())
    }
}
