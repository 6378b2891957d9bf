use crate::domain::{GameLog, Outcome, Side, Table, OUTCOME_COLUMN, RESULT_COLUMN, SIDE_COLUMN};
use crate::error::{Result, StatsError};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Header text of the games column; the same text marks repeated header rows.
const GAMES_COLUMN: &str = "G";
/// Ordinal `Rk` and the stale games counter. Neither has a stable name.
const LEADING_COLUMNS: usize = 2;
/// Unnamed source columns holding the venue marker and the `W (+12)` string.
const SIDE_SOURCE_COLUMN: usize = 5;
const OUTCOME_SOURCE_COLUMN: usize = 7;

static OUTCOME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([^(]*)\((.*)\)$").unwrap());

/// Cleans a raw per-game table scraped from a game-log page.
///
/// Repeated header rows are dropped wherever they appear, the two leading
/// columns are trimmed, the venue and outcome columns become `Side` and
/// `Outcome`, and a `Result` column carries the margin. A table with no
/// columns stands for "no games" and normalizes to an empty log.
pub fn normalize_game_log(raw: &Table) -> Result<GameLog> {
    if raw.columns.is_empty() {
        return Ok(GameLog::empty());
    }

    let width = raw.columns.len();
    if width <= OUTCOME_SOURCE_COLUMN {
        return Err(StatsError::Layout(format!(
            "game log needs at least {} columns, found {width}",
            OUTCOME_SOURCE_COLUMN + 1
        )));
    }
    let games = raw.column_index(GAMES_COLUMN).ok_or_else(|| {
        StatsError::Layout(format!("game log has no {GAMES_COLUMN:?} column"))
    })?;

    let mut columns = raw.columns[LEADING_COLUMNS..].to_vec();
    columns[SIDE_SOURCE_COLUMN - LEADING_COLUMNS] = SIDE_COLUMN.to_string();
    columns[OUTCOME_SOURCE_COLUMN - LEADING_COLUMNS] = OUTCOME_COLUMN.to_string();
    columns.push(RESULT_COLUMN.to_string());

    let mut rows = Vec::with_capacity(raw.len());
    let mut header_rows = 0;
    for (index, row) in raw.rows.iter().enumerate() {
        if row.get(games).map(String::as_str) == Some(GAMES_COLUMN) {
            header_rows += 1;
            continue;
        }
        rows.push(normalize_row(index, row, width)?);
    }

    debug!(games = rows.len(), header_rows, "normalized game log");
    Ok(GameLog::from_table(Table::new(columns, rows)))
}

fn normalize_row(index: usize, row: &[String], width: usize) -> Result<Vec<String>> {
    let mut cells = row.to_vec();
    cells.resize(width, String::new());

    let side = derive_side(&cells[SIDE_SOURCE_COLUMN]);
    let (outcome, result) = split_outcome(index, &cells[OUTCOME_SOURCE_COLUMN])?;

    cells[SIDE_SOURCE_COLUMN] = side.to_string();
    cells[OUTCOME_SOURCE_COLUMN] = outcome.to_string();
    cells.push(result);

    Ok(cells.split_off(LEADING_COLUMNS))
}

/// Splits `W (+12)` into the outcome and the margin inside the parentheses.
///
/// `row` only labels the error; a string without the parenthetical suffix,
/// or with an outcome other than `W`/`L`, is a malformed record.
pub fn split_outcome(row: usize, raw: &str) -> Result<(Outcome, String)> {
    let malformed = || StatsError::MalformedRecord {
        row,
        value: raw.to_string(),
    };

    let caps = OUTCOME.captures(raw.trim()).ok_or_else(malformed)?;
    let outcome = Outcome::parse(caps[1].trim()).ok_or_else(malformed)?;
    Ok((outcome, caps[2].trim().to_string()))
}

/// Blank venue cell means away, `@` means home, anything else is kept as is.
pub fn derive_side(cell: &str) -> Side {
    match cell.trim() {
        "" => Side::Away,
        "@" => Side::Home,
        other => Side::Other(other.to_string()),
    }
}
