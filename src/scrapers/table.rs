use super::{Locator, Selectors};
use crate::domain::Table;
use crate::error::{Result, StatsError};
use scraper::{CaseSensitivity, ElementRef, Html};
use tracing::debug;

/// Reads the table `locator` points at into a [`Table`].
///
/// A missing table, header or body is not an error: the page simply has no
/// data for this query and the result is [`Table::empty`]. Tables the site
/// ships inside HTML comments are found as well.
pub fn extract_table(document: &Html, locator: &Locator) -> Result<Table> {
    let selectors = Selectors::new(locator)?;

    match find_table(document, &selectors, locator) {
        Ok(table) => {
            debug!(%locator, columns = table.columns.len(), rows = table.len(), "extracted table");
            Ok(table)
        }
        Err(StatsError::NotFound(missing)) => {
            debug!(%locator, missing, "no table data on page");
            Ok(Table::empty())
        }
        Err(e) => Err(e),
    }
}

fn find_table(document: &Html, selectors: &Selectors, locator: &Locator) -> Result<Table> {
    if let Some(table) = document.select(&selectors.table).next() {
        return read_table(table, selectors, locator);
    }

    for node in document.tree.root().descendants() {
        let Some(comment) = node.value().as_comment() else {
            continue;
        };
        if !comment.contains("<table") {
            continue;
        }

        let fragment = Html::parse_fragment(comment);
        if let Some(table) = fragment.select(&selectors.table).next() {
            debug!(%locator, "table found inside comment");
            return read_table(table, selectors, locator);
        }
    }

    Err(StatsError::NotFound("table"))
}

fn read_table(table: ElementRef, selectors: &Selectors, locator: &Locator) -> Result<Table> {
    // Multi-row headers put group labels first; the last row names the columns.
    let header = table
        .select(&selectors.header_row)
        .last()
        .ok_or(StatsError::NotFound("header row"))?;
    let columns: Vec<String> = header.select(&selectors.header_cell).map(cell_text).collect();

    if table.select(&selectors.body).next().is_none() {
        return Err(StatsError::NotFound("table body"));
    }

    let rows = table
        .select(&selectors.body_row)
        .filter(|row| match locator.row_class() {
            Some(class) => row
                .value()
                .has_class(class, CaseSensitivity::AsciiCaseInsensitive),
            None => true,
        })
        .map(|row| read_row(row, columns.len()))
        .collect();

    Ok(Table::new(columns, rows))
}

fn read_row(row: ElementRef, width: usize) -> Vec<String> {
    let mut cells = Vec::with_capacity(width);

    for cell in row.children().filter_map(ElementRef::wrap) {
        if !matches!(cell.value().name(), "th" | "td") {
            continue;
        }
        let span = cell
            .value()
            .attr("colspan")
            .and_then(|span| span.trim().parse::<usize>().ok())
            .unwrap_or(1)
            .clamp(1, width.max(1));
        let text = cell_text(cell);
        cells.extend(std::iter::repeat(text).take(span));
    }

    cells.resize(width, String::new());
    cells
}

fn cell_text(cell: ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}
