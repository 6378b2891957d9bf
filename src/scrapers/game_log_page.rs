use super::{extract_table, Locator, PageScraper};
use crate::domain::GameLog;
use crate::error::Result;
use crate::normalizer::normalize_game_log;
use scraper::Html;

/// Game-log widget response. The widget renders just the requested table,
/// so the first table on the page is the one; every body row is read and
/// repeated headers are left for the normalizer to drop.
#[derive(Debug, Default)]
pub struct GameLogPageScraper;

impl PageScraper for GameLogPageScraper {
    type Output = GameLog;

    fn scrape(&self, document: &Html) -> Result<GameLog> {
        let raw = extract_table(document, &Locator::first_table())?;
        normalize_game_log(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_without_table_is_empty() {
        let log = GameLogPageScraper
            .scrape_str("<div class=\"placeholder\"></div>")
            .unwrap();
        assert!(log.is_empty());
    }
}
