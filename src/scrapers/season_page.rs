use super::{extract_player_info, extract_table, Locator, PageScraper};
use crate::domain::{SeasonStats, PLACEHOLDER_PHOTO};
use crate::error::Result;
use scraper::Html;

const REGULAR_SEASON_TABLE: &str = "per_game";
const PLAYOFFS_TABLE: &str = "playoffs_per_game";
/// Class of body rows holding a complete season line.
const SEASON_ROW_CLASS: &str = "full_table";

/// Player profile page: header info plus both per-game tables.
pub struct SeasonPageScraper {
    placeholder_photo: String,
}

impl SeasonPageScraper {
    pub fn new(placeholder_photo: impl Into<String>) -> Self {
        Self {
            placeholder_photo: placeholder_photo.into(),
        }
    }
}

impl Default for SeasonPageScraper {
    fn default() -> Self {
        Self::new(PLACEHOLDER_PHOTO)
    }
}

impl PageScraper for SeasonPageScraper {
    type Output = SeasonStats;

    fn scrape(&self, document: &Html) -> Result<SeasonStats> {
        let player = extract_player_info(document, &self.placeholder_photo)?;

        let regular_season = extract_table(
            document,
            &Locator::by_id(REGULAR_SEASON_TABLE).with_row_class(SEASON_ROW_CLASS),
        )?;
        let playoffs = extract_table(
            document,
            &Locator::by_id(PLAYOFFS_TABLE).with_row_class(SEASON_ROW_CLASS),
        )?;

        Ok(SeasonStats {
            player,
            regular_season,
            playoffs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Table;

    #[test]
    fn test_page_without_playoffs() {
        let html = r#"
            <div class="players"><h1><span>Rookie</span></h1></div>
            <table id="per_game">
              <thead><tr><th>Season</th><th>G</th></tr></thead>
              <tbody><tr class="full_table"><th>2004-05</th><td>12</td></tr></tbody>
            </table>
        "#;
        let stats = SeasonPageScraper::default().scrape_str(html).unwrap();
        assert_eq!(stats.player.name, "Rookie");
        assert_eq!(stats.player.photo_url, PLACEHOLDER_PHOTO);
        assert_eq!(stats.regular_season.len(), 1);
        assert_eq!(stats.playoffs, Table::empty());
    }

    #[test]
    fn test_blank_page_yields_empty_result() {
        let stats = SeasonPageScraper::new("none.png").scrape_str("").unwrap();
        assert_eq!(stats.player.photo_url, "none.png");
        assert!(stats.regular_season.is_empty());
        assert!(stats.playoffs.is_empty());
    }
}
