use crate::error::{Result, StatsError};
use scraper::{Html, Selector};
use std::fmt;

pub(crate) mod game_log_page;
pub(crate) mod player;
pub(crate) mod season_page;
pub(crate) mod table;

pub use game_log_page::GameLogPageScraper;
pub use player::extract_player_info;
pub use season_page::SeasonPageScraper;
pub use table::extract_table;

/// Turns one kind of fetched page into a value, without touching the network.
pub trait PageScraper {
    type Output;

    fn scrape(&self, document: &Html) -> Result<Self::Output>;

    fn scrape_str(&self, html: &str) -> Result<Self::Output> {
        self.scrape(&Html::parse_document(html))
    }
}

/// Where a table lives inside a page and which of its body rows count as data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    table: String,
    row_class: Option<String>,
}

impl Locator {
    pub fn css(selector: impl Into<String>) -> Self {
        Self {
            table: selector.into(),
            row_class: None,
        }
    }

    pub fn by_id(id: &str) -> Self {
        Self::css(format!("table#{id}"))
    }

    pub fn first_table() -> Self {
        Self::css("table")
    }

    /// Keep only body rows tagged with `class`; the site marks real season
    /// lines this way and leaves totals and separators unmarked.
    pub fn with_row_class(mut self, class: impl Into<String>) -> Self {
        self.row_class = Some(class.into());
        self
    }

    pub fn table_selector(&self) -> &str {
        &self.table
    }

    pub fn row_class(&self) -> Option<&str> {
        self.row_class.as_deref()
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.row_class {
            Some(class) => write!(f, "{} (rows .{})", self.table, class),
            None => f.write_str(&self.table),
        }
    }
}

pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| StatsError::Selector(format!("{css}: {e}")))
}

pub struct Selectors {
    pub table: Selector,
    pub header_row: Selector,
    pub header_cell: Selector,
    pub body: Selector,
    pub body_row: Selector,
}

impl Selectors {
    pub fn new(locator: &Locator) -> Result<Self> {
        Ok(Self {
            table: selector(locator.table_selector())?,
            header_row: selector("thead tr")?,
            header_cell: selector("th")?,
            body: selector("tbody")?,
            body_row: selector("tbody > tr")?,
        })
    }
}
