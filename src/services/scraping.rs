use crate::config::SiteConfig;
use crate::domain::{GameLog, GameLogQuery, PlayerId, SeasonStats};
use crate::error::Result;
use crate::scrapers::{GameLogPageScraper, PageScraper, SeasonPageScraper};
use crate::services::urls::{build_game_log_url, build_player_url};
use reqwest::Client;
use tracing::{info, instrument};

/// Runs the two scraping pipelines. Each call fetches one page, reads the
/// whole body, then parses locally; nothing is kept between calls.
pub struct ScrapingService {
    client: Client,
    site: SiteConfig,
}

impl ScrapingService {
    pub fn new(client: Client, site: SiteConfig) -> Self {
        info!("Created new Scraping service for {}", site.base_url);
        Self { client, site }
    }

    /// Profile header plus regular-season and playoff per-game tables.
    /// Missing tables come back empty; only transport failures are errors.
    #[instrument(skip_all, fields(player = %player_id))]
    pub async fn season_stats(&self, player_id: &PlayerId) -> Result<SeasonStats> {
        let url = build_player_url(&self.site.base_url, player_id);
        let page = self.fetch_page(&url).await?;

        let scraper = SeasonPageScraper::new(self.site.placeholder_photo.as_str());
        let stats = scraper.scrape_str(&page)?;
        info!(
            regular_season = stats.regular_season.len(),
            playoffs = stats.playoffs.len(),
            "Scraped season stats"
        );
        Ok(stats)
    }

    /// Normalized game log for one season. An empty log means the player has
    /// no games of that kind, e.g. missed the playoffs.
    #[instrument(skip_all, fields(player = %query.player_id, season = query.season, kind = ?query.kind))]
    pub async fn game_log(&self, query: &GameLogQuery) -> Result<GameLog> {
        let url = build_game_log_url(&self.site.widget_url, query);
        let page = self.fetch_page(&url).await?;

        let log = GameLogPageScraper.scrape_str(&page)?;
        info!(games = log.len(), "Scraped game log");
        Ok(log)
    }

    async fn fetch_page(&self, url: &str) -> Result<String> {
        info!("Fetching {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}
