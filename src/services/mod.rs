pub mod scraping;
pub mod urls;

pub use scraping::ScrapingService;
