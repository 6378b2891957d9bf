//! Scrapes player season averages and game logs from basketball-reference
//! and normalizes them into plain tables.

pub mod config;
pub mod domain;
pub mod error;
pub mod figures;
pub mod normalizer;
pub mod scrapers;
pub mod services;

pub use error::{Result, StatsError};
