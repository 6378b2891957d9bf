use super::selector;
use crate::domain::{PlayerAttribute, PlayerInfo};
use crate::error::Result;
use scraper::{ElementRef, Html};
use tracing::debug;

/// Reads the profile header (`div.players`) of a player page.
///
/// Each piece falls back on its own: no photo gives `placeholder`, no name
/// gives an empty string, and a page without the header yields
/// [`PlayerInfo::unknown`].
pub fn extract_player_info(document: &Html, placeholder: &str) -> Result<PlayerInfo> {
    let container = selector("div.players")?;
    let photo = selector("div.media-item img")?;
    let span = selector("span")?;

    let Some(info) = document.select(&container).next() else {
        debug!("player header not found");
        return Ok(PlayerInfo::unknown(placeholder));
    };

    let photo_url = info
        .select(&photo)
        .next()
        .and_then(|img| img.value().attr("src"))
        .map(str::to_string)
        .unwrap_or_else(|| placeholder.to_string());

    let name = info.select(&span).next().map(text).unwrap_or_default();

    let attributes = info
        .select(&span)
        .filter_map(|el| {
            let name = el.value().attr("itemprop")?;
            let value = text(el);
            if value.is_empty() {
                return None;
            }
            Some(PlayerAttribute {
                name: name.to_string(),
                value,
            })
        })
        .collect();

    Ok(PlayerInfo::new(photo_url, name, attributes))
}

fn text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}
