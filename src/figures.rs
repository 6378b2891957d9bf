//! Figures the dashboard can draw from a game log.
//!
//! Every figure is a pure transform from a [`GameLog`] to a [`Scatter`];
//! adding one means adding a [`FigureKind`] variant and its match arm.

use crate::domain::GameLog;
use crate::error::{Result, StatsError};
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FigureKind {
    MinutesVsPoints,
}

impl FigureKind {
    pub const ALL: [FigureKind; 1] = [FigureKind::MinutesVsPoints];

    pub fn title(self) -> &'static str {
        match self {
            FigureKind::MinutesVsPoints => "Minutes played vs points scored.",
        }
    }

    pub fn build(self, log: &GameLog) -> Result<Scatter> {
        match self {
            FigureKind::MinutesVsPoints => minutes_vs_points(log),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scatter {
    pub kind: FigureKind,
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub points: Vec<ScatterPoint>,
}

fn minutes_vs_points(log: &GameLog) -> Result<Scatter> {
    let mut points = Vec::with_capacity(log.len());

    for (row, game) in log.games().enumerate() {
        let minutes = game.minutes().unwrap_or_default();
        // Games not played carry "Inactive" or "Did Not Play" instead of mm:ss.
        let Some((mins, secs)) = minutes.split_once(':') else {
            continue;
        };
        if secs.contains(':') {
            continue;
        }

        let malformed = |value: &str| StatsError::MalformedRecord {
            row,
            value: value.to_string(),
        };
        let mins: u32 = mins.trim().parse().map_err(|_| malformed(minutes))?;
        let secs: u32 = secs.trim().parse().map_err(|_| malformed(minutes))?;
        let pts = game.points().unwrap_or_default();
        let pts: i64 = pts.trim().parse().map_err(|_| malformed(pts))?;

        let played = f64::from(mins) + f64::from(secs) / 60.0;
        points.push(ScatterPoint {
            x: (played * 10.0).round() / 10.0,
            y: pts as f64,
        });
    }

    Ok(Scatter {
        kind: FigureKind::MinutesVsPoints,
        title: FigureKind::MinutesVsPoints.title(),
        x_label: "MP",
        y_label: "PTS",
        points,
    })
}
