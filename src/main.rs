use chrono::Local;
use clap::Parser;
use courtside::config::cli::{Args, Command};
use courtside::config::Config;
use courtside::domain::{GameLog, GameLogQuery, PlayerId, SeasonKind, SeasonStats};
use courtside::figures::FigureKind;
use courtside::services::ScrapingService;
use courtside::Result;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Serialize)]
struct PlayerReport {
    generated_at: String,
    season: u16,
    stats: SeasonStats,
    regular_season_games: GameLog,
    playoff_games: GameLog,
}

#[derive(Debug, Serialize)]
struct FigureListing {
    kind: FigureKind,
    title: &'static str,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_args(args)?;
    let service = ScrapingService::new(config.http_client.clone(), config.site.clone());

    let output = match config.args.command.clone() {
        Command::SeasonStats { player_id } => {
            let player_id = PlayerId::new(player_id)?;
            serde_json::to_string_pretty(&service.season_stats(&player_id).await?)?
        }
        Command::GameLog {
            player_id,
            season,
            playoffs,
        } => {
            let query = GameLogQuery::new(
                PlayerId::new(player_id)?,
                season,
                SeasonKind::from_playoffs_flag(playoffs),
            );
            serde_json::to_string_pretty(&service.game_log(&query).await?)?
        }
        Command::Player { player_id, season } => {
            let player_id = PlayerId::new(player_id)?;
            let regular = GameLogQuery::regular(player_id.clone(), season);
            let playoffs = GameLogQuery::playoffs(player_id.clone(), season);

            // Independent fetches; run them side by side.
            let (stats, regular_season_games, playoff_games) = tokio::try_join!(
                service.season_stats(&player_id),
                service.game_log(&regular),
                service.game_log(&playoffs),
            )?;

            serde_json::to_string_pretty(&PlayerReport {
                generated_at: Local::now().to_rfc3339(),
                season,
                stats,
                regular_season_games,
                playoff_games,
            })?
        }
        Command::Figure {
            player_id,
            season,
            kind,
            playoffs,
        } => {
            let query = GameLogQuery::new(
                PlayerId::new(player_id)?,
                season,
                SeasonKind::from_playoffs_flag(playoffs),
            );
            let log = service.game_log(&query).await?;
            serde_json::to_string_pretty(&kind.build(&log)?)?
        }
        Command::Figures => {
            let listing: Vec<FigureListing> = FigureKind::ALL
                .iter()
                .map(|&kind| FigureListing {
                    kind,
                    title: kind.title(),
                })
                .collect();
            serde_json::to_string_pretty(&listing)?
        }
    };

    println!("{output}");
    info!("Done");
    Ok(())
}
