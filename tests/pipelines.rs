use courtside::config::SiteConfig;
use courtside::domain::{GameLogQuery, Outcome, PlayerId, SeasonKind, Side, PLACEHOLDER_PHOTO};
use courtside::figures::FigureKind;
use courtside::services::ScrapingService;
use courtside::StatsError;
use reqwest::Client;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GAMELOG_1997: &str = include_str!("fixtures/gamelog_1997.html");
const GAMELOG_NO_PLAYOFFS: &str = include_str!("fixtures/gamelog_no_playoffs.html");
const PLAYER_PAGE: &str = include_str!("fixtures/player_mcgeeja01.html");

fn service(mock_server: &MockServer) -> ScrapingService {
    let site = SiteConfig {
        base_url: mock_server.uri(),
        widget_url: mock_server.uri(),
        placeholder_photo: PLACEHOLDER_PHOTO.to_string(),
    };
    ScrapingService::new(Client::new(), site)
}

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "text/html; charset=utf-8")
}

fn mcgee() -> PlayerId {
    PlayerId::new("mcgeeja01").unwrap()
}

#[tokio::test]
async fn test_game_log_drops_repeated_header() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wg.fcgi"))
        .and(query_param("url", "/players/a/mcgeeja01/gamelog/1997/"))
        .and(query_param("div", "div_pgl_basic"))
        .respond_with(html(GAMELOG_1997))
        .expect(1)
        .mount(&mock_server)
        .await;

    let log = service(&mock_server)
        .game_log(&GameLogQuery::regular(mcgee(), 1997))
        .await
        .unwrap();

    assert_eq!(log.len(), 10);
    assert_eq!(log.columns()[0], "Date");
    assert_eq!(log.columns().last().map(String::as_str), Some("Result"));
    for game in log.games() {
        assert!(game.side().is_some());
        assert!(game.outcome().is_some());
        assert!(!game.result().unwrap_or_default().is_empty());
        assert_ne!(game.date(), Some("Date"));
    }

    let games: Vec<_> = log.games().collect();
    assert_eq!(games[0].date(), Some("1996-11-01"));
    assert_eq!(games[0].side(), Some(Side::Away));
    assert_eq!(games[0].outcome(), Some(Outcome::Win));
    assert_eq!(games[0].margin(), Some(12));
    assert_eq!(games[1].side(), Some(Side::Home));
    assert_eq!(games[1].outcome(), Some(Outcome::Loss));
    assert_eq!(games[1].result(), Some("-4"));

    // Inactive game: stats collapse into one spanning cell, outcome is still known.
    assert_eq!(games[9].opponent(), Some("PHI"));
    assert_eq!(games[9].minutes(), Some("Inactive"));
    assert_eq!(games[9].margin(), Some(9));
}

#[tokio::test]
async fn test_missing_playoff_log_is_empty() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wg.fcgi"))
        .and(query_param("div", "div_pgl_basic_playoffs"))
        .respond_with(html(GAMELOG_NO_PLAYOFFS))
        .mount(&mock_server)
        .await;

    let query = GameLogQuery::new(PlayerId::new("jamesle01").unwrap(), 2005, SeasonKind::Playoffs);
    let log = service(&mock_server).game_log(&query).await.unwrap();

    assert!(log.is_empty());
}

#[tokio::test]
async fn test_transport_failure_is_an_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wg.fcgi"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let result = service(&mock_server)
        .game_log(&GameLogQuery::regular(mcgee(), 1997))
        .await;

    assert!(matches!(result, Err(StatsError::Transport(_))));
}

#[tokio::test]
async fn test_malformed_outcome_is_an_error() {
    let mock_server = MockServer::start().await;
    let broken = GAMELOG_1997.replacen("W (+12)", "W", 1);
    Mock::given(method("GET"))
        .and(path("/wg.fcgi"))
        .respond_with(html(&broken))
        .mount(&mock_server)
        .await;

    let result = service(&mock_server)
        .game_log(&GameLogQuery::regular(mcgee(), 1997))
        .await;

    match result {
        Err(StatsError::MalformedRecord { row, value }) => {
            assert_eq!(row, 0);
            assert_eq!(value, "W");
        }
        other => panic!("expected malformed record, got {other:?}"),
    }
}

#[tokio::test]
async fn test_season_stats_reads_live_and_commented_tables() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/players/m/mcgeeja01.html"))
        .respond_with(html(PLAYER_PAGE))
        .expect(1)
        .mount(&mock_server)
        .await;

    let stats = service(&mock_server).season_stats(&mcgee()).await.unwrap();

    assert_eq!(stats.player.name, "JaVale McGee");
    assert!(stats.player.photo_url.ends_with("/images/players/mcgeeja01.jpg"));
    let names: Vec<_> = stats
        .player
        .attributes
        .iter()
        .map(|attr| attr.name.as_str())
        .collect();
    assert_eq!(names, ["height", "weight", "birthDate", "birthPlace"]);
    assert!(stats.player.metadata.starts_with("* height: 7-0\n* weight: 270lb\n"));

    // Team splits (partial_table) and the career footer are not season lines.
    let seasons: Vec<_> = stats
        .regular_season_rows()
        .map(|row| (row.season().unwrap_or_default(), row.team().unwrap_or_default()))
        .collect();
    assert_eq!(
        seasons,
        [("2008-09", "WAS"), ("2009-10", "WAS"), ("2011-12", "TOT")]
    );
    assert_eq!(stats.regular_season.columns[9], "");

    let playoffs: Vec<_> = stats.playoff_rows().collect();
    assert_eq!(playoffs.len(), 1);
    assert_eq!(playoffs[0].games(), Some(7));
    assert_eq!(playoffs[0].points_per_game(), Some(11.6));
}

#[tokio::test]
async fn test_season_stats_for_unknown_player_is_transport_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let result = service(&mock_server)
        .season_stats(&PlayerId::new("nobodyxx01").unwrap())
        .await;

    assert!(matches!(result, Err(StatsError::Transport(_))));
}

#[tokio::test]
async fn test_independent_logs_can_be_fetched_together() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("div", "div_pgl_basic"))
        .respond_with(html(GAMELOG_1997))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("div", "div_pgl_basic_playoffs"))
        .respond_with(html(GAMELOG_NO_PLAYOFFS))
        .mount(&mock_server)
        .await;

    let service = service(&mock_server);
    let regular = GameLogQuery::regular(mcgee(), 1997);
    let playoffs = GameLogQuery::playoffs(mcgee(), 1997);
    let (regular, playoffs) =
        tokio::try_join!(service.game_log(&regular), service.game_log(&playoffs)).unwrap();

    assert_eq!(regular.len(), 10);
    assert!(playoffs.is_empty());

    // Inactive game has no mm:ss minutes and is left out of the figure.
    let scatter = FigureKind::MinutesVsPoints.build(&regular).unwrap();
    assert_eq!(scatter.points.len(), 9);
    assert_eq!(scatter.points[0].x, 31.4);
    assert_eq!(scatter.points[0].y, 12.0);
}
