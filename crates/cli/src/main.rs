//! scoregraph CLI - score progression graphs for CTF scoreboards.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use scoregraph_chart::{ChartBuilder, ChartOutcome, NO_SOLVES_MESSAGE};
use scoregraph_client::{
    fetch_snapshot, ClientConfig, FileProgressionApi, HttpProgressionApi, ProgressionApi,
    Progressions, DEFAULT_TIMEOUT_SECS,
};
use scoregraph_core::{GroupId, ProgressionSource, ScoreboardId};
use scoregraph_progress::{ProgressionConfig, ProgressionEngine};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scoregraph")]
#[command(about = "Score progression graphs for CTF scoreboards", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Progression settings file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Points per series, overrides the settings file
    #[arg(long, global = true)]
    points: Option<usize>,

    /// Server time in unix seconds, instead of asking the server or dump
    #[arg(long, global = true)]
    now: Option<i64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print bucketed series from a dump
    Points {
        /// Dump file
        #[arg(long)]
        input: PathBuf,
        #[command(flatten)]
        selection: Selection,
    },
    /// Print chart JSON from a dump
    Chart {
        /// Dump file
        #[arg(long)]
        input: PathBuf,
        #[command(flatten)]
        selection: Selection,
    },
    /// Fetch live progressions and print chart JSON
    Fetch {
        /// Platform root URL
        #[arg(long)]
        server: String,
        /// Session cookie for team-scoped requests
        #[arg(long)]
        cookie: Option<String>,
        /// Request timeout in seconds
        #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
        timeout: u64,
        #[command(flatten)]
        selection: Selection,
    },
}

/// Which progressions to graph.
#[derive(Args, Debug)]
struct Selection {
    /// Top teams of a scoreboard
    #[arg(long, group = "source")]
    scoreboard: Option<ScoreboardId>,
    /// Top teams of a group
    #[arg(long, group = "source")]
    group: Option<GroupId>,
    /// The signed-in team
    #[arg(long, group = "source")]
    team: bool,
    /// Problem category, with --team
    #[arg(long)]
    category: Option<String>,
    /// Number of top teams, with --scoreboard or --group (admin only)
    #[arg(long)]
    limit: Option<u32>,
}

impl Selection {
    fn into_source(self) -> Result<ProgressionSource> {
        if self.category.is_some() && !self.team {
            anyhow::bail!("--category only applies to --team");
        }

        let source = match (self.scoreboard, self.group, self.team) {
            (Some(id), None, false) => ProgressionSource::scoreboard(id),
            (None, Some(id), false) => ProgressionSource::group(id),
            (None, None, true) => ProgressionSource::team(self.category),
            _ => anyhow::bail!("Pass exactly one of --scoreboard, --group or --team"),
        };

        match self.limit {
            Some(limit) => Ok(source.with_limit(limit)?),
            None => Ok(source),
        }
    }
}

fn init_logging() {
    // Logs go to stderr so stdout stays valid JSON
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>, points: Option<usize>) -> Result<ProgressionConfig> {
    let mut config = match path {
        Some(path) => ProgressionConfig::from_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => ProgressionConfig::default(),
    };
    if let Some(points) = points {
        config = config.with_point_count(points);
    }
    config.validate()?;
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn print_points(
    api: &dyn ProgressionApi,
    source: &ProgressionSource,
    now: Option<i64>,
    engine: &ProgressionEngine,
) -> Result<()> {
    let snapshot = fetch_snapshot(api, source, now)
        .await
        .context("Failed to load progressions (pass --now if the dump has no time)")?;

    if !snapshot.progressions.has_solves() {
        println!("{}", NO_SOLVES_MESSAGE);
        return Ok(());
    }

    let points = engine.points(
        &snapshot.progressions.event_sets(),
        Some(snapshot.current_time),
    )?;
    print_json(&points)
}

async fn print_chart(
    api: &dyn ProgressionApi,
    source: &ProgressionSource,
    now: Option<i64>,
    builder: &ChartBuilder,
) -> Result<()> {
    let snapshot = fetch_snapshot(api, source, now)
        .await
        .with_context(|| format!("Failed to load progressions from {}", source.path()))?;

    let outcome = match &snapshot.progressions {
        Progressions::Ranking(teams) => builder.top_teams(teams, Some(snapshot.current_time))?,
        Progressions::Team(events) => builder.team(events, Some(snapshot.current_time))?,
    };

    match outcome {
        ChartOutcome::Chart { chart } => print_json(&chart)?,
        ChartOutcome::Placeholder { message } => println!("{}", message),
        ChartOutcome::Skipped => info!("Not enough teams to compare, nothing to draw"),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref(), cli.points)?;
    let engine = ProgressionEngine::new().with_config(config);

    match cli.command {
        Commands::Points { input, selection } => {
            let api = FileProgressionApi::open(&input)
                .await
                .with_context(|| format!("Failed to read dump {}", input.display()))?;
            print_points(&api, &selection.into_source()?, cli.now, &engine).await?;
        }
        Commands::Chart { input, selection } => {
            let api = FileProgressionApi::open(&input)
                .await
                .with_context(|| format!("Failed to read dump {}", input.display()))?;
            let builder = ChartBuilder::new().with_engine(engine);
            print_chart(&api, &selection.into_source()?, cli.now, &builder).await?;
        }
        Commands::Fetch {
            server,
            cookie,
            timeout,
            selection,
        } => {
            let mut client_config = ClientConfig::new(server).with_timeout_secs(timeout);
            if let Some(cookie) = cookie {
                client_config = client_config.with_cookie(cookie);
            }
            let api = HttpProgressionApi::new(client_config)?;
            let source = selection.into_source()?;
            info!("Fetching progressions for {}", source.path());

            let builder = ChartBuilder::new().with_engine(engine);
            print_chart(&api, &source, cli.now, &builder).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scoreboard_fetch() {
        let cli = Cli::try_parse_from([
            "scoregraph",
            "fetch",
            "--server",
            "https://ctf.example.org",
            "--scoreboard",
            "global",
            "--points",
            "96",
        ])
        .unwrap();

        assert_eq!(cli.points, Some(96));
        let Commands::Fetch { selection, timeout, .. } = cli.command else {
            panic!("expected fetch");
        };
        assert_eq!(timeout, DEFAULT_TIMEOUT_SECS);
        assert_eq!(
            selection.into_source().unwrap(),
            ProgressionSource::scoreboard(ScoreboardId::new("global").unwrap())
        );
    }

    #[test]
    fn test_team_with_category() {
        let cli = Cli::try_parse_from([
            "scoregraph",
            "points",
            "--input",
            "dump.json",
            "--team",
            "--category",
            "crypto",
        ])
        .unwrap();

        let Commands::Points { selection, .. } = cli.command else {
            panic!("expected points");
        };
        assert_eq!(
            selection.into_source().unwrap(),
            ProgressionSource::team(Some("crypto".to_string()))
        );
    }

    #[test]
    fn test_sources_are_exclusive() {
        let result = Cli::try_parse_from([
            "scoregraph",
            "chart",
            "--input",
            "dump.json",
            "--scoreboard",
            "a",
            "--group",
            "b",
        ]);
        assert!(result.is_err());
    }

    fn parse_selection(args: &[&str]) -> Selection {
        let cli = Cli::try_parse_from(
            ["scoregraph", "chart", "--input", "dump.json"]
                .iter()
                .chain(args)
                .copied(),
        )
        .unwrap();
        let Commands::Chart { selection, .. } = cli.command else {
            panic!("expected chart");
        };
        selection
    }

    #[test]
    fn test_category_requires_team() {
        let selection = parse_selection(&["--group", "b", "--category", "web"]);
        let err = selection.into_source().unwrap_err();
        assert!(err.to_string().contains("--category"));

        let selection = parse_selection(&["--scoreboard", "a", "--category", "web"]);
        assert!(selection.into_source().is_err());
    }

    #[test]
    fn test_limit_applies_to_rankings() {
        let source = parse_selection(&["--group", "b", "--limit", "10"])
            .into_source()
            .unwrap();
        assert_eq!(
            source,
            ProgressionSource::group(GroupId::new("b").unwrap())
                .with_limit(10)
                .unwrap()
        );

        let selection = parse_selection(&["--team", "--limit", "10"]);
        assert!(selection.into_source().is_err());
    }

    #[test]
    fn test_missing_source_rejected() {
        let cli = Cli::try_parse_from(["scoregraph", "chart", "--input", "dump.json"]).unwrap();
        let Commands::Chart { selection, .. } = cli.command else {
            panic!("expected chart");
        };
        assert!(selection.into_source().is_err());
    }

    #[test]
    fn test_points_flag_overrides_config() {
        let config = load_config(None, Some(12)).unwrap();
        assert_eq!(config.point_count, 12);
        assert!(load_config(None, Some(0)).is_err());
    }
}
