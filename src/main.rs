use std::io;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use football_api::{ApiConfig, FootballClient, Record, Table};

#[derive(Debug, Parser)]
#[command(name = "football-api", about = "Print API-Football data as flat tables")]
struct Cli {
    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Tsv)]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Tsv,
    Json,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Every league, one row per season.
    Leagues,
    /// League table for a season.
    Standings {
        #[arg(long)]
        season: u16,
        #[arg(long)]
        league: Option<u32>,
        #[arg(long)]
        team: Option<u32>,
    },
    /// Upcoming fixtures of a league.
    Fixtures {
        #[arg(long)]
        league: u32,
    },
}

fn print_table<R: Record>(table: &Table<R>, format: Format) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        Format::Tsv => table.write_tsv(&mut out)?,
        Format::Json => table.write_json(&mut out)?,
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ApiConfig::from_env().context("failed to load configuration")?;
    info!(base_url = %config.base_url, "using api");
    let client = FootballClient::new(config);

    match cli.command {
        Command::Leagues => print_table(&client.get_leagues().await?, cli.format)?,
        Command::Standings {
            season,
            league,
            team,
        } => print_table(
            &client.get_standings(season, league, team).await?,
            cli.format,
        )?,
        Command::Fixtures { league } => {
            print_table(&client.get_fixtures(league).await?, cli.format)?
        }
    }
    Ok(())
}
