use anyhow::{bail, Context, Result};
use bat_tracking_fetcher::{
    BatTrackingFetcher, LeaderboardQuery, MinSwings, PlayerType, SavantConfig,
};
use tracing::info;

fn usage() -> ! {
    eprintln!("Usage:");
    eprintln!("  bat-tracking-fetcher range <start> <end> [batter|pitcher] [min_swings|q]");
    eprintln!("  bat-tracking-fetcher monthly <year> [batter|pitcher] [min_swings|q]");
    eprintln!("  bat-tracking-fetcher splits <year> [batter|pitcher] [min_swings|q]");
    std::process::exit(2);
}

fn parse_min_swings(arg: &str) -> Result<MinSwings> {
    if arg == "q" || arg == "qualified" {
        return Ok(MinSwings::Qualified);
    }
    let count: u32 = arg
        .parse()
        .with_context(|| format!("min_swings must be a positive integer or 'q', got {arg:?}"))?;
    if count == 0 {
        bail!("min_swings must be at least 1");
    }
    Ok(MinSwings::Count(count))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(mode) = args.first() else { usage() };

    let config = SavantConfig::from_env();
    let fetcher = BatTrackingFetcher::new(config)?;

    match mode.as_str() {
        "range" => {
            let (Some(start), Some(end)) = (args.get(1), args.get(2)) else {
                usage()
            };
            let player_type: PlayerType =
                args.get(3).map(String::as_str).unwrap_or("batter").parse()?;
            let min_swings = args
                .get(4)
                .map(|s| parse_min_swings(s))
                .transpose()?
                .unwrap_or(MinSwings::Qualified);

            let query = LeaderboardQuery::new(start, end, player_type, min_swings);
            let result = fetcher.fetch(&query).await?;

            info!("{} players in window {} to {}", result.len(), start, end);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        "monthly" => {
            let year: i32 = args
                .get(1)
                .unwrap_or_else(|| usage())
                .parse()
                .context("year must be a four-digit integer")?;
            let player_type: PlayerType =
                args.get(2).map(String::as_str).unwrap_or("batter").parse()?;
            // Monthly windows default to a low bar; the season qualification
            // rule would filter out most player-months.
            let min_swings = args
                .get(3)
                .map(|s| parse_min_swings(s))
                .transpose()?
                .unwrap_or(MinSwings::Count(1));

            let result = fetcher.fetch_monthly(year, player_type, min_swings).await?;

            info!(
                "{} player-month rows across months {:?}",
                result.len(),
                result.months_present()
            );
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        "splits" => {
            let year: i32 = args
                .get(1)
                .unwrap_or_else(|| usage())
                .parse()
                .context("year must be a four-digit integer")?;
            let player_type: PlayerType =
                args.get(2).map(String::as_str).unwrap_or("batter").parse()?;
            let min_swings = args
                .get(3)
                .map(|s| parse_min_swings(s))
                .transpose()?
                .unwrap_or(MinSwings::Qualified);

            let result = fetcher.fetch_splits(year, player_type, min_swings).await?;

            info!(
                "first half: {} players, second half: {} players",
                result.first_half.len(),
                result.second_half.len()
            );
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        _ => usage(),
    }

    Ok(())
}
