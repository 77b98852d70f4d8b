//! Temporal aggregation: monthly splits and half-season comparisons.
//!
//! Both aggregations are strictly sequential compositions of single-window
//! fetches. The composition cores are generic over the fetch closure so the
//! window arithmetic, merge order and pause policy are testable without
//! network I/O. An error from any window aborts the run; accumulated partial
//! results are discarded.

use std::future::Future;
use std::ops::RangeInclusive;
use std::time::Duration;

use chrono::{Datelike, NaiveDate};
use tokio::time::sleep;
use tracing::info;

use crate::error::Result;
use crate::fetcher::BatTrackingFetcher;
use crate::models::{LeaderboardResult, MonthlyResult, MonthlyRow, SplitResult};
use crate::query::{LeaderboardQuery, MinSwings, PlayerType};

/// MLB regular season months, April through October.
const SEASON_MONTHS: RangeInclusive<u32> = 4..=10;

/// First half ends July 13; the All-Star break is approximated as July 14.
/// Fixed, not configurable.
const FIRST_HALF: (&str, &str) = ("03-01", "07-13");
const SECOND_HALF: (&str, &str) = ("07-14", "11-01");

impl BatTrackingFetcher {
    /// Fetch one season month by month, returning rows stamped with the
    /// calendar month (4–10) they were fetched from.
    ///
    /// Seven windows, with the configured pause between adjacent fetches but
    /// never before the first. Months with no qualifying players contribute
    /// nothing. For monthly splits the usual threshold is `MinSwings::Count(1)`,
    /// a lower bar than the full-season qualification rule.
    pub async fn fetch_monthly(
        &self,
        year: i32,
        player_type: PlayerType,
        min_swings: MinSwings,
    ) -> Result<MonthlyResult> {
        let pause = Duration::from_millis(self.config().request_pause_ms);
        monthly_core(year, player_type, min_swings, pause, |query| async move {
            self.fetch(&query).await
        })
        .await
    }

    /// Fetch the fixed first-half / second-half comparison for one season.
    /// Exactly two fetches, no pause, no month stamping.
    pub async fn fetch_splits(
        &self,
        year: i32,
        player_type: PlayerType,
        min_swings: MinSwings,
    ) -> Result<SplitResult> {
        splits_core(year, player_type, min_swings, |query| async move {
            self.fetch(&query).await
        })
        .await
    }
}

/// Monthly composition over an arbitrary fetch function.
pub(crate) async fn monthly_core<F, Fut>(
    year: i32,
    player_type: PlayerType,
    min_swings: MinSwings,
    pause: Duration,
    mut fetch: F,
) -> Result<MonthlyResult>
where
    F: FnMut(LeaderboardQuery) -> Fut,
    Fut: Future<Output = Result<LeaderboardResult>>,
{
    let mut merged = MonthlyResult::default();

    for (i, month) in SEASON_MONTHS.enumerate() {
        if i > 0 {
            sleep(pause).await;
        }

        let (start, end) = month_window(year, month);
        let query = LeaderboardQuery::new(start, end, player_type, min_swings);
        let result = fetch(query).await?;

        if result.is_empty() {
            info!("month {month} returned no qualifying players, skipping");
            continue;
        }

        if merged.columns.is_empty() {
            merged.columns = result.columns;
        }
        merged.rows.extend(
            result
                .rows
                .into_iter()
                .map(|row| MonthlyRow { month, row }),
        );
    }

    Ok(merged)
}

/// Half-season composition over an arbitrary fetch function.
pub(crate) async fn splits_core<F, Fut>(
    year: i32,
    player_type: PlayerType,
    min_swings: MinSwings,
    mut fetch: F,
) -> Result<SplitResult>
where
    F: FnMut(LeaderboardQuery) -> Fut,
    Fut: Future<Output = Result<LeaderboardResult>>,
{
    let first_half = fetch(LeaderboardQuery::new(
        format!("{year}-{}", FIRST_HALF.0),
        format!("{year}-{}", FIRST_HALF.1),
        player_type,
        min_swings,
    ))
    .await?;

    let second_half = fetch(LeaderboardQuery::new(
        format!("{year}-{}", SECOND_HALF.0),
        format!("{year}-{}", SECOND_HALF.1),
        player_type,
        min_swings,
    ))
    .await?;

    Ok(SplitResult {
        first_half,
        second_half,
    })
}

/// First and last calendar day of a month, as inclusive `YYYY-MM-DD` bounds.
fn month_window(year: i32, month: u32) -> (String, String) {
    (
        format!("{year}-{month:02}-01"),
        format!("{year}-{month:02}-{:02}", last_day_of_month(year, month)),
    )
}

fn last_day_of_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(30)
}
