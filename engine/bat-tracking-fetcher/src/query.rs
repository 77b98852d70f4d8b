use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::SavantConfig;
use crate::error::FetchError;

/// Which side of the plate the leaderboard aggregates over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerType {
    Batter,
    Pitcher,
}

impl PlayerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerType::Batter => "batter",
            PlayerType::Pitcher => "pitcher",
        }
    }
}

impl fmt::Display for PlayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerType {
    type Err = FetchError;

    /// Parsing an unrecognized role is a caller contract violation and is
    /// rejected here, before any network activity.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "batter" => Ok(PlayerType::Batter),
            "pitcher" => Ok(PlayerType::Pitcher),
            other => Err(FetchError::InvalidPlayerType(other.to_string())),
        }
    }
}

/// Minimum competitive-swing threshold for a query window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MinSwings {
    /// Use the service's own default qualification rule (`minSwings=q`).
    Qualified,
    /// Explicit swing count, at least 1.
    Count(u32),
}

impl fmt::Display for MinSwings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinSwings::Qualified => f.write_str("q"),
            MinSwings::Count(n) => write!(f, "{n}"),
        }
    }
}

impl Default for MinSwings {
    fn default() -> Self {
        MinSwings::Qualified
    }
}

/// Non-fatal diagnostic attached to a query. Never alters control flow;
/// the request is still issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Advisory {
    /// The window starts before Hawk-Eye bat tracking exists. The fetch may
    /// legitimately still return data if the range spans the boundary year.
    PreSensorEra { season_start: i32, era_start: i32 },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::PreSensorEra {
                season_start,
                era_start,
            } => write!(
                f,
                "bat tracking data is only available from {era_start} onward (Hawk-Eye); \
                 year {season_start} will likely return empty data"
            ),
        }
    }
}

/// One leaderboard window: an inclusive date range plus role and threshold.
///
/// Dates are kept as the caller's `YYYY-MM-DD` strings and are not validated
/// here; a malformed date propagates to the service and surfaces downstream
/// as an empty or error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardQuery {
    pub start_date: String,
    pub end_date: String,
    pub player_type: PlayerType,
    pub min_swings: MinSwings,
}

impl LeaderboardQuery {
    pub fn new(
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        player_type: PlayerType,
        min_swings: MinSwings,
    ) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
            player_type,
            min_swings,
        }
    }

    /// Four-digit year prefix of the start date.
    pub fn season_start(&self) -> &str {
        year_prefix(&self.start_date)
    }

    /// Four-digit year prefix of the end date. Derived independently of
    /// `season_start`, never cross-validated against it.
    pub fn season_end(&self) -> &str {
        year_prefix(&self.end_date)
    }

    /// Build the full request URL against the configured endpoint.
    pub fn url(&self, config: &SavantConfig) -> String {
        format!(
            "{base}?dateStart={start}&dateEnd={end}\
             &gameType={game_type}\
             &minSwings={min_swings}\
             &minGroupSwings={min_group}\
             &seasonStart={season_start}&seasonEnd={season_end}\
             &type={player_type}\
             &csv={csv}",
            base = config.base_url,
            start = self.start_date,
            end = self.end_date,
            game_type = config.game_type,
            min_swings = self.min_swings,
            min_group = config.min_group_swings,
            season_start = self.season_start(),
            season_end = self.season_end(),
            player_type = self.player_type,
            csv = config.csv_export,
        )
    }

    /// Non-fatal advisories for this window. At most one per call.
    pub fn advisories(&self, config: &SavantConfig) -> Vec<Advisory> {
        let mut advisories = Vec::new();

        if let Ok(season_start) = self.season_start().parse::<i32>() {
            if season_start < config.sensor_era_start_year {
                advisories.push(Advisory::PreSensorEra {
                    season_start,
                    era_start: config.sensor_era_start_year,
                });
            }
        }

        advisories
    }
}

fn year_prefix(date: &str) -> &str {
    date.get(..4).unwrap_or(date)
}
