use serde::{Deserialize, Serialize};

/// Configuration for the Baseball Savant leaderboard boundary.
///
/// Everything the service requires beyond the caller-supplied window lives
/// here, so the external boundary is a single injectable seam rather than
/// literals scattered through the call sites.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavantConfig {
    /// Leaderboard endpoint (swing path / attack angle).
    pub base_url: String,

    /// Game type selector. The leaderboard only covers regular season play.
    pub game_type: String,

    /// Minimum swings per swing group. Fixed at 1 for every query.
    pub min_group_swings: u32,

    /// Request the tabular CSV export instead of the HTML page.
    pub csv_export: bool,

    /// First season with Hawk-Eye bat tracking data.
    pub sensor_era_start_year: i32,

    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,

    /// Pause between adjacent fetches in a monthly aggregation run.
    pub request_pause_ms: u64,
}

impl Default for SavantConfig {
    fn default() -> Self {
        Self {
            base_url: "https://baseballsavant.mlb.com/leaderboard/bat-tracking/swing-path-attack-angle".to_string(),
            game_type: "Regular".to_string(),
            min_group_swings: 1,
            csv_export: true,
            sensor_era_start_year: 2024,
            timeout_secs: 30,
            request_pause_ms: 1_000,
        }
    }
}

impl SavantConfig {
    /// Load configuration, applying environment overrides where present.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("BAT_TRACKING_BASE_URL") {
            config.base_url = url;
        }

        if let Ok(secs) = std::env::var("BAT_TRACKING_TIMEOUT_SECS") {
            config.timeout_secs = secs.parse().unwrap_or(config.timeout_secs);
        }

        if let Ok(ms) = std::env::var("BAT_TRACKING_PAUSE_MS") {
            config.request_pause_ms = ms.parse().unwrap_or(config.request_pause_ms);
        }

        config
    }
}
