use std::time::Duration;

use reqwest::Client;
use tracing::{info, warn};

use crate::config::SavantConfig;
use crate::decode;
use crate::error::{FetchError, Result};
use crate::models::LeaderboardResult;
use crate::query::LeaderboardQuery;

/// Baseball Savant leaderboard fetcher.
///
/// Holds the injected service configuration and a reqwest client with a
/// bounded timeout. Every call is independent; nothing is cached or retried.
pub struct BatTrackingFetcher {
    config: SavantConfig,
    client: Client,
}

impl BatTrackingFetcher {
    /// Create a new fetcher instance.
    pub fn new(config: SavantConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &SavantConfig {
        &self.config
    }

    /// Fetch one leaderboard window.
    ///
    /// Transport failures and non-success statuses propagate unchanged; a
    /// non-tabular body decodes to a valid empty result. Pre-sensor-era
    /// windows log an advisory and continue, since a range spanning the
    /// boundary year may still return data.
    pub async fn fetch(&self, query: &LeaderboardQuery) -> Result<LeaderboardResult> {
        for advisory in query.advisories(&self.config) {
            warn!("{advisory}");
        }

        let url = query.url(&self.config);
        info!(
            "fetching {} leaderboard window {} to {}",
            query.player_type, query.start_date, query.end_date
        );

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status, url });
        }

        let body = response.text().await?;
        let result = decode::decode_table(&body);
        info!("decoded {} leaderboard rows", result.len());

        Ok(result)
    }
}
