use std::sync::Arc;

use tracing::instrument;

use crate::config::{ClientConfig, DEFAULT_LEAGUE_ID};
use crate::error::Result;
use crate::fpl::bootstrap::{self, SeasonCache};
use crate::fpl::entries::{history, profile};
use crate::fpl::leagues::{aggregate, standings};
use crate::fpl::transport::{HttpTransport, RetryingTransport, Transport};
use crate::model::*;

/// The main entry point for building FPL league debriefs.
///
/// `DebriefClient` owns a [`Transport`] (retrying HTTP by default) and the
/// season caches, and exposes one method per upstream operation plus the
/// aggregated league view.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> fpl_debrief::Result<()> {
/// use fpl_debrief::{generate_gameweek_summary, DebriefClient};
///
/// let client = DebriefClient::new()?;
/// let gameweek = client.get_current_gameweek().await?;
/// let standings = client.get_league_standings(5669, gameweek).await?;
/// let summary = generate_gameweek_summary(&standings)?;
/// println!("{}", summary.narrative.key_events.join("\n"));
/// # Ok(())
/// # }
/// ```
pub struct DebriefClient {
    transport: Box<dyn Transport>,
    cache: Arc<SeasonCache>,
}

impl DebriefClient {
    /// Create a client with default settings.
    pub fn new() -> Result<Self> {
        Self::with_config(&ClientConfig::default())
    }

    /// Create a client talking HTTP according to `config`, retrying per its policy.
    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        let http = HttpTransport::new(config)?;
        Ok(Self::with_transport(RetryingTransport::new(
            http,
            config.retry.clone(),
        )))
    }

    /// Create a client over any transport. No retry layer is added.
    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Box::new(transport),
            cache: Arc::new(SeasonCache::new()),
        }
    }

    /// Share season caches with another client.
    pub fn with_cache(mut self, cache: Arc<SeasonCache>) -> Self {
        self.cache = cache;
        self
    }

    /// Forget cached bootstrap data and the resolved current gameweek.
    pub fn clear_caches(&self) {
        self.cache.clear();
    }

    /// Gameweek metadata, fetched once and then served from cache.
    #[instrument(skip(self))]
    pub async fn get_bootstrap(&self) -> Result<Arc<Bootstrap>> {
        bootstrap::get_bootstrap(self.transport.as_ref(), &self.cache).await
    }

    /// The gameweek in progress (or last finished), cached after the first call.
    #[instrument(skip(self))]
    pub async fn get_current_gameweek(&self) -> Result<u32> {
        bootstrap::get_current_gameweek(self.transport.as_ref(), &self.cache).await
    }

    /// Raw standings page for a league as upstream ranks it.
    #[instrument(skip(self))]
    pub async fn get_standings_page(
        &self,
        league_id: u32,
        gameweek: u32,
    ) -> Result<LeagueStandingsPage> {
        standings::get_standings_page(self.transport.as_ref(), league_id, gameweek).await
    }

    /// A team's history cut at `gameweek`, with recomputed cumulative totals.
    #[instrument(skip(self))]
    pub async fn get_team_history(&self, team_id: u32, gameweek: u32) -> Result<TeamHistory> {
        history::get_team_history(self.transport.as_ref(), team_id, gameweek).await
    }

    /// A team's profile; an empty profile if it could not be fetched.
    #[instrument(skip(self))]
    pub async fn get_team_profile(&self, team_id: u32) -> TeamProfile {
        profile::get_team_profile(self.transport.as_ref(), team_id).await
    }

    /// Every team's standing for `gameweek`, highest total first.
    #[instrument(skip(self))]
    pub async fn get_league_standings(
        &self,
        league_id: u32,
        gameweek: u32,
    ) -> Result<Vec<TeamStanding>> {
        aggregate::get_league_standings(self.transport.as_ref(), &self.cache, league_id, gameweek)
            .await
    }

    /// Standings for the fixed league at the current gameweek.
    #[instrument(skip(self))]
    pub async fn get_default_league_standings(&self) -> Result<Vec<TeamStanding>> {
        let gameweek = self.get_current_gameweek().await?;
        self.get_league_standings(DEFAULT_LEAGUE_ID, gameweek).await
    }
}
