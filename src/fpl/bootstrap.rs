use std::sync::Arc;

use tracing::{debug, instrument};

use crate::cache::OnceCache;
use crate::error::{DebriefError, Result};
use crate::fpl::{self, Transport, BOOTSTRAP_PATH};
use crate::model::Bootstrap;

/// Process-lifetime caches for slow-moving season metadata.
///
/// Nothing expires on its own: a gameweek rollover is only picked up after
/// [`SeasonCache::clear`] (or a restart).
#[derive(Debug, Default)]
pub struct SeasonCache {
    bootstrap: OnceCache<Bootstrap>,
    current_gameweek: OnceCache<u32>,
}

impl SeasonCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&self) {
        self.bootstrap.clear();
        self.current_gameweek.clear();
    }
}

#[instrument(skip(transport, cache))]
pub(crate) async fn get_bootstrap(
    transport: &dyn Transport,
    cache: &SeasonCache,
) -> Result<Arc<Bootstrap>> {
    cache
        .bootstrap
        .get_or_try_init(|| async {
            let bootstrap: Bootstrap = fpl::get_json(transport, BOOTSTRAP_PATH).await?;
            debug!(events = bootstrap.events.len(), "parsed bootstrap");
            Ok::<_, DebriefError>(bootstrap)
        })
        .await
}

#[instrument(skip(transport, cache))]
pub(crate) async fn get_current_gameweek(
    transport: &dyn Transport,
    cache: &SeasonCache,
) -> Result<u32> {
    if let Some(gameweek) = cache.current_gameweek.get() {
        return Ok(*gameweek);
    }
    let bootstrap = get_bootstrap(transport, cache).await?;
    let gameweek = *cache.current_gameweek.set(resolve_current_gameweek(&bootstrap));
    debug!(gameweek, "resolved current gameweek");
    Ok(gameweek)
}

/// The event flagged current, else the last finished one, else 1.
pub fn resolve_current_gameweek(bootstrap: &Bootstrap) -> u32 {
    bootstrap
        .events
        .iter()
        .find(|e| e.is_current)
        .or_else(|| bootstrap.events.iter().rev().find(|e| e.finished))
        .map(|e| e.id)
        .unwrap_or(1)
}

/// Gameweeks a picker can offer, newest first.
pub fn selectable_gameweeks(current: u32) -> Vec<u32> {
    (1..=current).rev().collect()
}
