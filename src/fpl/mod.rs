use serde::de::DeserializeOwned;

use crate::error::{DebriefError, Result};

pub(crate) mod bootstrap;
pub(crate) mod entries;
pub(crate) mod leagues;
pub(crate) mod summary;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub(crate) use transport::Transport;

/// GET `path` and decode the body into `T`.
pub(crate) async fn get_json<T: DeserializeOwned>(
    transport: &dyn Transport,
    path: &str,
) -> Result<T> {
    let body = transport.get(path).await?;
    serde_json::from_value(body).map_err(|source| DebriefError::Decode {
        url: path.to_string(),
        source,
    })
}

pub(crate) fn league_standings_path(league_id: u32, gameweek: u32) -> String {
    format!("/leagues-classic/{league_id}/standings/?event={gameweek}")
}

pub(crate) const BOOTSTRAP_PATH: &str = "/bootstrap-static/";

pub(crate) fn team_history_path(team_id: u32) -> String {
    format!("/entry/{team_id}/history/")
}

pub(crate) fn team_profile_path(team_id: u32) -> String {
    format!("/entry/{team_id}/")
}
