use tracing::{debug, instrument};

use crate::error::Result;
use crate::fpl::{self, Transport};
use crate::model::LeagueStandingsPage;

#[instrument(skip(transport))]
pub(crate) async fn get_standings_page(
    transport: &dyn Transport,
    league_id: u32,
    gameweek: u32,
) -> Result<LeagueStandingsPage> {
    let path = fpl::league_standings_path(league_id, gameweek);
    let page: LeagueStandingsPage = fpl::get_json(transport, &path).await?;
    debug!(
        league_id,
        gameweek,
        league = %page.league.name,
        teams = page.standings.results.len(),
        has_next = page.standings.has_next,
        "parsed league standings"
    );
    Ok(page)
}
