use itertools::Itertools;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::fpl::{self, Transport};
use crate::model::TeamHistory;

/// Fetch a team's gameweek history and chip plays, cut at `gameweek`.
///
/// Cumulative totals are recomputed from net points rather than taken from
/// upstream, whose running total reflects the latest gameweek, not the cut.
#[instrument(skip(transport))]
pub(crate) async fn get_team_history(
    transport: &dyn Transport,
    team_id: u32,
    gameweek: u32,
) -> Result<TeamHistory> {
    let raw: TeamHistory = fpl::get_json(transport, &fpl::team_history_path(team_id)).await?;
    let history = cut_at(raw, gameweek);
    debug!(
        team_id,
        gameweeks = history.current.len(),
        chips = history.chips.len(),
        "parsed team history"
    );
    Ok(history)
}

pub(crate) fn cut_at(raw: TeamHistory, gameweek: u32) -> TeamHistory {
    let mut running = 0;
    let current = raw
        .current
        .into_iter()
        .filter(|record| record.event <= gameweek)
        .sorted_by_key(|record| record.event)
        .dedup_by(|a, b| a.event == b.event)
        .map(|mut record| {
            running += record.net_points();
            record.total_points = running;
            record
        })
        .collect();

    let chips = raw
        .chips
        .into_iter()
        .filter(|chip| chip.event <= gameweek)
        .collect();

    TeamHistory { current, chips }
}
