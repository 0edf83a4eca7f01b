use std::cmp::Reverse;

use futures::future::try_join_all;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::error::{DebriefError, Result};
use crate::fpl::bootstrap::{self, SeasonCache};
use crate::fpl::entries::{history, profile};
use crate::fpl::leagues::standings;
use crate::fpl::Transport;
use crate::model::{
    ChipEvent, ChipKind, ChipUsage, GameweekSnapshot, HistoryPoint, StandingRow, TeamHistory,
    TeamProfile, TeamStanding, RECENT_WINDOW,
};

/// Build every team's [`TeamStanding`] for `gameweek`, highest total first.
///
/// History failures abort the whole league; profile failures only cost that
/// team its profile chips.
#[instrument(skip(transport, cache))]
pub(crate) async fn get_league_standings(
    transport: &dyn Transport,
    cache: &SeasonCache,
    league_id: u32,
    gameweek: u32,
) -> Result<Vec<TeamStanding>> {
    let (page, current) = futures::try_join!(
        standings::get_standings_page(transport, league_id, gameweek),
        bootstrap::get_current_gameweek(transport, cache),
    )?;

    if gameweek == 0 || gameweek > current {
        return Err(DebriefError::InvalidGameweek { gameweek, current });
    }

    let rows = page.standings.results;
    if rows.is_empty() {
        return Err(DebriefError::NoData);
    }

    let fetched = try_join_all(rows.iter().map(|row| async move {
        let (history, profile) = futures::join!(
            history::get_team_history(transport, row.entry, gameweek),
            profile::get_team_profile(transport, row.entry),
        );
        Ok::<_, DebriefError>((history?, profile))
    }))
    .await?;

    // try_join_all keeps input order, so each row lines up with its own fetches.
    let mut teams: Vec<TeamStanding> = rows
        .iter()
        .zip(fetched)
        .map(|(row, (history, profile))| build_standing(row, &history, &profile, gameweek))
        .collect();
    teams.sort_by_key(|team| Reverse(team.total));

    debug!(league_id, gameweek, teams = teams.len(), "aggregated league standings");
    Ok(teams)
}

/// Join one team's standings row with its (already cut) history and profile.
pub(crate) fn build_standing(
    row: &StandingRow,
    history: &TeamHistory,
    profile: &TeamProfile,
    gameweek: u32,
) -> TeamStanding {
    let full_history: Vec<GameweekSnapshot> = history
        .current
        .iter()
        .filter(|record| record.event <= gameweek)
        .map(|record| GameweekSnapshot {
            gameweek: record.event,
            rank: record.rank,
            total: record.total_points,
            points: record.net_points(),
        })
        .sorted_by_key(|snapshot| snapshot.gameweek)
        .collect();

    let total = full_history.last().map(|s| s.total).unwrap_or_default();
    let event_total = history
        .current
        .iter()
        .find(|record| record.event == gameweek)
        .map(|record| record.net_points())
        .unwrap_or_default();

    let recent_start = full_history.len().saturating_sub(RECENT_WINDOW);
    let recent = full_history[recent_start..]
        .iter()
        .map(HistoryPoint::from)
        .collect();

    TeamStanding {
        entry: row.entry,
        entry_name: row.entry_name.clone(),
        manager_name: row.player_name.clone(),
        rank: row.rank,
        last_rank: row.last_rank,
        total,
        event_total,
        gameweek,
        history: recent,
        full_history,
        chips: merge_chips(&history.chips, &profile.chips, gameweek),
    }
}

/// History chips first, then profile chips; one entry per chip kind.
pub(crate) fn merge_chips(
    from_history: &[ChipEvent],
    from_profile: &[ChipEvent],
    gameweek: u32,
) -> Vec<ChipUsage> {
    from_history
        .iter()
        .chain(from_profile)
        .filter(|chip| chip.event <= gameweek)
        .filter_map(|chip| match ChipKind::from_code(&chip.name) {
            Some(kind) => Some(ChipUsage {
                kind,
                gameweek: chip.event,
            }),
            None => {
                debug!(code = %chip.name, "ignoring unknown chip code");
                None
            }
        })
        .unique_by(|usage| usage.kind)
        .collect()
}
