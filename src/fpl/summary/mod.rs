use std::cmp::Reverse;

use rand::Rng;
use tracing::debug;

use crate::error::{DebriefError, Result};
use crate::model::{GameweekSummary, Narrative, TeamNarrative, TeamStanding};

pub(crate) mod chips;
pub(crate) mod digest;
pub(crate) mod narrative;
pub(crate) mod rank;
pub(crate) mod season;
pub(crate) mod spotlight;

/// Build the gameweek summary, phrasing narratives with the thread-local RNG.
pub fn generate_gameweek_summary(standings: &[TeamStanding]) -> Result<GameweekSummary> {
    generate_gameweek_summary_with_rng(standings, &mut rand::thread_rng())
}

/// Build the gameweek summary with a caller-supplied RNG (seed it for reproducible text).
pub fn generate_gameweek_summary_with_rng<R: Rng + ?Sized>(
    standings: &[TeamStanding],
    rng: &mut R,
) -> Result<GameweekSummary> {
    let first = standings.first().ok_or(DebriefError::NoData)?;
    let gameweek = first.gameweek;
    let rank_changes = rank::calculate_rank_changes(standings, gameweek);

    let top_scorer = standings
        .iter()
        .fold(first, |best, t| if t.event_total > best.event_total { t } else { best });

    let first_change = rank_changes.first().ok_or(DebriefError::NoData)?;
    let riser = rank_changes.iter().fold(first_change, |best, r| {
        if r.position_change > best.position_change {
            r
        } else {
            best
        }
    });
    let faller = rank_changes.iter().fold(first_change, |worst, r| {
        if r.position_change < worst.position_change {
            r
        } else {
            worst
        }
    });
    let team = |entry: u32| {
        standings
            .iter()
            .find(|t| t.entry == entry)
            .cloned()
            .ok_or(DebriefError::NoData)
    };
    let biggest_riser = team(riser.entry)?;
    let biggest_faller = team(faller.entry)?;

    let mut sorted = standings.to_vec();
    sorted.sort_by_key(|t| Reverse(t.total));

    let league = narrative::classify_league(&sorted, &rank_changes, top_scorer)
        .ok_or(DebriefError::NoData)?;
    let key_events = narrative::render_key_events(&league);

    let individual_performances = sorted
        .iter()
        .filter_map(|t| {
            let change = rank_changes.iter().find(|r| r.entry == t.entry)?;
            let c = narrative::classify_team(t, league.average_points, sorted.len(), change);
            Some(TeamNarrative {
                entry: t.entry,
                entry_name: t.entry_name.clone(),
                narrative: narrative::render_team_narrative(&c, rng),
            })
        })
        .collect();

    debug!(
        gameweek,
        teams = sorted.len(),
        top_scorer = top_scorer.entry,
        biggest_riser = biggest_riser.entry,
        biggest_faller = biggest_faller.entry,
        "generated gameweek summary"
    );

    Ok(GameweekSummary {
        gameweek,
        top_scorer: top_scorer.clone(),
        biggest_riser,
        biggest_faller,
        rank_changes,
        narrative: Narrative {
            key_events,
            individual_performances,
        },
        standings: sorted,
    })
}
