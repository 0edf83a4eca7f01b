use std::cmp::Ordering;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::fpl::summary::narrative::round_half_up;
use crate::fpl::summary::rank::positions_at;
use crate::model::{Consistency, GameweekSummary, RecentTrend, SeasonAnalysis, TeamStanding};

/// Season-long numbers for `team`, ranked against the rest of `standings`.
///
/// Returns `None` when the team has no recorded gameweeks or is not part of `standings`.
pub fn analyze_season(team: &TeamStanding, standings: &[TeamStanding]) -> Option<SeasonAnalysis> {
    let index = standings.iter().position(|t| t.entry == team.entry)?;
    let history = &team.full_history;
    let points: Vec<i32> = history.iter().map(|s| s.points).collect();

    let best_gameweek_points = *points.iter().max()?;
    let worst_gameweek_points = *points.iter().min()?;
    let average_points =
        round_half_up(points.iter().map(|&p| f64::from(p)).sum::<f64>() / points.len() as f64);

    let ranks: Vec<u32> = history
        .iter()
        .map(|s| positions_at(standings, s.gameweek)[index])
        .collect();
    let highest_rank = *ranks.iter().min()?;
    let lowest_rank = *ranks.iter().max()?;

    let before: Vec<i32> = history
        .iter()
        .filter(|s| s.gameweek < team.gameweek)
        .map(|s| s.points)
        .collect();
    let recent_points = before[before.len().saturating_sub(3)..].to_vec();

    let (improvements, declines) =
        recent_points
            .windows(2)
            .fold((0, 0), |(up, down), w| match w[1].cmp(&w[0]) {
                Ordering::Greater => (up + 1, down),
                Ordering::Less => (up, down + 1),
                Ordering::Equal => (up, down),
            });
    let recent_trend = match improvements.cmp(&declines) {
        Ordering::Greater => RecentTrend::Improving,
        Ordering::Less => RecentTrend::Declining,
        Ordering::Equal => RecentTrend::Mixed,
    };

    let variance = points
        .iter()
        .map(|&p| f64::from(p - average_points).powi(2))
        .sum::<f64>()
        / points.len() as f64;
    let spread = variance.sqrt();
    let consistency = if spread < 10.0 {
        Consistency::High
    } else if spread < 20.0 {
        Consistency::Medium
    } else {
        Consistency::Low
    };

    Some(SeasonAnalysis {
        entry: team.entry,
        best_gameweek_points,
        worst_gameweek_points,
        average_points,
        highest_rank,
        lowest_rank,
        recent_points,
        recent_trend,
        consistency,
    })
}

/// A random team that did not already win an award this gameweek.
pub fn pick_spotlight<'a, R: Rng + ?Sized>(
    summary: &'a GameweekSummary,
    rng: &mut R,
) -> Option<&'a TeamStanding> {
    let awarded = [
        summary.top_scorer.entry,
        summary.biggest_riser.entry,
        summary.biggest_faller.entry,
    ];
    let candidates: Vec<&TeamStanding> = summary
        .standings
        .iter()
        .filter(|t| !awarded.contains(&t.entry))
        .collect();
    candidates.choose(rng).copied()
}
