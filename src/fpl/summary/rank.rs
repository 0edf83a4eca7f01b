use std::cmp::Reverse;

use itertools::Itertools;

use crate::model::{PositionSeries, RankChange, TeamPositions, TeamStanding, RECENT_WINDOW};

/// League positions (1-based) by cumulative total at `gameweek`, indexed like `standings`.
///
/// Teams without a record for that gameweek count as 0 points. Ties keep
/// their order in `standings`.
pub fn positions_at(standings: &[TeamStanding], gameweek: u32) -> Vec<u32> {
    let mut order: Vec<usize> = (0..standings.len()).collect();
    order.sort_by_key(|&i| Reverse(standings[i].total_at(gameweek)));

    let mut positions = vec![0; standings.len()];
    for (position, index) in order.into_iter().enumerate() {
        positions[index] = position as u32 + 1;
    }
    positions
}

/// Recompute positions for `gameweek` and the one before it, independent of upstream ranks.
///
/// The result is in the same order as `standings`.
pub fn calculate_rank_changes(standings: &[TeamStanding], gameweek: u32) -> Vec<RankChange> {
    let previous_gameweek = gameweek.saturating_sub(1);
    let previous = positions_at(standings, previous_gameweek);
    let current = positions_at(standings, gameweek);

    standings
        .iter()
        .zip(previous)
        .zip(current)
        .map(|((team, previous_position), current_position)| RankChange {
            entry: team.entry,
            entry_name: team.entry_name.clone(),
            previous_position,
            current_position,
            position_change: previous_position as i32 - current_position as i32,
            current_total: team.total_at(gameweek),
            previous_total: team.total_at(previous_gameweek),
        })
        .collect()
}

/// Positions at each of the last [`RECENT_WINDOW`] gameweeks that any team's
/// recent history covers, one row per team in `standings` order.
pub fn position_series(standings: &[TeamStanding]) -> PositionSeries {
    let covered: Vec<u32> = standings
        .iter()
        .flat_map(|team| team.history.iter().map(|point| point.gameweek))
        .sorted_unstable()
        .dedup()
        .collect();
    let gameweeks = covered[covered.len().saturating_sub(RECENT_WINDOW)..].to_vec();

    let by_gameweek: Vec<Vec<u32>> = gameweeks
        .iter()
        .map(|&gameweek| positions_at(standings, gameweek))
        .collect();

    let teams = standings
        .iter()
        .enumerate()
        .map(|(index, team)| TeamPositions {
            entry: team.entry,
            entry_name: team.entry_name.clone(),
            positions: by_gameweek.iter().map(|positions| positions[index]).collect(),
        })
        .collect();

    PositionSeries { gameweeks, teams }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fpl::testing::{team_with_points, team_with_totals};

    #[test]
    fn test_three_team_scenario() {
        let standings = vec![
            team_with_totals(1, "Team A", &[(1, 100), (2, 85)]),
            team_with_totals(2, "Team B", &[(1, 90), (2, 95)]),
            team_with_totals(3, "Team C", &[(1, 80), (2, 82)]),
        ];

        let changes = calculate_rank_changes(&standings, 2);

        let positions: Vec<(u32, u32)> = changes
            .iter()
            .map(|c| (c.previous_position, c.current_position))
            .collect();
        assert_eq!(positions, vec![(1, 2), (2, 1), (3, 3)]);
        assert_eq!(changes[0].position_change, -1);
        assert_eq!(changes[1].position_change, 1);
        assert_eq!(changes[2].position_change, 0);
        assert_eq!(changes[1].current_total, 95);
        assert_eq!(changes[1].previous_total, 90);
        for change in &changes {
            assert_eq!(
                change.position_change,
                change.previous_position as i32 - change.current_position as i32
            );
        }
    }

    #[test]
    fn test_missing_gameweek_ranks_last() {
        let standings = vec![
            team_with_totals(1, "Founder", &[(1, 40), (2, 90)]),
            team_with_totals(2, "Latecomer", &[(2, 120)]),
            team_with_totals(3, "Steady", &[(1, 55), (2, 100)]),
        ];

        let changes = calculate_rank_changes(&standings, 2);

        let latecomer = &changes[1];
        assert_eq!(latecomer.previous_position, 3);
        assert_eq!(latecomer.previous_total, 0);
        assert_eq!(latecomer.current_position, 1);
        assert_eq!(latecomer.position_change, 2);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let standings = vec![
            team_with_totals(7, "First", &[(1, 60)]),
            team_with_totals(8, "Second", &[(1, 60)]),
            team_with_totals(9, "Third", &[(1, 61)]),
        ];
        assert_eq!(positions_at(&standings, 1), vec![2, 3, 1]);
    }

    #[test]
    fn test_first_gameweek_has_no_movement_baseline() {
        let standings = vec![
            team_with_totals(1, "A", &[(1, 30)]),
            team_with_totals(2, "B", &[(1, 70)]),
        ];
        let changes = calculate_rank_changes(&standings, 1);
        assert_eq!(changes[0].previous_position, 1);
        assert_eq!(changes[0].current_position, 2);
        assert_eq!(changes[1].position_change, 1);
    }

    #[test]
    fn test_position_series() {
        let standings = vec![
            team_with_totals(1, "A", &[(1, 10), (2, 50)]),
            team_with_totals(2, "B", &[(1, 20), (2, 30)]),
            team_with_totals(3, "C", &[(2, 60)]),
        ];

        let series = position_series(&standings);

        assert_eq!(series.gameweeks, vec![1, 2]);
        let rows: Vec<(u32, Vec<u32>)> = series
            .teams
            .iter()
            .map(|t| (t.entry, t.positions.clone()))
            .collect();
        assert_eq!(rows, vec![(1, vec![2, 2]), (2, vec![1, 3]), (3, vec![3, 1])]);
    }

    #[test]
    fn test_position_series_keeps_recent_window() {
        let standings = vec![
            team_with_points(1, "Long", &[10, 10, 10, 10, 10, 10, 10]),
            team_with_points(2, "Short", &[30, 5]),
        ];

        let series = position_series(&standings);

        assert_eq!(series.gameweeks, vec![3, 4, 5, 6, 7]);
        assert_eq!(series.teams[0].positions, vec![1, 1, 1, 1, 1]);
        assert_eq!(series.teams[1].positions, vec![2, 2, 2, 2, 2]);
    }
}
