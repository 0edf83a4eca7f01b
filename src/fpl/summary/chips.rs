use strum::IntoEnumIterator;

use crate::model::{ChipKind, ChipSlot, ChipState, ChipStatusRow, TeamStanding};

/// Which chips each team has played, in canonical chip order.
pub fn chip_board(standings: &[TeamStanding]) -> Vec<ChipStatusRow> {
    standings
        .iter()
        .map(|team| ChipStatusRow {
            entry: team.entry,
            entry_name: team.entry_name.clone(),
            chips: ChipKind::iter()
                .map(|kind| ChipSlot {
                    kind,
                    state: team
                        .chips
                        .iter()
                        .find(|c| c.kind == kind)
                        .map(|c| ChipState::Used {
                            gameweek: c.gameweek,
                        })
                        .unwrap_or(ChipState::Available),
                })
                .collect(),
        })
        .collect()
}
