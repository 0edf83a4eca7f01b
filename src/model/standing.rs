use serde::Serialize;

use super::chip::ChipUsage;

/// Number of gameweeks kept in [`TeamStanding::history`].
pub const RECENT_WINDOW: usize = 5;

/// A team's league record as of one selected gameweek.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStanding {
    pub entry: u32,
    pub entry_name: String,
    pub manager_name: String,
    /// Upstream rank, not recomputed.
    pub rank: u32,
    pub last_rank: u32,
    /// Cumulative net points through the selected gameweek.
    pub total: i32,
    /// Net points scored in the selected gameweek alone.
    pub event_total: i32,
    pub gameweek: u32,
    /// The last [`RECENT_WINDOW`] entries of `full_history`.
    pub history: Vec<HistoryPoint>,
    pub full_history: Vec<GameweekSnapshot>,
    pub chips: Vec<ChipUsage>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoryPoint {
    pub gameweek: u32,
    pub rank: Option<u32>,
    pub total: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameweekSnapshot {
    pub gameweek: u32,
    pub rank: Option<u32>,
    pub total: i32,
    pub points: i32,
}

impl TeamStanding {
    /// Cumulative total at `gameweek`, or 0 when the team has no record for it.
    pub fn total_at(&self, gameweek: u32) -> i32 {
        self.snapshot(gameweek).map(|s| s.total).unwrap_or_default()
    }

    pub fn snapshot(&self, gameweek: u32) -> Option<&GameweekSnapshot> {
        self.full_history
            .binary_search_by_key(&gameweek, |s| s.gameweek)
            .ok()
            .map(|i| &self.full_history[i])
    }
}

impl From<&GameweekSnapshot> for HistoryPoint {
    fn from(snapshot: &GameweekSnapshot) -> Self {
        Self {
            gameweek: snapshot.gameweek,
            rank: snapshot.rank,
            total: snapshot.total,
        }
    }
}
