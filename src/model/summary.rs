use serde::Serialize;

use super::standing::TeamStanding;

/// How a team's league position moved between the previous and the selected gameweek.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankChange {
    pub entry: u32,
    pub entry_name: String,
    pub previous_position: u32,
    pub current_position: u32,
    /// `previous_position - current_position`; positive means the team climbed.
    pub position_change: i32,
    pub current_total: i32,
    pub previous_total: i32,
}

/// Everything the dashboard shows for one gameweek.
#[derive(Debug, Clone, Serialize)]
pub struct GameweekSummary {
    pub gameweek: u32,
    /// Sorted by total, highest first.
    pub standings: Vec<TeamStanding>,
    pub top_scorer: TeamStanding,
    pub biggest_riser: TeamStanding,
    pub biggest_faller: TeamStanding,
    pub rank_changes: Vec<RankChange>,
    pub narrative: Narrative,
}

#[derive(Debug, Clone, Serialize)]
pub struct Narrative {
    pub key_events: Vec<String>,
    pub individual_performances: Vec<TeamNarrative>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamNarrative {
    pub entry: u32,
    pub entry_name: String,
    pub narrative: String,
}

/// Recomputed league positions over recent gameweeks, for a position chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionSeries {
    pub gameweeks: Vec<u32>,
    pub teams: Vec<TeamPositions>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamPositions {
    pub entry: u32,
    pub entry_name: String,
    /// One position per entry of [`PositionSeries::gameweeks`].
    pub positions: Vec<u32>,
}

impl GameweekSummary {
    pub fn rank_change(&self, entry: u32) -> Option<&RankChange> {
        self.rank_changes.iter().find(|r| r.entry == entry)
    }
}

/// Gameweek score relative to the league average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    Average,
    Poor,
    Terrible,
}

/// Size and direction of a position change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Movement {
    BigRise,
    SmallRise,
    Unchanged,
    SmallFall,
    BigFall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormTrend {
    Improving,
    Declining,
    Stable,
}

/// Where a team sits in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionTier {
    Leader,
    TopThree,
    TopQuartile,
    TopHalf,
    MidTable,
    BottomQuartile,
}

/// Bucketed view of one team's gameweek, independent of any phrasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeamClassification {
    pub points_vs_average: i32,
    pub position_change: i32,
    pub current_position: u32,
    /// Net count of rising minus falling gameweeks over the recent window.
    pub form_score: i32,
    pub score_band: ScoreBand,
    pub movement: Movement,
    pub form: FormTrend,
    pub tier: PositionTier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleRace {
    CommandingLead,
    Contested,
    CloseRace,
    /// Only one team in the league.
    Unopposed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Volatility {
    Volatile,
    Steady,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringLevel {
    Exceptional,
    Strong,
    Challenging,
}

/// League-wide figures the key events are written from.
#[derive(Debug, Clone, Serialize)]
pub struct LeagueClassification {
    pub gameweek: u32,
    pub average_points: i32,
    pub teams_up: usize,
    pub teams_down: usize,
    pub leader_name: String,
    pub point_gap: i32,
    pub top_score: i32,
    pub title_race: TitleRace,
    pub volatility: Volatility,
    pub scoring: ScoringLevel,
}
