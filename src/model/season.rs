use serde::Serialize;

/// Season-long view of one team, used for the spotlight card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonAnalysis {
    pub entry: u32,
    pub best_gameweek_points: i32,
    pub worst_gameweek_points: i32,
    pub average_points: i32,
    /// Best (numerically smallest) recomputed league position this season.
    pub highest_rank: u32,
    pub lowest_rank: u32,
    /// Net points of up to three gameweeks before the selected one, oldest first.
    pub recent_points: Vec<i32>,
    pub recent_trend: RecentTrend,
    pub consistency: Consistency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecentTrend {
    Improving,
    Declining,
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Consistency {
    High,
    Medium,
    Low,
}

/// League position bands used for the spotlight headline.
///
/// Checked in order: `Leader`, `TopThree`, then the top half (split at the
/// 25th percentile), the third quarter, the bottom three, and everyone else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpotlightTier {
    Leader,
    TopThree,
    TopQuarter,
    TopHalf,
    ThirdQuarter,
    BottomThree,
    BottomQuarter,
}

/// Raw gameweek score bands: 70+, 60+, 50+, 40+, 30+, below 30.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekHaul {
    Masterclass,
    Stellar,
    Classy,
    Solid,
    Battling,
    Tough,
}

/// Everything the spotlight card's wording depends on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpotlightClassification {
    pub entry: u32,
    pub entry_name: String,
    /// Upstream rank.
    pub rank: u32,
    /// `last_rank - rank` as reported upstream.
    pub rank_change: i32,
    pub total_teams: usize,
    pub event_total: i32,
    pub tier: SpotlightTier,
    pub haul: WeekHaul,
    pub analysis: SeasonAnalysis,
}
