use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response of `GET /leagues-classic/{id}/standings/?event={gw}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueStandingsPage {
    pub league: League,
    pub standings: StandingsResults,
}

/// League header attached to a standings page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct League {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub admin_entry: Option<u32>,
    #[serde(default = "first_event")]
    pub start_event: u32,
}

fn first_event() -> u32 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsResults {
    #[serde(default)]
    pub has_next: bool,
    #[serde(default = "first_event")]
    pub page: u32,
    pub results: Vec<StandingRow>,
}

/// One team as ranked by upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingRow {
    pub id: u32,
    pub entry: u32,
    pub entry_name: String,
    pub player_name: String,
    pub rank: u32,
    pub last_rank: u32,
    pub total: i32,
    pub event_total: i32,
}

/// The parts of `GET /bootstrap-static/` this crate reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bootstrap {
    pub events: Vec<EventMeta>,
}

/// Gameweek metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMeta {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub deadline_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub finished: bool,
    #[serde(default, alias = "current")]
    pub is_current: bool,
}

/// Response of `GET /entry/{id}/history/`, already cut at the requested gameweek.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamHistory {
    pub current: Vec<GameweekRecord>,
    #[serde(default)]
    pub chips: Vec<ChipEvent>,
}

/// A team's result for a single gameweek.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameweekRecord {
    pub event: u32,
    pub points: i32,
    pub total_points: i32,
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub event_transfers_cost: i32,
}

impl GameweekRecord {
    /// Points scored minus the transfer hit taken that gameweek.
    pub fn net_points(&self) -> i32 {
        self.points - self.event_transfers_cost
    }
}

/// A chip activation as upstream reports it (`name` is an abbreviated code).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipEvent {
    pub name: String,
    #[serde(default)]
    pub time: Option<DateTime<Utc>>,
    pub event: u32,
}

/// Response of `GET /entry/{id}/`. Every field defaults so a missing profile is just `default()`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamProfile {
    pub id: u32,
    pub name: String,
    pub player_first_name: String,
    pub player_last_name: String,
    pub summary_overall_points: Option<i32>,
    pub summary_overall_rank: Option<u32>,
    pub leagues: ProfileLeagues,
    pub chips: Vec<ChipEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileLeagues {
    pub classic: Vec<LeagueMembership>,
    pub h2h: Vec<LeagueMembership>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueMembership {
    pub id: u32,
    pub name: String,
}
