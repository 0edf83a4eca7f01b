use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::{DebriefError, Result};
use crate::fpl::transport::Transport;
use crate::model::{GameweekSnapshot, HistoryPoint, TeamStanding, RECENT_WINDOW};

#[derive(Debug, Clone, Copy)]
enum Failure {
    Status(u16),
    Network,
}

/// In-memory transport: canned JSON per path, scripted failures, and a call log.
#[derive(Default)]
pub(crate) struct FakeTransport {
    routes: HashMap<String, Value>,
    delays: HashMap<String, Duration>,
    failures: Mutex<HashMap<String, (u32, Failure)>>,
    calls: Mutex<Vec<String>>,
}

impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn route(mut self, path: &str, body: Value) -> Self {
        self.routes.insert(path.to_string(), body);
        self
    }

    /// Answer `path` only after `millis` have passed.
    pub(crate) fn delay(mut self, path: &str, millis: u64) -> Self {
        self.delays
            .insert(path.to_string(), Duration::from_millis(millis));
        self
    }

    /// Fail the first `times` calls to `path` with `status`.
    pub(crate) fn fail_first(self, path: &str, times: u32, status: u16) -> Self {
        self.script(path, times, Failure::Status(status))
    }

    /// Fail every call to `path` as if the connection never got through.
    pub(crate) fn unreachable(self, path: &str) -> Self {
        self.script(path, u32::MAX, Failure::Network)
    }

    fn script(self, path: &str, times: u32, failure: Failure) -> Self {
        if let Ok(mut failures) = self.failures.lock() {
            failures.insert(path.to_string(), (times, failure));
        }
        self
    }

    pub(crate) fn call_count(&self, path: &str) -> usize {
        self.calls
            .lock()
            .map(|calls| calls.iter().filter(|c| c.as_str() == path).count())
            .unwrap_or_default()
    }

    pub(crate) fn total_calls(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or_default()
    }

    fn next_failure(&self, path: &str) -> Option<Failure> {
        let mut failures = self.failures.lock().ok()?;
        let (remaining, failure) = failures.get_mut(path)?;
        if *remaining == 0 {
            return None;
        }
        *remaining = remaining.saturating_sub(1);
        Some(*failure)
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn get(&self, path: &str) -> Result<Value> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(path.to_string());
        }
        if let Some(delay) = self.delays.get(path) {
            tokio::time::sleep(*delay).await;
        }
        match self.next_failure(path) {
            Some(Failure::Status(status)) => {
                return Err(DebriefError::Upstream {
                    url: path.to_string(),
                    status,
                    body: json!({ "error": "Failed to fetch data from FPL API", "path": path })
                        .to_string(),
                })
            }
            Some(Failure::Network) => {
                return Err(DebriefError::Network {
                    url: path.to_string(),
                    source: "connection refused".into(),
                })
            }
            None => {}
        }
        self.routes
            .get(path)
            .cloned()
            .ok_or_else(|| DebriefError::Upstream {
                url: path.to_string(),
                status: 404,
                body: String::new(),
            })
    }
}

/// A standings row as upstream sends it.
pub(crate) fn standing_row(entry: u32, entry_name: &str, rank: u32) -> Value {
    json!({
        "id": entry * 10,
        "entry": entry,
        "entry_name": entry_name,
        "player_name": format!("Manager {entry}"),
        "rank": rank,
        "last_rank": rank,
        "total": 0,
        "event_total": 0,
        "rank_sort": rank,
        "event_transfers": 0,
    })
}

/// A history record; `total_points` is deliberately wrong so tests prove it gets recomputed.
pub(crate) fn gameweek_record(event: u32, points: i32, transfer_cost: i32) -> Value {
    json!({
        "event": event,
        "points": points,
        "total_points": -1,
        "rank": 100_000 + event,
        "rank_sort": 100_000 + event,
        "event_transfers_cost": transfer_cost,
    })
}

pub(crate) fn chip(name: &str, event: u32) -> Value {
    json!({ "name": name, "time": "2024-09-20T17:30:00Z", "event": event })
}

pub(crate) fn bootstrap(current: u32, finished_through: u32) -> Value {
    let events: Vec<Value> = (1..=38)
        .map(|id| {
            json!({
                "id": id,
                "name": format!("Gameweek {id}"),
                "finished": id <= finished_through,
                "is_current": id == current,
            })
        })
        .collect();
    json!({ "events": events })
}

/// A standing whose selected gameweek is the last one listed in `totals` (`(gameweek, cumulative)` pairs).
pub(crate) fn team_with_totals(entry: u32, entry_name: &str, totals: &[(u32, i32)]) -> TeamStanding {
    let mut previous = 0;
    let full_history: Vec<GameweekSnapshot> = totals
        .iter()
        .map(|&(gameweek, total)| {
            let points = total - previous;
            previous = total;
            GameweekSnapshot {
                gameweek,
                rank: None,
                total,
                points,
            }
        })
        .collect();
    let gameweek = full_history.last().map(|s| s.gameweek).unwrap_or(1);
    standing_from(entry, entry_name, gameweek, full_history)
}

/// A standing built from net points per gameweek, starting at gameweek 1.
pub(crate) fn team_with_points(entry: u32, entry_name: &str, points: &[i32]) -> TeamStanding {
    let mut total = 0;
    let full_history: Vec<GameweekSnapshot> = points
        .iter()
        .enumerate()
        .map(|(i, &points)| {
            total += points;
            GameweekSnapshot {
                gameweek: i as u32 + 1,
                rank: None,
                total,
                points,
            }
        })
        .collect();
    let gameweek = full_history.len().max(1) as u32;
    standing_from(entry, entry_name, gameweek, full_history)
}

fn standing_from(
    entry: u32,
    entry_name: &str,
    gameweek: u32,
    full_history: Vec<GameweekSnapshot>,
) -> TeamStanding {
    let last = full_history.last().copied();
    let recent_start = full_history.len().saturating_sub(RECENT_WINDOW);
    TeamStanding {
        entry,
        entry_name: entry_name.to_string(),
        manager_name: format!("Manager {entry}"),
        rank: 0,
        last_rank: 0,
        total: last.map(|s| s.total).unwrap_or_default(),
        event_total: last
            .filter(|s| s.gameweek == gameweek)
            .map(|s| s.points)
            .unwrap_or_default(),
        gameweek,
        history: full_history[recent_start..]
            .iter()
            .map(HistoryPoint::from)
            .collect(),
        full_history,
        chips: Vec::new(),
    }
}
