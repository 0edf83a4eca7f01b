pub use cache::OnceCache;
pub use client::DebriefClient;
pub use config::{ClientConfig, RetryPolicy, DEFAULT_LEAGUE_ID};
pub use error::{DebriefError, Result};
pub use fpl::bootstrap::{resolve_current_gameweek, selectable_gameweeks, SeasonCache};
pub use fpl::summary::chips::chip_board;
pub use fpl::summary::digest::render_digest;
pub use fpl::summary::narrative::{
    average_event_points, classify_league, classify_team, form_score, form_trend, movement,
    performance_mark, position_mark, position_tier, render_key_events, render_team_narrative,
    score_band,
};
pub use fpl::summary::rank::{calculate_rank_changes, position_series, positions_at};
pub use fpl::summary::season::{analyze_season, pick_spotlight};
pub use fpl::summary::spotlight::{
    classify_spotlight, ordinal_suffix, render_spotlight_description, spotlight_tier,
    spotlight_title, week_haul,
};
pub use fpl::summary::{generate_gameweek_summary, generate_gameweek_summary_with_rng};
pub use fpl::transport::{HttpTransport, RetryingTransport, Transport};
pub use model::*;

mod cache;
mod client;
mod config;
mod error;
mod fpl;
mod model;
