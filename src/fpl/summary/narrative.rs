use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::{
    FormTrend, LeagueClassification, Movement, PositionTier, RankChange, ScoreBand,
    ScoringLevel, TeamClassification, TeamStanding, TitleRace, Volatility,
};

/// Gameweeks looked at when judging form.
const FORM_WINDOW: usize = 3;

/// Mean net gameweek score across the league, rounded to the nearest point.
pub fn average_event_points(standings: &[TeamStanding]) -> i32 {
    if standings.is_empty() {
        return 0;
    }
    let sum: i64 = standings.iter().map(|t| i64::from(t.event_total)).sum();
    round_half_up(sum as f64 / standings.len() as f64)
}

/// Nearest integer, with halves rounded towards positive infinity (-2.5 becomes -2).
pub(crate) fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

pub fn score_band(points_vs_average: i32) -> ScoreBand {
    match points_vs_average {
        p if p > 20 => ScoreBand::Excellent,
        p if p > 10 => ScoreBand::Good,
        p if p > -10 => ScoreBand::Average,
        p if p > -20 => ScoreBand::Poor,
        _ => ScoreBand::Terrible,
    }
}

pub fn movement(position_change: i32) -> Movement {
    match position_change {
        c if c > 3 => Movement::BigRise,
        c if c > 0 => Movement::SmallRise,
        0 => Movement::Unchanged,
        c if c > -3 => Movement::SmallFall,
        _ => Movement::BigFall,
    }
}

/// Tally of the cumulative total across the last [`FORM_WINDOW`] entries of
/// `history`: +1 for every step up, -1 for every other step (a flat step counts
/// against). Fewer than two entries score 0.
pub fn form_score(team: &TeamStanding) -> i32 {
    let start = team.history.len().saturating_sub(FORM_WINDOW);
    team.history[start..]
        .windows(2)
        .map(|w| if w[1].total > w[0].total { 1 } else { -1 })
        .sum()
}

pub fn form_trend(form_score: i32) -> FormTrend {
    match form_score.signum() {
        1 => FormTrend::Improving,
        -1 => FormTrend::Declining,
        _ => FormTrend::Stable,
    }
}

pub fn position_tier(position: u32, total_teams: usize) -> PositionTier {
    let total = total_teams as u32;
    if position == 1 {
        PositionTier::Leader
    } else if position <= 3 {
        PositionTier::TopThree
    } else if position <= total / 4 {
        PositionTier::TopQuartile
    } else if position <= total / 2 {
        PositionTier::TopHalf
    } else if position > total * 3 / 4 {
        PositionTier::BottomQuartile
    } else {
        PositionTier::MidTable
    }
}

pub fn classify_team(
    team: &TeamStanding,
    average_points: i32,
    total_teams: usize,
    change: &RankChange,
) -> TeamClassification {
    let points_vs_average = team.event_total - average_points;
    let form_score = form_score(team);
    TeamClassification {
        points_vs_average,
        position_change: change.position_change,
        current_position: change.current_position,
        form_score,
        score_band: score_band(points_vs_average),
        movement: movement(change.position_change),
        form: form_trend(form_score),
        tier: position_tier(change.current_position, total_teams),
    }
}

/// Headline emoji for a team's week.
pub fn performance_mark(c: &TeamClassification) -> &'static str {
    let (vs_avg, change) = (c.points_vs_average, c.position_change);
    if vs_avg > 20 && change > 2 {
        "🔥"
    } else if vs_avg > 20 {
        "⭐"
    } else if vs_avg > 10 && change > 0 {
        "📈"
    } else if vs_avg > 10 {
        "✨"
    } else if vs_avg >= -10 {
        match change.signum() {
            1 => "↗️",
            0 => "➡️",
            _ => "↘️",
        }
    } else if change < -2 {
        "📉"
    } else {
        "😓"
    }
}

pub fn position_mark(tier: PositionTier) -> &'static str {
    match tier {
        PositionTier::Leader => "👑",
        PositionTier::TopThree => "🏆",
        PositionTier::TopQuartile => "🎯",
        PositionTier::TopHalf => "⚔️",
        PositionTier::MidTable => "🛡️",
        PositionTier::BottomQuartile => "⚠️",
    }
}

fn score_phrases(band: ScoreBand) -> &'static [&'static str] {
    match band {
        ScoreBand::Excellent => &[
            "dominated",
            "crushed it",
            "absolutely smashed it",
            "had a masterclass",
        ],
        ScoreBand::Good => &["impressed", "showed great form", "delivered strong results"],
        ScoreBand::Average => &["stayed steady", "maintained form", "kept pace"],
        ScoreBand::Poor => &["struggled", "had a tough time", "faced challenges"],
        ScoreBand::Terrible => &["had a nightmare", "hit rock bottom", "suffered badly"],
    }
}

fn movement_phrases(movement: Movement) -> &'static [&'static str] {
    match movement {
        Movement::BigRise => &["rocketed up", "surged", "shot up", "stormed"],
        Movement::SmallRise => &["climbed", "moved up", "advanced"],
        Movement::Unchanged => &["held position", "stayed put"],
        Movement::SmallFall => &["slipped", "dropped slightly"],
        Movement::BigFall => &["plummeted", "crashed", "tumbled"],
    }
}

fn form_phrases(form: FormTrend) -> &'static [&'static str] {
    match form {
        FormTrend::Improving => &["gaining momentum", "building form", "finding their stride"],
        FormTrend::Declining => &["losing steam", "searching for form", "trying to bounce back"],
        FormTrend::Stable => &["maintaining consistency", "showing stability"],
    }
}

pub(crate) fn pick<R: Rng + ?Sized>(phrases: &'static [&'static str], rng: &mut R) -> &'static str {
    phrases.choose(rng).copied().unwrap_or_default()
}

/// One sentence describing a team's week, with phrasing drawn from `rng`.
pub fn render_team_narrative<R: Rng + ?Sized>(c: &TeamClassification, rng: &mut R) -> String {
    let mut narrative = format!(
        "{} {} this week",
        performance_mark(c),
        pick(score_phrases(c.score_band), rng)
    );

    if c.position_change != 0 {
        let places = c.position_change.unsigned_abs();
        narrative.push_str(&format!(
            ", {} {places} {}",
            pick(movement_phrases(c.movement), rng),
            if places == 1 { "place" } else { "places" }
        ));
    }

    narrative.push_str(", ");
    narrative.push_str(pick(form_phrases(c.form), rng));

    let mark = position_mark(c.tier);
    match c.tier {
        PositionTier::Leader => narrative.push_str(&format!(" {mark} while leading the pack")),
        PositionTier::TopThree => narrative.push_str(&format!(" {mark} in the title race")),
        _ => narrative.push_str(&format!(" {mark}")),
    }

    capitalize(&narrative)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// League-wide figures for the key events. `sorted` must be ordered by total, highest first.
pub fn classify_league(
    sorted: &[TeamStanding],
    rank_changes: &[RankChange],
    top_scorer: &TeamStanding,
) -> Option<LeagueClassification> {
    let leader = sorted.first()?;
    let average_points = average_event_points(sorted);
    let teams_up = rank_changes.iter().filter(|r| r.position_change > 0).count();
    let teams_down = rank_changes.iter().filter(|r| r.position_change < 0).count();

    let (point_gap, title_race) = match sorted.get(1) {
        Some(runner_up) => {
            let gap = leader.total - runner_up.total;
            let race = if gap > 20 {
                TitleRace::CommandingLead
            } else if gap > 10 {
                TitleRace::Contested
            } else {
                TitleRace::CloseRace
            };
            (gap, race)
        }
        None => (0, TitleRace::Unopposed),
    };

    let volatility = if (teams_up + teams_down) * 2 > sorted.len() {
        Volatility::Volatile
    } else {
        Volatility::Steady
    };

    let top_score = top_scorer.event_total;
    let scoring = if top_score > average_points + 20 {
        ScoringLevel::Exceptional
    } else if top_score > average_points + 10 {
        ScoringLevel::Strong
    } else {
        ScoringLevel::Challenging
    };

    Some(LeagueClassification {
        gameweek: leader.gameweek,
        average_points,
        teams_up,
        teams_down,
        leader_name: leader.entry_name.clone(),
        point_gap,
        top_score,
        title_race,
        volatility,
        scoring,
    })
}

pub fn render_key_events(league: &LeagueClassification) -> Vec<String> {
    let gap = league.point_gap;
    let leader = &league.leader_name;
    vec![
        format!(
            "📊 GW{} saw an average score of {} points, with {} teams climbing and {} falling in rank",
            league.gameweek, league.average_points, league.teams_up, league.teams_down
        ),
        match league.title_race {
            TitleRace::CommandingLead => {
                format!("🏆 The title race sees {leader} commanding a {gap}-point lead at the top")
            }
            TitleRace::Contested => format!(
                "🏆 {leader} leads by {gap} points, but the chasing pack remains in sight"
            ),
            TitleRace::CloseRace => {
                format!("🏆 Just {gap} points separate the top teams in a thrilling title race")
            }
            TitleRace::Unopposed => format!("🏆 {leader} has the league to themselves"),
        },
        match league.volatility {
            Volatility::Volatile => {
                "📈 A volatile week saw major changes throughout the table".to_string()
            }
            Volatility::Steady => "⚖️ Many teams held their ground in a steady gameweek".to_string(),
        },
        match league.scoring {
            ScoringLevel::Exceptional => format!(
                "🔥 An exceptional gameweek saw scores as high as {} points",
                league.top_score
            ),
            ScoringLevel::Strong => format!(
                "📈 Strong performances led to several scores above {} points",
                league.average_points + 10
            ),
            ScoringLevel::Challenging => "📊 A challenging gameweek for most managers".to_string(),
        },
    ]
}
