use itertools::Itertools;
use rand::Rng;

use crate::fpl::summary::narrative::pick;
use crate::fpl::summary::season::analyze_season;
use crate::model::{
    Consistency, RecentTrend, SeasonAnalysis, SpotlightClassification, SpotlightTier,
    TeamStanding, WeekHaul,
};

pub fn spotlight_tier(rank: u32, total_teams: usize) -> SpotlightTier {
    let total = total_teams.max(1) as u32;
    let percentile = (rank * 100).div_ceil(total);

    if rank == 1 {
        SpotlightTier::Leader
    } else if rank <= 3 {
        SpotlightTier::TopThree
    } else if rank <= total.div_ceil(2) {
        if percentile <= 25 {
            SpotlightTier::TopQuarter
        } else {
            SpotlightTier::TopHalf
        }
    } else if percentile <= 75 {
        SpotlightTier::ThirdQuarter
    } else if i64::from(rank) > i64::from(total) - 3 {
        SpotlightTier::BottomThree
    } else {
        SpotlightTier::BottomQuarter
    }
}

pub fn week_haul(event_total: i32) -> WeekHaul {
    match event_total {
        p if p >= 70 => WeekHaul::Masterclass,
        p if p >= 60 => WeekHaul::Stellar,
        p if p >= 50 => WeekHaul::Classy,
        p if p >= 40 => WeekHaul::Solid,
        p if p >= 30 => WeekHaul::Battling,
        _ => WeekHaul::Tough,
    }
}

/// Classify `team` for the spotlight card. `None` when it has no season to analyse.
pub fn classify_spotlight(
    team: &TeamStanding,
    standings: &[TeamStanding],
) -> Option<SpotlightClassification> {
    let analysis = analyze_season(team, standings)?;
    Some(SpotlightClassification {
        entry: team.entry,
        entry_name: team.entry_name.clone(),
        rank: team.rank,
        rank_change: team.last_rank as i32 - team.rank as i32,
        total_teams: standings.len(),
        event_total: team.event_total,
        tier: spotlight_tier(team.rank, standings.len()),
        haul: week_haul(team.event_total),
        analysis,
    })
}

/// Headline for the spotlight card.
pub fn spotlight_title(c: &SpotlightClassification) -> &'static str {
    let improving = c.analysis.recent_trend == RecentTrend::Improving;
    let change = c.rank_change;

    match c.tier {
        SpotlightTier::Leader if change > 0 => {
            if improving {
                "👑 The New King Arrives!"
            } else {
                "👑 Seizing the Crown!"
            }
        }
        SpotlightTier::Leader => {
            if c.analysis.consistency == Consistency::High {
                "👑 Dominant Force"
            } else {
                "👑 Holding the Throne"
            }
        }
        SpotlightTier::TopThree => match change {
            n if n > 2 => "⚡ Thunderous Rise to Glory",
            n if n > 0 => "🌟 Championship Challenger",
            n if n < 0 => "🏃 Hot on the Leader's Heels",
            _ => "🏆 Elite Contender",
        },
        SpotlightTier::TopQuarter => {
            if improving {
                "🚀 Rocketing to the Top"
            } else if change > 2 {
                "⚡ Lightning Strike"
            } else if change > 0 {
                "🎯 Top Spot in Sight"
            } else {
                "💫 Top Quarter Dynamo"
            }
        }
        SpotlightTier::TopHalf => chasing_title(
            improving,
            change,
            [
                "🌠 Shooting Star",
                "📈 Rising Phoenix",
                "⚔️ Warrior's Charge",
                "🎭 Plot Twist",
                "🛡️ Mid-table Maestro",
            ],
        ),
        SpotlightTier::ThirdQuarter => chasing_title(
            improving,
            change,
            [
                "🌋 Volcanic Surge",
                "💫 Rising from the Ashes",
                "⚡ Electric Comeback",
                "🌅 Dawn of Recovery",
                "⚔️ Battle-Hardened",
            ],
        ),
        SpotlightTier::BottomThree => chasing_title(
            improving,
            change,
            [
                "🌈 Miracle in Motion",
                "💫 Defying the Odds",
                "🔥 Phoenix Rising",
                "⚔️ Fighting Spirit",
                "🌋 Ready to Erupt",
            ],
        ),
        SpotlightTier::BottomQuarter => chasing_title(
            improving,
            change,
            [
                "🌟 Destiny's Child",
                "🎭 Plot Twist Incoming",
                "🚀 Launch Sequence",
                "💫 Signs of Life",
                "⚔️ The Comeback Story",
            ],
        ),
    }
}

/// `[improving and surging, improving, surging, climbing, otherwise]`
fn chasing_title(improving: bool, change: i32, titles: [&'static str; 5]) -> &'static str {
    match (improving, change) {
        (true, c) if c > 2 => titles[0],
        (true, _) => titles[1],
        (false, c) if c > 2 => titles[2],
        (false, c) if c > 0 => titles[3],
        _ => titles[4],
    }
}

pub fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 100, n % 10) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    }
}

fn haul_phrases(haul: WeekHaul) -> &'static [&'static str] {
    match haul {
        WeekHaul::Masterclass => &[
            "unleashed a masterclass",
            "dominated the gameweek",
            "showed pure brilliance",
        ],
        WeekHaul::Stellar => &[
            "lit up the gameweek",
            "delivered a stellar performance",
            "showed championship form",
        ],
        WeekHaul::Classy => &[
            "impressed the critics",
            "showed their class",
            "delivered the goods",
        ],
        WeekHaul::Solid => &[
            "put in a solid shift",
            "kept their hopes alive",
            "showed glimpses of form",
        ],
        WeekHaul::Battling => &[
            "battled through adversity",
            "weathered the storm",
            "fought for every point",
        ],
        WeekHaul::Tough => &[
            "endured a challenging week",
            "faced tough decisions",
            "looked for answers",
        ],
    }
}

fn rank_movement(change: i32) -> String {
    let places = change.unsigned_abs();
    match change {
        c if c > 3 => format!("storming up {places} places in a spectacular climb"),
        c if c > 0 => format!("surging {places} places up the rankings"),
        c if c < -3 => format!("slipping {places} places in a dramatic turn"),
        c if c < 0 => format!("dropping {places} spots"),
        _ => "holding firm in their position".to_string(),
    }
}

fn form_sentence(trend: RecentTrend) -> &'static str {
    match trend {
        RecentTrend::Improving => {
            "Their form is reaching new heights, with each gameweek better than the last"
        }
        RecentTrend::Declining => {
            "They're looking to rediscover their magic after recent setbacks"
        }
        RecentTrend::Mixed => "They've been mixing brilliant moments with challenging spells",
    }
}

fn journey_sentence(analysis: &SeasonAnalysis) -> String {
    let (high, low) = (analysis.highest_rank, analysis.lowest_rank);
    let mut sentence = format!(
        "This season has seen them scale the heights of {high}{} place",
        ordinal_suffix(high)
    );
    if low > high {
        sentence.push_str(&format!(
            ", showing true grit to bounce back from {low}{}",
            ordinal_suffix(low)
        ));
    } else {
        sentence.push_str(" and maintain their impressive standards");
    }
    sentence
}

fn outlook_sentence(rank: u32, total_teams: usize) -> &'static str {
    if rank <= 3 {
        "Every point could be golden in their quest for glory"
    } else if rank <= 5 {
        "The summit is within reach if they can maintain this momentum"
    } else if rank as usize <= total_teams.div_ceil(2) {
        "The stage is set for a dramatic push up the rankings"
    } else {
        "The comeback story is waiting to be written"
    }
}

/// Paragraph for the spotlight card, phrasing the week's haul with `rng`.
pub fn render_spotlight_description<R: Rng + ?Sized>(
    team: &TeamStanding,
    standings: &[TeamStanding],
    rng: &mut R,
) -> Option<String> {
    let c = classify_spotlight(team, standings)?;
    Some(describe(&c, rng))
}

fn describe<R: Rng + ?Sized>(c: &SpotlightClassification, rng: &mut R) -> String {
    let season = &c.analysis;
    let mut text = format!(
        "{} {}, amassing {} points and {}. ",
        c.entry_name,
        pick(haul_phrases(c.haul), rng),
        c.event_total,
        rank_movement(c.rank_change)
    );

    if season.recent_points.len() >= 2 {
        let tale = match season.consistency {
            Consistency::High => "remarkable consistency",
            Consistency::Medium => "growing potential",
            Consistency::Low => "dramatic swings",
        };
        text.push_str(&format!(
            "Their journey through the last three gameweeks ({} points) tells a tale of {tale}. ",
            season.recent_points.iter().join(", ")
        ));
    }

    text.push_str(form_sentence(season.recent_trend));
    text.push_str(&format!(
        ". Their season peak of {} points shows their true potential",
        season.best_gameweek_points
    ));
    if season.worst_gameweek_points < season.best_gameweek_points {
        text.push_str(&format!(
            ", while their low of {} points proves they can overcome any challenge",
            season.worst_gameweek_points
        ));
    } else {
        text.push_str(" and what they're capable of");
    }
    text.push_str(&format!(
        ". {}. {}.",
        journey_sentence(season),
        outlook_sentence(c.rank, c.total_teams)
    ));
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fpl::testing::team_with_points;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn analysis(recent_trend: RecentTrend, consistency: Consistency) -> SeasonAnalysis {
        SeasonAnalysis {
            entry: 1,
            best_gameweek_points: 80,
            worst_gameweek_points: 30,
            average_points: 55,
            highest_rank: 1,
            lowest_rank: 6,
            recent_points: vec![40, 50, 60],
            recent_trend,
            consistency,
        }
    }

    fn spotlight(tier: SpotlightTier, rank_change: i32, trend: RecentTrend) -> SpotlightClassification {
        SpotlightClassification {
            entry: 1,
            entry_name: "Spot".to_string(),
            rank: 5,
            rank_change,
            total_teams: 20,
            event_total: 55,
            tier,
            haul: week_haul(55),
            analysis: analysis(trend, Consistency::Medium),
        }
    }

    #[test]
    fn test_spotlight_tiers() {
        assert_eq!(spotlight_tier(1, 20), SpotlightTier::Leader);
        assert_eq!(spotlight_tier(3, 20), SpotlightTier::TopThree);
        assert_eq!(spotlight_tier(5, 20), SpotlightTier::TopQuarter);
        assert_eq!(spotlight_tier(6, 20), SpotlightTier::TopHalf);
        assert_eq!(spotlight_tier(10, 20), SpotlightTier::TopHalf);
        assert_eq!(spotlight_tier(11, 20), SpotlightTier::ThirdQuarter);
        assert_eq!(spotlight_tier(15, 20), SpotlightTier::ThirdQuarter);
        assert_eq!(spotlight_tier(16, 20), SpotlightTier::BottomQuarter);
        assert_eq!(spotlight_tier(18, 20), SpotlightTier::BottomThree);
        assert_eq!(spotlight_tier(20, 20), SpotlightTier::BottomThree);
    }

    #[test]
    fn test_week_haul_bands() {
        assert_eq!(week_haul(70), WeekHaul::Masterclass);
        assert_eq!(week_haul(69), WeekHaul::Stellar);
        assert_eq!(week_haul(50), WeekHaul::Classy);
        assert_eq!(week_haul(40), WeekHaul::Solid);
        assert_eq!(week_haul(30), WeekHaul::Battling);
        assert_eq!(week_haul(29), WeekHaul::Tough);
    }

    #[test]
    fn test_leader_titles() {
        let mut c = spotlight(SpotlightTier::Leader, 2, RecentTrend::Improving);
        assert_eq!(spotlight_title(&c), "👑 The New King Arrives!");

        c.analysis.recent_trend = RecentTrend::Mixed;
        assert_eq!(spotlight_title(&c), "👑 Seizing the Crown!");

        c.rank_change = 0;
        assert_eq!(spotlight_title(&c), "👑 Holding the Throne");

        c.analysis.consistency = Consistency::High;
        assert_eq!(spotlight_title(&c), "👑 Dominant Force");
    }

    #[test]
    fn test_chasing_pack_titles() {
        let title = |tier, change, trend| spotlight_title(&spotlight(tier, change, trend));

        assert_eq!(
            title(SpotlightTier::TopThree, 3, RecentTrend::Mixed),
            "⚡ Thunderous Rise to Glory"
        );
        assert_eq!(
            title(SpotlightTier::TopThree, -1, RecentTrend::Improving),
            "🏃 Hot on the Leader's Heels"
        );
        assert_eq!(
            title(SpotlightTier::TopThree, 0, RecentTrend::Mixed),
            "🏆 Elite Contender"
        );
        assert_eq!(
            title(SpotlightTier::TopQuarter, 5, RecentTrend::Improving),
            "🚀 Rocketing to the Top"
        );
        assert_eq!(
            title(SpotlightTier::TopQuarter, 1, RecentTrend::Declining),
            "🎯 Top Spot in Sight"
        );
        assert_eq!(
            title(SpotlightTier::TopHalf, 0, RecentTrend::Mixed),
            "🛡️ Mid-table Maestro"
        );
        assert_eq!(
            title(SpotlightTier::ThirdQuarter, 4, RecentTrend::Improving),
            "🌋 Volcanic Surge"
        );
        assert_eq!(
            title(SpotlightTier::BottomThree, 3, RecentTrend::Declining),
            "🔥 Phoenix Rising"
        );
        assert_eq!(
            title(SpotlightTier::BottomQuarter, 1, RecentTrend::Mixed),
            "💫 Signs of Life"
        );
        assert_eq!(
            title(SpotlightTier::BottomQuarter, -2, RecentTrend::Mixed),
            "⚔️ The Comeback Story"
        );
    }

    #[test]
    fn test_ordinal_suffixes() {
        let rendered: Vec<String> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 23, 101, 111, 0]
            .iter()
            .map(|&n| format!("{n}{}", ordinal_suffix(n)))
            .collect();
        assert_eq!(
            rendered,
            vec![
                "1st", "2nd", "3rd", "4th", "11th", "12th", "13th", "21st", "22nd", "23rd",
                "101st", "111th", "0th"
            ]
        );
    }

    #[test]
    fn test_rank_movement_phrases() {
        assert_eq!(rank_movement(4), "storming up 4 places in a spectacular climb");
        assert_eq!(rank_movement(2), "surging 2 places up the rankings");
        assert_eq!(rank_movement(0), "holding firm in their position");
        assert_eq!(rank_movement(-1), "dropping 1 spots");
        assert_eq!(rank_movement(-5), "slipping 5 places in a dramatic turn");
    }

    #[test]
    fn test_render_spotlight_description() {
        let mut standings = vec![
            team_with_points(1, "Alpha", &[60, 70, 80]),
            team_with_points(2, "Bravo", &[70, 40, 45]),
            team_with_points(3, "Charlie", &[50, 30, 72]),
        ];
        for (i, team) in standings.iter_mut().enumerate() {
            team.rank = i as u32 + 1;
            team.last_rank = i as u32 + 1;
        }

        let c = classify_spotlight(&standings[2], &standings).unwrap();
        assert_eq!(c.tier, SpotlightTier::TopThree);
        assert_eq!(c.haul, WeekHaul::Masterclass);
        assert_eq!(spotlight_title(&c), "🏆 Elite Contender");

        let mut rng = StdRng::seed_from_u64(5);
        let text = render_spotlight_description(&standings[2], &standings, &mut rng).unwrap();

        assert!(haul_phrases(WeekHaul::Masterclass)
            .iter()
            .any(|p| text.starts_with(&format!("Charlie {p}, "))));
        assert!(text.contains("amassing 72 points and holding firm in their position. "));
        assert!(text.contains(
            "Their journey through the last three gameweeks (50, 30 points) tells a tale of growing potential. "
        ));
        assert!(text.contains("They're looking to rediscover their magic after recent setbacks. "));
        assert!(text.contains(
            "Their season peak of 72 points shows their true potential, while their low of 30 points"
        ));
        assert!(text.contains(
            "This season has seen them scale the heights of 3rd place and maintain their impressive standards. "
        ));
        assert!(text.ends_with("Every point could be golden in their quest for glory."));
    }

    #[test]
    fn test_description_without_history() {
        let standings = vec![team_with_points(1, "Fresh", &[])];
        let mut rng = StdRng::seed_from_u64(1);
        assert!(render_spotlight_description(&standings[0], &standings, &mut rng).is_none());
    }
}
