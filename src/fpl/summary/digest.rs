use crate::model::{GameweekSummary, TeamStanding};

/// Plain-text recap for pasting into a group chat.
pub fn render_digest(summary: &GameweekSummary) -> String {
    let movement = |team: &TeamStanding| {
        summary
            .rank_change(team.entry)
            .map(|r| format!("{} ➡️ {}", r.previous_position, r.current_position))
            .unwrap_or_default()
    };

    let top_three = summary
        .standings
        .iter()
        .take(3)
        .enumerate()
        .map(|(i, s)| format!("{}. {} - {} pts", i + 1, s.entry_name, s.total))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "🏆 *FPL Gameweek {} Summary*\n\n\
         📈 *Top Scorer:* {} ({} pts)\n\n\
         ⬆️ *Biggest Riser:* {} ({})\n\n\
         ⬇️ *Biggest Faller:* {} ({})\n\n\
         *Current Top 3:*\n{}",
        summary.gameweek,
        summary.top_scorer.entry_name,
        summary.top_scorer.event_total,
        summary.biggest_riser.entry_name,
        movement(&summary.biggest_riser),
        summary.biggest_faller.entry_name,
        movement(&summary.biggest_faller),
        top_three
    )
}
