use fpl_debrief::{
    chip_board, classify_spotlight, generate_gameweek_summary, pick_spotlight, position_series,
    render_digest, render_spotlight_description, spotlight_title, ChipState, ClientConfig,
    DebriefClient, DEFAULT_LEAGUE_ID,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run().await {
        eprintln!("{}", e.user_message());
        eprintln!("({e})");
        std::process::exit(1);
    }
}

async fn run() -> fpl_debrief::Result<()> {
    let client = DebriefClient::with_config(&ClientConfig::from_env())?;

    let gameweek = match std::env::args().nth(1).and_then(|a| a.parse().ok()) {
        Some(gameweek) => gameweek,
        None => client.get_current_gameweek().await?,
    };

    let standings = client
        .get_league_standings(DEFAULT_LEAGUE_ID, gameweek)
        .await?;
    let summary = generate_gameweek_summary(&standings)?;

    println!("{}\n", render_digest(&summary));

    for event in &summary.narrative.key_events {
        println!("{event}");
    }
    println!();

    for performance in &summary.narrative.individual_performances {
        println!("{:<28} {}", performance.entry_name, performance.narrative);
    }
    println!();

    let mut rng = rand::thread_rng();
    if let Some(team) = pick_spotlight(&summary, &mut rng) {
        if let Some(spotlight) = classify_spotlight(team, &summary.standings) {
            let season = &spotlight.analysis;
            println!("Spotlight: {} - {}", team.entry_name, spotlight_title(&spotlight));
            println!(
                "  best {} / worst {} / avg {}, ranks {}-{}, {:?} consistency",
                season.best_gameweek_points,
                season.worst_gameweek_points,
                season.average_points,
                season.highest_rank,
                season.lowest_rank,
                season.consistency,
            );
        }
        if let Some(description) =
            render_spotlight_description(team, &summary.standings, &mut rng)
        {
            println!("  {description}\n");
        }
    }

    let series = position_series(&summary.standings);
    let header: Vec<String> = series.gameweeks.iter().map(|gw| format!("GW{gw:<3}")).collect();
    println!("{:<28} {}", "", header.join(" "));
    for team in &series.teams {
        let positions: Vec<String> = team.positions.iter().map(|p| format!("{p:<5}")).collect();
        println!("{:<28} {}", team.entry_name, positions.join(" "));
    }
    println!();

    for row in chip_board(&summary.standings) {
        let chips: Vec<String> = row
            .chips
            .iter()
            .map(|slot| match slot.state {
                ChipState::Used { gameweek } => format!("{} GW{gameweek}", slot.kind.label()),
                ChipState::Available => format!("{} available", slot.kind.label()),
            })
            .collect();
        println!("{:<28} {}", row.entry_name, chips.join(" | "));
    }

    Ok(())
}
