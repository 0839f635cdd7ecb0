//! Review CLI
//!
//! Loads a match payload, applies filters, and prints the ordered timeline
//! with adjusted playback times. With a selection it also walks the
//! playback stepping so the token/index transitions can be inspected.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use env_logger::Env;

use review_core::playback::adjusted_start;
use review_core::{payload_from_path, FilterDescriptor, ReviewSession};

#[derive(Parser)]
#[command(name = "review_cli")]
#[command(about = "Filter a match timeline and inspect playback stepping", long_about = None)]
struct Cli {
    /// Match payload JSON file
    #[arg(long, value_name = "FILE")]
    r#match: PathBuf,

    /// Keep only these event categories (repeatable)
    #[arg(long = "category", value_name = "NAME")]
    categories: Vec<String>,

    /// Descriptor filter as KEY=VALUE (repeatable, AND semantics)
    #[arg(long = "descriptor", value_name = "KEY=VALUE")]
    descriptors: Vec<String>,

    /// Team selector: a team name, "MIS EQUIPOS" or "RIVALES"
    #[arg(long)]
    team: Option<String>,

    /// Select this event id and walk the remaining timeline
    #[arg(long, value_name = "ID")]
    select_id: Option<i64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let payload = payload_from_path(&cli.r#match)
        .with_context(|| format!("loading {}", cli.r#match.display()))?;
    let info = payload.info.clone();

    log::debug!("loaded {} raw event(s)", payload.events.len());

    let mut session = ReviewSession::new();
    let generation = session.begin_match_load();
    session.apply_match_data(generation, payload.events, payload.info);

    session.set_categories(&cli.categories);
    for raw in &cli.descriptors {
        let (key, value) = raw
            .split_once('=')
            .with_context(|| format!("descriptor '{raw}' is not KEY=VALUE"))?;
        session.add_descriptor(FilterDescriptor::new(key, value));
    }
    session.set_selected_team(cli.team.as_deref());

    println!(
        "{} event(s) after filtering (match {})",
        session.event_count(),
        info.id.map(|id| id.to_string()).unwrap_or_else(|| "?".into())
    );
    for event in session.filtered_events() {
        let side = if event.is_opponent_side() { "OPP" } else { "OWN" };
        println!(
            "  #{:<5} {:>8.1}s  (plays at {:>8.1}s)  {:<12} {:<3} {}",
            event.id,
            event.order_key(),
            adjusted_start(event, &info),
            event.event_type,
            side,
            event.players.join(", ")
        );
    }

    if let Some(select_id) = cli.select_id {
        walk_from(&mut session, select_id)?;
    }
    Ok(())
}

/// Select one event and step through the rest of the filtered list,
/// printing each playback transition.
fn walk_from(session: &mut ReviewSession, select_id: i64) -> Result<()> {
    let Some(target) = session
        .filtered_events()
        .iter()
        .find(|e| e.id == select_id)
        .cloned()
    else {
        bail!("event id {select_id} is not in the filtered list");
    };

    session.play_event(&target);
    print_state(session);
    while session.play_next() {
        print_state(session);
    }
    println!("  end of filtered timeline");
    Ok(())
}

fn print_state(session: &ReviewSession) {
    let info = session.playback_info();
    println!(
        "  index {:>2}  token {:>3}  t={:>8.1}s  playing={}",
        info.current_index, info.play_request_token, info.current_time_seconds, info.is_playing
    );
}
