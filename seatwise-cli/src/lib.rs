pub mod app_config;
pub mod cli;
pub mod output;

use anyhow::Context;
use seatwise_core::{input, AssignmentOutcome, SeatingResult, SeatingSession};

use app_config::SeatingConfig;

/// Build a session from the configured layout and seat everyone
pub fn seat_passengers(seating: &SeatingConfig) -> anyhow::Result<AssignmentOutcome> {
    let mut session = build_session(seating).context("Failed to build seating session")?;

    Ok(session.run_full_assignment())
}

fn build_session(seating: &SeatingConfig) -> SeatingResult<SeatingSession> {
    let layout = input::parse_layout(&seating.layout)?;
    let passengers = input::parse_passenger_count(Some(&serde_json::Value::from(seating.passengers)))?;

    match &seating.limits {
        Some(limits) => SeatingSession::with_limits(&layout, passengers, limits),
        None => SeatingSession::new(&layout, passengers),
    }
}
