use anyhow::{Context, Result};
use evently_core::period::filter_events;
use evently_core::{Evently, PeriodFilter};
use owo_colors::OwoColorize;

use crate::render::Render;

pub async fn run(evently: &Evently, filter: PeriodFilter, json: bool) -> Result<()> {
    let events = evently
        .events()
        .load_all()
        .await
        .context("Failed to load events")?;

    let today = chrono::Local::now().date_naive();
    let matching = filter_events(&events, filter, today);

    if json {
        println!("{}", serde_json::to_string_pretty(&matching)?);
        return Ok(());
    }

    println!("{}", format!("Events · {}", filter).bold());

    if matching.is_empty() {
        println!("  {}", "No events found".dimmed());
        return Ok(());
    }

    for event in matching {
        println!("{}", event.render());
    }

    Ok(())
}
