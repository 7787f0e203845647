use anyhow::Result;
use evently_core::Evently;
use owo_colors::OwoColorize;

use crate::render::Render;

pub async fn run(evently: &Evently) -> Result<()> {
    match evently.users().load().await? {
        Some(user) => println!("{}", user.render()),
        None => println!("{}", "No user registered".dimmed()),
    }

    Ok(())
}
