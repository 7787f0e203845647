use anyhow::Result;
use evently_core::Evently;
use evently_core::config::EventlyConfig;
use evently_core::store::{EVENTS_KEY, USER_KEY};
use owo_colors::OwoColorize;

pub fn run(evently: &Evently) -> Result<()> {
    let config_path = EventlyConfig::config_path()?;
    let config = evently.config();

    println!("{}", "Paths".bold());
    println!("  Config:       {}", config_path.display());
    println!("  Data:         {}", evently.storage().dir().display());
    println!("  User:         {}", evently.storage().path_for(USER_KEY).display());
    println!("  Events:       {}", evently.storage().path_for(EVENTS_KEY).display());
    println!();
    println!("{}", "Settings".bold());
    println!("  Occurrences:  {}", config.occurrence_count);
    println!("  Log level:    {}", config.log_level);

    Ok(())
}
