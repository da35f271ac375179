use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::EventcalConfig;

/// Write a commented default config file unless one exists.
pub fn init() -> Result<()> {
    let path = EventcalConfig::config_path()?;

    if path.exists() {
        println!("{} {}", "Config already exists:".dimmed(), path.display());
        return Ok(());
    }

    EventcalConfig::create_default_config(&path)?;
    println!("{} {}", "Created".green(), path.display());
    Ok(())
}

pub fn path() -> Result<()> {
    println!("{}", EventcalConfig::config_path()?.display());
    Ok(())
}

/// Print the effective configuration after file and environment overrides.
pub fn show(config: &EventcalConfig) -> Result<()> {
    println!("{}", "Paths".bold());
    println!("  Config:   {}", EventcalConfig::config_path()?.display());
    println!("  Content:  {}", config.content_path().display());
    println!();
    print!("{}", config.to_toml()?);
    Ok(())
}
