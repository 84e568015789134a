use anyhow::Result;
use freetime_core::config::FreetimeConfig;
use owo_colors::OwoColorize;

pub fn run(config: &FreetimeConfig) -> Result<()> {
    let config_path = FreetimeConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!("  Timetable:  {}", config.data_path().display());

    println!("{}", "Settings".bold());
    println!("  Log level:  {}", config.log_level);
    println!("  Opens in:   {:?} mode", config.initial_mode());

    Ok(())
}
