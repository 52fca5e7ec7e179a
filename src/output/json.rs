use crate::model::{Profiles, ScanReport};
use anyhow::Result;

pub fn print_json(report: &ScanReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{}", json);
    Ok(())
}

pub fn print_profiles_json(profiles: &Profiles) -> Result<()> {
    let json = serde_json::to_string_pretty(profiles)?;
    println!("{}", json);
    Ok(())
}
