use crate::model::{Profiles, ScanReport};
use anyhow::Result;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct ExtensionRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Install")]
    kind: String,
    #[tabled(rename = "Profiles")]
    profiles: String,
    #[tabled(rename = "Icon")]
    icon: String,
}

#[derive(Tabled)]
struct ProfileRow {
    #[tabled(rename = "Profile")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Account")]
    gaia_name: String,
    #[tabled(rename = "User")]
    user_name: String,
}

pub fn print_cli_table(report: &ScanReport) -> Result<()> {
    println!();
    println!(
        "Scan completed at: {}",
        report.scan_time.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("Data directory: {}", report.data_root.display());
    println!();

    if report.extensions.is_empty() {
        println!("No extensions found.");
        return Ok(());
    }

    println!("Found {} extensions:", report.extensions.len());
    println!();

    let rows: Vec<ExtensionRow> = report
        .extensions
        .iter()
        .map(|(id, ext)| ExtensionRow {
            name: truncate(&or_dash(&ext.name), 40),
            id: id.clone(),
            kind: ext.kind.as_str().to_string(),
            profiles: truncate(&ext.profiles.join(", "), 40),
            icon: if ext.icon.is_empty() { "-" } else { "yes" }.to_string(),
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{}", table);
    Ok(())
}

pub fn print_profiles_table(profiles: &Profiles) -> Result<()> {
    if profiles.is_empty() {
        println!("No profiles found.");
        return Ok(());
    }

    println!("Found {} profiles:", profiles.len());
    println!();

    let rows: Vec<ProfileRow> = profiles
        .iter()
        .map(|(id, profile)| ProfileRow {
            id: id.clone(),
            name: or_dash(&profile.name),
            gaia_name: or_dash(&profile.gaia_name),
            user_name: or_dash(profile.user_name.as_deref().unwrap_or("")),
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{}", table);
    Ok(())
}

fn or_dash(s: &str) -> String {
    if s.is_empty() {
        "-".to_string()
    } else {
        s.to_string()
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a much longer extension name", 10), "a much ...");
        assert_eq!(truncate("ÜÜÜÜÜÜÜÜÜÜÜÜ", 6), "ÜÜÜ...");
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(""), "-");
        assert_eq!(or_dash("Work"), "Work");
    }
}
