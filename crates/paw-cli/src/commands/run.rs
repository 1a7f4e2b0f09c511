use std::path::Path;

use chrono::Utc;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use paw_engine::{Outcome, Seed, SimOptions, simulate};

pub fn run(
    path: &Path,
    seed: Option<&str>,
    max_logs: Option<usize>,
    json: bool,
) -> Result<(), String> {
    let roster = super::load_roster(path)?;

    // The engine never invents a seed; the interactive entry point supplies
    // wall-clock time when the caller does not care. The seed is echoed in
    // the output either way, so any run can be replayed.
    let seed = match seed {
        Some(text) => Seed::parse(text),
        None => Seed::Number(Utc::now().timestamp_millis()),
    };

    let mut options = SimOptions::new(seed);
    if let Some(max) = max_logs {
        options = options.with_max_logs(max);
    }

    let outcome = simulate(&roster, options).map_err(|e| e.to_string())?;

    if json {
        let text = serde_json::to_string_pretty(&outcome).map_err(|e| e.to_string())?;
        println!("{text}");
        return Ok(());
    }

    println!(
        "  {} '{}' {}",
        "Season".bold(),
        path.display(),
        format!("({} pets, seed={})", roster.len(), outcome.seed).dimmed()
    );
    println!();
    for line in &outcome.logs {
        println!("  {}", colorize_line(line));
    }
    println!();
    print_standings(&outcome);

    Ok(())
}

fn colorize_line(line: &str) -> colored::ColoredString {
    if line.starts_with("🏆") {
        line.yellow().bold()
    } else if line.contains("leaves the house") {
        line.red()
    } else if line.contains("Fight!") {
        line.magenta()
    } else if line.contains("won the Leader's trial") {
        line.cyan()
    } else if line.contains("cemented a friendship") {
        line.green()
    } else {
        line.normal()
    }
}

fn print_standings(outcome: &Outcome) {
    let Some(finale) = &outcome.history.finale else {
        println!("  {} {}", "Winner:".bold(), outcome.winner);
        return;
    };

    println!("  {}", "Final Standings".bold().underline());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Place", "Pet", "Vote share"]);
    for (place, name) in finale.ranking.iter().enumerate() {
        let share = finale.percents.get(name).copied().unwrap_or_default();
        table.add_row(vec![
            (place + 1).to_string(),
            name.clone(),
            format!("{share:.1}%"),
        ]);
    }
    println!("{table}");
    println!();
    println!("  {} {}", "Winner:".bold(), outcome.winner.bold());
}
