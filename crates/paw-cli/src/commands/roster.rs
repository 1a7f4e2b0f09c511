use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

pub fn run(path: &Path) -> Result<(), String> {
    let roster = super::load_roster(path)?;

    println!(
        "  {} '{}' {}",
        "Roster".bold(),
        path.display(),
        format!("({} pets)", roster.len()).dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Name", "Species", "Age", "Soc", "Loud", "Stub", "Cur", "Needy", "Drama", "Energy",
        "Terr",
    ]);
    for pet in roster.pets() {
        let a = &pet.attributes;
        table.add_row(vec![
            pet.name.clone(),
            pet.species.clone().unwrap_or_else(|| "-".into()),
            pet.age.as_ref().map_or_else(|| "-".into(), |a| a.to_string()),
            a.sociable.to_string(),
            a.loud.to_string(),
            a.stubborn.to_string(),
            a.curious.to_string(),
            a.needy.to_string(),
            a.drama.to_string(),
            a.energetic.to_string(),
            a.territorial.to_string(),
        ]);
    }
    println!("{table}");

    Ok(())
}
