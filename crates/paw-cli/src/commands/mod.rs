pub mod roster;
pub mod run;

use std::fs;
use std::path::Path;

use paw_core::Roster;

/// Read and parse a roster file.
pub fn load_roster(path: &Path) -> Result<Roster, String> {
    let text =
        fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    Roster::from_json_str(&text).map_err(|e| format!("{}: {e}", path.display()))
}
