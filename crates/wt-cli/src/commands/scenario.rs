use std::fs;
use std::path::Path;

use wt_core::Scenario;

pub fn run(out: Option<&Path>) -> Result<(), String> {
    let json = Scenario::default().to_json().map_err(|e| e.to_string())?;

    match out {
        Some(path) => {
            fs::write(path, format!("{json}\n"))
                .map_err(|e| format!("cannot write {}: {e}", path.display()))?;
            println!("  Wrote scenario to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
