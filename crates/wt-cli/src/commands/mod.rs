pub mod kinds;
pub mod scenario;
pub mod simulate;

use wt_simulation::{KindSpec, catalog};

/// Catalog kinds, optionally restricted to one family.
fn select_kinds(family: Option<&str>) -> Result<Vec<&'static KindSpec>, String> {
    match family {
        None => Ok(catalog::all().to_vec()),
        Some(f) if catalog::FAMILIES.contains(&f) => Ok(catalog::by_family(f)),
        Some(f) => Err(format!(
            "unknown family \"{f}\" (expected one of: {})",
            catalog::FAMILIES.join(", ")
        )),
    }
}
