//! Scenario files: a serializable description of a starting world.
//!
//! A scenario names the grid size, optionally spells out the terrain row by
//! row, and lists the creatures and civilizations to place in the entity
//! store. Without explicit rows the terrain is generated from the grid
//! coordinates alone, so the same scenario always builds the same world.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entity::{CivilizationComponent, ComponentSet, CreatureComponent, EntityManager};
use crate::error::{CoreError, CoreResult};
use crate::world::{TileType, World};

/// A creature to place in the entity store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureSeed {
    /// Species name.
    pub species: String,
    /// Age in years.
    pub age: f64,
}

/// Starting state for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Display name.
    pub name: String,
    /// Grid width, ignored when `terrain` is given.
    pub width: u32,
    /// Grid height, ignored when `terrain` is given.
    pub height: u32,
    /// Explicit terrain rows, one symbol per tile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terrain: Option<Vec<String>>,
    /// Creatures to spawn.
    #[serde(default)]
    pub creatures: Vec<CreatureSeed>,
    /// Civilizations to spawn, by name.
    #[serde(default)]
    pub civilizations: Vec<String>,
}

impl Default for Scenario {
    fn default() -> Self {
        let species = ["human", "dwarf", "elf", "orc", "gnome", "halfling"];
        let creatures = (0..24)
            .map(|i| CreatureSeed {
                species: species[i % species.len()].to_string(),
                age: 8.0 + ((i * 37) % 90) as f64,
            })
            .collect();
        Self {
            name: "Default Frontier".to_string(),
            width: 64,
            height: 40,
            terrain: None,
            creatures,
            civilizations: [
                "Aldmere",
                "Korrath",
                "The Sunward Clans",
                "Vey Republic",
                "Hollowmark",
                "Iskari Dominion",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl Scenario {
    /// Parse a scenario from JSON text.
    pub fn from_json(text: &str) -> CoreResult<Self> {
        let scenario: Self = serde_json::from_str(text)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Read and parse a scenario file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn validate(&self) -> CoreResult<()> {
        if self.terrain.is_none() && (self.width == 0 || self.height == 0) {
            return Err(CoreError::Validation(format!(
                "grid must not be empty, got {}x{}",
                self.width, self.height
            )));
        }
        if let Some(c) = self.creatures.iter().find(|c| c.age.is_nan() || c.age < 0.0) {
            return Err(CoreError::Validation(format!(
                "creature '{}' has invalid age {}",
                c.species, c.age
            )));
        }
        Ok(())
    }

    /// Build the tile grid and entity store this scenario describes.
    pub fn build(&self) -> CoreResult<(World, EntityManager)> {
        let world = match &self.terrain {
            Some(rows) => World::from_rows(rows)?,
            None => generate_terrain(self.width, self.height),
        };

        let mut entities = EntityManager::new();
        for name in &self.civilizations {
            entities.spawn(ComponentSet {
                civilization: Some(CivilizationComponent { name: name.clone() }),
                ..Default::default()
            });
        }
        for seed in &self.creatures {
            entities.spawn(ComponentSet {
                creature: Some(CreatureComponent {
                    species: seed.species.clone(),
                    age: seed.age,
                }),
                ..Default::default()
            });
        }
        Ok((world, entities))
    }
}

/// Deterministic terrain: an elevation field from integer hashing, banded
/// into water, lowland, highland and peaks.
fn generate_terrain(width: u32, height: u32) -> World {
    let mut world = World::filled(width, height, TileType::DeepWater);
    for y in 0..height {
        for x in 0..width {
            let tile = band(elevation(x, y, width, height), moisture(x, y));
            // In bounds by construction.
            let _ = world.set_tile(x, y, tile);
        }
    }
    world
}

fn hash(x: u32, y: u32, salt: u32) -> u32 {
    let mut h = x
        .wrapping_mul(0x27d4_eb2d)
        .wrapping_add(y.wrapping_mul(0x1656_67b1))
        .wrapping_add(salt.wrapping_mul(0x9e37_79b9));
    h ^= h >> 15;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h
}

/// 0.0..1.0, higher toward the middle of the map.
fn elevation(x: u32, y: u32, width: u32, height: u32) -> f64 {
    let cx = (x as f64 + 0.5) / width as f64 - 0.5;
    let cy = (y as f64 + 0.5) / height as f64 - 0.5;
    let dome = 1.0 - (cx * cx + cy * cy).sqrt() * 1.6;
    let noise = (hash(x / 3, y / 3, 1) % 1000) as f64 / 1000.0;
    (dome * 0.7 + noise * 0.3).clamp(0.0, 1.0)
}

fn moisture(x: u32, y: u32) -> f64 {
    (hash(x / 2, y / 2, 2) % 1000) as f64 / 1000.0
}

fn band(elevation: f64, moisture: f64) -> TileType {
    match elevation {
        e if e < 0.18 => TileType::DeepWater,
        e if e < 0.26 => TileType::ShallowWater,
        e if e < 0.31 => TileType::Sand,
        e if e < 0.55 && moisture > 0.8 => TileType::Swamp,
        e if e < 0.55 && moisture > 0.45 => TileType::Forest,
        e if e < 0.55 => TileType::Grass,
        e if e < 0.68 => TileType::Hills,
        e if e < 0.80 && moisture > 0.93 => TileType::Lava,
        e if e < 0.80 => TileType::Mountain,
        _ => TileType::Snow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::ComponentKind;
    use proptest::prelude::*;

    #[test]
    fn default_scenario_builds() {
        let scenario = Scenario::default();
        let (world, entities) = scenario.build().unwrap();
        assert_eq!(world.width(), 64);
        assert_eq!(world.height(), 40);
        assert_eq!(
            entities.entities_with(&[ComponentKind::Civilization]).len(),
            6
        );
        assert_eq!(entities.entities_with(&[ComponentKind::Creature]).len(), 24);
    }

    #[test]
    fn generated_terrain_is_deterministic_and_varied() {
        let a = generate_terrain(64, 40);
        let b = generate_terrain(64, 40);
        assert_eq!(a, b);
        assert!(a.count(TileType::DeepWater) > 0);
        assert!(a.count(TileType::Mountain) + a.count(TileType::Hills) > 0);
    }

    #[test]
    fn explicit_terrain_wins_over_size() {
        let json = r#"{
            "name": "Islet",
            "width": 99,
            "height": 99,
            "terrain": ["~~~", "~^~", "~~~"],
            "civilizations": ["A", "B"]
        }"#;
        let scenario = Scenario::from_json(json).unwrap();
        let (world, entities) = scenario.build().unwrap();
        assert_eq!(world.width(), 3);
        assert_eq!(world.tile(1, 1), Some(TileType::Mountain));
        assert_eq!(entities.len(), 2);
    }

    #[test]
    fn json_round_trip_preserves_scenario() {
        let scenario = Scenario::default();
        let text = scenario.to_json().unwrap();
        assert_eq!(Scenario::from_json(&text).unwrap(), scenario);
    }

    #[test]
    fn empty_grid_rejected() {
        let json = r#"{ "name": "Void", "width": 0, "height": 5 }"#;
        assert!(matches!(
            Scenario::from_json(json),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn negative_age_rejected() {
        let json = r#"{
            "name": "Odd",
            "width": 4,
            "height": 4,
            "creatures": [{ "species": "imp", "age": -3.0 }]
        }"#;
        assert!(matches!(
            Scenario::from_json(json),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Scenario::load(Path::new("/nonexistent/scenario.json")).unwrap_err();
        assert!(matches!(err, CoreError::Io { .. }));
        assert!(err.to_string().starts_with("cannot read /nonexistent/scenario.json"));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        assert!(matches!(
            Scenario::from_json("{ not json"),
            Err(CoreError::Parse(_))
        ));
    }

    proptest! {
        #[test]
        fn generated_grid_matches_requested_size(width in 1u32..80, height in 1u32..80) {
            let world = generate_terrain(width, height);
            prop_assert_eq!(world.width(), width);
            prop_assert_eq!(world.height(), height);
            let total: usize = TileType::ALL.iter().map(|t| world.count(*t)).sum();
            prop_assert_eq!(total, (width * height) as usize);
        }
    }
}
