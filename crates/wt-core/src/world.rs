use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Terrain type of a single tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileType {
    /// Open ocean.
    DeepWater,
    /// Coastal shallows and lakes.
    ShallowWater,
    /// Beaches and dunes.
    Sand,
    /// Open grassland.
    Grass,
    /// Woodland.
    Forest,
    /// Rolling hills.
    Hills,
    /// High rock.
    Mountain,
    /// Frozen peaks and tundra.
    Snow,
    /// Molten rock.
    Lava,
    /// Wetland.
    Swamp,
}

impl TileType {
    /// Every tile type, in symbol-table order.
    pub const ALL: [TileType; 10] = [
        Self::DeepWater,
        Self::ShallowWater,
        Self::Sand,
        Self::Grass,
        Self::Forest,
        Self::Hills,
        Self::Mountain,
        Self::Snow,
        Self::Lava,
        Self::Swamp,
    ];

    /// The single-character symbol used in scenario terrain rows.
    pub fn symbol(self) -> char {
        match self {
            Self::DeepWater => '~',
            Self::ShallowWater => '-',
            Self::Sand => '.',
            Self::Grass => ',',
            Self::Forest => 'T',
            Self::Hills => 'n',
            Self::Mountain => '^',
            Self::Snow => '*',
            Self::Lava => '!',
            Self::Swamp => '%',
        }
    }

    /// Parse a terrain symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.symbol() == symbol)
    }
}

impl fmt::Display for TileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DeepWater => "deep water",
            Self::ShallowWater => "shallow water",
            Self::Sand => "sand",
            Self::Grass => "grass",
            Self::Forest => "forest",
            Self::Hills => "hills",
            Self::Mountain => "mountain",
            Self::Snow => "snow",
            Self::Lava => "lava",
            Self::Swamp => "swamp",
        };
        write!(f, "{name}")
    }
}

/// The tile grid. Row-major, `width * height` tiles.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    width: u32,
    height: u32,
    tiles: Vec<TileType>,
}

impl World {
    /// Create a grid filled with a single tile type.
    pub fn filled(width: u32, height: u32, tile: TileType) -> Self {
        Self {
            width,
            height,
            tiles: vec![tile; width as usize * height as usize],
        }
    }

    /// Create a grid from terrain rows, one symbol per tile.
    ///
    /// Rows shorter than the widest row are padded with deep water.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> CoreResult<Self> {
        let width = rows
            .iter()
            .map(|r| r.as_ref().chars().count())
            .max()
            .unwrap_or(0);
        let mut tiles = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let mut count = 0;
            for (column, symbol) in line.as_ref().chars().enumerate() {
                let tile = TileType::from_symbol(symbol).ok_or(CoreError::UnknownTerrain {
                    symbol,
                    row,
                    column,
                })?;
                tiles.push(tile);
                count += 1;
            }
            tiles.extend(std::iter::repeat_n(TileType::DeepWater, width - count));
        }
        Ok(Self {
            width: width as u32,
            height: rows.len() as u32,
            tiles,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    /// The tile at `(x, y)`, or `None` outside the grid.
    pub fn tile(&self, x: u32, y: u32) -> Option<TileType> {
        self.index(x, y).map(|i| self.tiles[i])
    }

    /// Overwrite the tile at `(x, y)`.
    pub fn set_tile(&mut self, x: u32, y: u32, tile: TileType) -> CoreResult<()> {
        let i = self.index(x, y).ok_or(CoreError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;
        self.tiles[i] = tile;
        Ok(())
    }

    /// Number of tiles of the given type.
    pub fn count(&self, tile: TileType) -> usize {
        self.tiles.iter().filter(|t| **t == tile).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_grid_dimensions() {
        let world = World::filled(4, 3, TileType::Grass);
        assert_eq!(world.width(), 4);
        assert_eq!(world.height(), 3);
        assert_eq!(world.count(TileType::Grass), 12);
    }

    #[test]
    fn tile_outside_grid_is_none() {
        let world = World::filled(2, 2, TileType::Sand);
        assert_eq!(world.tile(1, 1), Some(TileType::Sand));
        assert_eq!(world.tile(2, 0), None);
        assert_eq!(world.tile(0, 2), None);
    }

    #[test]
    fn set_tile_writes_and_rejects_out_of_bounds() {
        let mut world = World::filled(3, 3, TileType::Mountain);
        world.set_tile(2, 1, TileType::Hills).unwrap();
        assert_eq!(world.tile(2, 1), Some(TileType::Hills));
        assert_eq!(world.count(TileType::Mountain), 8);

        let err = world.set_tile(3, 0, TileType::Hills).unwrap_err();
        assert!(matches!(err, CoreError::OutOfBounds { x: 3, y: 0, .. }));
    }

    #[test]
    fn rows_parse_into_tiles() {
        let rows = ["~~-.,", "TTn^*", "!%,,,"];
        let world = World::from_rows(&rows).unwrap();
        assert_eq!(world.tile(3, 1), Some(TileType::Mountain));
        assert_eq!(world.tile(0, 2), Some(TileType::Lava));
        assert_eq!((world.width(), world.height()), (5, 3));
    }

    #[test]
    fn short_rows_are_padded_with_deep_water() {
        let world = World::from_rows(&["^^^", "^"]).unwrap();
        assert_eq!(world.width(), 3);
        assert_eq!(world.tile(2, 1), Some(TileType::DeepWater));
    }

    #[test]
    fn unknown_symbol_is_reported() {
        let err = World::from_rows(&["^^", "^?"]).unwrap_err();
        assert!(matches!(
            err,
            CoreError::UnknownTerrain {
                symbol: '?',
                row: 1,
                column: 1
            }
        ));
    }

    #[test]
    fn every_symbol_is_unique() {
        for tile in TileType::ALL {
            assert_eq!(TileType::from_symbol(tile.symbol()), Some(tile));
        }
    }
}
