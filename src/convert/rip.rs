use log::{info, warn};
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::models::{Image, LevelRecord, Rgba, SheetId};
use crate::store::Sheets;

/// Result of converting a level image into tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelRip {
  // size, in tiles
  pub width: u32,
  pub height: u32,
  pub records: Vec<LevelRecord>,
  // tile coordinates without a matching sheet tile
  pub missing: Vec<(u32, u32)>,
}

/// Every tile of every sheet, keyed by its pixels.
struct TileIndex {
  tiles: HashMap<Vec<Rgba>, (SheetId, u16)>,
}

impl TileIndex {
  fn new(sheets: &Sheets) -> Self {
    let mut tiles = HashMap::new();
    // sheets iterate by id, so lower ids and numbers win on duplicates
    for sheet in sheets.iter() {
      let numbers = (0..sheet.tile_count()).filter_map(|n| u16::try_from(n).ok());
      for number in numbers {
        if let Some(tile) = sheet.tile(number) {
          if tile.is_transparent() {
            continue;
          }
          tiles.entry(tile.pixels().to_vec()).or_insert((sheet.id(), number));
        }
      }
    }
    Self { tiles }
  }

  fn find(&self, tile: &Image) -> Option<(SheetId, u16)> {
    self.tiles.get(tile.pixels()).copied()
  }
}

/// Matches each tile sized block of `level` against the tiles of `sheets`.
/// Fully transparent blocks are left empty.
pub fn rip(level: &Image, sheets: &Sheets) -> Result<LevelRip> {
  let (tw, th) = (sheets.tile_width(), sheets.tile_height());
  let (width, height) = (level.width(), level.height());
  if tw == 0 || th == 0 || width % tw != 0 || height % th != 0 {
    return Err(Error::InvalidLevelImage { width, height, tile_width: tw, tile_height: th });
  }

  let index = TileIndex::new(sheets);
  let mut rip = LevelRip {
    width: width / tw,
    height: height / th,
    records: Vec::new(),
    missing: Vec::new(),
  };

  for ty in 0..rip.height {
    for tx in 0..rip.width {
      let block = level.crop(tx * tw, ty * th, tw, th);
      if block.is_transparent() {
        continue;
      }
      match index.find(&block) {
        Some((sheet, number)) => rip.records.push(LevelRecord { tx, ty, sheet, number }),
        None => {
          warn!("no sheet tile matches level tile {},{}", tx, ty);
          rip.missing.push((tx, ty));
        }
      }
    }
  }
  info!(
    "Ripped {}x{} level: {} tiles placed, {} missing",
    rip.width, rip.height, rip.records.len(), rip.missing.len()
  );
  Ok(rip)
}
