use log::info;
use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::models::{Image, Rgba};

/// Builds a sheet from the distinct tiles of `levels`, in order of first
/// appearance, `columns` tiles per row. Transparent tiles are ignored, as are
/// partial tiles on the right and bottom edges.
pub fn extract(levels: &[Image], tile_width: u32, tile_height: u32, columns: u32) -> Result<Image> {
  assert!(tile_width > 0 && tile_height > 0 && columns > 0, "extract sizes must be positive");

  let mut seen: HashSet<Vec<Rgba>> = HashSet::new();
  let mut tiles: Vec<Image> = Vec::new();
  for level in levels {
    for ty in 0..level.height() / tile_height {
      for tx in 0..level.width() / tile_width {
        let tile = level.crop(tx * tile_width, ty * tile_height, tile_width, tile_height);
        if tile.is_transparent() || !seen.insert(tile.pixels().to_vec()) {
          continue;
        }
        tiles.push(tile);
      }
    }
  }
  if tiles.is_empty() {
    return Err(Error::NoTiles);
  }

  let count = tiles.len() as u32;
  let columns = columns.min(count);
  let rows = (count + columns - 1) / columns;
  let mut sheet = Image::new(columns * tile_width, rows * tile_height);
  for (i, tile) in tiles.iter().enumerate() {
    let i = i as u32;
    let x = (i % columns) * tile_width;
    let y = (i / columns) * tile_height;
    sheet.blit(tile, x as i32, y as i32);
  }
  info!("Extracted {} tiles into a {}x{} sheet", count, sheet.width(), sheet.height());
  Ok(sheet)
}
