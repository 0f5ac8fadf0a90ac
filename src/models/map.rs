use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::models::{SheetId, Tile};

/// Fixed size grid of tiles.
#[derive(Debug, Clone)]
pub struct MapTile {
  width: u32,
  height: u32,
  tile_width: u32,
  tile_height: u32,
  tiles: Vec<Option<Tile>>,
}

impl MapTile {
  /// Creates an empty map of `width x height` tiles, each tile being
  /// `tile_width x tile_height` pixels.
  pub fn new(width: u32, height: u32, tile_width: u32, tile_height: u32) -> Result<Self> {
    if width == 0 || height == 0 || tile_width == 0 || tile_height == 0 {
      return Err(Error::InvalidMapSize { width, height, tile_width, tile_height });
    }
    Ok(Self {
      width,
      height,
      tile_width,
      tile_height,
      tiles: vec![None; width as usize * height as usize],
    })
  }

  pub fn width(&self) -> u32 {
    self.width
  }

  pub fn height(&self) -> u32 {
    self.height
  }

  pub fn tile_width(&self) -> u32 {
    self.tile_width
  }

  pub fn tile_height(&self) -> u32 {
    self.tile_height
  }

  pub fn in_bounds(&self, tx: u32, ty: u32) -> bool {
    tx < self.width && ty < self.height
  }

  fn idx(&self, tx: u32, ty: u32) -> Option<usize> {
    if !self.in_bounds(tx, ty) {
      return None;
    }
    Some(ty as usize * self.width as usize + tx as usize)
  }

  pub fn get(&self, tx: u32, ty: u32) -> Option<&Tile> {
    self.idx(tx, ty).and_then(|i| self.tiles[i].as_ref())
  }

  /// Places a tile at its own coordinates, replacing any previous tile.
  pub fn set(&mut self, tile: Tile) -> Result<()> {
    let i = self.idx(tile.tx, tile.ty).ok_or(Error::TileOutOfBounds {
      tx: tile.tx,
      ty: tile.ty,
      width: self.width,
      height: self.height,
    })?;
    self.tiles[i] = Some(tile);
    Ok(())
  }

  /// Every cell in row-major order.
  pub fn cells(&self) -> impl Iterator<Item = (u32, u32, Option<&Tile>)> + '_ {
    let width = self.width as usize;
    self.tiles.iter().enumerate().map(move |(i, t)| {
      ((i % width) as u32, (i / width) as u32, t.as_ref())
    })
  }

  pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
    self.tiles.iter().flatten()
  }

  pub fn sheets_used(&self) -> BTreeSet<SheetId> {
    self.tiles().map(|t| t.sheet).collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_new_rejects_empty_sizes() {
    assert!(MapTile::new(0, 4, 16, 16).is_err());
    assert!(MapTile::new(4, 4, 16, 0).is_err());
    assert!(MapTile::new(4, 4, 16, 16).is_ok());
  }

  #[test]
  fn test_set_and_get() {
    let mut map = MapTile::new(3, 2, 8, 8).unwrap();
    map.set(Tile::new(SheetId(1), 4, 2, 1)).unwrap();

    assert_eq!(map.get(2, 1).map(|t| t.number), Some(4));
    assert!(map.get(0, 0).is_none());
    assert!(map.get(3, 1).is_none());
    assert_eq!(map.tiles().count(), 1);
  }

  #[test]
  fn test_set_out_of_bounds() {
    let mut map = MapTile::new(3, 2, 8, 8).unwrap();
    let err = map.set(Tile::new(SheetId(0), 0, 0, 2)).unwrap_err();
    assert!(matches!(err, Error::TileOutOfBounds { tx: 0, ty: 2, .. }));
  }

  #[test]
  fn test_cells_are_row_major() {
    let mut map = MapTile::new(2, 2, 8, 8).unwrap();
    map.set(Tile::new(SheetId(3), 0, 0, 1)).unwrap();
    map.set(Tile::new(SheetId(1), 0, 1, 1)).unwrap();

    let coords: Vec<(u32, u32, bool)> = map.cells()
      .map(|(x, y, t)| (x, y, t.is_some()))
      .collect();
    assert_eq!(coords, vec![(0, 0, false), (1, 0, false), (0, 1, true), (1, 1, true)]);
    assert_eq!(map.sheets_used().into_iter().collect::<Vec<_>>(), vec![SheetId(1), SheetId(3)]);
  }
}
