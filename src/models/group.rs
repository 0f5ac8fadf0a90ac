use log::debug;
use serde::Deserialize;
use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::models::{Collision, GroupId, Rgba, SheetId};

#[derive(Debug, Clone, Deserialize)]
pub struct GroupConfig {
  pub name: String,
  pub sheet: SheetId,
  // inclusive tile number ranges
  pub tiles: Vec<[u16; 2]>,
  #[serde(default)]
  pub collision: Collision,
  pub color: u32,
}

#[derive(Debug, Clone)]
pub struct TileGroup {
  pub name: String,
  pub sheet: SheetId,
  pub ranges: Vec<(u16, u16)>,
  pub collision: Collision,
  pub color: Rgba,
}

impl TileGroup {
  pub fn contains(&self, sheet: SheetId, number: u16) -> bool {
    self.sheet == sheet && self.ranges.iter().any(|(s, e)| (*s..=*e).contains(&number))
  }
}

/// Tile classification table, looked up when tiles are placed.
#[derive(Debug, Clone, Default)]
pub struct TileGroups {
  groups: Vec<TileGroup>,
}

impl TileGroups {
  pub fn from_config(configs: &[GroupConfig]) -> Result<Self> {
    let mut names = HashSet::new();
    let mut groups = Vec::with_capacity(configs.len());
    for config in configs {
      if !names.insert(config.name.as_str()) {
        return Err(Error::DuplicateGroup(config.name.clone()));
      }
      if let Some([start, end]) = config.tiles.iter().find(|[s, e]| s > e) {
        return Err(Error::InvalidGroupRange {
          name: config.name.clone(),
          start: *start,
          end: *end,
        });
      }
      debug!("Tile group {} covers {} ranges of sheet {}", config.name, config.tiles.len(), config.sheet);
      groups.push(TileGroup {
        name: config.name.clone(),
        sheet: config.sheet,
        ranges: config.tiles.iter().map(|[s, e]| (*s, *e)).collect(),
        collision: config.collision,
        color: Rgba::from_hex(config.color),
      });
    }
    Ok(Self { groups })
  }

  /// First group declaring the tile.
  pub fn find(&self, sheet: SheetId, number: u16) -> Option<GroupId> {
    self.groups.iter()
      .position(|g| g.contains(sheet, number))
      .map(GroupId)
  }

  pub fn get(&self, id: GroupId) -> Option<&TileGroup> {
    self.groups.get(id.0)
  }

  pub fn len(&self) -> usize {
    self.groups.len()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn group(name: &str, sheet: u16, tiles: Vec<[u16; 2]>) -> GroupConfig {
    GroupConfig {
      name: name.to_string(),
      sheet: SheetId(sheet),
      tiles,
      collision: Collision::Ground,
      color: 0x00ff00,
    }
  }

  #[test]
  fn test_find_by_range() {
    let groups = TileGroups::from_config(&[
      group("grass", 0, vec![[0, 3], [10, 10]]),
      group("water", 0, vec![[4, 9]]),
      group("rock", 1, vec![[0, 3]]),
    ]).unwrap();

    assert_eq!(groups.find(SheetId(0), 10), Some(GroupId(0)));
    assert_eq!(groups.find(SheetId(0), 4), Some(GroupId(1)));
    assert_eq!(groups.find(SheetId(1), 2), Some(GroupId(2)));
    assert_eq!(groups.get(GroupId(2)).map(|g| g.name.as_str()), Some("rock"));
    assert_eq!(groups.find(SheetId(0), 11), None);
    assert_eq!(groups.find(SheetId(2), 0), None);
  }

  #[test]
  fn test_first_declared_group_wins() {
    let groups = TileGroups::from_config(&[
      group("a", 0, vec![[0, 5]]),
      group("b", 0, vec![[3, 8]]),
    ]).unwrap();
    assert_eq!(groups.find(SheetId(0), 4), Some(GroupId(0)));
  }

  #[test]
  fn test_rejects_invalid_config() {
    let dup = TileGroups::from_config(&[group("a", 0, vec![]), group("a", 1, vec![])]);
    assert!(matches!(dup, Err(Error::DuplicateGroup(_))));

    let reversed = TileGroups::from_config(&[group("a", 0, vec![[4, 2]])]);
    assert!(matches!(reversed, Err(Error::InvalidGroupRange { start: 4, end: 2, .. })));
  }
}
