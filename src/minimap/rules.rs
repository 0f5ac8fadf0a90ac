use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::models::{Collision, Rgba, Tile, TileGroups};
use crate::store::config::MinimapConfig;

/// Picks the minimap color of a tile.
pub trait ColorRule: Send + Sync {
  fn tile_color(&self, tile: &Tile, groups: &TileGroups) -> Rgba;

  /// Color of cells without any tile.
  fn empty_color(&self) -> Rgba {
    Rgba::TRANSPARENT
  }
}

/// Color of the tile's group, or a default color for ungrouped tiles.
pub struct GroupColor {
  pub default: Rgba,
  pub background: Rgba,
}

impl GroupColor {
  pub fn from_config(config: &MinimapConfig) -> Self {
    Self {
      default: Rgba::from_hex(config.default),
      background: Rgba::from_hex(config.background),
    }
  }
}

impl ColorRule for GroupColor {
  fn tile_color(&self, tile: &Tile, groups: &TileGroups) -> Rgba {
    tile.group
      .and_then(|id| groups.get(id))
      .map_or(self.default, |g| g.color)
  }

  fn empty_color(&self) -> Rgba {
    self.background
  }
}

/// Fixed palette by collision kind.
pub struct CollisionColor {
  pub background: Rgba,
}

impl CollisionColor {
  pub const NONE: Rgba = Rgba::rgb(0x80, 0x80, 0x80);
  pub const GROUND: Rgba = Rgba::rgb(0x30, 0xa0, 0x30);
  pub const BLOCK: Rgba = Rgba::rgb(0x60, 0x40, 0x20);
  pub const WATER: Rgba = Rgba::rgb(0x20, 0x40, 0xc0);
  pub const HOLE: Rgba = Rgba::rgb(0x10, 0x10, 0x10);

  pub fn from_config(config: &MinimapConfig) -> Self {
    Self { background: Rgba::from_hex(config.background) }
  }
}

impl ColorRule for CollisionColor {
  fn tile_color(&self, tile: &Tile, _groups: &TileGroups) -> Rgba {
    match tile.collision {
      Collision::None => Self::NONE,
      Collision::Ground => Self::GROUND,
      Collision::Block => Self::BLOCK,
      Collision::Water => Self::WATER,
      Collision::Hole => Self::HOLE,
    }
  }

  fn empty_color(&self) -> Rgba {
    self.background
  }
}

pub type RuleFactory = fn(&MinimapConfig) -> Box<dyn ColorRule>;

/// Color rules available by name.
pub struct RuleRegistry {
  factories: HashMap<&'static str, RuleFactory>,
}

impl RuleRegistry {
  pub fn empty() -> Self {
    Self { factories: HashMap::new() }
  }

  pub fn register(&mut self, name: &'static str, factory: RuleFactory) {
    self.factories.insert(name, factory);
  }

  pub fn create(&self, config: &MinimapConfig) -> Result<Box<dyn ColorRule>> {
    let factory = self.factories.get(config.rule.as_str())
      .ok_or_else(|| Error::UnknownColorRule(config.rule.clone()))?;
    Ok(factory(config))
  }
}

impl Default for RuleRegistry {
  fn default() -> Self {
    let mut registry = Self::empty();
    registry.register("group", |c| Box::new(GroupColor::from_config(c)));
    registry.register("collision", |c| Box::new(CollisionColor::from_config(c)));
    registry
  }
}
