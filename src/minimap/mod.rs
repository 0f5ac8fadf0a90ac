//! One pixel per map tile summary of a whole map.

pub mod rules;

use log::debug;

use crate::models::{Image, MapTile, TileGroups};

pub use rules::{ColorRule, RuleRegistry};

pub struct Minimap {
  rule: Box<dyn ColorRule>,
  buffer: Image,
  x: i32,
  y: i32,
}

impl Minimap {
  pub fn new(rule: Box<dyn ColorRule>) -> Self {
    Self {
      rule,
      buffer: Image::new(0, 0),
      x: 0,
      y: 0,
    }
  }

  pub fn set_location(&mut self, x: i32, y: i32) {
    self.x = x;
    self.y = y;
  }

  pub fn location(&self) -> (i32, i32) {
    (self.x, self.y)
  }

  pub fn buffer(&self) -> &Image {
    &self.buffer
  }

  /// Recomputes the whole buffer from `map`. Must be called again after any
  /// map change.
  pub fn prepare(&mut self, map: &MapTile, groups: &TileGroups) {
    let mut buffer = Image::new(map.width(), map.height());
    for (tx, ty, tile) in map.cells() {
      let color = match tile {
        Some(t) => self.rule.tile_color(t, groups),
        None => self.rule.empty_color(),
      };
      buffer.set(tx, ty, color);
    }
    debug!("Prepared minimap of {}x{} ({} pixels)", buffer.width(), buffer.height(), buffer.pixel_count());
    self.buffer = buffer;
  }

  /// Draws the buffer onto `output` at the minimap location.
  pub fn render(&self, output: &mut Image) {
    output.blit(&self.buffer, self.x, self.y);
  }
}
