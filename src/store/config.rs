use log::debug;
use serde::Deserialize;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::GroupConfig;
use crate::raster::RasterMode;

#[derive(Debug, Deserialize)]
pub struct Root {
  pub worlds: Vec<WorldConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorldConfig {
  pub name: String,
  // map size, in tiles
  pub width: u32,
  pub height: u32,
  // tile size, in pixels
  pub tile_width: u32,
  pub tile_height: u32,
  pub sheets: PathBuf,
  pub level: PathBuf,
  pub raster: Option<PathBuf>,
  #[serde(default)]
  pub raster_mode: RasterMode,
  #[serde(default)]
  pub minimap: MinimapConfig,
  #[serde(default)]
  pub groups: Vec<GroupConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MinimapConfig {
  #[serde(default = "default_rule")]
  pub rule: String,
  #[serde(default)]
  pub background: u32,
  #[serde(default = "default_color")]
  pub default: u32,
  #[serde(default)]
  pub x: i32,
  #[serde(default)]
  pub y: i32,
}

fn default_rule() -> String {
  String::from("group")
}

fn default_color() -> u32 {
  0x808080
}

impl Default for MinimapConfig {
  fn default() -> Self {
    Self {
      rule: default_rule(),
      background: 0,
      default: default_color(),
      x: 0,
      y: 0,
    }
  }
}

impl Root {
  /// Reads a configuration file. Relative paths are resolved against the
  /// directory holding the file.
  pub fn load(path: &Path) -> Result<Root> {
    let config_str = read_to_string(path)?;
    let mut root: Root = serde_yaml::from_str(&config_str)?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    for world in root.worlds.iter_mut() {
      world.resolve(base);
    }
    debug!("Loaded {} worlds from {:?}", root.worlds.len(), path);
    Ok(root)
  }

  pub fn find(&self, name: &str) -> Option<&WorldConfig> {
    self.worlds.iter().find(|w| w.name == name)
  }
}

impl WorldConfig {
  fn resolve(&mut self, base: &Path) {
    self.sheets = base.join(&self.sheets);
    self.level = base.join(&self.level);
    self.raster = self.raster.as_ref().map(|r| base.join(r));
  }
}
