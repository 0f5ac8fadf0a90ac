use glob::glob;
use log::{debug, warn};
use regex::Regex;
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::{Image, SheetId};
use crate::store::codec;

const REGEX_SHEET: &str = r"^([0-9]+)\.png$";

// tile numbers are u16
const MAX_TILES: u32 = u16::MAX as u32 + 1;

/// Tile sprite source, sliced row-major into tiles.
#[derive(Debug, Clone)]
pub struct Sheet {
  id: SheetId,
  image: Image,
  tile_width: u32,
  tile_height: u32,
}

impl Sheet {
  pub fn new(id: SheetId, image: Image, tile_width: u32, tile_height: u32) -> Result<Self> {
    let (width, height) = (image.width(), image.height());
    if tile_width == 0 || tile_height == 0 || width == 0 || height == 0
      || width % tile_width != 0 || height % tile_height != 0 {
      return Err(Error::InvalidSheet { id, width, height, tile_width, tile_height });
    }
    let count = (width / tile_width) * (height / tile_height);
    if count > MAX_TILES {
      return Err(Error::TooManyTiles { id, count });
    }
    Ok(Self { id, image, tile_width, tile_height })
  }

  pub fn id(&self) -> SheetId {
    self.id
  }

  pub fn image(&self) -> &Image {
    &self.image
  }

  pub fn tiles_per_row(&self) -> u32 {
    self.image.width() / self.tile_width
  }

  pub fn tile_count(&self) -> u32 {
    self.tiles_per_row() * (self.image.height() / self.tile_height)
  }

  fn tile_origin(&self, number: u16) -> Option<(u32, u32)> {
    let number = number as u32;
    if number >= self.tile_count() {
      return None;
    }
    let per_row = self.tiles_per_row();
    Some(((number % per_row) * self.tile_width, (number / per_row) * self.tile_height))
  }

  pub fn tile(&self, number: u16) -> Option<Image> {
    self.tile_origin(number)
      .map(|(x, y)| self.image.crop(x, y, self.tile_width, self.tile_height))
  }

  /// Draws a tile onto `output`. Returns false if the tile does not exist.
  pub fn draw_tile(&self, number: u16, output: &mut Image, x: i32, y: i32) -> bool {
    match self.tile_origin(number) {
      Some((sx, sy)) => {
        output.blit_region(&self.image, sx, sy, self.tile_width, self.tile_height, x, y);
        true
      }
      None => false,
    }
  }

  /// Same slicing, different pixels.
  pub fn with_image(&self, image: Image) -> Result<Sheet> {
    Sheet::new(self.id, image, self.tile_width, self.tile_height)
  }
}

/// Every sheet of a map, sharing one tile size.
#[derive(Debug, Clone)]
pub struct Sheets {
  tile_width: u32,
  tile_height: u32,
  sheets: BTreeMap<SheetId, Sheet>,
}

impl Sheets {
  pub fn new(tile_width: u32, tile_height: u32) -> Self {
    Self { tile_width, tile_height, sheets: BTreeMap::new() }
  }

  /// Loads every `<id>.png` found in `dir`.
  pub fn load_dir(dir: &Path, tile_width: u32, tile_height: u32) -> Result<Self> {
    let re = Regex::new(REGEX_SHEET).expect("sheet regex is valid");
    let mut sheets = Sheets::new(tile_width, tile_height);
    let pattern = dir.join("*.png");

    for entry in glob(&pattern.to_string_lossy())? {
      let path = match entry {
        Ok(p) => p,
        Err(err) => {
          warn!("unable to read sheet entry: {}", err);
          continue
        }
      };
      let filename = path.file_name().and_then(|f| f.to_str()).unwrap_or("");
      let id = match re.captures(filename).and_then(|c| c[1].parse::<u16>().ok()) {
        Some(id) => SheetId(id),
        None => {
          warn!("unable to match sheet filename for {:?}", path);
          continue
        }
      };
      let image = codec::load_png(&path)?;
      debug!("Loaded sheet {} from {:?} ({}x{})", id, path, image.width(), image.height());
      sheets.insert(id, image)?;
    }
    Ok(sheets)
  }

  pub fn insert(&mut self, id: SheetId, image: Image) -> Result<()> {
    let sheet = Sheet::new(id, image, self.tile_width, self.tile_height)?;
    self.sheets.insert(id, sheet);
    Ok(())
  }

  pub fn tile_width(&self) -> u32 {
    self.tile_width
  }

  pub fn tile_height(&self) -> u32 {
    self.tile_height
  }

  pub fn get(&self, id: SheetId) -> Option<&Sheet> {
    self.sheets.get(&id)
  }

  /// Sheets ordered by id.
  pub fn iter(&self) -> impl Iterator<Item = &Sheet> + '_ {
    self.sheets.values()
  }

  pub fn len(&self) -> usize {
    self.sheets.len()
  }

  pub fn is_empty(&self) -> bool {
    self.sheets.is_empty()
  }
}
