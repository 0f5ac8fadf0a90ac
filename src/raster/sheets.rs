use log::{debug, info};
use std::collections::HashMap;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::SheetId;
use crate::raster::{RasterDefinition, MAX_RASTERS, MAX_RASTERS_R};
use crate::store::{codec, Sheet, Sheets};

/// Palette shifted variants of every sheet, indexed by raster bucket.
#[derive(Debug, Clone, Default)]
pub struct RasterSheets {
  variants: HashMap<SheetId, Vec<Sheet>>,
  loaded: bool,
}

impl RasterSheets {
  pub fn new() -> Self {
    Self::default()
  }

  /// Builds the variants from the raster definition at `raster`.
  ///
  /// Returns `Ok(false)` and leaves the table empty when the file does not
  /// exist.
  pub fn load_sheets(&mut self, raster: &Path, sheets: &Sheets) -> Result<bool> {
    self.clear();
    if !raster.exists() {
      info!("No raster definition at {:?}, rastering disabled", raster);
      return Ok(false);
    }
    let definition = RasterDefinition::from_image(&codec::load_png(raster)?)?;
    self.build(&definition, sheets)?;
    info!("Loaded raster {:?} for {} sheets", raster, self.len());
    Ok(true)
  }

  pub fn build(&mut self, definition: &RasterDefinition, sheets: &Sheets) -> Result<()> {
    self.clear();
    for sheet in sheets.iter() {
      let mut variants = Vec::with_capacity(MAX_RASTERS_R as usize);
      for i in 0..MAX_RASTERS_R as usize {
        variants.push(sheet.with_image(definition.apply(i, sheet.image()))?);
      }
      debug!("Built {} raster variants of sheet {}", variants.len(), sheet.id());
      self.variants.insert(sheet.id(), variants);
    }
    self.loaded = true;
    Ok(())
  }

  fn clear(&mut self) {
    self.variants.clear();
    self.loaded = false;
  }

  /// True once a raster definition was applied, even to no sheet at all.
  pub fn is_loaded(&self) -> bool {
    self.loaded
  }

  /// Number of sheets with raster variants.
  pub fn len(&self) -> usize {
    self.variants.len()
  }

  /// Variant of `sheet` for raster bucket `index`, clamped to `MAX_RASTERS`.
  ///
  /// Panics if `index` is negative.
  pub fn get_raster_sheet(&self, sheet: SheetId, index: i32) -> Result<&Sheet> {
    assert!(index >= 0, "raster index must not be negative, got {}", index);
    let variants = self.variants.get(&sheet).ok_or(Error::UnknownSheet(sheet))?;
    let index = (index as u32).min(MAX_RASTERS) as usize;
    variants.get(index).ok_or(Error::UnknownSheet(sheet))
  }
}
