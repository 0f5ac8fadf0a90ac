use crate::error::{Error, Result};
use crate::models::Image;
use crate::raster::MAX_RASTERS_R;

/// Per-variant RGB offsets read from a raster definition image.
///
/// Variant `i` samples the first column at row `i * height / MAX_RASTERS_R`,
/// each channel storing `offset + 128`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterDefinition {
  shifts: Vec<[i16; 3]>,
}

impl RasterDefinition {
  pub fn from_image(image: &Image) -> Result<Self> {
    if image.width() == 0 || image.height() == 0 {
      return Err(Error::InvalidRaster);
    }
    let shifts = (0..MAX_RASTERS_R)
      .map(|i| {
        let row = (i as u64 * image.height() as u64 / MAX_RASTERS_R as u64) as u32;
        let p = image.get(0, row).unwrap_or_default();
        [p.r as i16 - 128, p.g as i16 - 128, p.b as i16 - 128]
      })
      .collect();
    Ok(Self { shifts })
  }

  #[cfg(test)]
  pub fn from_shifts(shifts: Vec<[i16; 3]>) -> Self {
    Self { shifts }
  }

  pub fn shift(&self, index: usize) -> [i16; 3] {
    self.shifts.get(index).copied().unwrap_or([0; 3])
  }

  pub fn apply(&self, index: usize, image: &Image) -> Image {
    let shift = self.shift(index);
    image.map_pixels(|p| p.shifted(shift))
  }
}
