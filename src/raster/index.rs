use serde::Deserialize;

/// Raster period in tiles, also the number of variants built per sheet.
pub const MAX_RASTERS_R: u32 = 15;

/// Highest raster bucket.
pub const MAX_RASTERS: u32 = MAX_RASTERS_R - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RasterMode {
  /// Buckets climb for a whole period then restart at 0.
  #[default]
  Wrap,
  /// Even buckets on the way up, odd buckets on the way down.
  Smooth,
}

/// Raster bucket of a tile whose top edge is at pixel ordinate `y`.
///
/// Panics if `tile_height` is 0.
pub fn raster_index(y: u32, tile_height: u32, mode: RasterMode) -> u32 {
  assert!(tile_height > 0, "tile height must be strictly positive");
  let step = (y / tile_height) % MAX_RASTERS_R;
  let index = match mode {
    RasterMode::Wrap => step,
    RasterMode::Smooth => {
      let half = MAX_RASTERS_R / 2;
      if step <= half {
        step * 2
      } else {
        (MAX_RASTERS_R - step) * 2 - 1
      }
    }
  };
  index.min(MAX_RASTERS)
}

#[cfg(test)]
mod tests {
  use super::*;

  const MODES: [RasterMode; 2] = [RasterMode::Wrap, RasterMode::Smooth];

  #[test]
  fn test_index_is_bounded() {
    for mode in MODES {
      for h in [1, 7, 16, 32] {
        for y in 0..(h * MAX_RASTERS_R * 3) {
          assert!(raster_index(y, h, mode) <= MAX_RASTERS, "y={} h={} {:?}", y, h, mode);
        }
      }
    }
  }

  #[test]
  fn test_index_is_periodic() {
    for mode in MODES {
      for y in (0..400).step_by(3) {
        assert_eq!(raster_index(y, 16, mode), raster_index(y + 16 * MAX_RASTERS_R, 16, mode));
      }
    }
  }

  #[test]
  fn test_wrap_mode() {
    assert_eq!(raster_index(0, 16, RasterMode::Wrap), 0);
    assert_eq!(raster_index(15, 16, RasterMode::Wrap), 0);
    assert_eq!(raster_index(16, 16, RasterMode::Wrap), 1);
    assert_eq!(raster_index(16 * 14, 16, RasterMode::Wrap), MAX_RASTERS);
    assert_eq!(raster_index(16 * 15, 16, RasterMode::Wrap), 0);
  }

  #[test]
  fn test_smooth_mode_mirrors() {
    let buckets: Vec<u32> = (0..MAX_RASTERS_R)
      .map(|ty| raster_index(ty * 8, 8, RasterMode::Smooth))
      .collect();
    assert_eq!(buckets, vec![0, 2, 4, 6, 8, 10, 12, 14, 13, 11, 9, 7, 5, 3, 1]);

    // no abrupt jump, including across the period boundary
    for ty in 0..(MAX_RASTERS_R * 2) {
      let a = raster_index(ty * 8, 8, RasterMode::Smooth) as i32;
      let b = raster_index((ty + 1) * 8, 8, RasterMode::Smooth) as i32;
      assert!((a - b).abs() <= 2);
    }
  }

  #[test]
  #[should_panic(expected = "tile height")]
  fn test_zero_tile_height_panics() {
    raster_index(10, 0, RasterMode::Wrap);
  }
}
