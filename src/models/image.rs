use crate::models::Rgba;

/// 2D buffer of RGBA pixels, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
  width: u32,
  height: u32,
  pixels: Vec<Rgba>,
}

impl Image {
  /// Fully transparent image.
  pub fn new(width: u32, height: u32) -> Self {
    Self::filled(width, height, Rgba::TRANSPARENT)
  }

  pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
    Self {
      width,
      height,
      pixels: vec![color; width as usize * height as usize],
    }
  }

  /// Returns `None` when the pixel count does not match the dimensions.
  pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba>) -> Option<Self> {
    if pixels.len() != width as usize * height as usize {
      return None;
    }
    Some(Self { width, height, pixels })
  }

  pub fn width(&self) -> u32 {
    self.width
  }

  pub fn height(&self) -> u32 {
    self.height
  }

  pub fn pixels(&self) -> &[Rgba] {
    &self.pixels
  }

  pub fn pixel_count(&self) -> usize {
    self.pixels.len()
  }

  #[inline(always)]
  fn idx(&self, x: u32, y: u32) -> Option<usize> {
    if x >= self.width || y >= self.height {
      return None;
    }
    Some(y as usize * self.width as usize + x as usize)
  }

  pub fn get(&self, x: u32, y: u32) -> Option<Rgba> {
    self.idx(x, y).map(|i| self.pixels[i])
  }

  /// Writes a pixel, ignoring coordinates outside of the image.
  pub fn set(&mut self, x: u32, y: u32, color: Rgba) {
    if let Some(i) = self.idx(x, y) {
      self.pixels[i] = color;
    }
  }

  pub fn is_transparent(&self) -> bool {
    self.pixels.iter().all(|p| p.is_transparent())
  }

  pub fn map_pixels<F: Fn(Rgba) -> Rgba>(&self, f: F) -> Image {
    Image {
      width: self.width,
      height: self.height,
      pixels: self.pixels.iter().map(|p| f(*p)).collect(),
    }
  }

  /// Draws the whole of `src` with its top left corner at `(x, y)`.
  pub fn blit(&mut self, src: &Image, x: i32, y: i32) {
    self.blit_region(src, 0, 0, src.width, src.height, x, y);
  }

  /// Draws the `w x h` region of `src` starting at `(sx, sy)` with its top
  /// left corner at `(dx, dy)`. Both sides are clipped and transparent source
  /// pixels are skipped.
  pub fn blit_region(&mut self, src: &Image, sx: u32, sy: u32, w: u32, h: u32, dx: i32, dy: i32) {
    for row in 0..h {
      let ty = dy as i64 + row as i64;
      if ty < 0 || ty >= self.height as i64 {
        continue;
      }
      for col in 0..w {
        let tx = dx as i64 + col as i64;
        if tx < 0 || tx >= self.width as i64 {
          continue;
        }
        let color = match src.get(sx + col, sy + row) {
          Some(c) if !c.is_transparent() => c,
          _ => continue,
        };
        self.set(tx as u32, ty as u32, color);
      }
    }
  }

  /// Copies a `w x h` region. Parts outside of the image are transparent.
  pub fn crop(&self, x: u32, y: u32, w: u32, h: u32) -> Image {
    let mut pixels = Vec::with_capacity(w as usize * h as usize);
    for row in 0..h {
      for col in 0..w {
        pixels.push(self.get(x + col, y + row).unwrap_or(Rgba::TRANSPARENT));
      }
    }
    Image { width: w, height: h, pixels }
  }

  pub fn to_rgba_bytes(&self) -> Vec<u8> {
    self.pixels.iter()
      .flat_map(|p| [p.r, p.g, p.b, p.a])
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const RED: Rgba = Rgba::rgb(255, 0, 0);
  const BLUE: Rgba = Rgba::rgb(0, 0, 255);

  #[test]
  fn test_get_set_out_of_bounds() {
    let mut image = Image::new(2, 3);
    assert_eq!(image.pixel_count(), 6);
    image.set(1, 2, RED);
    image.set(2, 0, RED);
    assert_eq!(image.get(1, 2), Some(RED));
    assert_eq!(image.get(2, 0), None);
    assert_eq!(image.pixels().iter().filter(|p| **p == RED).count(), 1);
  }

  #[test]
  fn test_from_pixels_checks_length() {
    assert!(Image::from_pixels(2, 2, vec![RED; 3]).is_none());
    assert!(Image::from_pixels(2, 2, vec![RED; 4]).is_some());
  }

  #[test]
  fn test_blit_clips_and_skips_transparent() {
    let mut dst = Image::filled(4, 4, BLUE);
    let mut src = Image::filled(3, 3, RED);
    src.set(1, 1, Rgba::TRANSPARENT);

    dst.blit(&src, 2, -1);

    assert_eq!(dst.get(2, 0), Some(RED));
    assert_eq!(dst.get(3, 1), Some(RED));
    // transparent source pixel lands on (3, 0)
    assert_eq!(dst.get(3, 0), Some(BLUE));
    assert_eq!(dst.get(1, 0), Some(BLUE));
    assert_eq!(dst.get(2, 2), Some(BLUE));
  }

  #[test]
  fn test_crop_pads_with_transparent() {
    let mut image = Image::filled(3, 2, RED);
    image.set(2, 1, BLUE);
    let part = image.crop(2, 1, 2, 2);
    assert_eq!(part.width(), 2);
    assert_eq!(part.get(0, 0), Some(BLUE));
    assert_eq!(part.get(1, 0), Some(Rgba::TRANSPARENT));
    assert!(!part.is_transparent());
    assert!(image.crop(3, 0, 1, 1).is_transparent());
  }
}
