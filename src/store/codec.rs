use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::{Image, Rgba};

/// Decodes any PNG into 8-bit RGBA.
pub fn read_png<R: Read>(r: R) -> Result<Image> {
  let mut decoder = png::Decoder::new(r);
  decoder.set_transformations(png::Transformations::normalize_to_color8());
  let mut reader = decoder.read_info()?;
  let mut buf = vec![0; reader.output_buffer_size()];
  let info = reader.next_frame(&mut buf)?;
  let data = &buf[..info.buffer_size()];

  let pixels: Vec<Rgba> = match info.color_type {
    png::ColorType::Rgba => data.chunks_exact(4)
      .map(|p| Rgba::new(p[0], p[1], p[2], p[3]))
      .collect(),
    png::ColorType::Rgb => data.chunks_exact(3)
      .map(|p| Rgba::rgb(p[0], p[1], p[2]))
      .collect(),
    png::ColorType::GrayscaleAlpha => data.chunks_exact(2)
      .map(|p| Rgba::new(p[0], p[0], p[0], p[1]))
      .collect(),
    png::ColorType::Grayscale => data.iter()
      .map(|v| Rgba::rgb(*v, *v, *v))
      .collect(),
    other => return Err(Error::UnsupportedColor(other)),
  };

  Image::from_pixels(info.width, info.height, pixels)
    .ok_or(Error::UnsupportedColor(info.color_type))
}

pub fn load_png(path: &Path) -> Result<Image> {
  let file = File::open(path)?;
  read_png(BufReader::new(file))
}

pub fn write_png<W: Write>(image: &Image, w: W) -> Result<()> {
  let mut encoder = png::Encoder::new(w, image.width(), image.height());
  encoder.set_color(png::ColorType::Rgba);
  encoder.set_depth(png::BitDepth::Eight);
  let mut writer = encoder.write_header()?;
  writer.write_image_data(&image.to_rgba_bytes())?;
  writer.finish()?;
  Ok(())
}

pub fn save_png(image: &Image, path: &Path) -> Result<()> {
  let file = File::create(path)?;
  write_png(image, BufWriter::new(file))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_rgba_survives_encoding() {
    let mut image = Image::filled(3, 2, Rgba::rgb(10, 20, 30));
    image.set(2, 1, Rgba::new(200, 100, 50, 128));
    image.set(0, 1, Rgba::TRANSPARENT);

    let mut data = Vec::new();
    write_png(&image, &mut data).unwrap();
    let decoded = read_png(data.as_slice()).unwrap();

    assert_eq!(decoded, image);
  }

  #[test]
  fn test_rgb_is_opaque() {
    let mut data = Vec::new();
    {
      let mut encoder = png::Encoder::new(&mut data, 2, 1);
      encoder.set_color(png::ColorType::Rgb);
      encoder.set_depth(png::BitDepth::Eight);
      let mut writer = encoder.write_header().unwrap();
      writer.write_image_data(&[1, 2, 3, 4, 5, 6]).unwrap();
    }
    let decoded = read_png(data.as_slice()).unwrap();
    assert_eq!(decoded.pixels(), &[Rgba::rgb(1, 2, 3), Rgba::rgb(4, 5, 6)]);
  }

  #[test]
  fn test_save_and_load_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("sheet.png");
    let image = Image::filled(4, 4, Rgba::rgb(1, 1, 1));
    save_png(&image, &path).unwrap();
    assert_eq!(load_png(&path).unwrap(), image);
    assert!(matches!(load_png(&dir.path().join("missing.png")), Err(Error::Io(_))));
  }
}
