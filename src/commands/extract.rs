use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;

use crate::convert;
use crate::store::codec;

#[derive(Parser)]
pub struct ExtractCommand {
  // Tile width in pixels
  #[clap(long, default_value_t = 16)]
  tile_width: u32,

  // Tile height in pixels
  #[clap(long, default_value_t = 16)]
  tile_height: u32,

  // Tiles per sheet row
  #[clap(long, default_value_t = 16)]
  columns: u32,

  // Output sheet PNG
  #[clap(required=true)]
  output: String,

  // Level images
  #[clap(required=true, min_values=1)]
  inputs: Vec<String>,
}

impl ExtractCommand {
  pub fn execute(&self) -> Result<()> {
    anyhow::ensure!(
      self.tile_width > 0 && self.tile_height > 0 && self.columns > 0,
      "tile size and columns must be positive"
    );
    let mut levels = Vec::with_capacity(self.inputs.len());
    for input in self.inputs.iter() {
      let image = codec::load_png(Path::new(input))
        .with_context(|| format!("unable to read level image {}", input))?;
      levels.push(image);
    }

    let sheet = convert::extract(&levels, self.tile_width, self.tile_height, self.columns)?;
    codec::save_png(&sheet, Path::new(&self.output))
      .with_context(|| format!("unable to write {}", self.output))?;
    Ok(())
  }
}
