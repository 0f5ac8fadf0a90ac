use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use std::path::Path;

use crate::convert;
use crate::store::{codec, level, Sheets};

#[derive(Parser)]
pub struct RipCommand {
  // Tile width in pixels
  #[clap(long, default_value_t = 16)]
  tile_width: u32,

  // Tile height in pixels
  #[clap(long, default_value_t = 16)]
  tile_height: u32,

  // Level image
  #[clap(required=true)]
  input: String,

  // Directory of <id>.png sheets
  #[clap(required=true)]
  sheets: String,

  // Output level CSV
  #[clap(required=true)]
  output: String,
}

impl RipCommand {
  pub fn execute(&self) -> Result<()> {
    let image = codec::load_png(Path::new(&self.input))
      .with_context(|| format!("unable to read level image {}", self.input))?;
    let sheets = Sheets::load_dir(Path::new(&self.sheets), self.tile_width, self.tile_height)
      .with_context(|| format!("unable to read sheets from {}", self.sheets))?;
    if sheets.is_empty() {
      warn!("no sheet found in {}", self.sheets);
    }

    let rip = convert::rip(&image, &sheets)?;
    level::write_level(Path::new(&self.output), &rip.records)
      .with_context(|| format!("unable to write {}", self.output))?;
    info!("Wrote {}x{} level to {}", rip.width, rip.height, self.output);
    Ok(())
  }
}
