use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::Path;

use crate::commands::load_world;
use crate::minimap::Minimap;
use crate::models::Image;
use crate::store::codec;

#[derive(Parser)]
pub struct MinimapCommand {
  // World configuration
  #[clap(required=true)]
  config_file: String,

  // World name
  #[clap(required=true)]
  world: String,

  // Output PNG
  #[clap(required=true)]
  output: String,
}

impl MinimapCommand {
  pub fn execute(&self) -> Result<()> {
    let world = load_world(&self.config_file, &self.world)?;
    let output = minimap_image(&world.minimap);

    codec::save_png(&output, Path::new(&self.output))
      .with_context(|| format!("unable to write {}", self.output))?;
    info!("Wrote {}x{} minimap to {}", output.width(), output.height(), self.output);
    Ok(())
  }
}

/// The minimap at its configured location. Negative coordinates are clamped
/// to 0 so the whole buffer lands in the image.
fn minimap_image(minimap: &Minimap) -> Image {
  let buffer = minimap.buffer();
  let (x, y) = minimap.location();
  let (x, y) = (x.max(0), y.max(0));
  let mut output = Image::new(x as u32 + buffer.width(), y as u32 + buffer.height());
  output.blit(buffer, x, y);
  output
}
