use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::Path;

use crate::commands::load_world;
use crate::store::codec;

#[derive(Parser)]
pub struct RenderCommand {
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

impl RenderCommand {
  pub fn execute(&self) -> Result<()> {
    let world = load_world(&self.config_file, &self.world)?;
    let image = world.render()?;
    codec::save_png(&image, Path::new(&self.output))
      .with_context(|| format!("unable to write {}", self.output))?;
    info!("Wrote {}x{} map to {}", image.width(), image.height(), self.output);
    Ok(())
  }
}
