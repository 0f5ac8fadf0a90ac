use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use std::path::Path;

use crate::commands::load_world;
use crate::models::SheetId;
use crate::raster::MAX_RASTERS_R;
use crate::store::codec;

#[derive(Parser)]
pub struct RasterCommand {
  // World configuration
  #[clap(required=true)]
  config_file: String,

  // World name
  #[clap(required=true)]
  world: String,

  // Sheet id
  #[clap(required=true)]
  sheet: u16,

  // Output prefix, variants are written to <prefix>_<index>.png
  #[clap(required=true)]
  output_prefix: String,
}

impl RasterCommand {
  pub fn execute(&self) -> Result<()> {
    let world = load_world(&self.config_file, &self.world)?;
    if !world.raster.is_loaded() {
      bail!("world {} has no raster definition", self.world);
    }
    let sheet = SheetId(self.sheet);
    for index in 0..MAX_RASTERS_R {
      let variant = world.raster.get_raster_sheet(sheet, index as i32)?;
      let filename = format!("{}_{}.png", self.output_prefix, index);
      codec::save_png(variant.image(), Path::new(&filename))
        .with_context(|| format!("unable to write {}", filename))?;
      info!("Wrote raster {} of sheet {} to {}", index, sheet, filename);
    }
    Ok(())
  }
}
