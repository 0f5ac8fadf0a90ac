use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::path::Path;

use crate::minimap::RuleRegistry;
use crate::store::config;
use crate::world::World;

pub mod extract;
pub mod minimap;
pub mod raster;
pub mod render;
pub mod rip;
pub mod serve;

#[derive(Parser)]
pub enum SubCommand {
  Minimap(minimap::MinimapCommand),
  Render(render::RenderCommand),
  Raster(raster::RasterCommand),
  Rip(rip::RipCommand),
  Extract(extract::ExtractCommand),
  Serve(serve::ServeCommand),
}

pub fn run_command(sub: SubCommand) -> Result<()> {
  match sub {
    SubCommand::Minimap(cmd) => cmd.execute(),
    SubCommand::Render(cmd) => cmd.execute(),
    SubCommand::Raster(cmd) => cmd.execute(),
    SubCommand::Rip(cmd) => cmd.execute(),
    SubCommand::Extract(cmd) => cmd.execute(),
    SubCommand::Serve(cmd) => cmd.execute(),
  }
}

/// Loads the world called `name` from a configuration file.
pub(crate) fn load_world(config_file: &str, name: &str) -> Result<World> {
  let root = config::Root::load(Path::new(config_file))
    .with_context(|| format!("unable to read configuration {}", config_file))?;
  let world_config = root.find(name)
    .ok_or_else(|| anyhow!("world {} is not declared in {}", name, config_file))?;
  World::load(world_config, &RuleRegistry::default())
    .with_context(|| format!("unable to load world {}", name))
}
