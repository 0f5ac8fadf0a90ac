mod commands;
mod convert;
mod error;
mod minimap;
mod models;
mod raster;
mod store;
mod world;

use clap::Parser;
use log::error;
use std::process;

use crate::commands::{run_command, SubCommand};


/// tile map raster and minimap toolkit
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
  #[clap(subcommand)]
  command: SubCommand,
}



fn main() {
  env_logger::init();
  let args = Args::parse();
  if let Err(err) = run_command(args.command) {
    error!("{:#}", err);
    process::exit(1);
  }
}
