use std::io;

use thiserror::Error;

use crate::models::SheetId;

#[derive(Debug, Error)]
pub enum Error {
  #[error("io error: {0}")]
  Io(#[from] io::Error),

  #[error("unable to decode png: {0}")]
  PngDecode(#[from] png::DecodingError),

  #[error("unable to encode png: {0}")]
  PngEncode(#[from] png::EncodingError),

  #[error("unsupported png color type {0:?}")]
  UnsupportedColor(png::ColorType),

  #[error("invalid configuration: {0}")]
  Yaml(#[from] serde_yaml::Error),

  #[error("invalid level file: {0}")]
  Csv(#[from] csv::Error),

  #[error("invalid glob pattern: {0}")]
  Pattern(#[from] glob::PatternError),

  #[error("map size {width}x{height} with tiles of {tile_width}x{tile_height} is invalid")]
  InvalidMapSize {
    width: u32,
    height: u32,
    tile_width: u32,
    tile_height: u32,
  },

  #[error("tile {tx},{ty} is outside of the {width}x{height} map")]
  TileOutOfBounds { tx: u32, ty: u32, width: u32, height: u32 },

  #[error("sheet {id} of {width}x{height} can not be split in {tile_width}x{tile_height} tiles")]
  InvalidSheet {
    id: SheetId,
    width: u32,
    height: u32,
    tile_width: u32,
    tile_height: u32,
  },

  #[error("sheet {id} holds {count} tiles, more than tile numbers can address")]
  TooManyTiles { id: SheetId, count: u32 },

  #[error("sheet {0} is not loaded")]
  UnknownSheet(SheetId),

  #[error("tile {number} does not exist in sheet {sheet}")]
  UnknownTile { sheet: SheetId, number: u16 },

  #[error("raster definition image is empty")]
  InvalidRaster,

  #[error("tile group {0} is declared twice")]
  DuplicateGroup(String),

  #[error("tile group {name} has an empty range {start}..={end}")]
  InvalidGroupRange { name: String, start: u16, end: u16 },

  #[error("unknown minimap color rule {0}")]
  UnknownColorRule(String),

  #[error("level image of {width}x{height} can not be split in {tile_width}x{tile_height} tiles")]
  InvalidLevelImage {
    width: u32,
    height: u32,
    tile_width: u32,
    tile_height: u32,
  },

  #[error("no tiles found in the level images")]
  NoTiles,
}

pub type Result<T> = std::result::Result<T, Error>;
