pub mod color;
pub mod group;
pub mod image;
pub mod map;
pub mod record;
pub mod tile;

pub use color::Rgba;
pub use group::{GroupConfig, TileGroups};
pub use image::Image;
pub use map::MapTile;
pub use record::LevelRecord;
pub use tile::{Collision, GroupId, SheetId, Tile};
