pub mod codec;
pub mod config;
pub mod level;
pub mod sheets;

pub use sheets::{Sheet, Sheets};
