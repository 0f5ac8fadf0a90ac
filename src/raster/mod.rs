pub mod definition;
pub mod index;
pub mod sheets;

pub use definition::RasterDefinition;
pub use index::{raster_index, RasterMode, MAX_RASTERS, MAX_RASTERS_R};
pub use sheets::RasterSheets;
