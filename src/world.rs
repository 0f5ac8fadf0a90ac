use log::{info, warn};

use crate::error::{Error, Result};
use crate::minimap::{Minimap, RuleRegistry};
use crate::models::{Image, LevelRecord, MapTile, Tile, TileGroups};
use crate::raster::{raster_index, RasterMode, RasterSheets};
use crate::store::config::WorldConfig;
use crate::store::{level, Sheet, Sheets};

/// A loaded map together with everything needed to draw it.
pub struct World {
  pub name: String,
  pub map: MapTile,
  pub groups: TileGroups,
  pub sheets: Sheets,
  pub raster: RasterSheets,
  pub raster_mode: RasterMode,
  pub minimap: Minimap,
}

impl World {
  pub fn load(config: &WorldConfig, registry: &RuleRegistry) -> Result<World> {
    let sheets = Sheets::load_dir(&config.sheets, config.tile_width, config.tile_height)?;
    let records = level::read_level(&config.level)?;
    let mut world = World::build(config, sheets, &records, registry)?;

    if let Some(raster) = &config.raster {
      world.raster.load_sheets(raster, &world.sheets)?;
    }
    info!(
      "Loaded world {} ({}x{} tiles, {} of {} sheets used, {} groups, raster {})",
      world.name,
      world.map.width(),
      world.map.height(),
      world.map.sheets_used().len(),
      world.sheets.len(),
      world.groups.len(),
      if world.raster.is_loaded() { "on" } else { "off" },
    );
    Ok(world)
  }

  /// Places `records` on a new map and prepares the minimap. Rastering
  /// starts disabled.
  pub fn build(
    config: &WorldConfig,
    sheets: Sheets,
    records: &[LevelRecord],
    registry: &RuleRegistry,
  ) -> Result<World> {
    let groups = TileGroups::from_config(&config.groups)?;
    let mut map = MapTile::new(config.width, config.height, config.tile_width, config.tile_height)?;

    for record in records {
      if !map.in_bounds(record.tx, record.ty) {
        warn!("tile {},{} does not belong to the map", record.tx, record.ty);
        continue;
      }
      let sheet = sheets.get(record.sheet).ok_or(Error::UnknownSheet(record.sheet))?;
      if record.number as u32 >= sheet.tile_count() {
        return Err(Error::UnknownTile { sheet: record.sheet, number: record.number });
      }
      let mut tile = Tile::new(record.sheet, record.number, record.tx, record.ty);
      tile.group = groups.find(tile.sheet, tile.number);
      tile.collision = tile.group
        .and_then(|id| groups.get(id))
        .map(|g| g.collision)
        .unwrap_or_default();
      map.set(tile)?;
    }

    let mut minimap = Minimap::new(registry.create(&config.minimap)?);
    minimap.set_location(config.minimap.x, config.minimap.y);
    minimap.prepare(&map, &groups);

    Ok(World {
      name: config.name.clone(),
      map,
      groups,
      sheets,
      raster: RasterSheets::new(),
      raster_mode: config.raster_mode,
      minimap,
    })
  }

  /// Raster bucket of the tile row `ty`.
  pub fn raster_index(&self, ty: u32) -> u32 {
    let th = self.map.tile_height();
    raster_index(ty * th, th, self.raster_mode)
  }

  fn sheet_for(&self, tile: &Tile) -> Result<&Sheet> {
    if self.raster.is_loaded() {
      self.raster.get_raster_sheet(tile.sheet, self.raster_index(tile.ty) as i32)
    } else {
      self.sheets.get(tile.sheet).ok_or(Error::UnknownSheet(tile.sheet))
    }
  }

  /// Draws every tile of the map, using raster variants when loaded.
  pub fn render(&self) -> Result<Image> {
    let (tw, th) = (self.map.tile_width(), self.map.tile_height());
    let mut output = Image::new(self.map.width() * tw, self.map.height() * th);
    for tile in self.map.tiles() {
      let sheet = self.sheet_for(tile)?;
      let (x, y) = ((tile.tx * tw) as i32, (tile.ty * th) as i32);
      if !sheet.draw_tile(tile.number, &mut output, x, y) {
        return Err(Error::UnknownTile { sheet: tile.sheet, number: tile.number });
      }
    }
    Ok(output)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::{Collision, GroupConfig, Rgba, SheetId};
  use crate::raster::{RasterDefinition, MAX_RASTERS_R};
  use crate::store::config::MinimapConfig;
  use std::path::PathBuf;

  const GRASS: Rgba = Rgba::rgb(0, 200, 0);
  const WATER: Rgba = Rgba::rgb(0, 0, 200);

  fn config() -> WorldConfig {
    WorldConfig {
      name: "test".to_string(),
      width: 2,
      height: 2,
      tile_width: 2,
      tile_height: 2,
      sheets: PathBuf::from("sheets"),
      level: PathBuf::from("level.csv"),
      raster: None,
      raster_mode: RasterMode::Wrap,
      minimap: MinimapConfig { rule: "collision".to_string(), ..MinimapConfig::default() },
      groups: vec![GroupConfig {
        name: "water".to_string(),
        sheet: SheetId(0),
        tiles: vec![[1, 1]],
        collision: Collision::Water,
        color: 0x0000c8,
      }],
    }
  }

  fn sheets() -> Sheets {
    // tile 0 is grass, tile 1 is water
    let mut image = Image::filled(4, 2, GRASS);
    for y in 0..2 {
      for x in 2..4 {
        image.set(x, y, WATER);
      }
    }
    let mut sheets = Sheets::new(2, 2);
    sheets.insert(SheetId(0), image).unwrap();
    sheets
  }

  fn record(tx: u32, ty: u32, number: u16) -> LevelRecord {
    LevelRecord { tx, ty, sheet: SheetId(0), number }
  }

  #[test]
  fn test_build_assigns_tags() {
    let records = vec![record(0, 0, 0), record(1, 0, 1), record(5, 5, 0)];
    let world = World::build(&config(), sheets(), &records, &RuleRegistry::default()).unwrap();

    assert_eq!(world.map.tiles().count(), 2);
    let water = world.map.get(1, 0).unwrap();
    assert_eq!(water.collision, Collision::Water);
    assert_eq!(water.group, Some(crate::models::GroupId(0)));
    assert_eq!(world.map.get(0, 0).unwrap().collision, Collision::None);

    let minimap = world.minimap.buffer();
    assert_eq!(minimap.get(1, 0), Some(crate::minimap::rules::CollisionColor::WATER));
    assert_eq!(minimap.get(0, 1), Some(Rgba::rgb(0, 0, 0)));
  }

  #[test]
  fn test_build_rejects_unknown_tiles() {
    let registry = RuleRegistry::default();
    let unknown_sheet = [LevelRecord { tx: 0, ty: 0, sheet: SheetId(9), number: 0 }];
    assert!(matches!(
      World::build(&config(), sheets(), &unknown_sheet, &registry),
      Err(Error::UnknownSheet(SheetId(9)))
    ));
    assert!(matches!(
      World::build(&config(), sheets(), &[record(0, 0, 2)], &registry),
      Err(Error::UnknownTile { number: 2, .. })
    ));
  }

  #[test]
  fn test_render_plain_sheets() {
    let records = vec![record(0, 0, 1), record(1, 1, 0)];
    let world = World::build(&config(), sheets(), &records, &RuleRegistry::default()).unwrap();

    let image = world.render().unwrap();
    assert_eq!((image.width(), image.height()), (4, 4));
    assert_eq!(image.get(1, 1), Some(WATER));
    assert_eq!(image.get(3, 3), Some(GRASS));
    assert_eq!(image.get(2, 0), Some(Rgba::TRANSPARENT));
  }

  #[test]
  fn test_render_uses_raster_rows() {
    let records = vec![record(0, 0, 0), record(0, 1, 0)];
    let mut world = World::build(&config(), sheets(), &records, &RuleRegistry::default()).unwrap();
    let shifts = (0..MAX_RASTERS_R as i16).map(|i| [i * 10, 0, 0]).collect();
    world.raster.build(&RasterDefinition::from_shifts(shifts), &world.sheets).unwrap();

    assert_eq!(world.raster_index(1), 1);
    let image = world.render().unwrap();
    assert_eq!(image.get(0, 0), Some(GRASS));
    assert_eq!(image.get(0, 2), Some(Rgba::rgb(10, 200, 0)));
  }

  #[test]
  fn test_render_smooth_raster_rows() {
    let config = WorldConfig { height: 9, raster_mode: RasterMode::Smooth, ..config() };
    let records = vec![record(0, 7, 0), record(0, 8, 0)];
    let mut world = World::build(&config, sheets(), &records, &RuleRegistry::default()).unwrap();
    let shifts = (0..MAX_RASTERS_R as i16).map(|i| [i * 10, 0, 0]).collect();
    world.raster.build(&RasterDefinition::from_shifts(shifts), &world.sheets).unwrap();

    assert_eq!(world.raster_index(7), 14);
    assert_eq!(world.raster_index(8), 13);
    let image = world.render().unwrap();
    assert_eq!(image.get(0, 14), Some(Rgba::rgb(140, 200, 0)));
    assert_eq!(image.get(0, 16), Some(Rgba::rgb(130, 200, 0)));
  }

  #[test]
  fn test_load_from_files() {
    use crate::store::{codec, config::Root};
    use std::fs;

    let dir = tempfile::TempDir::new().unwrap();
    fs::create_dir(dir.path().join("sheets")).unwrap();
    codec::save_png(sheets().get(SheetId(0)).unwrap().image(), &dir.path().join("sheets/0.png")).unwrap();
    fs::write(dir.path().join("level.csv"), "tx,ty,sheet,number\n0,0,0,1\n1,1,0,0\n").unwrap();
    codec::save_png(&Image::filled(1, 1, Rgba::rgb(138, 128, 128)), &dir.path().join("raster.png")).unwrap();
    fs::write(dir.path().join("worlds.yaml"), r#"
worlds:
  - name: small
    width: 2
    height: 2
    tile_width: 2
    tile_height: 2
    sheets: sheets
    level: level.csv
    raster: raster.png
  - name: plain
    width: 2
    height: 2
    tile_width: 2
    tile_height: 2
    sheets: sheets
    level: level.csv
    raster: missing.png
"#).unwrap();

    let root = Root::load(&dir.path().join("worlds.yaml")).unwrap();
    let registry = RuleRegistry::default();

    let small = World::load(root.find("small").unwrap(), &registry).unwrap();
    assert!(small.raster.is_loaded());
    assert_eq!(small.map.tiles().count(), 2);
    assert_eq!(small.render().unwrap().get(0, 0), Some(Rgba::rgb(10, 0, 200)));

    let plain = World::load(root.find("plain").unwrap(), &registry).unwrap();
    assert!(!plain.raster.is_loaded());
    assert_eq!(plain.render().unwrap().get(0, 0), Some(WATER));
  }
}
