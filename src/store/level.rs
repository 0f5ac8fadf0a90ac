use log::{info, warn};
use std::path::Path;

use crate::error::Result;
use crate::models::LevelRecord;

/// Reads `tx,ty,sheet,number` rows. Malformed rows are skipped.
pub fn read_level(path: &Path) -> Result<Vec<LevelRecord>> {
  let mut reader = csv::ReaderBuilder::new()
    .delimiter(b',')
    .trim(csv::Trim::All)
    .from_path(path)?;

  let mut records = Vec::new();
  for result in reader.deserialize() {
    let record: LevelRecord = match result {
      Ok(r) => r,
      Err(err) => {
        warn!("error processing record: {}", err);
        continue
      }
    };
    records.push(record);
  }
  info!("Read {} tiles from {:?}", records.len(), path);
  Ok(records)
}

pub fn write_level(path: &Path, records: &[LevelRecord]) -> Result<()> {
  let mut writer = csv::Writer::from_path(path)?;
  for record in records {
    writer.serialize(record)?;
  }
  writer.flush()?;
  Ok(())
}
