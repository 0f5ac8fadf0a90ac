use serde::{Deserialize, Serialize};

use crate::models::SheetId;

/// One placed tile in a level file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LevelRecord {
  pub tx: u32,
  pub ty: u32,
  pub sheet: SheetId,
  pub number: u16,
}
