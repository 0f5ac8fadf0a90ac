use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct SheetId(pub u16);

impl fmt::Display for SheetId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Index into `TileGroups`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collision {
  #[default]
  None,
  Ground,
  Block,
  Water,
  Hole,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
  pub sheet: SheetId,
  pub number: u16,
  pub tx: u32,
  pub ty: u32,
  pub group: Option<GroupId>,
  pub collision: Collision,
}

impl Tile {
  pub fn new(sheet: SheetId, number: u16, tx: u32, ty: u32) -> Self {
    Self {
      sheet,
      number,
      tx,
      ty,
      group: None,
      collision: Collision::None,
    }
  }
}
