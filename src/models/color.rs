/// 32-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
  pub r: u8,
  pub g: u8,
  pub b: u8,
  pub a: u8,
}

impl Rgba {
  pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

  pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
    Self { r, g, b, a }
  }

  pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b, a: 0xff }
  }

  /// Opaque color from a `0xRRGGBB` value, the upper byte is ignored.
  pub const fn from_hex(v: u32) -> Self {
    Self::rgb(
      (v >> 16 & 0xff) as u8,
      (v >>  8 & 0xff) as u8,
      (v       & 0xff) as u8,
    )
  }

  pub fn is_transparent(self) -> bool {
    self.a == 0
  }

  /// Adds a signed offset to each color channel, saturating at the channel
  /// bounds. Alpha is left untouched.
  pub fn shifted(self, shift: [i16; 3]) -> Self {
    let apply = |c: u8, d: i16| (c as i16 + d).clamp(0, 0xff) as u8;
    Self {
      r: apply(self.r, shift[0]),
      g: apply(self.g, shift[1]),
      b: apply(self.b, shift[2]),
      a: self.a,
    }
  }
}
