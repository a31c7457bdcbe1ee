use serde::{Deserialize, Serialize};

/// An opaque RGB color. The canvas stores RGBA8 internally, but every color
/// the user can pick is fully opaque, so alpha is added at write time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_rgba_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, 0xff]
    }

    pub fn from_rgba_array(rgba: [u8; 4]) -> Self {
        Self::rgb(rgba[0], rgba[1], rgba[2])
    }
}
