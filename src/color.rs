// Simple color struct, created from an unsigned 32 representing RRGGBBAA

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const RED: Color = Color::from_u32(0xff0000ff);
    pub const ORANGE: Color = Color::from_u32(0xf57900ff);
    pub const YELLOW: Color = Color::from_u32(0xffff00ff);
    pub const DARK_ORANGE: Color = Color::from_u32(0xce5c00ff);
    pub const PLUM: Color = Color::from_u32(0x5c3566ff);

    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    // Canvas fill/stroke styles take CSS strings; alpha is dropped when opaque
    pub fn to_css(&self) -> String {
        if self.a == 0xff {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {:.3})",
                self.r,
                self.g,
                self.b,
                self.a as f64 / 255.0
            )
        }
    }
}

/// The warm palette the backdrop picks from.
pub const PALETTE: [Color; 5] = [
    Color::RED,
    Color::ORANGE,
    Color::YELLOW,
    Color::DARK_ORANGE,
    Color::PLUM,
];
