// Simple color struct, an RGB triple that gets its alpha at draw time since
// every particle and link carries its own opacity.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const VIOLET: Color = Color::rgb(124, 58, 237);
    pub const CYAN: Color = Color::rgb(6, 182, 212);
    /// Used for the links between nearby particles.
    pub const ACCENT: Color = Color::VIOLET;

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    pub fn to_rgba(self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}
