// Simple color struct, created from an unsigned 32 representing RRGGBBAA

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgba(0xff, 0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgba(0x00, 0x00, 0x00, 0xff);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    // Shade of gray at the given level, alpha is left untouched.
    // Levels outside the displayable range are clamped rather than wrapped.
    pub fn gray(&mut self, level: f64) {
        let level = level.max(0.0).min(255.0) as u8;
        self.r = level;
        self.g = level;
        self.b = level;
    }

    // Advances each channel by its own step, wrapping modulo 256
    pub fn cycle(&mut self, step: [u8; 3]) {
        self.r = self.r.wrapping_add(step[0]);
        self.g = self.g.wrapping_add(step[1]);
        self.b = self.b.wrapping_add(step[2]);
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}
