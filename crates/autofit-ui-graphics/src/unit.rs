//! Unit types: Dp, Sp, Px, and the density used to convert them

/// Screen density information used to turn `Dp`/`Sp` into pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density {
    pub density: f32,
    pub font_scale: f32,
}

impl Density {
    pub const fn new(density: f32, font_scale: f32) -> Self {
        Self {
            density,
            font_scale,
        }
    }

    /// Pixels per scale-independent pixel.
    pub fn scaled_density(&self) -> f32 {
        self.density * self.font_scale
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

/// Density-independent pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    pub fn to_px(&self, density: f32) -> f32 {
        self.0 * density
    }
}

/// Scale-independent pixels (for text)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Sp(pub f32);

impl Sp {
    pub fn to_px(&self, density: f32, font_scale: f32) -> f32 {
        self.0 * density * font_scale
    }

    pub fn resolve(&self, density: Density) -> Px {
        Px(self.to_px(density.density, density.font_scale))
    }
}

/// Raw pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Px(pub f32);

#[cfg(test)]
#[path = "tests/unit_tests.rs"]
mod tests;
