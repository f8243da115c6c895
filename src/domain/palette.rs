//! Age-to-color mapping.
//!
//! The palette is a hue sweep computed once at startup and indexed directly
//! by cell age, so long-lived structures drift visibly through the spectrum.

use super::{EngineError, MAX_AGE};

/// Number of palette entries needed to cover every possible age.
pub const PALETTE_SIZE: usize = MAX_AGE as usize + 1;

/// An 8-bit-per-channel color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Three nested colors drawn outermost first to fake a glow around one cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GlowLayers {
    pub outer: Rgb,
    pub middle: Rgb,
    pub core: Rgb,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert HSV (each component in [0, 1]) to RGB, truncating each channel
    pub fn from_hsv(hue: f64, saturation: f64, value: f64) -> Self {
        let (r, g, b) = hsv_to_rgb(hue, saturation, value);
        // Truncation, not rounding; `as` also saturates into 0..=255
        Self::new((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
    }

    /// Every channel integer-divided by `divisor`
    pub const fn dimmed(self, divisor: u8) -> Self {
        Self::new(self.r / divisor, self.g / divisor, self.b / divisor)
    }

    /// outer = 1/3 brightness, middle = 1/2, core = the color itself
    pub const fn glow_layers(self) -> GlowLayers {
        GlowLayers {
            outer: self.dimmed(3),
            middle: self.dimmed(2),
            core: self,
        }
    }
}

fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> (f64, f64, f64) {
    if saturation == 0.0 {
        return (value, value, value);
    }

    let sector = (hue * 6.0).floor();
    let f = hue * 6.0 - sector;
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * f);
    let t = value * (1.0 - saturation * (1.0 - f));

    match (sector as i32).rem_euclid(6) {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    }
}

/// Immutable color table indexed by age.
#[derive(Clone, Debug)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// `n` colors at full saturation and value; entry `i` has hue `i / n`
    pub fn build(n: usize) -> Result<Self, EngineError> {
        Self::build_with(n, 1.0, 1.0)
    }

    /// Same hue sweep with explicit saturation and value
    pub fn build_with(n: usize, saturation: f64, value: f64) -> Result<Self, EngineError> {
        if n == 0 {
            return Err(EngineError::EmptyPalette);
        }
        Ok(Self { colors: hue_sweep(n, saturation, value) })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Color for `age`, clamped to the last entry
    pub fn color_for_age(&self, age: usize) -> Rgb {
        self.colors[age.min(self.colors.len() - 1)]
    }

    pub fn glow_for_age(&self, age: usize) -> GlowLayers {
        self.color_for_age(age).glow_layers()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self { colors: hue_sweep(PALETTE_SIZE, 1.0, 1.0) }
    }
}

fn hue_sweep(n: usize, saturation: f64, value: f64) -> Vec<Rgb> {
    (0..n)
        .map(|i| Rgb::from_hsv(i as f64 / n as f64, saturation, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_palette_length() {
        assert_eq!(Palette::build(10).unwrap().len(), 10);
        assert_eq!(Palette::default().len(), PALETTE_SIZE);
        assert_eq!(Palette::build(0).err(), Some(EngineError::EmptyPalette));
    }

    #[test]
    fn test_palette_colors_not_all_identical() {
        let palette = Palette::build(10).unwrap();
        let unique: HashSet<_> = palette.colors().iter().collect();
        assert!(unique.len() > 1);
    }

    #[test]
    fn test_palette_starts_red() {
        let palette = Palette::default();
        assert_eq!(palette.color_for_age(0), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_opposite_hues() {
        let palette = Palette::build(2).unwrap();
        assert_eq!(palette.colors(), &[Rgb::new(255, 0, 0), Rgb::new(0, 255, 255)]);
    }

    #[test]
    fn test_reduced_saturation() {
        let palette = Palette::build_with(4, 0.8, 1.0).unwrap();
        assert_eq!(palette.color_for_age(0), Rgb::new(255, 50, 50));
        assert_eq!(Rgb::from_hsv(0.3, 0.0, 0.5), Rgb::new(127, 127, 127));
    }

    #[test]
    fn test_color_for_age_clamps_and_is_stable() {
        let palette = Palette::build(8).unwrap();
        assert_eq!(palette.color_for_age(7), palette.color_for_age(1000));
        assert_eq!(palette.color_for_age(3), palette.color_for_age(3));
        assert_eq!(palette.color_for_age(3), palette.colors()[3]);
    }

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(
            Palette::build(256).unwrap().colors(),
            Palette::default().colors()
        );
    }

    #[test]
    fn test_glow_layers() {
        let glow = Rgb::new(255, 128, 7).glow_layers();
        assert_eq!(glow.outer, Rgb::new(85, 42, 2));
        assert_eq!(glow.middle, Rgb::new(127, 64, 3));
        assert_eq!(glow.core, Rgb::new(255, 128, 7));
    }
}
