//! HSLA colors for the page shuffle
//!
//! One hue draw per shuffle; base and secondary share the hue and differ in
//! lightness and alpha.

use std::fmt;

use crate::consts::{
    BASE_ALPHA, BASE_LIGHTNESS, BASE_SATURATION, HUE_MAX, SECONDARY_LIGHTNESS,
};

use super::random::{UniformSource, between};

/// An hsla() color in the form the DOM expects
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    pub hue: i32,
    pub saturation: u8,
    pub lightness: u8,
    pub alpha: f32,
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({},{}%,{}%,{})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

/// Background/accent pair derived from a single hue
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPair {
    /// Page-wide background
    pub base: Hsla,
    /// Accent for profile buttons
    pub secondary: Hsla,
}

impl ColorPair {
    pub fn from_hue(hue: i32) -> Self {
        Self {
            base: Hsla {
                hue,
                saturation: BASE_SATURATION,
                lightness: BASE_LIGHTNESS,
                alpha: BASE_ALPHA,
            },
            secondary: Hsla {
                hue,
                saturation: BASE_SATURATION,
                lightness: SECONDARY_LIGHTNESS,
                alpha: 1.0,
            },
        }
    }

    /// Draw one hue and derive the pair from it
    pub fn random(src: &mut impl UniformSource) -> Self {
        Self::from_hue(between(0, HUE_MAX, src))
    }
}
