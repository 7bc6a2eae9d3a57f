//! Integer RGBA color for the display pipeline.
//!
//! Shading math may push channels outside the displayable range; [`Color::clamp`]
//! is the single point where values are clipped, applied exactly once before
//! a pixel write.

/// Display color with integer channels.
///
/// Channels are not clamped at construction. Intermediate shading results may
/// be negative or exceed 255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel
    pub r: i32,
    /// Green channel
    pub g: i32,
    /// Blue channel
    pub b: i32,
    /// Alpha channel, forced to 255 on output
    pub a: i32,
}

impl Color {
    /// Opaque white, the background for rays that hit nothing.
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };

    /// Create an opaque color from RGB channels.
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Scale each RGB channel by an intensity factor.
    ///
    /// Truncates back to integer channels and leaves the result unclamped;
    /// alpha is untouched.
    pub fn scale(self, k: f32) -> Color {
        Color {
            r: (k * self.r as f32) as i32,
            g: (k * self.g as f32) as i32,
            b: (k * self.b as f32) as i32,
            a: self.a,
        }
    }

    /// Clip each RGB channel into [0, 255] and force alpha to fully opaque.
    pub fn clamp(self) -> Color {
        Color {
            r: self.r.clamp(0, 255),
            g: self.g.clamp(0, 255),
            b: self.b.clamp(0, 255),
            a: 255,
        }
    }
}
