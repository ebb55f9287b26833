//! Maps escape-time counts to display colors.
//!
//! The palette is a cheap banding scheme, not a perceptual gradient:
//! each channel is a different multiple of the iteration count reduced
//! mod 256, so neighbouring bands cycle at different rates.

/// An 8-bit RGB color.  Opacity is not modelled; the display surface
/// always draws fully opaque.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Black, the color of interior points.
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
}

/// Color for a pixel whose orbit escaped after `n` iterations.
///
/// `n == max_iterations` means the point never escaped and is drawn
/// black; anything lower gets `(n, 5n, 10n)` each reduced mod 256.
pub fn iteration_color(n: u32, max_iterations: u32) -> Rgb {
    if n == max_iterations {
        return Rgb::BLACK;
    }
    // 256 divides 2^32, so a wrapping multiply leaves the mod-256
    // residue unchanged.
    Rgb {
        r: (n % 256) as u8,
        g: (n.wrapping_mul(5) % 256) as u8,
        b: (n.wrapping_mul(10) % 256) as u8,
    }
}
