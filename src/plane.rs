//! Maps raster pixels onto the fixed view window of the complex plane.
//!
//! The window is implied by the raster size: the center pixel lands on
//! the origin and each axis spans 4.0 plane-units across its own
//! dimension.  A non-square raster therefore scales the two axes
//! differently; that is a property of the view, not something to
//! correct here.

use num::Complex;

/// Converts pixel coordinates to complex points for one raster size.
#[derive(Copy, Clone, Debug)]
pub struct PlaneMapper {
    width: f64,
    height: f64,
}

impl PlaneMapper {
    /// Mapper for a raster of the given dimensions.
    pub fn new(width: u32, height: u32) -> PlaneMapper {
        PlaneMapper {
            width: f64::from(width),
            height: f64::from(height),
        }
    }

    /// The complex point under pixel `(x, y)`.
    ///
    /// Total over all coordinates; points outside the raster simply map
    /// outside the view window.
    pub fn pixel_to_point(&self, x: u32, y: u32) -> Complex<f64> {
        Complex {
            re: (f64::from(x) - self.width / 2.0) * 4.0 / self.width,
            im: (f64::from(y) - self.height / 2.0) * 4.0 / self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_pixel_maps_to_origin() {
        let pm = PlaneMapper::new(800, 800);
        assert_eq!(pm.pixel_to_point(400, 400), Complex::new(0.0, 0.0));
    }

    #[test]
    fn corner_pixel_maps_to_left_edge_of_window() {
        let pm = PlaneMapper::new(800, 800);
        assert_eq!(pm.pixel_to_point(0, 0), Complex::new(-2.0, -2.0));
    }

    #[test]
    fn axes_scale_independently_on_non_square_rasters() {
        let pm = PlaneMapper::new(800, 400);
        assert_eq!(pm.pixel_to_point(400, 200), Complex::new(0.0, 0.0));
        assert_eq!(pm.pixel_to_point(0, 0), Complex::new(-2.0, -2.0));
        // One pixel step moves twice as far along the shorter axis.
        let corner = pm.pixel_to_point(0, 0);
        let step = pm.pixel_to_point(1, 1);
        let dx = step.re - corner.re;
        let dy = step.im - corner.im;
        assert!((dy - 2.0 * dx).abs() < 1e-12);
    }

    #[test]
    fn mapping_is_deterministic() {
        let pm = PlaneMapper::new(1000, 1000);
        assert_eq!(pm.pixel_to_point(123, 987), pm.pixel_to_point(123, 987));
    }
}
