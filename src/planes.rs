//! Contains the PlaneMapper struct, which describes the relationship
//! between the integral pixel plane with an origin at 0,0 and the
//! logical window on the real plane that a render session works in.
//! The window is derived once from the image's aspect ratio and never
//! changes afterward; it both seeds orbit starting points and maps
//! orbit points back onto pixels.

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use errors::FlameError;

/// Width and height of the integral pixel plane.  All values are
/// non-negative and the origin is assumed to be at 0,0.
#[derive(Copy, Clone, Debug)]
pub struct Resolution(pub usize, pub usize);

/// The logical window `[x_min, x_max] x [y_min, y_max]` on the real
/// plane.  Always symmetric around the origin: the longer image axis
/// gets `[-k, k]` with `k` the aspect ratio, the shorter one `[-1, 1]`.
#[derive(Copy, Clone, Debug)]
pub struct Window {
    /// Left edge of the window.
    pub x_min: f64,
    /// Right edge of the window.
    pub x_max: f64,
    /// Bottom edge of the window.
    pub y_min: f64,
    /// Top edge of the window.
    pub y_max: f64,
}

/// Maps between the real-plane window and the pixel plane.  Pixel
/// coordinates run the opposite way to plane coordinates on both axes:
/// the window's upper-right corner lands on pixel (0, 0).
#[derive(Debug)]
pub struct PlaneMapper {
    /// The integral pixel plane.
    pub resolution: Resolution,
    /// The real-plane window, derived from the aspect ratio.
    pub window: Window,
    // Multipliers taking plane distances to pixel distances.
    grid_factors: (f64, f64),
}

impl PlaneMapper {
    /// Constructor.  Derives the window from the aspect ratio:
    /// wider-than-tall images get `x in [-k, k], y in [-1, 1]` with
    /// `k = width / height`, taller-than-wide images the symmetric
    /// inverse.
    pub fn new(width: usize, height: usize) -> Result<PlaneMapper, FlameError> {
        if width == 0 || height == 0 {
            return Err(FlameError::ZeroSizeMatrix);
        }

        let (x_max, y_max) = if width >= height {
            (width as f64 / height as f64, 1.0)
        } else {
            (1.0, height as f64 / width as f64)
        };

        let window = Window {
            x_min: -x_max,
            x_max,
            y_min: -y_max,
            y_max,
        };

        let grid_factors = (
            width as f64 / (window.x_max - window.x_min),
            height as f64 / (window.y_max - window.y_min),
        );

        Ok(PlaneMapper {
            resolution: Resolution(width, height),
            window,
            grid_factors,
        })
    }

    /// The total number of pixels in the integral plane.
    pub fn len(&self) -> usize {
        self.resolution.0 * self.resolution.1
    }

    /// Whether the integral plane holds any pixels at all.
    pub fn is_empty(&self) -> bool {
        self.resolution.0 == 0 || self.resolution.1 == 0
    }

    /// Draw a point uniformly from the window.  Orbits start here.
    pub fn random_point<R: Rng>(&self, rng: &mut R) -> (f64, f64) {
        let horizontal = Uniform::new_inclusive(self.window.x_min, self.window.x_max);
        let vertical = Uniform::new_inclusive(self.window.y_min, self.window.y_max);

        (horizontal.sample(rng), vertical.sample(rng))
    }

    /// Map a point in the window to the linear offset of the pixel it
    /// falls on, or None when it lies outside the image.  Both axes
    /// flip: the window's maximum corner is pixel (0, 0).
    pub fn point_to_offset(&self, x: f64, y: f64) -> Option<usize> {
        let left = (self.window.x_max - x) * self.grid_factors.0;
        let top = (self.window.y_max - y) * self.grid_factors.1;
        if left < 0.0 || top < 0.0 {
            return None;
        }

        let (left, top) = (left as usize, top as usize);
        if left >= self.resolution.0 || top >= self.resolution.1 {
            return None;
        }

        Some(top * self.resolution.0 + left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn planemapper_fails_on_zero_sizes() {
        assert!(PlaneMapper::new(0, 100).is_err());
        assert!(PlaneMapper::new(100, 0).is_err());
    }

    #[test]
    fn wide_images_stretch_the_x_axis() {
        let pm = PlaneMapper::new(200, 100).unwrap();
        assert_eq!(pm.window.x_min, -2.0);
        assert_eq!(pm.window.x_max, 2.0);
        assert_eq!(pm.window.y_min, -1.0);
        assert_eq!(pm.window.y_max, 1.0);
    }

    #[test]
    fn tall_images_stretch_the_y_axis() {
        let pm = PlaneMapper::new(100, 300).unwrap();
        assert_eq!(pm.window.x_max, 1.0);
        assert_eq!(pm.window.y_max, 3.0);
    }

    #[test]
    fn square_images_get_the_unit_window() {
        let pm = PlaneMapper::new(100, 100).unwrap();
        assert_eq!(pm.window.x_max, 1.0);
        assert_eq!(pm.window.y_max, 1.0);
        assert_eq!(pm.len(), 10_000);
        assert!(!pm.is_empty());
    }

    #[test]
    fn the_maximum_corner_is_pixel_zero() {
        let pm = PlaneMapper::new(100, 100).unwrap();
        assert_eq!(pm.point_to_offset(1.0, 1.0), Some(0));
    }

    #[test]
    fn the_origin_is_the_image_center() {
        let pm = PlaneMapper::new(100, 100).unwrap();
        assert_eq!(pm.point_to_offset(0.0, 0.0), Some(50 * 100 + 50));
    }

    #[test]
    fn the_minimum_corner_falls_just_outside() {
        let pm = PlaneMapper::new(100, 100).unwrap();
        assert_eq!(pm.point_to_offset(-1.0, -1.0), None);
        assert_eq!(pm.point_to_offset(-0.999, -0.999), Some(100 * 100 - 1));
    }

    #[test]
    fn points_beyond_the_window_are_discarded() {
        let pm = PlaneMapper::new(100, 100).unwrap();
        assert_eq!(pm.point_to_offset(1.5, 0.0), None);
        assert_eq!(pm.point_to_offset(0.0, -7.0), None);
    }

    #[test]
    fn random_points_stay_inside_the_window() {
        let pm = PlaneMapper::new(160, 90).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let (x, y) = pm.random_point(&mut rng);
            assert!(x >= pm.window.x_min && x <= pm.window.x_max);
            assert!(y >= pm.window.y_min && y <= pm.window.y_max);
        }
    }
}
