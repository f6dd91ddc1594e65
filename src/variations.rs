//! The non-linear "variations" applied after each affine step.  Every
//! variation is a pure function from one point on the plane to
//! another; the renderer picks one uniformly at random per iteration.
//! They are stateless and shared read-only across all workers, so a
//! plain `fn` pointer is all the plumbing they need.

use std::f64::consts::PI;

/// A pure point-to-point transform.
pub type Variation = fn(f64, f64) -> (f64, f64);

/// Every variation the renderer knows about, keyed by the name the
/// configuration file uses.  The active set for a render is built once
/// at setup by filtering this table against the configuration toggles.
pub const REGISTRY: [(&str, Variation); 10] = [
    ("Spherical", spherical),
    ("Sinusoidal", sinusoidal),
    ("Handkerchief", handkerchief),
    ("Swirl", swirl),
    ("Horseshoe", horseshoe),
    ("Polar", polar),
    ("Disc", disc),
    ("Heart", heart),
    ("Linear", linear),
    ("EyeFish", eyefish),
];

/// Look a variation up by its configuration name.
pub fn by_name(name: &str) -> Option<Variation> {
    REGISTRY
        .iter()
        .find(|&&(entry, _)| entry == name)
        .map(|&(_, variation)| variation)
}

/// Inversion through the unit circle.  The origin maps to itself
/// rather than dividing by zero.
pub fn spherical(x: f64, y: f64) -> (f64, f64) {
    let r = x * x + y * y;
    if r == 0.0 {
        return (0.0, 0.0);
    }

    (x / r, y / r)
}

/// Folds the plane into sine waves along both axes.
pub fn sinusoidal(x: f64, y: f64) -> (f64, f64) {
    ((x * PI).sin(), (y * PI).sin())
}

/// The classic "handkerchief" fold.
pub fn handkerchief(x: f64, y: f64) -> (f64, f64) {
    let r = (x * x + y * y).sqrt();
    let theta = y.atan2(x);

    (r * (theta + r).sin(), (theta - r).cos())
}

/// Rotates points by an angle that grows with the squared radius.
pub fn swirl(x: f64, y: f64) -> (f64, f64) {
    let r = (x * x + y * y).sqrt();

    (
        x * (r * r).sin() - y * (r * r).cos(),
        x * (r * r).cos() - y * (r * r).sin(),
    )
}

/// Doubles the angular coordinate.  The origin maps to itself rather
/// than dividing by zero.
pub fn horseshoe(x: f64, y: f64) -> (f64, f64) {
    let r = (x * x + y * y).sqrt();
    if r == 0.0 {
        return (0.0, 0.0);
    }

    ((x - y) * (x + y) / r, 2.0 * x * y / r)
}

/// Maps the plane to polar coordinates.
pub fn polar(x: f64, y: f64) -> (f64, f64) {
    let r = (x * x + y * y).sqrt();
    let theta = y.atan2(x);

    (theta / PI, r - 1.0)
}

/// Concentric rippling around the origin.
pub fn disc(x: f64, y: f64) -> (f64, f64) {
    let r = (x * x + y * y).sqrt();
    let theta = y.atan2(x);

    (theta / PI * (PI * r).sin(), (PI * r).cos())
}

/// A heart-shaped fold of the polar plane.
pub fn heart(x: f64, y: f64) -> (f64, f64) {
    let r = (x * x + y * y).sqrt();
    let theta = y.atan2(x);

    (r * (theta * r).sin(), -r * (theta * r).cos())
}

/// The identity.  Useful on its own for rendering the bare affine
/// attractor, and as a blending partner for the wilder variations.
pub fn linear(x: f64, y: f64) -> (f64, f64) {
    (x, y)
}

/// A fish-eye lens pulling far points toward the unit circle.
pub fn eyefish(x: f64, y: f64) -> (f64, f64) {
    let r = (x * x + y * y).sqrt();

    (2.0 / (r + 1.0) * x, 2.0 / (r + 1.0) * y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spherical_masks_the_origin() {
        assert_eq!(spherical(0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn horseshoe_masks_the_origin() {
        assert_eq!(horseshoe(0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn spherical_inverts_through_the_unit_circle() {
        let (x, y) = spherical(2.0, 0.0);
        assert!((x - 0.5).abs() < 1e-12);
        assert!(y.abs() < 1e-12);
    }

    #[test]
    fn linear_is_the_identity() {
        assert_eq!(linear(0.25, -3.5), (0.25, -3.5));
    }

    #[test]
    fn sinusoidal_peaks_at_half() {
        let (x, y) = sinusoidal(0.5, -0.5);
        assert!((x - 1.0).abs() < 1e-12);
        assert!((y + 1.0).abs() < 1e-12);
    }

    #[test]
    fn eyefish_fixes_the_origin() {
        assert_eq!(eyefish(0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn registry_resolves_every_name() {
        for &(name, _) in REGISTRY.iter() {
            assert!(by_name(name).is_some(), "missing {}", name);
        }
        assert!(by_name("Julia").is_none());
    }
}
