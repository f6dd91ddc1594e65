//! Generation and application of the contractive affine maps that
//! drive the chaos game.  A render session owns exactly one set of
//! them, regenerated per render; selection at iteration time is
//! uniform-random by index.

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use raster::Colour;

/// How many affine maps a set holds.
pub const TRANSFORM_COUNT: usize = 10;

/// One affine map of the family `x' = a*x + b*y + c`,
/// `y' = d*y + e*x - f`, tagged with the colour it deposits.
///
/// The subtracted `f` term and the swapped roles of `b` and `e`
/// relative to a textbook affine map are the system's defined map
/// family, not an accident; the attractors it produces depend on it.
#[derive(Copy, Clone, Debug)]
pub struct AffineTransform {
    /// Coefficient on `x` in the `x'` component.
    pub a: f64,
    /// Coefficient on `y` in the `x'` component.
    pub b: f64,
    /// Translation of the `x'` component.
    pub c: f64,
    /// Coefficient on `y` in the `y'` component.
    pub d: f64,
    /// Coefficient on `x` in the `y'` component.
    pub e: f64,
    /// Translation of the `y'` component, subtracted.
    pub f: f64,
    /// The colour this map deposits on every landing.
    pub colour: Colour,
}

impl AffineTransform {
    /// Apply the map to a point.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.b * y + self.c,
            self.d * y + self.e * x - self.f,
        )
    }
}

/// Whether the linear part of a map shrinks distances.  Maps that fail
/// this would fling the orbit off to infinity instead of settling it
/// onto an attractor.
pub fn is_contractive(a: f64, b: f64, d: f64, e: f64) -> bool {
    a * a + d * d < 1.0
        && b * b + e * e < 1.0
        && a * a + b * b + d * d + e * e < 1.0 + (a * e - b * d).powi(2)
}

/// Generate a full set of transforms by rejection sampling.  The
/// linear coefficients are drawn uniformly from [-1, 1] until they
/// pass the contraction test; the translations are unconstrained and
/// the colour is uniformly random, fully opaque.
pub fn generate_set<R: Rng>(rng: &mut R) -> Vec<AffineTransform> {
    (0..TRANSFORM_COUNT).map(|_| generate_transform(rng)).collect()
}

fn generate_transform<R: Rng>(rng: &mut R) -> AffineTransform {
    let unit = Uniform::new_inclusive(-1.0_f64, 1.0);
    loop {
        let a = unit.sample(rng);
        let b = unit.sample(rng);
        let d = unit.sample(rng);
        let e = unit.sample(rng);
        if !is_contractive(a, b, d, e) {
            continue;
        }

        return AffineTransform {
            a,
            b,
            c: unit.sample(rng),
            d,
            e,
            f: unit.sample(rng),
            colour: random_colour(rng),
        };
    }
}

fn random_colour<R: Rng>(rng: &mut R) -> Colour {
    Colour {
        r: rng.gen(),
        g: rng.gen(),
        b: rng.gen(),
        a: 255,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generated_sets_have_the_fixed_size() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generate_set(&mut rng).len(), TRANSFORM_COUNT);
    }

    #[test]
    fn every_generated_map_is_contractive() {
        let mut rng = StdRng::seed_from_u64(99);
        for transform in generate_set(&mut rng) {
            let (a, b, d, e) = (transform.a, transform.b, transform.d, transform.e);
            assert!(a * a + d * d < 1.0);
            assert!(b * b + e * e < 1.0);
            assert!(a * a + b * b + d * d + e * e < 1.0 + (a * e - b * d) * (a * e - b * d));
        }
    }

    #[test]
    fn generated_coefficients_and_colours_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for transform in generate_set(&mut rng) {
            for value in &[transform.a, transform.b, transform.c, transform.d, transform.e, transform.f] {
                assert!(*value >= -1.0 && *value <= 1.0);
            }
            assert_eq!(transform.colour.a, 255);
        }
    }

    #[test]
    fn the_identity_linear_part_is_rejected() {
        // a=1, d=1 violates the first inequality; the sampler would
        // loop past it.
        assert!(!is_contractive(1.0, 0.0, 1.0, 0.0));
        assert!(is_contractive(0.5, 0.2, -0.3, 0.4));
    }

    #[test]
    fn apply_follows_the_asymmetric_map_family() {
        let transform = AffineTransform {
            a: 1.0,
            b: 2.0,
            c: 3.0,
            d: 4.0,
            e: 5.0,
            f: 6.0,
            colour: Colour {
                r: 0,
                g: 0,
                b: 0,
                a: 255,
            },
        };
        // x' = 1*1 + 2*1 + 3, y' = 4*1 + 5*1 - 6: the f term is
        // subtracted, not added.
        assert_eq!(transform.apply(1.0, 1.0), (6.0, 3.0));
    }
}
