// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The chaos-game iterator and the render scheduler.  Each starting
//! point seeds one orbit: a pseudo-random walk that alternates a
//! randomly chosen affine map with a randomly chosen variation,
//! depositing every post-burn-in landing into the shared pixel
//! buffer.  Orbits are independent, so the scheduler just fans them
//! out: either a plain loop on the calling thread, or a crossbeam
//! worker pool pulling orbit indices off a shared queue.

use std::ops::Range;
use std::sync::{Arc, Mutex};

use crossbeam;
use num_cpus;
use rand::{thread_rng, Rng};

use affine::{generate_set, AffineTransform};
use config::Configuration;
use errors::FlameError;
use planes::PlaneMapper;
use raster::PixelBuffer;
use variations::Variation;

/// Steps discarded at the start of every orbit.  The first few
/// iterates still carry the arbitrary starting point; only once the
/// orbit has converged onto the attractor are landings worth keeping.
pub const BURN_IN: usize = 20;

type OrbitQueue = Arc<Mutex<Range<usize>>>;

/// Holds everything one render session needs: the plane window, the
/// affine map set, the active variations, and the orbit counts.
/// Immutable once constructed; every render method only reads it.
pub struct FlameRenderer {
    plane: PlaneMapper,
    transforms: Vec<AffineTransform>,
    variations: Vec<Variation>,
    starting_points: usize,
    iterations: usize,
}

impl FlameRenderer {
    /// Constructor.  Fails fast on an empty variation set or zero
    /// orbit counts; nothing is validated again on the hot path.
    pub fn new(
        plane: PlaneMapper,
        transforms: Vec<AffineTransform>,
        variations: Vec<Variation>,
        starting_points: usize,
        iterations: usize,
    ) -> Result<FlameRenderer, FlameError> {
        if variations.is_empty() || transforms.is_empty() {
            return Err(FlameError::NoVariations);
        }
        if starting_points == 0 || iterations == 0 {
            return Err(FlameError::ZeroSizeMatrix);
        }

        Ok(FlameRenderer {
            plane,
            transforms,
            variations,
            starting_points,
            iterations,
        })
    }

    /// Trace one orbit and deposit its post-burn-in landings.  Each
    /// step picks a random map, computes the pre-variation point,
    /// deposits it if it falls inside the image, then runs the point
    /// through a random variation to get the next iterate.
    fn trace_orbit<R: Rng>(&self, buffer: &PixelBuffer, rng: &mut R) {
        let (mut x, mut y) = self.plane.random_point(rng);

        for step in 0..BURN_IN + self.iterations {
            let transform = &self.transforms[rng.gen_range(0, self.transforms.len())];
            let (tx, ty) = transform.apply(x, y);

            if step >= BURN_IN {
                if let Some(offset) = self.plane.point_to_offset(tx, ty) {
                    buffer.deposit(offset, transform.colour);
                }
            }

            let variation = self.variations[rng.gen_range(0, self.variations.len())];
            let (nx, ny) = variation(tx, ty);
            x = nx;
            y = ny;
        }
    }

    /// Run every orbit on the calling thread against the given random
    /// source.  Seeding the source makes the whole render
    /// deterministic, which is what the tests do.
    pub fn render_with<R: Rng>(&self, buffer: &PixelBuffer, rng: &mut R) {
        for _ in 0..self.starting_points {
            self.trace_orbit(buffer, rng);
        }
    }

    /// The single-threaded scheduler: same arithmetic as the worker
    /// pool, no queue and no contention.
    pub fn render_single(&self, buffer: &PixelBuffer) {
        self.render_with(buffer, &mut thread_rng());
    }

    /// The multi-threaded scheduler.  Workers (`0` meaning one per
    /// hardware thread) repeatedly pull an orbit index off the shared
    /// queue and trace it to completion, then join when the queue runs
    /// dry.  Orbit interleaving is irrelevant to the density totals,
    /// but because colour blending is order-dependent, exact channel
    /// values may differ between worker counts; that is expected.
    pub fn render_threaded(&self, buffer: &PixelBuffer, workers: usize) {
        let workers = if workers == 0 { num_cpus::get() } else { workers };
        let queue: OrbitQueue = Arc::new(Mutex::new(0..self.starting_points));

        crossbeam::scope(|spawner| {
            for _ in 0..workers {
                let queue = queue.clone();
                spawner.spawn(move |_| {
                    let mut rng = thread_rng();
                    loop {
                        let orbit = { queue.lock().unwrap().next() };
                        match orbit {
                            Some(_) => self.trace_orbit(buffer, &mut rng),
                            None => {
                                break;
                            }
                        }
                    }
                });
            }
        })
        .unwrap();
    }
}

/// The render entry point: validate the configuration, generate a
/// fresh affine map set, trace every orbit, then post-process the
/// buffer in place.  Blocks until the raster is finished.
pub fn render(config: &Configuration) -> Result<PixelBuffer, FlameError> {
    config.validate()?;
    let app = &config.application;

    let plane = PlaneMapper::new(app.width, app.height)?;
    let transforms = generate_set(&mut thread_rng());
    let renderer = FlameRenderer::new(
        plane,
        transforms,
        config.transformations.enabled(),
        app.starting_points,
        app.iterations,
    )?;

    let mut buffer = PixelBuffer::new(app.width, app.height);
    info!(
        "rendering {}x{}, {} orbits of {} iterations",
        app.width, app.height, app.starting_points, app.iterations
    );

    if app.single_thread {
        renderer.render_single(&buffer);
    } else {
        renderer.render_threaded(&buffer, app.num_workers);
    }
    info!("accumulated {} hits", buffer.total_hits());

    if app.horizontal_symmetry {
        buffer.reflect_horizontally();
    }
    if app.vertical_symmetry {
        buffer.reflect_vertically();
    }
    if app.gamma {
        buffer.correction(app.gamma_coeff, app.normalize_density);
    }

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use planes::PlaneMapper;
    use raster::Colour;
    use variations;

    fn identity_transform(colour: Colour) -> AffineTransform {
        AffineTransform {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
            colour,
        }
    }

    #[test]
    fn the_renderer_rejects_an_empty_variation_set() {
        let plane = PlaneMapper::new(10, 10).unwrap();
        let transforms = vec![identity_transform(Colour {
            r: 255,
            g: 0,
            b: 0,
            a: 255,
        })];
        let result = FlameRenderer::new(plane, transforms, vec![], 1, 1);
        assert_eq!(result.err(), Some(FlameError::NoVariations));
    }

    #[test]
    fn the_renderer_rejects_zero_orbit_counts() {
        let plane = PlaneMapper::new(10, 10).unwrap();
        let transforms = vec![identity_transform(Colour {
            r: 255,
            g: 0,
            b: 0,
            a: 255,
        })];
        let result = FlameRenderer::new(
            plane,
            transforms,
            vec![variations::linear as variations::Variation],
            0,
            50,
        );
        assert_eq!(result.err(), Some(FlameError::ZeroSizeMatrix));
    }
}
