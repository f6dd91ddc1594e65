#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Fractal flame renderer
//!
//! A fractal flame is what you get when you play the "chaos game"
//! against a handful of randomly generated contractive affine maps:
//! pick a point, repeatedly apply a randomly chosen map followed by a
//! randomly chosen non-linear "variation," and plot where the orbit
//! lands.  Each map carries a colour, and every landing blends that
//! colour into the pixel it hits while bumping the pixel's hit count.
//! Because the maps are contractive the orbit settles onto a bounded
//! attractor, and the accumulated hit density, tone-mapped through a
//! log-density gamma pass, renders the attractor as a glowing flame.
//!
//! The crate exposes the rendering engine: affine map generation, the
//! chaos-game iterator, the concurrently shared pixel accumulator, and
//! the post-processing passes.  Configuration parsing and the image
//! savers live at the edges and only talk to the engine through the
//! finished raster.

extern crate crossbeam;
extern crate failure;
extern crate image;
#[macro_use]
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;
extern crate num_cpus;
extern crate rand;
extern crate serde;
extern crate serde_json;

pub mod affine;
pub mod config;
pub mod errors;
pub mod planes;
pub mod raster;
pub mod render;
pub mod savers;
pub mod variations;

pub use errors::FlameError;
pub use raster::PixelBuffer;
pub use render::{render, FlameRenderer};
