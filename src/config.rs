//! The JSON configuration surface.  A configuration file names the
//! image geometry and orbit counts, toggles the post-processing
//! passes, and enables some subset of the variation registry.  All
//! validation happens here, before any rendering work starts; a bad
//! configuration is a single terminal failure.
//!
//! ```json
//! {
//!   "Application": {
//!     "width": 1920, "height": 1080,
//!     "startingPoints": 200, "iterations": 100000,
//!     "gamma": true, "gammaCoeff": 2.2
//!   },
//!   "LinearTransformations": { "Disc": true, "Linear": true }
//! }
//! ```

use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use serde_json;

use errors::FlameError;
use variations::{Variation, REGISTRY};

/// The whole configuration file.
#[derive(Debug, Deserialize)]
pub struct Configuration {
    /// Image geometry, orbit counts, and post-processing toggles.
    #[serde(rename = "Application")]
    pub application: ApplicationConfig,
    /// Which variations the render may pick from.
    #[serde(rename = "LinearTransformations", default)]
    pub transformations: VariationToggles,
}

/// The `Application` block of the configuration file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationConfig {
    /// Output image width in pixels.
    pub width: usize,
    /// Output image height in pixels.
    pub height: usize,
    /// Number of independent orbits to trace.
    pub starting_points: usize,
    /// Post-burn-in steps per orbit.
    pub iterations: usize,
    /// Run every orbit on one thread instead of the worker pool.
    #[serde(default)]
    pub single_thread: bool,
    /// Worker count for the pool; 0 means one per hardware thread.
    #[serde(default)]
    pub num_workers: usize,
    /// Apply the log-density gamma pass.
    #[serde(default)]
    pub gamma: bool,
    /// Gamma exponent denominator; channels scale by `normal^(1/gamma)`.
    #[serde(default = "default_gamma_coeff")]
    pub gamma_coeff: f64,
    /// Divide log-densities by the image maximum before the exponent.
    #[serde(default)]
    pub normalize_density: bool,
    /// Mirror the left half of the image onto the right.
    #[serde(default)]
    pub horizontal_symmetry: bool,
    /// Mirror the top half of the image onto the bottom.
    #[serde(default)]
    pub vertical_symmetry: bool,
    /// Output format name; "JPEG" selects the JPEG saver, anything
    /// else falls back to PNG.
    #[serde(default)]
    pub format: String,
}

fn default_gamma_coeff() -> f64 {
    2.2
}

/// The `LinearTransformations` block: one switch per registry entry.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VariationToggles {
    /// Enable the Spherical variation.
    #[serde(default)]
    pub spherical: bool,
    /// Enable the Sinusoidal variation.
    #[serde(default)]
    pub sinusoidal: bool,
    /// Enable the Handkerchief variation.
    #[serde(default)]
    pub handkerchief: bool,
    /// Enable the Swirl variation.
    #[serde(default)]
    pub swirl: bool,
    /// Enable the Horseshoe variation.
    #[serde(default)]
    pub horseshoe: bool,
    /// Enable the Polar variation.
    #[serde(default)]
    pub polar: bool,
    /// Enable the Disc variation.
    #[serde(default)]
    pub disc: bool,
    /// Enable the Heart variation.
    #[serde(default)]
    pub heart: bool,
    /// Enable the Linear variation.
    #[serde(default)]
    pub linear: bool,
    /// Enable the EyeFish variation.
    #[serde(default)]
    pub eye_fish: bool,
}

impl VariationToggles {
    fn is_enabled(&self, name: &str) -> bool {
        match name {
            "Spherical" => self.spherical,
            "Sinusoidal" => self.sinusoidal,
            "Handkerchief" => self.handkerchief,
            "Swirl" => self.swirl,
            "Horseshoe" => self.horseshoe,
            "Polar" => self.polar,
            "Disc" => self.disc,
            "Heart" => self.heart,
            "Linear" => self.linear,
            "EyeFish" => self.eye_fish,
            _ => false,
        }
    }

    /// The active variation list: the registry filtered by these
    /// toggles, in registry order.
    pub fn enabled(&self) -> Vec<Variation> {
        REGISTRY
            .iter()
            .filter(|&&(name, _)| self.is_enabled(name))
            .map(|&(_, variation)| variation)
            .collect()
    }
}

impl Configuration {
    /// Check the fail-fast invariants: positive geometry and orbit
    /// counts, and a non-empty variation set.
    pub fn validate(&self) -> Result<(), FlameError> {
        let app = &self.application;
        if app.width == 0 || app.height == 0 || app.starting_points == 0 || app.iterations == 0 {
            return Err(FlameError::ZeroSizeMatrix);
        }
        if self.transformations.enabled().is_empty() {
            return Err(FlameError::NoVariations);
        }

        Ok(())
    }
}

/// Load and validate a configuration file.
pub fn read<P: AsRef<Path>>(path: P) -> Result<Configuration, FlameError> {
    let file =
        File::open(&path).map_err(|err| FlameError::ReadingConfig(err.to_string()))?;
    let config: Configuration =
        serde_json::from_reader(file).map_err(|err| FlameError::ReadingConfig(err.to_string()))?;
    config.validate()?;
    debug!("configuration loaded from {:?}", path.as_ref());

    Ok(config)
}
