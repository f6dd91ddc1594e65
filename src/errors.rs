//! The crate-wide error taxonomy.  Configuration problems are caught
//! before any rendering work starts and are terminal for the run; the
//! chaos-game arithmetic itself cannot fail once its inputs have been
//! validated, so nothing in the hot path produces one of these.

use failure::Fail;

/// Everything that can go wrong around a render: a malformed or
/// zero-sized configuration before it, or a failed save after it.  A
/// save failure leaves the rendered raster valid and re-saveable.
#[derive(Debug, Fail, PartialEq)]
pub enum FlameError {
    /// Image dimensions, starting points, or iterations resolved to zero.
    #[fail(display = "zero size image matrix")]
    ZeroSizeMatrix,

    /// The configuration enabled none of the non-linear transformations.
    #[fail(display = "unable to render without any non-linear transformations")]
    NoVariations,

    /// The configuration file could not be opened or decoded.
    #[fail(display = "reading configuration error: {}", _0)]
    ReadingConfig(String),

    /// The finished raster could not be written out.
    #[fail(display = "saving image error: {}", _0)]
    SavingImage(String),
}
