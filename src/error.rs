//! The only error surface this crate exposes to callers. Numerical
//! anomalies inside the tracer (invalid pdf, depth exhaustion, absorption)
//! are never surfaced as errors — they resolve to a radiance of zero.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot render a {width}x{height} image")]
    EmptyImage { width: u32, height: u32 },
}
