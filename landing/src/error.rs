//! Errors raised around rendering (input parsing and output writing).
//! Rendering itself cannot fail.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of the `spile-landing` command line surface.
#[derive(Debug, Error)]
pub enum LandingError {
    /// Month argument is not a valid `YYYY-MM`
    #[error("invalid month '{0}', expected YYYY-MM")]
    InvalidMonth(String),

    /// Writing the rendered page failed
    #[error("failed to write {}", path.display())]
    Write {
        /// Destination that could not be written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}
