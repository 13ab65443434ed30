//! Error types for keysheet library.

use std::io;
use thiserror::Error;

/// Result type alias for keysheet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while laying out or rasterizing cheatsheets.
///
/// The layout algorithms themselves are total; errors only come from the
/// collaborators around them (fonts, encoders, the filesystem) and from
/// options that describe an impossible page.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Font data could not be parsed.
    #[error("Font loading error: {0}")]
    FontLoad(String),

    /// No font file matched the requested family or path.
    #[error("Font not found: {0}")]
    FontNotFound(String),

    /// Error encoding a raster image.
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    /// Error during rendering (text, Markdown, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Render options describe a page that cannot be laid out.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::FontNotFound("Liberation Mono".to_string());
        assert_eq!(err.to_string(), "Font not found: Liberation Mono");

        let err = Error::InvalidOptions("chars_per_line must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid options: chars_per_line must be positive"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
