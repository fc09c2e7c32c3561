pub mod error;
pub mod model;
pub mod reader;
pub mod session;
pub mod tags;
pub mod writer;

pub use error::{CoordsError, ParseError};
pub use model::{ImageArea, ImageMapDocument};

/// Parse image-map markup into its image source and areas.
/// This is the primary entry point for imagemap-core.
pub fn parse(markup: &str) -> Result<ImageMapDocument, ParseError> {
    reader::read(markup)
}

/// Render areas back to `<area>` markup, one tag per line.
pub fn serialize(areas: &[ImageArea]) -> String {
    writer::write(areas)
}
