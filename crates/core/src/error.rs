pub type Result<T> = std::result::Result<T, ParseError>;

/// Fatal failures of [`crate::reader::read`]. Either one aborts the whole
/// parse; no partial area list is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("area #{index}: unsupported shape {}", shape_label(.shape))]
    UnsupportedShape { index: usize, shape: Option<String> },

    #[error("area #{index}: invalid coordinate {value:?}")]
    InvalidCoordinate { index: usize, value: String },
}

fn shape_label(shape: &Option<String>) -> String {
    match shape {
        Some(s) => format!("{s:?}"),
        None => "(none)".to_string(),
    }
}

/// Rejections of a hand-typed `x0,y0,x1,y1` coordinate field.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoordsError {
    #[error("expected 4 comma-separated values, got {0}")]
    TokenCount(usize),

    #[error("not a number: {0:?}")]
    InvalidNumber(String),

    #[error("rectangle must have a positive width and height")]
    EmptyExtent,
}
