use crate::units::Pt;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LayoutError {
    /// The target line width was zero, negative, or not a number
    #[error("line width must be positive, got {0}")]
    InvalidWidth(Pt),

    /// The font size was zero, negative, or not a number
    #[error("font size must be positive, got {0}")]
    InvalidFontSize(Pt),

    /// The leading ratio was zero, negative, or not a number
    #[error("leading ratio must be positive, got {0}")]
    InvalidLeadingRatio(f32),

    /// The alignment box had a zero, negative, or non-finite side
    #[error("box dimensions must be positive, got {width} x {height}")]
    InvalidBox { width: Pt, height: Pt },

    /// Text was laid out before any font was registered with the engine
    #[error("no fonts have been registered with the layout engine")]
    NoFonts,

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),
}
