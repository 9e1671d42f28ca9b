//! Text layout: from a run of characters to positioned glyphs.
//!
//! Layout happens in three stages, each consuming the output of the previous one:
//!
//! - line breaking, done by [`LayoutEngine::layout`](crate::LayoutEngine::layout), fills
//!   lines greedily and corrects each break with the kinsoku shori rules
//! - [`justify`] optionally stretches every line but the last to the full width
//! - [`BlockAligner`] places the finished block inside a box, producing an
//!   [`AlignedLayout`] without touching the original [`Layout`]

mod align;
mod justifier;
pub(crate) mod linebreak;
mod padding;
mod text;

pub use align::*;
pub use justifier::*;
pub use padding::*;
pub use text::*;
