//! Japanese-aware text layout: breaks mixed CJK and Latin text into lines following the
//! kinsoku shori line-breaking prohibitions, optionally justifies them, and aligns the
//! resulting block inside a box.
//!
//! ```
//! use kinsoku_layout::layout::{BlockAligner, HAlign, VAlign};
//! use kinsoku_layout::{Font, LayoutEngine, LayoutOptions, MonospaceMetrics, Pt};
//!
//! let mut engine = LayoutEngine::new();
//! engine.add_font(Font::new("HeiseiKakuGo-W5", MonospaceMetrics::new(1.0)));
//!
//! let layout = engine
//!     .layout("一二三四々五", &LayoutOptions::new(Pt(49.0), Pt(12.0)))
//!     .expect("can lay out text");
//! let lines: Vec<String> = layout.lines().iter().map(|l| l.text()).collect();
//! assert_eq!(lines, vec!["一二三", "四々五"]);
//!
//! let aligned = BlockAligner::new(&layout, Pt(400.0), Pt(150.0))
//!     .expect("box is valid")
//!     .alignment(HAlign::Center, VAlign::Top)
//!     .padding(Pt(10.0))
//!     .apply();
//! assert_eq!(aligned.lines().len(), 2);
//! ```

mod colour;
pub use colour::*;

mod engine;
pub use engine::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

/// Character classes for the Japanese line-breaking prohibitions
pub mod kinsoku;

/// Line breaking, justification, and alignment of text blocks
pub mod layout;

mod rect;
pub use rect::*;

/// Drawing aligned text
pub mod render;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;
