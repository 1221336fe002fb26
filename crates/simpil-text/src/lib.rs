//! Simpil Text - declarative text style model
//!
//! This crate describes how a piece of text should be rendered:
//! - Literal content and a 2-D position (numeric or centered)
//! - A font file reference with weight, size and color
//! - A log of style operations that can be merged back into a text
//!
//! ## Quick Start
//!
//! ```rust
//! use simpil_text::{FontWeight, Position, Text};
//!
//! let mut text = Text::named("Hello", None, 200, (0, 0))?;
//! assert!(text.font().unwrap().path().ends_with("poppins_regular.ttf"));
//!
//! // Style a weight on its own, then merge it back
//! let mut weight = FontWeight::new();
//! weight.bold();
//! text.merge(weight).center();
//!
//! let resolved = text.resolve();
//! assert_eq!(resolved.weight, 600);
//! assert_eq!(resolved.position, Position::CENTER);
//! # Ok::<(), simpil_text::TextError>(())
//! ```
//!
//! Rasterizing is left to an implementation of [`Rasterizer`].

pub mod color;
pub mod error;
pub mod font;
pub mod operation;
pub mod render;
pub mod size;
pub mod text;
pub mod weight;

// Re-export main types
pub use color::{Color, HexColor};
pub use error::{TextError, TextResult};
pub use font::{FONT_EXTENSIONS, Font, FontFamily, FontFormat, FontId};
pub use operation::{Operation, OperationLog};
pub use render::{Rasterizer, ResolvedText};
pub use size::FontSize;
pub use text::{Coord, MergeItem, Position, Text, TextId};
pub use weight::FontWeight;
