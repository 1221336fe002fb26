//! Simpil - describe how text should be drawn
//!
//! Simpil models the style of a piece of text (content, font file, weight,
//! size, color and placement) and hands a resolved snapshot to a rasterizer.
//!
//! # Quick Start
//!
//! ```
//! use simpil::prelude::*;
//!
//! simpil::core::logging::init();
//!
//! let mut text = Text::named("Hello", None, 200, (0, 0)).unwrap();
//! text.font_mut().weight_mut().bold();
//! text.center();
//!
//! let resolved = text.resolve();
//! assert_eq!(resolved.weight, 600);
//! assert_eq!(resolved.position, Position::CENTER);
//! ```

// Re-export core types
pub use simpil_core as core;
pub use simpil_core::Config;

#[cfg(feature = "text")]
pub use simpil_text as text;

pub mod prelude {
    pub use simpil_core::Config;

    #[cfg(feature = "text")]
    pub use simpil_text::{
        Color, Coord, Font, FontFamily, FontFormat, FontSize, FontWeight, MergeItem, Operation,
        Position, Rasterizer, ResolvedText, Text, TextError, TextResult,
    };
}
